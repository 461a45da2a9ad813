//! External bundler invocation.
//!
//! Compiling and bundling the emitted TSX module is delegated to an
//! off-the-shelf bundler running as a subprocess. Its failure is propagated
//! as-is — stderr passes through unmodified, nothing is wrapped or
//! reinterpreted.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use remixgen_core::GenerateError;

/// Configuration for the bundler subprocess.
#[derive(Debug, Clone)]
pub struct BundlerConfig {
    /// Executable name, resolved on `PATH`.
    pub executable: String,
    /// Arguments passed to the bundler.
    pub args: Vec<String>,
    /// Working directory for the subprocess (defaults to the output root).
    pub working_dir: Option<PathBuf>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            executable: "rollup".to_string(),
            args: vec!["--config".to_string()],
            working_dir: None,
        }
    }
}

/// Runs the bundler over the assembled module.
///
/// The executable is resolved via `PATH` lookup; the subprocess inherits
/// stdout (bundlers print their own progress) while stderr is captured for
/// the error report.
///
/// # Errors
///
/// [`GenerateError::BundlerFailed`] if the executable cannot be found, the
/// process cannot be spawned, or it exits non-zero.
pub fn run_bundler(config: &BundlerConfig, out_root: &Path) -> Result<(), GenerateError> {
    let executable = which::which(&config.executable).map_err(|e| GenerateError::BundlerFailed {
        command: config.executable.clone(),
        status: "not found".to_string(),
        stderr: e.to_string(),
    })?;

    let working_dir = config.working_dir.as_deref().unwrap_or(out_root);
    let output = Command::new(&executable)
        .args(&config.args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| GenerateError::BundlerFailed {
            command: config.executable.clone(),
            status: "spawn failed".to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(GenerateError::BundlerFailed {
            command: config.executable.clone(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(())
}
