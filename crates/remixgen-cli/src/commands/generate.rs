//! Generate command implementation
//!
//! Locates the icon asset package, compiles every icon into the component
//! module, and hands the module to the bundler.

use anyhow::{Context, Result};
use colored::Colorize;
use remixgen_core::{assemble_module, AttributeWhitelist, GenerateError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use crate::bundler::{run_bundler, BundlerConfig};
use crate::discover::discover_icons;
use crate::locate::locate_icon_package;
use crate::pipeline::process_icons;

/// Subdirectory receiving the assembled compilation unit.
pub const BUILD_DIR: &str = "build";

/// Subdirectory receiving the bundled distributable.
pub const DIST_DIR: &str = "dist";

/// File name of the assembled module.
pub const MODULE_FILE: &str = "index.tsx";

/// Deletes and recreates the `build/` and `dist/` output directories.
///
/// Old outputs are never reused; every run regenerates the artifacts from
/// scratch.
pub fn clean_output_dirs(out_root: &Path) -> Result<(), GenerateError> {
    for dir in [out_root.join(DIST_DIR), out_root.join(BUILD_DIR)] {
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
        }
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
    }
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Run the generate command
///
/// # Arguments
/// * `icons_dir` - Directory of icon files (default: `icons/` inside the
///   installed remixicon package)
/// * `out_root` - Root directory for `build/` and `dist/` outputs (default:
///   current directory)
/// * `no_bundle` - Stop after writing the assembled module
///
/// # Returns
/// Exit code: 0 success, 1 input or validation error, 2 bundler error
pub fn run(icons_dir: Option<&str>, out_root: Option<&str>, no_bundle: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let out_root = Path::new(out_root.unwrap_or("."));

    if let Err(e) = clean_output_dirs(out_root) {
        print_fatal(&e);
        return Ok(ExitCode::from(1));
    }

    let icons_root = match icons_dir {
        Some(dir) => PathBuf::from(dir),
        None => {
            let cwd = std::env::current_dir().context("failed to resolve working directory")?;
            match locate_icon_package(&cwd) {
                Ok(package) => package.join("icons"),
                Err(e) => {
                    print_fatal(&e);
                    eprintln!("Please install remixicon.");
                    return Ok(ExitCode::from(1));
                }
            }
        }
    };

    println!("{} {}", "Icon source:".cyan().bold(), icons_root.display());

    let files = match discover_icons(&icons_root) {
        Ok(files) => files,
        Err(e) => {
            print_fatal(&e);
            return Ok(ExitCode::from(1));
        }
    };
    println!("{} {}", "Icons found:".cyan().bold(), files.len());

    let whitelist = AttributeWhitelist::default();
    let icons = match process_icons(&files, &whitelist) {
        Ok(icons) => icons,
        Err(e) => {
            print_fatal(&e);
            return Ok(ExitCode::from(1));
        }
    };

    let module = match assemble_module(&icons) {
        Ok(module) => module,
        Err(e) => {
            print_fatal(&e);
            return Ok(ExitCode::from(1));
        }
    };

    let module_path = out_root.join(BUILD_DIR).join(MODULE_FILE);
    fs::write(&module_path, &module)
        .with_context(|| format!("failed to write module: {}", module_path.display()))?;
    println!("{} {}", "Module written:".cyan().bold(), module_path.display());

    if !no_bundle {
        if let Err(e) = run_bundler(&BundlerConfig::default(), out_root) {
            print_fatal(&e);
            return Ok(ExitCode::from(2));
        }
        println!(
            "{} {}",
            "Bundle written:".cyan().bold(),
            out_root.join(DIST_DIR).join("index.js").display()
        );
    }

    println!(
        "{} {} icon component(s) in {:.2}s",
        "SUCCESS".green().bold(),
        icons.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(ExitCode::SUCCESS)
}

fn print_fatal(err: &GenerateError) {
    eprintln!("{} {} {}", "x".red(), format!("[{}]", err.code()).red(), err);
}
