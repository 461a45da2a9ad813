//! Node-module resolution for the icon asset package.
//!
//! The icon set is consumed the way the JavaScript ecosystem installs it: as
//! a package under some ancestor's `node_modules/`. Resolution walks up from
//! the starting directory probing each level, the same search order module
//! resolution itself uses.

use std::path::{Path, PathBuf};

use remixgen_core::GenerateError;

/// Name of the icon asset package to resolve.
pub const ICON_PACKAGE: &str = "remixicon";

/// Locates the installed icon package, returning its root directory.
///
/// Probes `node_modules/remixicon/package.json` at `start` and each of its
/// ancestors.
///
/// # Errors
///
/// [`GenerateError::MissingDependency`] if no ancestor carries the package.
pub fn locate_icon_package(start: &Path) -> Result<PathBuf, GenerateError> {
    for dir in start.ancestors() {
        let candidate = dir.join("node_modules").join(ICON_PACKAGE);
        if candidate.join("package.json").is_file() {
            return Ok(candidate);
        }
    }
    Err(GenerateError::MissingDependency {
        probe: format!(
            "no node_modules/{}/package.json found in {} or any parent directory",
            ICON_PACKAGE,
            start.display()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_package_in_start_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let pkg = tmp.path().join("node_modules").join(ICON_PACKAGE);
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("package.json"), "{}").unwrap();

        let found = locate_icon_package(tmp.path()).unwrap();
        assert_eq!(found, pkg);
    }

    #[test]
    fn test_walks_up_to_ancestor() {
        let tmp = tempfile::tempdir().unwrap();
        let pkg = tmp.path().join("node_modules").join(ICON_PACKAGE);
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("package.json"), "{}").unwrap();

        let nested = tmp.path().join("packages").join("icons");
        fs::create_dir_all(&nested).unwrap();

        let found = locate_icon_package(&nested).unwrap();
        assert_eq!(found, pkg);
    }

    #[test]
    fn test_missing_package_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let err = locate_icon_package(tmp.path()).unwrap_err();
        assert_eq!(err.code(), "GEN_001");
        assert!(err.to_string().contains("remixicon"));
    }

    #[test]
    fn test_package_dir_without_manifest_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let pkg = tmp.path().join("node_modules").join(ICON_PACKAGE);
        fs::create_dir_all(&pkg).unwrap();

        assert!(locate_icon_package(tmp.path()).is_err());
    }
}
