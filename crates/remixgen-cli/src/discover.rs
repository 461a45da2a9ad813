//! Icon file discovery.

use std::path::{Path, PathBuf};

use remixgen_core::GenerateError;
use walkdir::WalkDir;

/// File extension of icon markup files.
pub const ICON_EXTENSION: &str = "svg";

/// Recursively collects every icon file under `icons_root`.
///
/// Paths are sorted lexicographically so discovery order, and with it the
/// layout of the assembled module, is stable across runs and platforms.
///
/// # Errors
///
/// [`GenerateError::Io`] if the tree cannot be walked (including a missing
/// `icons_root`).
pub fn discover_icons(icons_root: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(icons_root).min_depth(1) {
        let entry = entry.map_err(|e| GenerateError::Io {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| icons_root.to_path_buf()),
            source: e.into(),
        })?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == ICON_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<svg/>").unwrap();
    }

    #[test]
    fn test_discovers_recursively_and_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        touch(&root.join("System").join("close-line.svg"));
        touch(&root.join("Arrows").join("arrow-left-line.svg"));
        touch(&root.join("Arrows").join("arrow-right-line.svg"));

        let files = discover_icons(root).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                format!("Arrows{}arrow-left-line.svg", std::path::MAIN_SEPARATOR),
                format!("Arrows{}arrow-right-line.svg", std::path::MAIN_SEPARATOR),
                format!("System{}close-line.svg", std::path::MAIN_SEPARATOR),
            ]
        );
    }

    #[test]
    fn test_ignores_non_icon_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        touch(&root.join("icon.svg"));
        fs::write(root.join("README.md"), "docs").unwrap();
        fs::write(root.join("icon.png"), "binary").unwrap();

        let files = discover_icons(root).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("icon.svg"));
    }

    #[test]
    fn test_missing_root_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = discover_icons(&tmp.path().join("absent")).unwrap_err();
        assert_eq!(err.code(), "GEN_005");
    }

    #[test]
    fn test_empty_tree_yields_no_files() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(discover_icons(tmp.path()).unwrap().is_empty());
    }
}
