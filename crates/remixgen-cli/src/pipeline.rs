//! Bounded-parallel fan-out over icon files.
//!
//! Every icon is independent of every other, so the per-file work (read,
//! extract, validate, emit-ready record) runs on blocking worker tasks with
//! no shared mutable state. The join collects results in discovery order
//! regardless of completion order: module layout and collision detection are
//! order-sensitive, so the output must not depend on scheduling.

use std::path::{Path, PathBuf};

use futures_util::future::join_all;
use remixgen_core::{validate_icon, AttributeWhitelist, GenerateError, IconSource, ValidatedIcon};

/// Reads, extracts, and validates every icon file concurrently, returning
/// the validated icons in discovery order.
///
/// There is no partial-success mode: the first failure in discovery order
/// aborts the whole run.
pub fn process_icons(
    files: &[PathBuf],
    whitelist: &AttributeWhitelist,
) -> Result<Vec<ValidatedIcon>, GenerateError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|e| GenerateError::Io {
            path: PathBuf::from("."),
            source: e,
        })?;

    runtime.block_on(async {
        let handles: Vec<_> = files
            .iter()
            .map(|file| {
                let file = file.clone();
                let whitelist = whitelist.clone();
                tokio::task::spawn_blocking(move || process_one(&file, &whitelist))
            })
            .collect();

        let mut icons = Vec::with_capacity(handles.len());
        for (file, joined) in files.iter().zip(join_all(handles).await) {
            let result = joined.map_err(|e| GenerateError::Io {
                path: file.clone(),
                source: std::io::Error::other(format!("icon task failed: {e}")),
            })?;
            icons.push(result?);
        }
        Ok(icons)
    })
}

/// The per-file stage: read the markup and reduce it to a validated icon.
fn process_one(file: &Path, whitelist: &AttributeWhitelist) -> Result<ValidatedIcon, GenerateError> {
    let raw_name = file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let markup = std::fs::read_to_string(file).map_err(|e| GenerateError::Io {
        path: file.to_path_buf(),
        source: e,
    })?;
    validate_icon(&IconSource::new(raw_name, markup), whitelist)
}
