//! remixgen CLI library.
//!
//! This crate provides the impure half of the generator: locating the
//! installed icon asset package, discovering icon files, fanning the
//! per-icon pipeline out over worker tasks, and driving the external
//! bundler. The parsing/validation/emission core lives in `remixgen-core`.

pub mod bundler;
pub mod commands;
pub mod discover;
pub mod locate;
pub mod pipeline;
