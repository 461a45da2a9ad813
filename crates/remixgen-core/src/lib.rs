//! remixgen core library
//!
//! This crate turns Remix Icon SVG markup into the source of a React icon
//! component library. It is the pure half of the generator: no file
//! discovery, no subprocesses, no I/O — just parsing, validation, and text
//! emission, all deterministic.
//!
//! # Overview
//!
//! One icon flows through four stages:
//!
//! - **Extract**: scan the markup for `<path …>` declarations and their
//!   attribute sets ([`extract`]).
//! - **Validate**: enforce the attribute whitelist and reduce the icon to
//!   exactly one visible path definition ([`validate`]).
//! - **Name**: derive the exported `Icon…` identifier from the file stem
//!   ([`identifier`]).
//! - **Emit**: render the memoized component fragment and concatenate all
//!   fragments under the shared header ([`emit`]).
//!
//! # Example
//!
//! ```
//! use remixgen_core::{assemble_module, validate_icon, AttributeWhitelist, IconSource};
//!
//! let whitelist = AttributeWhitelist::default();
//! let source = IconSource::new(
//!     "arrow-left-line",
//!     r##"<svg><path d="M10 10H5" fill="#000"/></svg>"##,
//! );
//! let icon = validate_icon(&source, &whitelist)?;
//! assert_eq!(icon.identifier, "IconArrowLeftLine");
//!
//! let module = assemble_module(&[icon])?;
//! assert!(module.contains("export const IconArrowLeftLine"));
//! # Ok::<(), remixgen_core::GenerateError>(())
//! ```
//!
//! # Modules
//!
//! - [`error`]: the fatal error taxonomy (every error aborts the run)
//! - [`icon`]: value types flowing through the pipeline
//! - [`identifier`]: file stem → component identifier derivation
//! - [`extract`]: regex-based shape declaration scanning
//! - [`validate`]: attribute whitelist and shape-count enforcement
//! - [`emit`]: component template and module assembly

pub mod emit;
pub mod error;
pub mod extract;
pub mod icon;
pub mod identifier;
pub mod validate;

// Re-export commonly used items at the crate root
pub use emit::{assemble_module, emit_component, MODULE_HEADER};
pub use error::GenerateError;
pub use extract::{shape_declarations, ShapeDeclarations};
pub use icon::{IconSource, ShapeDeclaration, ValidatedIcon};
pub use identifier::derive_identifier;
pub use validate::{validate_icon, AttributeWhitelist};
