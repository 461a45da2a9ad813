//! Error types for icon parsing, validation, and module assembly.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while turning icon markup into a component module.
///
/// Every variant aborts the whole generation run. A partially valid icon
/// library would ship corrupted visuals, so the generator pairs output
/// correctness with an all-or-nothing guarantee: nothing is written unless
/// every icon passes.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The remixicon asset package could not be located.
    #[error("could not find \"remixicon\" in the dependencies: {probe}")]
    MissingDependency {
        /// Description of the failed lookup (what was probed, from where).
        probe: String,
    },

    /// A shape declaration used an attribute or value outside the whitelist.
    #[error("unknown SVG attr in {icon}: {attribute}=\"{value}\"\n{markup}")]
    UnknownAttribute {
        /// Icon file stem (kebab-case).
        icon: String,
        /// The offending attribute name.
        attribute: String,
        /// The offending attribute value.
        value: String,
        /// Raw markup of the icon, for diagnosis.
        markup: String,
    },

    /// An icon yielded zero or multiple visible shape declarations, or the
    /// surviving declaration carried no path geometry.
    #[error("wrong number of paths in {icon}: {count}\n{shapes}\n{markup}")]
    ShapeCountMismatch {
        /// Icon file stem (kebab-case).
        icon: String,
        /// Number of visible declarations found.
        count: usize,
        /// JSON dump of the visible declarations.
        shapes: String,
        /// Raw markup of the icon, for diagnosis.
        markup: String,
    },

    /// Two distinct file stems normalized to the same component identifier.
    #[error("duplicate component identifier {identifier}: {first} and {second}")]
    DuplicateIdentifier {
        /// The colliding identifier.
        identifier: String,
        /// Stem of the icon that produced the identifier first.
        first: String,
        /// Stem of the icon that collided with it.
        second: String,
    },

    /// I/O failure reading an icon file or writing an output.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The external bundler failed; stderr is passed through unmodified.
    #[error("bundler `{command}` failed ({status}):\n{stderr}")]
    BundlerFailed {
        /// The bundler command that was invoked.
        command: String,
        /// Exit status (or spawn failure description).
        status: String,
        /// Captured stderr, as-is.
        stderr: String,
    },
}

impl GenerateError {
    /// Returns the stable error code string (e.g., "GEN_002").
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::MissingDependency { .. } => "GEN_001",
            GenerateError::UnknownAttribute { .. } => "GEN_002",
            GenerateError::ShapeCountMismatch { .. } => "GEN_003",
            GenerateError::DuplicateIdentifier { .. } => "GEN_004",
            GenerateError::Io { .. } => "GEN_005",
            GenerateError::BundlerFailed { .. } => "GEN_006",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = GenerateError::MissingDependency {
            probe: "no node_modules".to_string(),
        };
        assert_eq!(err.code(), "GEN_001");

        let err = GenerateError::UnknownAttribute {
            icon: "arrow-left-line".to_string(),
            attribute: "stroke".to_string(),
            value: "red".to_string(),
            markup: "<svg/>".to_string(),
        };
        assert_eq!(err.code(), "GEN_002");
    }

    #[test]
    fn test_unknown_attribute_display() {
        let err = GenerateError::UnknownAttribute {
            icon: "arrow-left-line".to_string(),
            attribute: "stroke".to_string(),
            value: "red".to_string(),
            markup: "<svg><path stroke=\"red\"/></svg>".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("arrow-left-line"));
        assert!(message.contains("stroke=\"red\""));
        assert!(message.contains("<svg>"));
    }

    #[test]
    fn test_shape_count_display_names_count() {
        let err = GenerateError::ShapeCountMismatch {
            icon: "add-line".to_string(),
            count: 2,
            shapes: "[]".to_string(),
            markup: String::new(),
        };
        assert!(err.to_string().contains("add-line: 2"));
    }
}
