//! Value types for the icon pipeline.
//!
//! Everything here is an immutable record produced once and handed
//! downstream: an [`IconSource`] is parsed into [`ShapeDeclaration`]s, which
//! validation reduces to a single [`ValidatedIcon`] per icon.

use serde::Serialize;

/// Fill value that marks a declaration as a mask/placeholder shape.
pub const MASK_FILL: &str = "none";

/// One input icon file: kebab-case stem plus raw markup text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    /// File stem without extension (e.g., "arrow-left-line").
    pub raw_name: String,
    /// Raw file contents.
    pub markup: String,
}

impl IconSource {
    /// Creates a new icon source.
    pub fn new(raw_name: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            markup: markup.into(),
        }
    }
}

/// One parsed drawable-shape tag: its attributes in document order.
///
/// Keys are unique; a repeated attribute name overwrites the earlier value
/// in place, keeping the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShapeDeclaration {
    attributes: Vec<(String, String)>,
}

impl ShapeDeclaration {
    /// Returns the value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Inserts an attribute, overwriting any earlier value for the same key.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Iterates over `(name, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// True if this declaration is a mask/placeholder (`fill="none"`),
    /// never a visible shape.
    pub fn is_mask(&self) -> bool {
        self.get("fill") == Some(MASK_FILL)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True if the declaration carries no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// The accepted, single drawable-shape data for one icon.
///
/// Exists only if exactly one declaration survives validation and that
/// declaration carries a non-empty `d` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedIcon {
    /// File stem the icon came from (kept for collision reporting).
    pub raw_name: String,
    /// Derived PascalCase component identifier (e.g., "IconArrowLeftLine").
    pub identifier: String,
    /// The path geometry (`d` attribute), non-empty.
    pub path_data: String,
}
