//! Attribute whitelist enforcement and per-icon shape validation.
//!
//! Any deviation from the known icon-authoring conventions is a hard error:
//! silently accepting an unknown shape attribute would corrupt the rendered
//! output of the generated library, so the contract is enforced loudly and
//! the whole run aborts on the first violation.

use crate::error::GenerateError;
use crate::extract::shape_declarations;
use crate::icon::{IconSource, ShapeDeclaration, ValidatedIcon, MASK_FILL};
use crate::identifier::derive_identifier;

/// Fill values the upstream icon set is known to author.
pub const ALLOWED_FILL_VALUES: &[&str] = &[MASK_FILL, "#000"];

/// Fill-rule values the upstream icon set is known to author.
pub const ALLOWED_FILL_RULE_VALUES: &[&str] = &["nonzero"];

/// The acceptable-attribute contract for shape declarations.
///
/// `d` is always allowed (it is the path geometry itself). `fill` and
/// `fill-rule` are restricted to the configured value lists; every other
/// attribute name is rejected outright.
///
/// The defaults carry the values observed in the upstream icon set. They are
/// configuration, not parser structure: an upstream authoring change means
/// constructing a different whitelist, not touching the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeWhitelist {
    /// Accepted `fill` values.
    pub fill_values: Vec<String>,
    /// Accepted `fill-rule` values.
    pub fill_rule_values: Vec<String>,
}

impl Default for AttributeWhitelist {
    fn default() -> Self {
        Self {
            fill_values: ALLOWED_FILL_VALUES.iter().map(|v| v.to_string()).collect(),
            fill_rule_values: ALLOWED_FILL_RULE_VALUES
                .iter()
                .map(|v| v.to_string())
                .collect(),
        }
    }
}

impl AttributeWhitelist {
    /// Returns true if `attribute`=`value` is within the contract.
    pub fn allows(&self, attribute: &str, value: &str) -> bool {
        match attribute {
            "d" => true,
            "fill" => self.fill_values.iter().any(|v| v == value),
            "fill-rule" => self.fill_rule_values.iter().any(|v| v == value),
            _ => false,
        }
    }
}

/// Validates one icon's markup and reduces it to a single path definition.
///
/// Every extracted declaration is checked against the whitelist, masks
/// included; the mask filter applies afterwards, so an unknown attribute on
/// a `fill="none"` shape still fails the run. After filtering, exactly one
/// declaration must remain and it must carry a non-empty `d` value.
///
/// # Errors
///
/// * [`GenerateError::UnknownAttribute`] for any attribute or value outside
///   the whitelist.
/// * [`GenerateError::ShapeCountMismatch`] when zero or more than one
///   visible declaration survives, or the surviving one lacks geometry.
pub fn validate_icon(
    source: &IconSource,
    whitelist: &AttributeWhitelist,
) -> Result<ValidatedIcon, GenerateError> {
    let mut visible: Vec<ShapeDeclaration> = Vec::new();
    for declaration in shape_declarations(&source.markup) {
        for (attribute, value) in declaration.iter() {
            if !whitelist.allows(attribute, value) {
                return Err(GenerateError::UnknownAttribute {
                    icon: source.raw_name.clone(),
                    attribute: attribute.to_string(),
                    value: value.to_string(),
                    markup: source.markup.clone(),
                });
            }
        }
        if !declaration.is_mask() {
            visible.push(declaration);
        }
    }

    let path_data = match visible.as_slice() {
        [only] => only.get("d").filter(|d| !d.is_empty()),
        _ => None,
    };
    let Some(path_data) = path_data else {
        return Err(GenerateError::ShapeCountMismatch {
            icon: source.raw_name.clone(),
            count: visible.len(),
            shapes: dump_declarations(&visible),
            markup: source.markup.clone(),
        });
    };

    Ok(ValidatedIcon {
        raw_name: source.raw_name.clone(),
        identifier: derive_identifier(&source.raw_name),
        path_data: path_data.to_string(),
    })
}

/// JSON dump of the visible declarations, for the shape-count diagnostic.
fn dump_declarations(declarations: &[ShapeDeclaration]) -> String {
    serde_json::to_string_pretty(declarations).unwrap_or_default()
}
