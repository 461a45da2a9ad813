//! Component identifier derivation from icon file stems.

/// Prefix prepended to every derived component identifier.
pub const IDENTIFIER_PREFIX: &str = "Icon";

/// Derives the exported component identifier for a kebab-case file stem.
///
/// Each hyphen followed by an ASCII letter or digit is removed and that
/// following character upper-cased; the first character of the result is
/// upper-cased; [`IDENTIFIER_PREFIX`] is prepended.
///
/// Stems are trusted to be valid file-system names (lowercase letters,
/// digits, hyphens); no validation is performed here. Collisions between
/// distinct stems are caught at module assembly, not here.
///
/// # Example
///
/// ```
/// use remixgen_core::identifier::derive_identifier;
///
/// assert_eq!(derive_identifier("arrow-left-line"), "IconArrowLeftLine");
/// assert_eq!(derive_identifier("4k-fill"), "Icon4kFill");
/// ```
pub fn derive_identifier(stem: &str) -> String {
    let mut identifier = String::with_capacity(IDENTIFIER_PREFIX.len() + stem.len());
    identifier.push_str(IDENTIFIER_PREFIX);

    let mut chars = stem.chars().peekable();
    let mut first = true;
    while let Some(c) = chars.next() {
        if c == '-' && chars.peek().is_some_and(|next| next.is_ascii_alphanumeric()) {
            // Fold the hyphen away and capitalize the character after it.
            let next = chars.next().unwrap_or_default();
            identifier.push(next.to_ascii_uppercase());
            first = false;
            continue;
        }
        if first {
            identifier.push(c.to_ascii_uppercase());
            first = false;
        } else {
            identifier.push(c);
        }
    }
    identifier
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_derive_simple_stem() {
        assert_eq!(derive_identifier("home"), "IconHome");
    }

    #[test]
    fn test_derive_kebab_case() {
        assert_eq!(derive_identifier("arrow-left-line"), "IconArrowLeftLine");
        assert_eq!(derive_identifier("arrow-right-fill"), "IconArrowRightFill");
    }

    #[test]
    fn test_derive_digit_segments() {
        assert_eq!(derive_identifier("4k-fill"), "Icon4kFill");
        assert_eq!(derive_identifier("24-hours-line"), "Icon24HoursLine");
    }

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(
            derive_identifier("user-settings-line"),
            derive_identifier("user-settings-line")
        );
    }

    #[test]
    fn test_derived_identifier_is_letters_and_digits() {
        for stem in ["arrow-left-line", "4k-fill", "a1-b2-c3", "zoom-in-line"] {
            let identifier = derive_identifier(stem);
            assert!(identifier.starts_with(IDENTIFIER_PREFIX));
            assert!(
                identifier.chars().all(|c| c.is_ascii_alphanumeric()),
                "{identifier} contains non-alphanumeric characters"
            );
        }
    }
}
