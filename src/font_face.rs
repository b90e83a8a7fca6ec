//! Font face declarations
//!
//! A style sheet can declare fonts to load alongside the styles that use
//! them. A declaration pairs a family name with a source (a file path or
//! URL the host resolves) and the face variant it provides. Incomplete
//! declarations are skipped with a warning rather than failing the whole
//! sheet.

use log::warn;

/// A font face declaration as parsed, before validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontFaceRule {
    /// The family name styles refer to
    pub family: Option<String>,
    /// Where the host loads the face from
    pub source: Option<String>,
    /// Whether this source provides the bold variant
    pub bold: bool,
    /// Whether this source provides the italic variant
    pub italic: bool,
}

impl FontFaceRule {
    /// Creates an empty declaration to be filled attribute by attribute
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the declaration
    ///
    /// A usable declaration needs both a family and a source; anything less
    /// is logged and dropped.
    pub fn validate(self) -> Option<ValidFontFace> {
        let Some(family) = self.family.filter(|f| !f.is_empty()) else {
            warn!("font face without a family name skipped");
            return None;
        };
        let Some(source) = self.source.filter(|s| !s.is_empty()) else {
            warn!("font face '{}' has no source, skipped", family);
            return None;
        };
        Some(ValidFontFace {
            family,
            source,
            bold: self.bold,
            italic: self.italic,
        })
    }
}

/// A validated font face, ready for the host to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFontFace {
    pub family: String,
    pub source: String,
    pub bold: bool,
    pub italic: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_rule_validates() {
        let rule = FontFaceRule {
            family: Some("Inter".to_string()),
            source: Some("fonts/inter.ttf".to_string()),
            bold: true,
            italic: false,
        };
        let face = rule.validate().unwrap();
        assert_eq!(face.family, "Inter");
        assert_eq!(face.source, "fonts/inter.ttf");
        assert!(face.bold);
    }

    #[test]
    fn missing_family_is_skipped() {
        let rule = FontFaceRule {
            source: Some("fonts/inter.ttf".to_string()),
            ..Default::default()
        };
        assert!(rule.validate().is_none());
    }

    #[test]
    fn missing_source_is_skipped() {
        let rule = FontFaceRule {
            family: Some("Inter".to_string()),
            ..Default::default()
        };
        assert!(rule.validate().is_none());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let rule = FontFaceRule {
            family: Some(String::new()),
            source: Some("fonts/inter.ttf".to_string()),
            ..Default::default()
        };
        assert!(rule.validate().is_none());
    }
}
