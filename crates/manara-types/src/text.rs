//! Display language, reading direction, and bilingual text pairs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Display language served by the site.
///
/// The supported set is closed; routing rejects anything else before the
/// resolver runs. Arabic is the institution's primary language and the
/// default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// Arabic (right-to-left).
    #[default]
    #[strum(serialize = "ar", serialize = "arabic")]
    Ar,
    /// English (left-to-right).
    #[strum(serialize = "en", serialize = "english")]
    En,
}

impl Language {
    /// Parse from a path segment (case-insensitive, accepts full names).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// Convert to the canonical two-letter tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Reading direction for this language.
    pub fn dir(&self) -> Dir {
        match self {
            Language::Ar => Dir::Rtl,
            Language::En => Dir::Ltr,
        }
    }

    /// The other language of the pair.
    pub fn other(&self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reading direction, derived from [`Language`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Right-to-left (Arabic).
    Rtl,
    /// Left-to-right (English).
    Ltr,
}

impl Dir {
    /// Value suitable for an HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dir::Rtl => "rtl",
            Dir::Ltr => "ltr",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bilingual text field: both language legs, one shown at a time.
///
/// Deserialization requires both legs when the field is present — a pair
/// with a missing leg is malformed data, not a partial edit. A field that is
/// absent entirely defaults to two empty legs (blocks under construction in
/// the editor routinely have empty text).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BilingualText {
    /// Arabic leg.
    pub ar: String,
    /// English leg.
    pub en: String,
}

impl BilingualText {
    /// Build a pair from both legs.
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Select the leg for the given language.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }

    /// True when both legs are empty.
    pub fn is_empty(&self) -> bool {
        self.ar.is_empty() && self.en.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse_aliases() {
        assert_eq!(Language::from_str("ar"), Some(Language::Ar));
        assert_eq!(Language::from_str("AR"), Some(Language::Ar));
        assert_eq!(Language::from_str("english"), Some(Language::En));
        assert_eq!(Language::from_str("fr"), None);
    }

    #[test]
    fn test_language_dir() {
        assert_eq!(Language::Ar.dir(), Dir::Rtl);
        assert_eq!(Language::En.dir(), Dir::Ltr);
        assert_eq!(Dir::Rtl.as_str(), "rtl");
    }

    #[test]
    fn test_bilingual_selection() {
        let t = BilingualText::new("مرحبا", "Welcome");
        assert_eq!(t.get(Language::Ar), "مرحبا");
        assert_eq!(t.get(Language::En), "Welcome");
    }

    #[test]
    fn test_bilingual_requires_both_legs() {
        let ok: Result<BilingualText, _> = serde_json::from_str(r#"{"ar":"أ","en":"a"}"#);
        assert!(ok.is_ok());
        let missing: Result<BilingualText, _> = serde_json::from_str(r#"{"ar":"أ"}"#);
        assert!(missing.is_err());
    }
}
