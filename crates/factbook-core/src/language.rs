//! Language codes used to key fact collections.
//!
//! Codes are upper-case ASCII (`EN`, `DE`). Caller input is normalized so
//! locale tags (`en-US`, `en_GB`) and table keys (`FACTS_EN`) resolve to the
//! same code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix carried by the authored table keys (`FACTS_EN`).
const TABLE_KEY_PREFIX: &str = "FACTS_";

/// Normalized language code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Normalize raw input into a code. Returns `None` when nothing usable is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_ascii_uppercase();
        let stripped = upper.strip_prefix(TABLE_KEY_PREFIX).unwrap_or(&upper);
        let primary = stripped
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim();

        if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Self(primary.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| format!("invalid language code: {raw:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_code() {
        assert_eq!(LanguageCode::parse("EN").unwrap().as_str(), "EN");
        assert_eq!(LanguageCode::parse("en").unwrap().as_str(), "EN");
        assert_eq!(LanguageCode::parse("  de ").unwrap().as_str(), "DE");
    }

    #[test]
    fn test_parse_locale_tags() {
        assert_eq!(LanguageCode::parse("en-US").unwrap().as_str(), "EN");
        assert_eq!(LanguageCode::parse("en_GB").unwrap().as_str(), "EN");
        assert_eq!(LanguageCode::parse("pt-BR").unwrap().as_str(), "PT");
    }

    #[test]
    fn test_parse_table_key() {
        assert_eq!(LanguageCode::parse("FACTS_EN").unwrap().as_str(), "EN");
        assert_eq!(LanguageCode::parse("facts_en").unwrap().as_str(), "EN");
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert!(LanguageCode::parse("").is_none());
        assert!(LanguageCode::parse("   ").is_none());
        assert!(LanguageCode::parse("-US").is_none());
        assert!(LanguageCode::parse("e n").is_none());
        assert!(LanguageCode::parse("FACTS_").is_none());
    }

    #[test]
    fn test_display_is_code() {
        let code = LanguageCode::parse("en-us").unwrap();
        assert_eq!(code.to_string(), "EN");
        assert_eq!(String::from(code), "EN");
    }
}
