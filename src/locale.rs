// ABOUTME: Language preference handling for the bilingual FoodLens backend
// ABOUTME: Maps between display names (English/Hindi) and locale codes (en/hi)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display languages
///
/// Analysis responses carry parallel `*_en` and `*_hi` fields; this type
/// drives which side the localized accessors in [`crate::models`] select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// English (`en`)
    #[default]
    English,
    /// Hindi (`hi`)
    Hindi,
}

impl Language {
    /// Display name as persisted in preferences
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
        }
    }

    /// Two-letter locale code
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "hindi" | "hi" => Ok(Self::Hindi),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Hindi.code(), "hi");
    }

    #[test]
    fn test_parse_accepts_names_and_codes() {
        assert_eq!("Hindi".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!("hi".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!("ENGLISH".parse::<Language>(), Ok(Language::English));
        assert!("french".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
