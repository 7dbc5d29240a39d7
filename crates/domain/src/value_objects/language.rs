//! Summary language value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Language codes accepted by the forecast API for text summaries
pub const LANGUAGE_CODES: &[&str] = &[
    "ar", "az", "be", "bg", "bn", "bs", "ca", "cs", "da", "de", "el", "en", "ja", "ka", "kn",
    "ko", "eo", "es", "et", "fi", "fr", "he", "hi", "hr", "hu", "id", "is", "it", "kw", "lv",
    "ml", "mr", "nb", "nl", "pa", "pl", "pt", "ro", "ru", "sk", "sl", "sr", "sv", "ta", "te",
    "tet", "tr", "uk", "ur", "x-pig-latin", "zh", "zh-tw",
];

/// A validated summary language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLanguage` if the code is not in [`LANGUAGE_CODES`]
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let normalized = code.trim().to_lowercase();
        if LANGUAGE_CODES.contains(&normalized.as_str()) {
            Ok(Self(normalized))
        } else {
            Err(DomainError::InvalidLanguage(code.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Language {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default().as_str(), "en");
    }

    #[test]
    fn accepts_known_codes() {
        for code in LANGUAGE_CODES {
            assert!(Language::new(code).is_ok(), "{code} should be accepted");
        }
        assert_eq!(Language::new("ZH-TW").map(|l| l.to_string()), Ok("zh-tw".to_string()));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            Language::new("xx"),
            Err(DomainError::InvalidLanguage("xx".to_string()))
        );
        assert!(Language::new("").is_err());
    }
}
