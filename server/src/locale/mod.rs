//! Locale module
//!
//! This module provides:
//! - `Locale`, the fixed set of supported site locales
//! - `Dictionary`, the per-locale display strings
//! - `locale_redirect`, middleware that prefixes locale-less paths

mod dictionary;
pub mod middleware;

pub use dictionary::{Dictionary, FeatureLabels};
pub use middleware::{locale_redirect, redirect_target};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

/// A supported site locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Es,
    De,
    Ja,
}

impl Locale {
    /// All locales in canonical order
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Es, Locale::De, Locale::Ja];

    pub const DEFAULT: Locale = Locale::En;

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::De => "de",
            Self::Ja => "ja",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    pub fn dictionary(&self) -> &'static Dictionary {
        Dictionary::for_locale(*self)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_codes() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.code()), Some(locale));
        }
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse("EN"), None);
        assert!("xx".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::DEFAULT.to_string(), "en");
    }
}
