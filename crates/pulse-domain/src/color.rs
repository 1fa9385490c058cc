use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A display color in `#RRGGBB` form, normalised to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorHex(String);

impl ColorHex {
    /// Gray used whenever a category has no usable color.
    pub const DEFAULT_HEX: &'static str = "#CCCCCC";

    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidColor(value.to_string()));
        }
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// Parses an optional raw color, dropping anything malformed.
    pub fn parse_lenient(value: Option<&str>) -> Option<Self> {
        value.and_then(|raw| Self::parse(raw).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColorHex {
    fn default() -> Self {
        Self(Self::DEFAULT_HEX.to_string())
    }
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ColorHex {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ColorHex> for String {
    fn from(color: ColorHex) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalises_case_and_prefix() {
        assert_eq!(ColorHex::parse("ff5733").unwrap().as_str(), "#FF5733");
        assert_eq!(ColorHex::parse(" #a1b2c3 ").unwrap().as_str(), "#A1B2C3");
    }

    #[test]
    fn parse_rejects_malformed_values() {
        for raw in ["", "#FFF", "#GG0000", "red", "#1234567"] {
            assert!(ColorHex::parse(raw).is_err(), "`{raw}` should be rejected");
        }
    }

    #[test]
    fn lenient_parse_drops_invalid_colors() {
        assert_eq!(ColorHex::parse_lenient(Some("blue")), None);
        assert_eq!(ColorHex::parse_lenient(None), None);
        assert_eq!(ColorHex::default().as_str(), ColorHex::DEFAULT_HEX);
    }
}
