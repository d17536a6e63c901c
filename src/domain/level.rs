//! Severity levels and their display names

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Integer severity. Higher is more severe; any value is accepted.
pub type Level = i32;

pub const ERROR: Level = 2;
pub const WARNING: Level = 1;
pub const INFO: Level = 0;
pub const DEBUG: Level = -1;

/// The four canonical severities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Numeric level of this severity
    pub fn level(&self) -> Level {
        match self {
            Severity::Debug => DEBUG,
            Severity::Info => INFO,
            Severity::Warning => WARNING,
            Severity::Error => ERROR,
        }
    }

    /// Display name used in the line prefix
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    /// Map a numeric level back to a canonical severity, if it is one
    pub fn from_level(level: Level) -> Option<Self> {
        match level {
            DEBUG => Some(Severity::Debug),
            INFO => Some(Severity::Info),
            WARNING => Some(Severity::Warning),
            ERROR => Some(Severity::Error),
            _ => None,
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(format!(
                "Invalid level: '{}'. Valid levels are: debug, info, warning, error",
                s
            )),
        }
    }
}

/// Name shown for a level. Levels outside the canonical four print as
/// their decimal value.
pub fn level_name(level: Level) -> Cow<'static, str> {
    match Severity::from_level(level) {
        Some(severity) => Cow::Borrowed(severity.name()),
        None => Cow::Owned(level.to_string()),
    }
}

/// Parse a level given either as a severity name or as an integer
pub fn parse_level(s: &str) -> Result<Level, String> {
    let trimmed = s.trim();
    if let Ok(level) = trimmed.parse::<Level>() {
        return Ok(level);
    }
    Severity::from_str(trimmed)
        .map(|severity| severity.level())
        .map_err(|_| {
            format!(
                "Invalid level: '{}'. Use debug, info, warning, error, or an integer",
                s
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_ordering() {
        assert!(DEBUG < INFO);
        assert!(INFO < WARNING);
        assert!(WARNING < ERROR);
        assert_eq!(INFO, 0);
        assert_eq!(DEBUG, -1);
    }

    #[test]
    fn test_severity_levels() {
        assert_eq!(Severity::Debug.level(), -1);
        assert_eq!(Severity::Info.level(), 0);
        assert_eq!(Severity::Warning.level(), 1);
        assert_eq!(Severity::Error.level(), 2);
    }

    #[test]
    fn test_from_level_roundtrip() {
        for severity in [
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            assert_eq!(Severity::from_level(severity.level()), Some(severity));
        }
        assert_eq!(Severity::from_level(3), None);
        assert_eq!(Severity::from_level(-2), None);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(level_name(ERROR), "Error");
        assert_eq!(level_name(WARNING), "Warning");
        assert_eq!(level_name(INFO), "Info");
        assert_eq!(level_name(DEBUG), "Debug");
    }

    #[test]
    fn test_custom_level_name_is_numeric() {
        assert_eq!(level_name(42), "42");
        assert_eq!(level_name(-7), "-7");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(Severity::from_str("DEBUG").unwrap(), Severity::Debug);
        assert_eq!(Severity::from_str("Info").unwrap(), Severity::Info);
        assert_eq!(Severity::from_str("warn").unwrap(), Severity::Warning);
        assert_eq!(Severity::from_str(" error ").unwrap(), Severity::Error);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = Severity::from_str("loud").unwrap_err();
        assert!(err.contains("Invalid level"));
        assert!(Severity::from_str("").is_err());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("warning").unwrap(), WARNING);
        assert_eq!(parse_level("-1").unwrap(), DEBUG);
        assert_eq!(parse_level(" 17 ").unwrap(), 17);
        assert!(parse_level("loud").unwrap_err().contains("Invalid level"));
    }
}
