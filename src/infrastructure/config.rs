//! Settings for the global switch, minimum level and group toggles
//!
//! Settings come from a TOML fragment (which a host application may embed in
//! its own configuration) and from `TAGLOG_*` environment variables:
//!
//! ```toml
//! enabled = true
//! level = "warning"   # or an integer
//!
//! [groups]
//! net = false
//! ```

use crate::domain::level::{parse_level, Level};
use crate::error::{Result, TagLogError};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub const ENV_ENABLED: &str = "TAGLOG_ENABLED";
pub const ENV_LEVEL: &str = "TAGLOG_LEVEL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(
        default,
        deserialize_with = "deserialize_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<Level>,

    /// Group name to enabled flag
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub groups: BTreeMap<String, bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelValue {
    Number(Level),
    Name(String),
}

fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<Option<Level>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LevelValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LevelValue::Number(level)) => Ok(Some(level)),
        Some(LevelValue::Name(name)) => parse_level(&name)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl Settings {
    /// Parse settings from a TOML fragment
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read settings from `TAGLOG_ENABLED` and `TAGLOG_LEVEL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = match lookup(ENV_ENABLED) {
            Some(value) => Some(parse_switch(&value).ok_or_else(|| {
                TagLogError::Config(format!(
                    "{} must be one of 1, 0, true, false, on, off, yes, no (got '{}')",
                    ENV_ENABLED, value
                ))
            })?),
            None => None,
        };

        let level = match lookup(ENV_LEVEL) {
            Some(value) => Some(parse_level(&value).map_err(TagLogError::Config)?),
            None => None,
        };

        Ok(Settings {
            enabled,
            level,
            groups: BTreeMap::new(),
        })
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(mut self, other: Settings) -> Self {
        if other.enabled.is_some() {
            self.enabled = other.enabled;
        }
        if other.level.is_some() {
            self.level = other.level;
        }
        self.groups.extend(other.groups);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.level.is_none() && self.groups.is_empty()
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
