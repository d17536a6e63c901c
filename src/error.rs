//! Error types for taglog

use crate::domain::TagId;
use thiserror::Error;

/// Main error type for taglog
#[derive(Debug, Error)]
pub enum TagLogError {
    #[error("Unknown tag: {0}")]
    UnknownTag(TagId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TagLogError {
    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagLogError::UnknownTag(id) => {
                format!(
                    "Unknown tag: {}\n\n\
                    Suggestions:\n\
                    • Register the tag with create_tag before printing to it\n\
                    • Use the id returned by create_tag rather than a literal",
                    id
                )
            }
            TagLogError::Config(msg) => {
                if msg.contains("Invalid level") {
                    format!(
                        "{}\n\n\
                        Valid levels: debug, info, warning, error, or an integer\n\
                        Example: TAGLOG_LEVEL=warning",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagLogError
pub type Result<T> = std::result::Result<T, TagLogError>;
