//! Tag data model

use crate::domain::level::{Level, INFO};
use std::fmt;

/// Group assigned to tags that a mutator fabricates for an unknown id
pub const DEFAULT_GROUP: &str = "default";

/// Handle of a registered tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagId(pub usize);

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for TagId {
    fn from(id: usize) -> Self {
        TagId(id)
    }
}

/// A logging channel with its own switch and level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub group: String,
    pub enabled: bool,
    pub level: Level,
}

impl Tag {
    /// Create an explicitly registered tag, enabled
    pub fn new(id: TagId, name: impl Into<String>, group: impl Into<String>, level: Level) -> Self {
        Tag {
            id,
            name: name.into(),
            group: group.into(),
            enabled: true,
            level,
        }
    }

    /// Entry made up for an id nobody registered: empty name, the
    /// `"default"` group, level Info
    pub fn fabricated(id: TagId, enabled: bool) -> Self {
        Tag {
            id,
            name: String::new(),
            group: DEFAULT_GROUP.to_string(),
            enabled,
            level: INFO,
        }
    }

    /// Whether this tag passes the tag-level part of the emission gate
    pub fn passes(&self, min_level: Level) -> bool {
        self.enabled && self.level >= min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::level::{DEBUG, WARNING};

    #[test]
    fn test_new_tag_is_enabled() {
        let tag = Tag::new(TagId(5), "db", "storage", WARNING);
        assert!(tag.enabled);
        assert_eq!(tag.name, "db");
        assert_eq!(tag.group, "storage");
        assert_eq!(tag.level, WARNING);
    }

    #[test]
    fn test_fabricated_tag_defaults() {
        let tag = Tag::fabricated(TagId(9), false);
        assert_eq!(tag.group, "default");
        assert!(tag.name.is_empty());
        assert_eq!(tag.level, INFO);
        assert!(!tag.enabled);
    }

    #[test]
    fn test_passes() {
        let mut tag = Tag::new(TagId(0), "", "", WARNING);
        assert!(tag.passes(INFO));
        assert!(tag.passes(WARNING));
        assert!(!tag.passes(WARNING + 1));

        tag.enabled = false;
        assert!(!tag.passes(DEBUG));
    }

    #[test]
    fn test_tag_id_display() {
        assert_eq!(TagId(12).to_string(), "12");
        assert_eq!(TagId::from(3), TagId(3));
    }
}
