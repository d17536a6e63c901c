//! Domain layer - Tags, levels, formatting and the registry

pub mod format;
pub mod level;
pub mod registry;
pub mod tag;

pub use format::LinePrefix;
pub use level::{Level, Severity};
pub use registry::{BuiltinTags, Registry};
pub use tag::{Tag, TagId, DEFAULT_GROUP};
