//! taglog - Tagged logging facility
//!
//! Callers register tags, optionally grouped, each with its own on/off
//! switch and severity level. A line is written only when output is enabled
//! globally, the tag is enabled, and the tag's level is at least the global
//! minimum.
//!
//! ```
//! use taglog::domain::level::WARNING;
//! use taglog::infrastructure::MemorySink;
//! use taglog::{tlog, Registry};
//!
//! let sink = MemorySink::new();
//! let registry = Registry::new(sink.clone());
//! let net = registry.create_tag("tcp", "net", WARNING);
//!
//! registry.enable();
//! tlog!(registry => net, "retrying in {}s", 5).unwrap();
//! registry.disable_group("net");
//! tlog!(registry => net, "not shown").unwrap();
//!
//! assert_eq!(sink.lines(), vec!["Warning[net-tcp]: retrying in 5s"]);
//! ```
//!
//! # Global macros
//!
//! `debug!`, `info!`, `warning!`, `error!` and `tlog!` log through the
//! process-wide registry (see [`global`](mod@global)). `debug!`, `info!` and
//! `error!` share their names with the `tracing` and `log` macros, so call
//! them by path rather than importing them:
//!
//! ```
//! use tracing::info;
//!
//! taglog::enable();
//! taglog::info!("handled by taglog: {}", 1);
//! info!("handled by tracing");
//! taglog::disable();
//! ```

pub mod domain;
pub mod error;
pub mod global;
pub mod infrastructure;

pub use domain::level::{Level, Severity, DEBUG, ERROR, INFO, WARNING};
pub use domain::{BuiltinTags, Registry, Tag, TagId};
pub use error::TagLogError;
pub use global::{
    create_tag, disable, disable_group, disable_tag, enable, enable_group, enable_tag, global,
    set_level, set_tag_level,
};

/// Print against a tag. `tlog!(registry => tag, ...)` targets that
/// registry, `tlog!(tag, ...)` the global one. Evaluates to
/// `taglog::error::Result<()>`.
#[macro_export]
macro_rules! tlog {
    ($registry:expr => $tag:expr, $($arg:tt)+) => {
        $registry.print($tag, ::std::format_args!($($arg)+))
    };
    ($tag:expr, $($arg:tt)+) => {
        $crate::global::print($tag, ::std::format_args!($($arg)+))
    };
}

/// Log against the global Debug tag
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::global::debug(::std::format_args!($($arg)*))
    };
}

/// Log against the global Info tag
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::global::info(::std::format_args!($($arg)*))
    };
}

/// Log against the global Warning tag
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        $crate::global::warning(::std::format_args!($($arg)*))
    };
}

/// Log against the global Error tag
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::global::error(::std::format_args!($($arg)*))
    };
}
