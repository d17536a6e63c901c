//! Process-wide registry
//!
//! The global registry is created on first use and writes to standard
//! error. Its built-in tags are created before anything else can touch it,
//! so they always hold ids 0 to 3.
//!
//! Unlike [`Registry::new`], it does not always start with output off and
//! the minimum level at Info: `TAGLOG_ENABLED` and `TAGLOG_LEVEL`, when
//! set, override those defaults at creation. An invalid value in either
//! variable is logged through `tracing` and both are ignored.
//!
//! Code that wants isolation (tests, embedded use) should build its own
//! [`Registry`] instead.

use crate::domain::level::Level;
use crate::domain::registry::Registry;
use crate::domain::tag::TagId;
use crate::error::Result;
use crate::infrastructure::config::Settings;
use crate::infrastructure::sink::StreamSink;
use std::fmt;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry
pub fn global() -> &'static Registry {
    let mut env_error = None;
    let registry = GLOBAL.get_or_init(|| {
        let settings = Settings::from_env().unwrap_or_else(|e| {
            env_error = Some(e);
            Settings::default()
        });
        Registry::with_settings(StreamSink::stderr(), &settings)
    });
    // Reported outside the initializer; a subscriber may call back in here.
    if let Some(e) = env_error {
        tracing::warn!(error = %e, "ignoring invalid taglog environment settings");
    }
    registry
}

/// Install `registry` as the process-wide one. Fails, handing the registry
/// back, if the global registry already exists.
pub fn install(registry: Registry) -> std::result::Result<(), Registry> {
    GLOBAL.set(registry)
}

pub fn create_tag(name: &str, group: &str, level: Level) -> TagId {
    global().create_tag(name, group, level)
}

pub fn enable_tag(id: TagId) {
    global().enable_tag(id)
}

pub fn disable_tag(id: TagId) {
    global().disable_tag(id)
}

pub fn set_tag_level(id: TagId, level: Level) {
    global().set_tag_level(id, level)
}

pub fn enable_group(group: &str) {
    global().enable_group(group)
}

pub fn disable_group(group: &str) {
    global().disable_group(group)
}

pub fn enable() {
    global().enable()
}

pub fn disable() {
    global().disable()
}

pub fn set_level(level: Level) {
    global().set_level(level)
}

pub fn print(id: TagId, args: fmt::Arguments<'_>) -> Result<()> {
    global().print(id, args)
}

pub fn debug(args: fmt::Arguments<'_>) {
    global().debug(args)
}

pub fn info(args: fmt::Arguments<'_>) {
    global().info(args)
}

pub fn warning(args: fmt::Arguments<'_>) {
    global().warning(args)
}

pub fn error(args: fmt::Arguments<'_>) {
    global().error(args)
}
