//! Tag registry and emission filter
//!
//! A [`Registry`] owns every tag, the global output switch, the global
//! minimum level and the column widths used to align output. All of it sits
//! behind one lock; [`Registry::print`] copies what it needs under the lock
//! and formats and writes after releasing it.
//!
//! # Examples
//!
//! ```
//! use taglog::domain::level::{INFO, WARNING};
//! use taglog::infrastructure::MemorySink;
//! use taglog::Registry;
//!
//! let sink = MemorySink::new();
//! let registry = Registry::new(sink.clone());
//! let tag = registry.create_tag("cache", "store", WARNING);
//!
//! registry.enable();
//! registry.set_level(INFO);
//! registry.print(tag, format_args!("{} misses", 3)).unwrap();
//!
//! assert_eq!(sink.lines(), vec!["Warning[store-cache]: 3 misses"]);
//! ```

use crate::domain::format::LinePrefix;
use crate::domain::level::{Level, DEBUG, ERROR, INFO, WARNING};
use crate::domain::tag::{Tag, TagId};
use crate::error::{Result, TagLogError};
use crate::infrastructure::config::Settings;
use crate::infrastructure::sink::LogSink;
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// Ids of the four tags every registry starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinTags {
    pub debug: TagId,
    pub info: TagId,
    pub warning: TagId,
    pub error: TagId,
}

#[derive(Debug)]
struct State {
    tags: HashMap<TagId, Tag>,
    next_id: usize,
    enabled: bool,
    min_level: Level,
    max_name_len: usize,
    max_group_len: usize,
}

impl State {
    fn new() -> Self {
        State {
            tags: HashMap::new(),
            next_id: 0,
            enabled: false,
            min_level: INFO,
            max_name_len: 0,
            max_group_len: 0,
        }
    }

    fn create(&mut self, name: &str, group: &str, level: Level) -> TagId {
        let id = TagId(self.next_id);
        self.next_id += 1;
        self.max_name_len = self.max_name_len.max(name.len());
        self.max_group_len = self.max_group_len.max(group.len());
        self.tags.insert(id, Tag::new(id, name, group, level));
        id
    }

    /// Entry for `id`, fabricating one in the `"default"` group if nobody
    /// registered it. The flag is true when the entry was fabricated.
    /// Fabricated entries do not move `next_id`, so a later `create`
    /// reaching this id replaces the entry.
    fn get_or_create_default(&mut self, id: TagId, enabled: bool) -> (&mut Tag, bool) {
        match self.tags.entry(id) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(Tag::fabricated(id, enabled)), true),
        }
    }

    fn set_tag_enabled(&mut self, id: TagId, enabled: bool) -> bool {
        let (tag, fabricated) = self.get_or_create_default(id, enabled);
        tag.enabled = enabled;
        fabricated
    }

    fn set_tag_level(&mut self, id: TagId, level: Level) -> bool {
        let (tag, fabricated) = self.get_or_create_default(id, false);
        tag.level = level;
        fabricated
    }

    fn set_group_enabled(&mut self, group: &str, enabled: bool) {
        for tag in self.tags.values_mut().filter(|tag| tag.group == group) {
            tag.enabled = enabled;
        }
    }

    fn lookup(&self, id: TagId) -> Result<&Tag> {
        self.tags.get(&id).ok_or(TagLogError::UnknownTag(id))
    }

    fn should_emit(&self, tag: &Tag) -> bool {
        self.enabled && tag.passes(self.min_level)
    }
}

/// Registry of tags plus the global filter, writing to one sink
pub struct Registry {
    state: Mutex<State>,
    sink: Box<dyn LogSink>,
    builtins: BuiltinTags,
}

impl Registry {
    /// Create a registry holding the Debug, Info, Warning and Error tags
    /// (ids 0 to 3), with output disabled and the minimum level at Info
    pub fn new(sink: impl LogSink + 'static) -> Self {
        let mut state = State::new();
        let builtins = BuiltinTags {
            debug: state.create("", "", DEBUG),
            info: state.create("", "", INFO),
            warning: state.create("", "", WARNING),
            error: state.create("", "", ERROR),
        };

        Registry {
            state: Mutex::new(state),
            sink: Box::new(sink),
            builtins,
        }
    }

    /// Create a registry and apply `settings` to it
    pub fn with_settings(sink: impl LogSink + 'static, settings: &Settings) -> Self {
        let registry = Registry::new(sink);
        registry.apply(settings);
        registry
    }

    pub fn builtins(&self) -> BuiltinTags {
        self.builtins
    }

    /// Register a tag. Any name, group and level are accepted.
    pub fn create_tag(&self, name: &str, group: &str, level: Level) -> TagId {
        self.state.lock().create(name, group, level)
    }

    /// Turn a tag on. An unknown id gets a fabricated, enabled entry.
    pub fn enable_tag(&self, id: TagId) {
        let fabricated = self.state.lock().set_tag_enabled(id, true);
        note_fabricated(id, fabricated);
    }

    /// Turn a tag off. An unknown id gets a fabricated, disabled entry.
    pub fn disable_tag(&self, id: TagId) {
        let fabricated = self.state.lock().set_tag_enabled(id, false);
        note_fabricated(id, fabricated);
    }

    /// Override a tag's level. An unknown id gets a fabricated, disabled
    /// entry carrying `level`.
    pub fn set_tag_level(&self, id: TagId, level: Level) {
        let fabricated = self.state.lock().set_tag_level(id, level);
        note_fabricated(id, fabricated);
    }

    /// Enable every tag whose group is exactly `group`
    pub fn enable_group(&self, group: &str) {
        self.state.lock().set_group_enabled(group, true);
    }

    /// Disable every tag whose group is exactly `group`
    pub fn disable_group(&self, group: &str) {
        self.state.lock().set_group_enabled(group, false);
    }

    /// Turn all output on; tag-level filtering still applies
    pub fn enable(&self) {
        self.state.lock().enabled = true;
    }

    /// Turn all output off
    pub fn disable(&self) {
        self.state.lock().enabled = false;
    }

    /// Set the minimum level a tag needs to be emitted
    pub fn set_level(&self, level: Level) {
        self.state.lock().min_level = level;
    }

    pub fn is_output_enabled(&self) -> bool {
        self.state.lock().enabled
    }

    /// Current global minimum level
    pub fn level(&self) -> Level {
        self.state.lock().min_level
    }

    /// Snapshot of one tag
    pub fn tag(&self, id: TagId) -> Option<Tag> {
        self.state.lock().tags.get(&id).cloned()
    }

    /// Snapshot of every tag, ordered by id
    pub fn tags(&self) -> Vec<Tag> {
        let mut tags: Vec<Tag> = self.state.lock().tags.values().cloned().collect();
        tags.sort_by_key(|tag| tag.id);
        tags
    }

    /// Number of entries, fabricated ones included
    pub fn len(&self) -> usize {
        self.state.lock().tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().tags.is_empty()
    }

    /// Whether a print against `id` would currently produce output
    pub fn would_emit(&self, id: TagId) -> Result<bool> {
        let state = self.state.lock();
        let tag = state.lookup(id)?;
        Ok(state.should_emit(tag))
    }

    /// Apply the switch, level and group toggles found in `settings`
    pub fn apply(&self, settings: &Settings) {
        let mut state = self.state.lock();
        if let Some(enabled) = settings.enabled {
            state.enabled = enabled;
        }
        if let Some(level) = settings.level {
            state.min_level = level;
        }
        for (group, enabled) in &settings.groups {
            state.set_group_enabled(group, *enabled);
        }
    }

    /// Log a message against a tag.
    ///
    /// Fails only when `id` was never registered. Output is produced when
    /// output is enabled, the tag is enabled and its level is at least the
    /// global minimum. Sink failures are logged through `tracing` and not
    /// returned; use [`Registry::try_print`] to see them.
    pub fn print(&self, id: TagId, args: fmt::Arguments<'_>) -> Result<()> {
        swallow_sink_error(self.try_print(id, args))
    }

    /// Log an already formatted message against a tag
    pub fn print_str(&self, id: TagId, message: &str) -> Result<()> {
        swallow_sink_error(self.write_line(id, |prefix| prefix.line(message)))
    }

    /// Like [`Registry::print`], but a failed sink write comes back as
    /// [`TagLogError::Io`]
    pub fn try_print(&self, id: TagId, args: fmt::Arguments<'_>) -> Result<()> {
        self.write_line(id, |prefix| prefix.line(&fmt::format(args)))
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        let _ = self.print(self.builtins.debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        let _ = self.print(self.builtins.info, args);
    }

    pub fn warning(&self, args: fmt::Arguments<'_>) {
        let _ = self.print(self.builtins.warning, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        let _ = self.print(self.builtins.error, args);
    }

    /// Prefix for `id` if a line should be emitted, read under the lock
    fn prefix_for(&self, id: TagId) -> Result<Option<LinePrefix>> {
        let state = self.state.lock();
        let tag = state.lookup(id)?;
        if !state.should_emit(tag) {
            return Ok(None);
        }
        Ok(Some(LinePrefix {
            level: tag.level,
            group: tag.group.clone(),
            name: tag.name.clone(),
            group_width: state.max_group_len,
            name_width: state.max_name_len,
        }))
    }

    /// Render and write a line if the gate is open. The lock is released
    /// before `render` runs.
    fn write_line<F>(&self, id: TagId, render: F) -> Result<()>
    where
        F: FnOnce(&LinePrefix) -> String,
    {
        let Some(prefix) = self.prefix_for(id)? else {
            return Ok(());
        };
        self.sink.write_line(&render(&prefix))?;
        Ok(())
    }
}

/// Must run with the registry lock released: a subscriber may log back
/// into the registry.
fn note_fabricated(id: TagId, fabricated: bool) {
    if fabricated {
        tracing::debug!(tag = %id, "fabricated entry for unregistered tag");
    }
}

fn swallow_sink_error(result: Result<()>) -> Result<()> {
    match result {
        Err(TagLogError::Io(e)) => {
            tracing::warn!(error = %e, "failed to write log line");
            Ok(())
        }
        other => other,
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("state", &*self.state.lock())
            .field("builtins", &self.builtins)
            .finish_non_exhaustive()
    }
}
