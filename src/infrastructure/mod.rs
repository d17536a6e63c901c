//! Infrastructure layer - Output sinks and settings

pub mod config;
pub mod sink;

pub use config::Settings;
pub use sink::{LogSink, MemorySink, StreamSink};
