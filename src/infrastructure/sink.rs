//! Output sinks for formatted lines

use chrono::Local;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Timestamp written before every line by [`StreamSink`]
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Destination for fully formatted log lines
pub trait LogSink: Send + Sync {
    /// Write one line. The line carries no trailing newline.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Sink writing timestamped lines to a byte stream, stderr by default
pub struct StreamSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl StreamSink<io::Stderr> {
    /// Sink over the process's standard error
    pub fn stderr() -> Self {
        StreamSink::new(io::stderr())
    }
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        StreamSink {
            writer: Mutex::new(writer),
        }
    }

    /// Give back the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> LogSink for StreamSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        let mut writer = self.writer.lock();
        writeln!(writer, "{} {}", stamp, line)?;
        writer.flush()
    }
}

/// Sink that keeps lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return every line written so far
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}
