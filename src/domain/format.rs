//! Line formatting
//!
//! Every emitted line has the shape
//!
//! ```text
//! <level, right-aligned to 7>[<group, right-aligned>-<name, left-aligned>]: <message>
//! ```
//!
//! The group and name columns are padded to the longest group and name
//! registered so far, so lines from different tags stay aligned.
//!
//! # Examples
//!
//! ```
//! use taglog::domain::format::LinePrefix;
//! use taglog::domain::level::WARNING;
//!
//! let prefix = LinePrefix {
//!     level: WARNING,
//!     group: "net".to_string(),
//!     name: "tcp".to_string(),
//!     group_width: 5,
//!     name_width: 6,
//! };
//! assert_eq!(prefix.line("dropped"), "Warning[  net-tcp   ]: dropped");
//! ```

use crate::domain::level::{level_name, Level};

/// Width of the level-name column
pub const LEVEL_WIDTH: usize = 7;

/// Everything needed to render the prefix of one line, copied out of the
/// registry so formatting happens without holding its lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePrefix {
    pub level: Level,
    pub group: String,
    pub name: String,
    pub group_width: usize,
    pub name_width: usize,
}

impl LinePrefix {
    /// Render the prefix alone, up to and including `": "`
    pub fn render(&self) -> String {
        format!(
            "{:>lw$}[{:>gw$}-{:<nw$}]: ",
            level_name(self.level),
            self.group,
            self.name,
            lw = LEVEL_WIDTH,
            gw = self.group_width,
            nw = self.name_width,
        )
    }

    /// Render a complete line for an already formatted message
    pub fn line(&self, message: &str) -> String {
        let mut out = self.render();
        out.push_str(message);
        out
    }
}
