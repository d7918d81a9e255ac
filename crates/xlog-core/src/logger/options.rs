//! Formatting toggles and per-call options

use serde::{Deserialize, Serialize};

/// Decorations a logger adds to every message
///
/// Defaults: date, level code and tag on; level name and stack off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// `[YYYY-MM-DD-HH-mm-ss]`
    pub print_date: bool,
    /// `<w>`
    pub print_level: bool,
    /// `<warning>`; takes the level slot over `print_level`
    pub print_level_name: bool,
    /// `(tag)`
    pub print_tag: bool,
    /// Call stack appended to every message
    pub print_stack: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_date: true,
            print_level: true,
            print_level_name: false,
            print_tag: true,
            print_stack: false,
        }
    }
}

impl FormatOptions {
    /// No decorations at all
    pub fn bare() -> Self {
        Self {
            print_date: false,
            print_level: false,
            print_level_name: false,
            print_tag: false,
            print_stack: false,
        }
    }

    pub fn with_date(mut self, enabled: bool) -> Self {
        self.print_date = enabled;
        self
    }

    pub fn with_level(mut self, enabled: bool) -> Self {
        self.print_level = enabled;
        self
    }

    pub fn with_level_name(mut self, enabled: bool) -> Self {
        self.print_level_name = enabled;
        self
    }

    pub fn with_tag(mut self, enabled: bool) -> Self {
        self.print_tag = enabled;
        self
    }

    pub fn with_stack(mut self, enabled: bool) -> Self {
        self.print_stack = enabled;
        self
    }
}

/// Options for a single logging call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Append the call stack to this message only
    pub force_stack: bool,
}

impl LogOptions {
    pub fn with_stack() -> Self {
        Self { force_stack: true }
    }
}
