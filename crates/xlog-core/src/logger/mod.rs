//! Tagged logger with a level threshold
//!
//! A message at level `L` is emitted iff `rank(L) <= rank(threshold)`.
//! Emitted messages are decorated in a fixed order:
//!
//! ```text
//! [timestamp] <level> (tag) value value ... \n<stack>
//! ```
//!
//! and handed to the sink channel of the level in a single call.

mod options;
mod macros;

use std::fmt::Display;
use std::sync::Arc;

use parking_lot::RwLock;

pub use options::{FormatOptions, LogOptions};

use crate::context::{format_timestamp, LogContext};
use crate::error::{XLogError, XLogResult};
use crate::levels::{Level, LevelRegistry, DEFAULT_LEVEL, FALLBACK_LEVEL};
use crate::sink::{Sink, SinkExt};
use crate::tag::short_uid;

/// A tagged logger
///
/// Threshold and formatting toggles use interior mutability so a logger can
/// be shared (`Arc<XLogger>`) between every caller that asked for its tag.
///
/// # Example
///
/// ```
/// use xlog_core::XLogger;
///
/// let logger = XLogger::new('i', Some("net"));
/// logger.i(&[&"connected to", &"10.0.0.1"]);
/// logger.d(&[&"not shown"]);
/// ```
pub struct XLogger {
    tag: String,
    threshold: RwLock<char>,
    format: RwLock<FormatOptions>,
    levels: Arc<LevelRegistry>,
    context: LogContext,
}

impl XLogger {
    /// Create a console logger with the standard levels
    ///
    /// An unknown `level` falls back to `w`; a missing or empty `tag` is
    /// replaced by a random one.
    pub fn new(level: char, tag: Option<&str>) -> Self {
        Self::with_context(level, tag, Arc::new(LevelRegistry::standard()), LogContext::default())
    }

    /// Create a logger with explicit levels and collaborators
    pub fn with_context(
        level: char,
        tag: Option<&str>,
        levels: Arc<LevelRegistry>,
        context: LogContext,
    ) -> Self {
        let level = if levels.is_valid_level(level) { level } else { DEFAULT_LEVEL };
        let tag = match tag {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => short_uid(),
        };

        Self {
            tag,
            threshold: RwLock::new(level),
            format: RwLock::new(FormatOptions::default()),
            levels,
            context,
        }
    }

    /// Set the formatting toggles at construction
    pub fn with_format(self, format: FormatOptions) -> Self {
        *self.format.write() = format;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Current threshold level id
    pub fn get_level(&self) -> char {
        *self.threshold.read()
    }

    /// Change the threshold
    ///
    /// Unknown ids are reported on the warning sink and leave the
    /// threshold unchanged.
    pub fn set_level(&self, level: char) -> XLogResult<()> {
        if !self.levels.is_valid_level(level) {
            return Err(self.warn_unknown(level));
        }
        *self.threshold.write() = level;
        Ok(())
    }

    /// Change the threshold from an id or a name (`"i"`, `"info"`)
    ///
    /// Unknown input is reported verbatim on the warning sink.
    pub fn set_level_str(&self, level: &str) -> XLogResult<()> {
        match self.levels.parse(level) {
            Ok(id) => self.set_level(id),
            Err(err) => Err(self.report(err)),
        }
    }

    /// Level ids in definition order
    pub fn get_levels(&self) -> Vec<char> {
        self.levels.list_levels()
    }

    pub fn level_registry(&self) -> &LevelRegistry {
        &self.levels
    }

    pub fn format_options(&self) -> FormatOptions {
        *self.format.read()
    }

    pub fn set_format_options(&self, format: FormatOptions) {
        *self.format.write() = format;
    }

    /// Whether a message at `level` would currently be emitted
    pub fn is_enabled(&self, level: char) -> bool {
        match (self.levels.get(level), self.levels.get(self.get_level())) {
            (Some(level), Some(threshold)) => level.passes(threshold),
            _ => false,
        }
    }

    /// Log `values` at `level`
    ///
    /// An unknown level is reported once on the warning sink and the
    /// message is logged at the debug level instead.
    pub fn log(&self, level: char, values: &[&dyn Display], options: LogOptions) {
        let level = match self.levels.get(level) {
            Some(found) => found,
            None => {
                self.warn_unknown(level);
                match self.levels.get(FALLBACK_LEVEL) {
                    Some(fallback) => fallback,
                    None => return,
                }
            }
        };

        let Some(threshold) = self.levels.get(self.get_level()) else {
            return;
        };
        if !level.passes(threshold) {
            return;
        }

        let tokens = self.format_tokens(level, values, options);
        self.context.sink.emit(level.sink, &tokens);
    }

    /// Log at a level given as an id or a name
    ///
    /// Unknown input is reported verbatim, then logged at the debug level.
    pub fn log_str(&self, level: &str, values: &[&dyn Display], options: LogOptions) {
        match self.levels.parse(level) {
            Ok(id) => self.log(id, values, options),
            Err(err) => {
                self.report(err);
                self.log(FALLBACK_LEVEL, values, options);
            }
        }
    }

    /// Build the decorated token list for one message
    ///
    /// Does not filter. Output only depends on the inputs, the clock and
    /// the stack capture.
    pub fn format_tokens(&self, level: &Level, values: &[&dyn Display], options: LogOptions) -> Vec<String> {
        let format = self.format_options();
        let mut tokens = Vec::with_capacity(values.len() + 4);

        if format.print_date {
            tokens.push(format!("[{}]", format_timestamp(self.context.clock.now())));
        }
        if format.print_level_name {
            tokens.push(format!("<{}>", level.name));
        } else if format.print_level {
            tokens.push(format!("<{}>", level.id));
        }
        if format.print_tag {
            tokens.push(format!("({})", self.tag));
        }

        tokens.extend(values.iter().map(|v| v.to_string()));

        if options.force_stack || format.print_stack {
            tokens.push(format!("\n{}", self.context.stack.capture()));
        }

        tokens
    }

    /// Write `values` unfiltered and undecorated to the log channel
    pub fn raw(&self, values: &[&dyn Display]) {
        let tokens: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        self.context.sink.log(&tokens);
    }

    /// Log with message level
    pub fn m(&self, values: &[&dyn Display]) {
        self.log('m', values, LogOptions::default());
    }

    /// Log with error level
    pub fn e(&self, values: &[&dyn Display]) {
        self.log('e', values, LogOptions::default());
    }

    /// Log with warning level
    pub fn w(&self, values: &[&dyn Display]) {
        self.log('w', values, LogOptions::default());
    }

    /// Log with info level
    pub fn i(&self, values: &[&dyn Display]) {
        self.log('i', values, LogOptions::default());
    }

    /// Log with debug level
    pub fn d(&self, values: &[&dyn Display]) {
        self.log('d', values, LogOptions::default());
    }

    /// Log with verbose level
    pub fn v(&self, values: &[&dyn Display]) {
        self.log('v', values, LogOptions::default());
    }

    pub fn m_with(&self, values: &[&dyn Display], options: LogOptions) {
        self.log('m', values, options);
    }

    pub fn e_with(&self, values: &[&dyn Display], options: LogOptions) {
        self.log('e', values, options);
    }

    pub fn w_with(&self, values: &[&dyn Display], options: LogOptions) {
        self.log('w', values, options);
    }

    pub fn i_with(&self, values: &[&dyn Display], options: LogOptions) {
        self.log('i', values, options);
    }

    pub fn d_with(&self, values: &[&dyn Display], options: LogOptions) {
        self.log('d', values, options);
    }

    pub fn v_with(&self, values: &[&dyn Display], options: LogOptions) {
        self.log('v', values, options);
    }

    fn warn_unknown(&self, level: char) -> XLogError {
        self.report(XLogError::UnknownLevel(level))
    }

    fn report(&self, err: XLogError) -> XLogError {
        self.context.warnings.warn_fmt(format_args!("{}", err));
        err
    }
}

impl std::fmt::Debug for XLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XLogger")
            .field("tag", &self.tag)
            .field("threshold", &self.get_level())
            .field("format", &self.format_options())
            .finish()
    }
}
