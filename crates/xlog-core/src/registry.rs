//! Logger factory: one shared logger per tag
//!
//! ```text
//! XLog ──get_logger("net")──▶ Arc<XLogger> (created once, cached)
//!   │
//!   ├── default level  → seeds new loggers
//!   ├── LevelRegistry  → shared by every logger
//!   └── LogContext     → sink, warnings, clock, stack
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;

use crate::config::XLogConfig;
use crate::context::LogContext;
use crate::error::{XLogError, XLogResult};
use crate::levels::{LevelRegistry, DEFAULT_LEVEL};
use crate::logger::{FormatOptions, LogOptions, XLogger};
use crate::sink::{Sink, SinkExt};
use crate::tag::short_uid;

/// Registry of tagged loggers
///
/// Loggers are created lazily on first request and live as long as the
/// registry. Lookup-or-create runs under the write lock, so concurrent
/// first access to a tag builds exactly one logger.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use xlog_core::XLog;
///
/// let xlog = XLog::new();
/// let a = xlog.get_logger("a");
/// let b = xlog.get_logger("a");
/// assert!(Arc::ptr_eq(&a, &b));
///
/// xlog.set_default_level('d', true).unwrap();
/// assert_eq!(a.get_level(), 'd');
/// ```
pub struct XLog {
    loggers: RwLock<HashMap<String, Arc<XLogger>>>,
    anonymous: OnceCell<String>,
    default_level: RwLock<char>,
    format: RwLock<FormatOptions>,
    levels: Arc<LevelRegistry>,
    context: LogContext,
}

impl XLog {
    /// Registry with standard levels, console output and default level `w`
    pub fn new() -> Self {
        Self::with_context(LevelRegistry::standard(), LogContext::default())
    }

    pub fn with_context(levels: LevelRegistry, context: LogContext) -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            anonymous: OnceCell::new(),
            default_level: RwLock::new(DEFAULT_LEVEL),
            format: RwLock::new(FormatOptions::default()),
            levels: Arc::new(levels),
            context,
        }
    }

    /// Build a registry from configuration
    ///
    /// Per-level sink overrides are applied to the level table; the default
    /// level and formatting seed every logger created afterwards.
    pub fn from_config(config: &XLogConfig, context: LogContext) -> Self {
        let levels = config
            .sinks
            .iter()
            .fold(LevelRegistry::standard(), |levels, (id, sink)| levels.with_sink(*id, *sink));

        let xlog = Self::with_context(levels, context);
        if xlog.levels.is_valid_level(config.level) {
            *xlog.default_level.write() = config.level;
        } else {
            xlog.context
                .warnings
                .warn_fmt(format_args!("{}", XLogError::UnknownLevel(config.level)));
        }
        *xlog.format.write() = config.format;
        xlog
    }

    /// Get the logger for `tag`, creating it on first use
    ///
    /// An empty tag always maps to one anonymous logger whose random tag is
    /// drawn on first use. Random tags are not guaranteed unique; if the
    /// drawn tag is already registered, the anonymous logger replaces it.
    pub fn get_logger(&self, tag: &str) -> Arc<XLogger> {
        if tag.is_empty() {
            return self.anonymous_logger();
        }

        if let Some(logger) = self.loggers.read().get(tag) {
            return logger.clone();
        }

        let mut loggers = self.loggers.write();
        loggers
            .entry(tag.to_string())
            .or_insert_with_key(|tag| Arc::new(self.create_logger(tag)))
            .clone()
    }

    fn anonymous_logger(&self) -> Arc<XLogger> {
        let mut loggers = self.loggers.write();
        let mut drawn = false;
        let tag = self.anonymous.get_or_init(|| {
            drawn = true;
            short_uid()
        });

        if drawn {
            let logger = Arc::new(self.create_logger(tag));
            loggers.insert(tag.clone(), logger.clone());
            return logger;
        }
        loggers
            .entry(tag.clone())
            .or_insert_with_key(|tag| Arc::new(self.create_logger(tag)))
            .clone()
    }

    fn create_logger(&self, tag: &str) -> XLogger {
        XLogger::with_context(self.get_level(), Some(tag), self.levels.clone(), self.context.clone())
            .with_format(*self.format.read())
    }

    /// Look up an existing logger without creating one
    pub fn find_logger(&self, tag: &str) -> Option<Arc<XLogger>> {
        self.loggers.read().get(tag).cloned()
    }

    /// Tags of every cached logger
    pub fn tags(&self) -> Vec<String> {
        self.loggers.read().keys().cloned().collect()
    }

    /// Default level given to new loggers
    pub fn get_level(&self) -> char {
        *self.default_level.read()
    }

    /// Change the default level for new loggers
    ///
    /// With `recursive`, every existing logger is updated as well. An
    /// unknown level is reported on the warning sink and changes nothing.
    pub fn set_default_level(&self, level: char, recursive: bool) -> XLogResult<()> {
        if !self.levels.is_valid_level(level) {
            let err = XLogError::UnknownLevel(level);
            self.context.warnings.warn_fmt(format_args!("{}", err));
            return Err(err);
        }

        *self.default_level.write() = level;

        if recursive {
            let loggers: Vec<Arc<XLogger>> = self.loggers.read().values().cloned().collect();
            for logger in loggers {
                logger.set_level(level)?;
            }
        }
        Ok(())
    }

    /// Like [`set_default_level`](Self::set_default_level), taking an id or
    /// a name; unknown input is reported verbatim
    pub fn set_default_level_str(&self, level: &str, recursive: bool) -> XLogResult<()> {
        match self.levels.parse(level) {
            Ok(id) => self.set_default_level(id, recursive),
            Err(err) => {
                self.context.warnings.warn_fmt(format_args!("{}", err));
                Err(err)
            }
        }
    }

    /// Formatting given to new loggers
    pub fn default_format(&self) -> FormatOptions {
        *self.format.read()
    }

    pub fn set_default_format(&self, format: FormatOptions) {
        *self.format.write() = format;
    }

    pub fn get_levels(&self) -> Vec<char> {
        self.levels.list_levels()
    }

    pub fn get_level_name(&self, level: char) -> Option<&'static str> {
        self.levels.describe(level)
    }

    pub fn level_registry(&self) -> &LevelRegistry {
        &self.levels
    }

    // ========================================================================
    // Tag-per-call logging
    // ========================================================================

    /// Log through the logger for `tag`
    pub fn log(&self, tag: &str, level: char, values: &[&dyn Display], options: LogOptions) {
        self.get_logger(tag).log(level, values, options);
    }

    pub fn m(&self, tag: &str, values: &[&dyn Display]) {
        self.log(tag, 'm', values, LogOptions::default());
    }

    pub fn e(&self, tag: &str, values: &[&dyn Display]) {
        self.log(tag, 'e', values, LogOptions::default());
    }

    pub fn w(&self, tag: &str, values: &[&dyn Display]) {
        self.log(tag, 'w', values, LogOptions::default());
    }

    pub fn i(&self, tag: &str, values: &[&dyn Display]) {
        self.log(tag, 'i', values, LogOptions::default());
    }

    pub fn d(&self, tag: &str, values: &[&dyn Display]) {
        self.log(tag, 'd', values, LogOptions::default());
    }

    pub fn v(&self, tag: &str, values: &[&dyn Display]) {
        self.log(tag, 'v', values, LogOptions::default());
    }

    /// Write `values` unfiltered and undecorated to the log channel
    pub fn raw(&self, values: &[&dyn Display]) {
        let tokens: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        self.context.sink.log(&tokens);
    }
}

impl Default for XLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for XLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XLog")
            .field("default_level", &self.get_level())
            .field("loggers", &self.tags())
            .finish()
    }
}

// Process-wide instance, seeded from XLOG_LEVEL / XLOG_STACK
static GLOBAL_XLOG: Lazy<XLog> =
    Lazy::new(|| seeded_from(|key| std::env::var(key).ok(), LogContext::default()));

/// Build a registry from overrides alone; bad values are reported on the
/// warning sink and skipped one by one
fn seeded_from<F>(lookup: F, context: LogContext) -> XLog
where
    F: Fn(&str) -> Option<String>,
{
    let config = XLogConfig::default().apply_overrides_lossy(lookup, |err| {
        context.warnings.warn_fmt(format_args!("{}", err));
    });
    XLog::from_config(&config, context)
}

/// The process-wide registry
pub fn global() -> &'static XLog {
    &GLOBAL_XLOG
}

/// Get a logger from the process-wide registry
pub fn get_logger(tag: &str) -> Arc<XLogger> {
    GLOBAL_XLOG.get_logger(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FixedClock;
    use crate::levels::SinkKind;
    use crate::sink::MemorySink;
    use time::macros::datetime;

    fn registry() -> (XLog, Arc<MemorySink>, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let warnings = Arc::new(MemorySink::new());
        let context = LogContext::default()
            .with_sink(sink.clone())
            .with_warnings(warnings.clone())
            .with_clock(Arc::new(FixedClock(datetime!(2021-06-01 12:00:00 UTC))));
        (XLog::with_context(LevelRegistry::standard(), context), sink, warnings)
    }

    #[test]
    fn test_same_tag_same_instance() {
        let (xlog, _, _) = registry();
        let a = xlog.get_logger("a");
        let again = xlog.get_logger("a");
        let b = xlog.get_logger("b");

        assert!(Arc::ptr_eq(&a, &again));
        assert!(!Arc::ptr_eq(&a, &b));

        // Shared mutable state
        a.set_level('v').unwrap();
        assert_eq!(again.get_level(), 'v');
        assert_eq!(b.get_level(), DEFAULT_LEVEL);
    }

    #[test]
    fn test_empty_tag_generates_one() {
        let (xlog, _, _) = registry();
        let logger = xlog.get_logger("");
        assert_eq!(logger.tag().chars().count(), crate::tag::TAG_LENGTH);
        assert!(xlog.find_logger(logger.tag()).is_some());
    }

    #[test]
    fn test_empty_tag_reuses_anonymous_logger() {
        let (xlog, sink, _) = registry();
        let first = xlog.get_logger("");

        for _ in 0..1000 {
            xlog.w("", &[&"anon"]);
        }

        assert!(Arc::ptr_eq(&first, &xlog.get_logger("")));
        assert_eq!(xlog.tags(), vec![first.tag().to_string()]);

        let tag = format!("({})", first.tag());
        let calls = sink.calls();
        assert_eq!(calls.len(), 1000);
        assert!(calls.iter().all(|c| c.tokens[2] == tag));
    }

    #[test]
    fn test_set_default_level_str() {
        let (xlog, _, warnings) = registry();
        let a = xlog.get_logger("a");

        xlog.set_default_level_str("debug", true).unwrap();
        assert_eq!(a.get_level(), 'd');

        assert_eq!(
            xlog.set_default_level_str("loud", true),
            Err(XLogError::UnknownLevelName("loud".to_string()))
        );
        assert_eq!(warnings.last().unwrap(), vec!["The provided level ('loud') is unknown!"]);
        assert_eq!(xlog.get_level(), 'd');
    }

    #[test]
    fn test_seeded_from_skips_bad_overrides() {
        let warnings = Arc::new(MemorySink::new());
        let lookup = |key: &str| match key {
            crate::config::LEVEL_ENV => Some("i".to_string()),
            crate::config::STACK_ENV => Some("maybe".to_string()),
            _ => None,
        };

        let xlog = seeded_from(lookup, LogContext::default().with_warnings(warnings.clone()));
        assert_eq!(xlog.get_level(), 'i');
        assert!(!xlog.default_format().print_stack);
        assert_eq!(warnings.len(), 1);
        assert!(warnings.last().unwrap()[0].contains("XLOG_STACK"));
    }

    #[test]
    fn test_default_level_seeds_new_loggers() {
        let (xlog, _, _) = registry();
        let before = xlog.get_logger("before");

        xlog.set_default_level('i', false).unwrap();
        let after = xlog.get_logger("after");

        assert_eq!(xlog.get_level(), 'i');
        assert_eq!(before.get_level(), DEFAULT_LEVEL);
        assert_eq!(after.get_level(), 'i');
    }

    #[test]
    fn test_recursive_default_level() {
        let (xlog, _, warnings) = registry();
        let a = xlog.get_logger("a");
        let b = xlog.get_logger("b");
        b.set_level('m').unwrap();

        xlog.set_default_level('v', true).unwrap();

        assert_eq!(a.get_level(), 'v');
        assert_eq!(b.get_level(), 'v');
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_default_level() {
        let (xlog, _, warnings) = registry();
        let a = xlog.get_logger("a");

        assert_eq!(xlog.set_default_level('x', true), Err(XLogError::UnknownLevel('x')));
        assert_eq!(xlog.get_level(), DEFAULT_LEVEL);
        assert_eq!(a.get_level(), DEFAULT_LEVEL);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_level_lookups() {
        let (xlog, _, _) = registry();
        assert_eq!(xlog.get_levels(), vec!['m', 'e', 'w', 'i', 'd', 'v']);
        assert_eq!(xlog.get_level_name('i'), Some("info"));
        assert_eq!(xlog.get_level_name('x'), None);
    }

    #[test]
    fn test_tag_per_call_logging() {
        let (xlog, sink, _) = registry();

        xlog.w("net", &[&"down"]);
        xlog.i("net", &[&"filtered"]);

        let calls = sink.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].kind, SinkKind::Warn);
        assert_eq!(calls[0].tokens, vec!["[2021-06-01-12-00-00]", "<w>", "(net)", "down"]);
        assert_eq!(xlog.tags(), vec!["net".to_string()]);
    }

    #[test]
    fn test_raw() {
        let (xlog, sink, _) = registry();
        xlog.set_default_level('m', true).unwrap();
        xlog.raw(&[&"as", &"is"]);

        assert_eq!(sink.calls_on(SinkKind::Log).len(), 1);
        assert_eq!(sink.last().unwrap(), vec!["as", "is"]);
    }

    #[test]
    fn test_default_format_applies_to_new_loggers() {
        let (xlog, sink, _) = registry();
        xlog.set_default_format(FormatOptions::bare());
        xlog.e("x", &[&"plain"]);

        assert_eq!(sink.last().unwrap(), vec!["plain"]);
        assert_eq!(xlog.default_format(), FormatOptions::bare());
    }

    #[test]
    fn test_from_config() {
        let mut config = XLogConfig::default();
        config.level = 'd';
        config.format = FormatOptions::bare();
        config.sinks.insert('v', SinkKind::Log);

        let sink = Arc::new(MemorySink::new());
        let xlog = XLog::from_config(&config, LogContext::default().with_sink(sink.clone()));
        assert_eq!(xlog.get_level(), 'd');
        assert_eq!(xlog.level_registry().get('v').unwrap().sink, SinkKind::Log);

        let logger = xlog.get_logger("cfg");
        logger.set_level('v').unwrap();
        logger.v(&[&"routed"]);
        assert_eq!(sink.calls_on(SinkKind::Log).len(), 1);
    }

    #[test]
    fn test_from_config_invalid_level() {
        let mut config = XLogConfig::default();
        config.level = 'q';

        let warnings = Arc::new(MemorySink::new());
        let xlog = XLog::from_config(&config, LogContext::default().with_warnings(warnings.clone()));
        assert_eq!(xlog.get_level(), DEFAULT_LEVEL);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_concurrent_first_access() {
        use std::thread;

        let (xlog, _, _) = registry();
        let xlog = Arc::new(xlog);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let xlog = xlog.clone();
                thread::spawn(move || xlog.get_logger("shared"))
            })
            .collect();

        let loggers: Vec<Arc<XLogger>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(loggers.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(xlog.tags().len(), 1);
    }

    #[test]
    fn test_global_registry() {
        let a = get_logger("global-test");
        let b = global().get_logger("global-test");
        assert!(Arc::ptr_eq(&a, &b));
    }
}
