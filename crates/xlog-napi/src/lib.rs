//! Node.js bindings for XLog via napi-rs

#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::fmt::Display;
use std::sync::Arc;

use xlog_core::config::FileConfigLoader;
use xlog_core::levels::LevelRegistry;
use xlog_core::logger::{FormatOptions, LogOptions};
use xlog_core::registry::{
    XLog as CoreXLog,
    get_logger as core_get_logger,
};
use xlog_core::context::LogContext;
use xlog_core::XLogger as CoreXLogger;

// ============================================================================
// Helpers
// ============================================================================

fn displays(values: &[String]) -> Vec<&dyn Display> {
    values.iter().map(|v| v as &dyn Display).collect()
}

fn log_options(force_stack: Option<bool>) -> LogOptions {
    LogOptions {
        force_stack: force_stack.unwrap_or(false),
    }
}

// ============================================================================
// Level Types
// ============================================================================

#[napi(object)]
pub struct LevelInfo {
    pub id: String,
    pub rank: u32,
    pub name: String,
    pub sink: String,
}

/// Describe the standard levels in definition order
#[napi]
pub fn levels() -> Vec<LevelInfo> {
    LevelRegistry::standard()
        .iter()
        .map(|l| LevelInfo {
            id: l.id.to_string(),
            rank: l.rank as u32,
            name: l.name.to_string(),
            sink: l.sink.to_string(),
        })
        .collect()
}

// ============================================================================
// XLogger
// ============================================================================

#[napi]
pub struct XLogger {
    inner: Arc<CoreXLogger>,
}

impl XLogger {
    fn update_format(&self, update: impl FnOnce(&mut FormatOptions)) {
        let mut format = self.inner.format_options();
        update(&mut format);
        self.inner.set_format_options(format);
    }

    fn emit(&self, level: char, values: Vec<String>, force_stack: Option<bool>) {
        self.inner.log(level, &displays(&values), log_options(force_stack));
    }
}

#[napi]
impl XLogger {
    /// Standalone console logger; unknown levels fall back to "w"
    #[napi(constructor)]
    pub fn new(level: Option<String>, tag: Option<String>) -> Self {
        let level = level
            .and_then(|l| LevelRegistry::standard().resolve(&l))
            .unwrap_or(xlog_core::DEFAULT_LEVEL);
        Self {
            inner: Arc::new(CoreXLogger::new(level, tag.as_deref())),
        }
    }

    #[napi(getter)]
    pub fn tag(&self) -> String { self.inner.tag().to_string() }

    #[napi]
    pub fn get_level(&self) -> String { self.inner.get_level().to_string() }

    /// Returns false (after a console warning) when the level is unknown
    #[napi]
    pub fn set_level(&self, level: String) -> bool {
        self.inner.set_level_str(&level).is_ok()
    }

    #[napi]
    pub fn get_levels(&self) -> Vec<String> {
        self.inner.get_levels().into_iter().map(String::from).collect()
    }

    #[napi(getter, js_name = "printDate")]
    pub fn print_date(&self) -> bool { self.inner.format_options().print_date }

    #[napi(setter, js_name = "printDate")]
    pub fn set_print_date(&mut self, value: bool) { self.update_format(|f| f.print_date = value); }

    #[napi(getter, js_name = "printLevel")]
    pub fn print_level(&self) -> bool { self.inner.format_options().print_level }

    #[napi(setter, js_name = "printLevel")]
    pub fn set_print_level(&mut self, value: bool) { self.update_format(|f| f.print_level = value); }

    #[napi(getter, js_name = "printLevelName")]
    pub fn print_level_name(&self) -> bool { self.inner.format_options().print_level_name }

    #[napi(setter, js_name = "printLevelName")]
    pub fn set_print_level_name(&mut self, value: bool) { self.update_format(|f| f.print_level_name = value); }

    #[napi(getter, js_name = "printTag")]
    pub fn print_tag(&self) -> bool { self.inner.format_options().print_tag }

    #[napi(setter, js_name = "printTag")]
    pub fn set_print_tag(&mut self, value: bool) { self.update_format(|f| f.print_tag = value); }

    #[napi(getter, js_name = "printStack")]
    pub fn print_stack(&self) -> bool { self.inner.format_options().print_stack }

    #[napi(setter, js_name = "printStack")]
    pub fn set_print_stack(&mut self, value: bool) { self.update_format(|f| f.print_stack = value); }

    /// Log at any level id or name
    #[napi]
    pub fn log(&self, level: String, values: Vec<String>, force_stack: Option<bool>) {
        self.inner.log_str(&level, &displays(&values), log_options(force_stack));
    }

    #[napi]
    pub fn m(&self, values: Vec<String>, force_stack: Option<bool>) { self.emit('m', values, force_stack); }

    #[napi]
    pub fn e(&self, values: Vec<String>, force_stack: Option<bool>) { self.emit('e', values, force_stack); }

    #[napi]
    pub fn w(&self, values: Vec<String>, force_stack: Option<bool>) { self.emit('w', values, force_stack); }

    #[napi]
    pub fn i(&self, values: Vec<String>, force_stack: Option<bool>) { self.emit('i', values, force_stack); }

    #[napi]
    pub fn d(&self, values: Vec<String>, force_stack: Option<bool>) { self.emit('d', values, force_stack); }

    #[napi]
    pub fn v(&self, values: Vec<String>, force_stack: Option<bool>) { self.emit('v', values, force_stack); }

    #[napi]
    pub fn raw(&self, values: Vec<String>) { self.inner.raw(&displays(&values)); }
}

// ============================================================================
// XLog (logger registry)
// ============================================================================

#[napi]
pub struct XLog {
    inner: Arc<CoreXLog>,
}

#[napi]
impl XLog {
    #[napi(constructor)]
    pub fn new() -> Self {
        Self { inner: Arc::new(CoreXLog::new()) }
    }

    /// Create a registry from a YAML/JSON config file, with XLOG_* env overrides
    #[napi(factory)]
    pub fn from_config_file(path: String) -> Result<Self> {
        let config = FileConfigLoader::new(path)
            .load()
            .and_then(|c| c.apply_env())
            .map_err(|e| Error::from_reason(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(CoreXLog::from_config(&config, LogContext::default())),
        })
    }

    /// Get the logger for a tag; a missing tag gets a random one
    #[napi]
    pub fn get_logger(&self, tag: Option<String>) -> XLogger {
        XLogger {
            inner: self.inner.get_logger(tag.as_deref().unwrap_or("")),
        }
    }

    #[napi]
    pub fn get_level(&self) -> String { self.inner.get_level().to_string() }

    /// Set the default level; with `recursive`, also every existing logger
    #[napi]
    pub fn set_level(&self, level: String, recursive: Option<bool>) -> bool {
        self.inner
            .set_default_level_str(&level, recursive.unwrap_or(false))
            .is_ok()
    }

    #[napi]
    pub fn get_levels(&self) -> Vec<String> {
        self.inner.get_levels().into_iter().map(String::from).collect()
    }

    #[napi]
    pub fn get_level_name(&self, level: String) -> Option<String> {
        let id = self.inner.level_registry().resolve(&level)?;
        self.inner.get_level_name(id).map(String::from)
    }

    #[napi]
    pub fn m(&self, tag: String, values: Vec<String>) { self.inner.m(&tag, &displays(&values)); }

    #[napi]
    pub fn e(&self, tag: String, values: Vec<String>) { self.inner.e(&tag, &displays(&values)); }

    #[napi]
    pub fn w(&self, tag: String, values: Vec<String>) { self.inner.w(&tag, &displays(&values)); }

    #[napi]
    pub fn i(&self, tag: String, values: Vec<String>) { self.inner.i(&tag, &displays(&values)); }

    #[napi]
    pub fn d(&self, tag: String, values: Vec<String>) { self.inner.d(&tag, &displays(&values)); }

    #[napi]
    pub fn v(&self, tag: String, values: Vec<String>) { self.inner.v(&tag, &displays(&values)); }

    #[napi]
    pub fn raw(&self, values: Vec<String>) { self.inner.raw(&displays(&values)); }
}

impl Default for XLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Get a logger from the process-wide registry
#[napi(js_name = "getLogger")]
pub fn get_logger(tag: Option<String>) -> XLogger {
    XLogger {
        inner: core_get_logger(tag.as_deref().unwrap_or("")),
    }
}
