//! Log record structure
//!
//! A `LogRecord` is a fixed set of baseline attributes plus an explicit,
//! insertion-ordered map of caller-supplied extras. Records are built by the
//! host's dispatcher and only read by the formatters.

use super::baseline;
use super::error::Result;
use super::field_value::{Extras, FieldValue};
use super::interpolate::interpolate;
use super::log_level::LogLevel;
use chrono::Utc;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

/// Names of the baseline attributes every record exposes
const RECORD_ATTRIBUTES: [&str; 16] = [
    "name",
    "msg",
    "args",
    "levelname",
    "levelno",
    "pathname",
    "filename",
    "module",
    "funcName",
    "lineno",
    "created",
    "relativeCreated",
    "process",
    "processName",
    "thread",
    "threadName",
];

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

// Reference point for `relative_created`
static START_TIME: Lazy<f64> = Lazy::new(now_epoch_seconds);

static PROCESS_NAME: Lazy<Option<String>> = Lazy::new(|| {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
});

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<u64>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Get cached numeric thread ID, assigning one on first access
fn current_thread_id() -> u64 {
    THREAD_ID_CACHE.with(|cache| {
        *cache
            .borrow_mut()
            .get_or_insert_with(|| NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed))
    })
}

/// Get cached thread name, computing and caching it on first access
fn current_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

fn now_epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub logger_name: String,
    /// Event time, seconds since the epoch
    pub created: f64,
    /// Milliseconds between logging start-up and the event
    pub relative_created: f64,
    pub level_name: String,
    pub level_number: i64,
    pub message_template: String,
    #[serde(default)]
    pub message_args: Vec<FieldValue>,
    pub pathname: String,
    pub module_name: String,
    pub filename: String,
    pub function_name: String,
    pub line_number: u32,
    pub process_id: Option<u32>,
    pub process_name: Option<String>,
    pub thread_id: Option<u64>,
    pub thread_name: Option<String>,
    #[serde(default)]
    pub extras: Extras,
}

impl LogRecord {
    /// Create a record stamped with the current time and execution identity
    pub fn new(
        logger_name: impl Into<String>,
        level: LogLevel,
        message_template: impl Into<String>,
    ) -> Self {
        let start = *START_TIME;
        let created = now_epoch_seconds();
        Self {
            created,
            relative_created: (created - start) * 1000.0,
            process_id: Some(std::process::id()),
            process_name: PROCESS_NAME.clone(),
            thread_id: Some(current_thread_id()),
            thread_name: current_thread_name(),
            ..Self::canonical()
        }
        .with_logger_name(logger_name)
        .with_level(level)
        .with_template(message_template)
    }

    /// The reference record with only mandatory fields populated
    ///
    /// No clock or environment lookups happen here; identity is left unset.
    pub fn canonical() -> Self {
        Self {
            logger_name: "root".to_string(),
            created: 0.0,
            relative_created: 0.0,
            level_name: LogLevel::Debug.to_str().to_string(),
            level_number: LogLevel::Debug.number(),
            message_template: String::new(),
            message_args: Vec::new(),
            pathname: String::new(),
            module_name: String::new(),
            filename: String::new(),
            function_name: String::new(),
            line_number: 0,
            process_id: None,
            process_name: None,
            thread_id: None,
            thread_name: None,
            extras: Extras::new(),
        }
    }

    /// Names of the baseline attributes present on this record
    pub fn attribute_names(&self) -> impl Iterator<Item = &'static str> {
        RECORD_ATTRIBUTES.iter().copied()
    }

    pub fn with_logger_name(mut self, logger_name: impl Into<String>) -> Self {
        self.logger_name = logger_name.into();
        self
    }

    pub fn with_level(self, level: LogLevel) -> Self {
        self.with_level_name_and_number(level.to_str(), level.number())
    }

    /// Set a level that need not be one of the five standard ones
    pub fn with_level_name_and_number(mut self, name: impl Into<String>, number: i64) -> Self {
        self.level_name = name.into();
        self.level_number = number;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.message_template = template.into();
        self
    }

    /// Append one positional message arg
    pub fn with_arg(mut self, value: impl Into<FieldValue>) -> Self {
        self.message_args.push(value.into());
        self
    }

    /// Replace the positional message args
    pub fn with_args<I, V>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        self.message_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Attach an extra field; a repeated key keeps its first position
    pub fn with_extra<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Set the call site; `filename` and `module_name` are derived from `pathname`
    pub fn with_location(mut self, pathname: impl Into<String>, line_number: u32) -> Self {
        self.pathname = pathname.into();
        self.filename = file_name_of(&self.pathname).to_string();
        self.module_name = file_stem_of(&self.filename).to_string();
        self.line_number = line_number;
        self
    }

    pub fn with_module(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = module_name.into();
        self
    }

    pub fn with_function(mut self, function_name: impl Into<String>) -> Self {
        self.function_name = function_name.into();
        self
    }

    pub fn with_created(mut self, created: f64) -> Self {
        self.created = created;
        self
    }

    pub fn with_relative_created(mut self, relative_created_ms: f64) -> Self {
        self.relative_created = relative_created_ms;
        self
    }

    pub fn with_process(mut self, id: Option<u32>, name: Option<String>) -> Self {
        self.process_id = id;
        self.process_name = name;
        self
    }

    pub fn with_thread(mut self, id: Option<u64>, name: Option<String>) -> Self {
        self.thread_id = id;
        self.thread_name = name;
        self
    }

    /// The message template with its args substituted
    pub fn message(&self) -> Result<String> {
        interpolate(&self.message_template, &self.message_args)
    }

    /// Extras whose keys are not baseline attribute names, in insertion order
    pub fn extra_fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.extras
            .iter()
            .filter(|(key, _)| !baseline::is_baseline(key))
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn has_extra_fields(&self) -> bool {
        self.extra_fields().next().is_some()
    }

    pub fn process_number(&self) -> u32 {
        self.process_id.unwrap_or(0)
    }

    pub fn process_display_name(&self) -> &str {
        self.process_name.as_deref().unwrap_or("unknown")
    }

    pub fn thread_number(&self) -> u64 {
        self.thread_id.unwrap_or(0)
    }

    pub fn thread_display_name(&self) -> &str {
        self.thread_name.as_deref().unwrap_or("unknown")
    }
}

fn file_name_of(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn file_stem_of(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => filename,
    }
}
