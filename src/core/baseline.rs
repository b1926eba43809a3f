//! Baseline field set
//!
//! The attribute names present on every record. Any extra whose key is in this
//! set is shadowed by the baseline attribute and never reaches the output.
//! The set is computed once from `LogRecord::canonical()` on first use and is
//! read-only afterwards.

use super::record::LogRecord;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static BASELINE: Lazy<BaselineFields> =
    Lazy::new(|| BaselineFields::from_record(&LogRecord::canonical()));

/// Frozen set of baseline attribute names
#[derive(Debug, Clone)]
pub struct BaselineFields {
    names: HashSet<&'static str>,
}

impl BaselineFields {
    /// Capture every attribute name present on `record`
    pub fn from_record(record: &LogRecord) -> Self {
        Self {
            names: record.attribute_names().collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }
}

/// The process-wide baseline
pub fn baseline() -> &'static BaselineFields {
    &BASELINE
}

/// Whether `name` is a baseline attribute
pub fn is_baseline(name: &str) -> bool {
    BASELINE.contains(name)
}
