use serde::{Deserialize, Serialize};

use crate::core::pattern::PatternId;
use crate::core::severity::ErrorSeverity;

/// One analysis error: something that went wrong while running a check, as
/// opposed to something wrong with the analyzed program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub message: String,

    /// Pattern whose evaluation produced the error, when attributable.
    /// Orchestrator-level failures carry no pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub pattern: Option<PatternId>,

    pub severity: ErrorSeverity,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>, severity: ErrorSeverity) -> Self {
        Self {
            message: message.into(),
            pattern: None,
            severity,
        }
    }

    pub fn for_pattern(
        pattern: PatternId,
        message: impl Into<String>,
        severity: ErrorSeverity,
    ) -> Self {
        Self {
            message: message.into(),
            pattern: Some(pattern),
            severity,
        }
    }

    pub fn with_pattern(mut self, pattern: PatternId) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// Append-only log of the errors hit during one run.
///
/// Insertion order is the only meaningful order and is preserved exactly; no
/// deduplication, no reordering, no removal while the run lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorLog {
    records: Vec<ErrorRecord>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ErrorRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}
