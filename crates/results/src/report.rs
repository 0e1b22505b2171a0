//! Owned snapshot of one run, handed to report consumers
//!
//! A [`RunReport`] is what the report generator works from: the full
//! pattern-to-result mapping and the error log as they stood at capture
//! time, detached from the live registry. Rendering (markdown, SARIF, ...)
//! happens downstream; this type only offers the counting and ordering
//! helpers every renderer needs, plus raw JSON egress.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;

use crate::core::{ErrorLog, PatternId, PatternResult, Verdict};

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    results: HashMap<PatternId, PatternResult>,
    errors: ErrorLog,
}

impl RunReport {
    pub(crate) fn new(results: HashMap<PatternId, PatternResult>, errors: ErrorLog) -> Self {
        Self { results, errors }
    }

    pub fn results(&self) -> &HashMap<PatternId, PatternResult> {
        &self.results
    }

    pub fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    pub fn get(&self, pattern: &PatternId) -> Option<&PatternResult> {
        self.results.get(pattern)
    }

    /// Results ordered by pattern identifier, for deterministic rendering.
    /// The mapping itself is unordered by design.
    pub fn sorted_results(&self) -> Vec<(&PatternId, &PatternResult)> {
        let mut entries: Vec<_> = self.results.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    pub fn count_by_verdict(&self) -> VerdictCount {
        let mut count = VerdictCount::default();
        for result in self.results.values() {
            match result.verdict {
                Verdict::Violation => count.violations += 1,
                Verdict::Safe => count.safe += 1,
                Verdict::Inconclusive => count.inconclusive += 1,
            }
        }
        count
    }

    /// True when the run produced no violations and hit no errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && !self.results.values().any(|r| r.is_violation())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerdictCount {
    pub violations: usize,
    pub safe: usize,
    pub inconclusive: usize,
}

impl VerdictCount {
    pub fn total(&self) -> usize {
        self.violations + self.safe + self.inconclusive
    }
}
