//! Run-scoped aggregation surface shared by concurrent pattern analyzers
//!
//! One [`ResultRegistry`] exists per analysis run. Analyzers record into it
//! from independent threads; the report generator reads snapshots out of it
//! once the orchestrator decides the run is over. The registry itself does
//! not track "all analyzers finished" - keeping readers away from in-flight
//! writers is the orchestrator's job, and the snapshot accessors merely
//! guarantee that whatever is read is internally coherent.

use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::core::{ErrorLog, ErrorRecord, PatternId, PatternResult, RegistryError};
use crate::report::RunReport;

/// Single point of truth for one run's analysis output.
///
/// All shared mutable state lives behind one coarse lock per instance.
/// Contention is low by construction (one result per pattern, one append per
/// error), so correctness and auditability win over fine-grained locking.
/// Recording never blocks on I/O or on another analyzer's progress, only
/// briefly on the lock itself.
#[derive(Debug, Default)]
pub struct ResultRegistry {
    state: RwLock<RegistryState>,
}

#[derive(Debug, Default)]
struct RegistryState {
    results: HashMap<PatternId, PatternResult>,
    errors: ErrorLog,
}

impl ResultRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the result computed for `pattern`.
    ///
    /// Each pattern is evaluated at most once per run, so a second result for
    /// the same identifier is a caller bug: it fails with
    /// [`RegistryError::DuplicateResult`] and the stored value is kept.
    /// Silently overwriting would invalidate the run's audit trail.
    pub fn record_result(
        &self,
        pattern: PatternId,
        result: PatternResult,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        if state.results.contains_key(&pattern) {
            warn!("duplicate result for pattern '{}' rejected", pattern);
            return Err(RegistryError::DuplicateResult(pattern));
        }
        debug!("pattern '{}' recorded {} verdict", pattern, result.verdict);
        state.results.insert(pattern, result);
        Ok(())
    }

    /// Appends an analysis error to the run's log. Never fails; error data
    /// is always accepted so a failing check cannot lose its own diagnosis.
    pub fn record_error(&self, record: ErrorRecord) {
        warn!(
            "analysis error recorded ({}): {}",
            record.severity, record.message
        );
        self.state.write().errors.push(record);
    }

    /// Result recorded for `pattern`, or `None` if that pattern has not
    /// completed yet. Every completed pattern records a result, so absence
    /// always means "not yet run".
    pub fn get(&self, pattern: &PatternId) -> Option<PatternResult> {
        self.state.read().results.get(pattern).cloned()
    }

    /// Point-in-time copy of the full pattern-to-result mapping.
    pub fn results(&self) -> HashMap<PatternId, PatternResult> {
        self.state.read().results.clone()
    }

    /// Point-in-time copy of the error log, in insertion order.
    pub fn errors(&self) -> ErrorLog {
        self.state.read().errors.clone()
    }

    /// Results and errors captured under a single lock acquisition, so the
    /// pair is mutually coherent even while writers are still active.
    pub fn snapshot(&self) -> RunReport {
        let state = self.state.read();
        RunReport::new(state.results.clone(), state.errors.clone())
    }

    /// Clears both the result mapping and the error log for a fresh run
    /// against the same registry instance.
    ///
    /// Only safe once no analyzer from the previous run is still writing;
    /// the orchestrator owns that guarantee. Constructing a fresh registry
    /// per run is the preferred style where lifetimes allow it.
    pub fn reset(&self) {
        let mut state = self.state.write();
        debug!(
            "registry reset: discarding {} results and {} errors",
            state.results.len(),
            state.errors.len()
        );
        state.results.clear();
        state.errors.clear();
    }

    pub fn result_count(&self) -> usize {
        self.state.read().results.len()
    }

    pub fn error_count(&self) -> usize {
        self.state.read().errors.len()
    }

    pub fn is_empty(&self) -> bool {
        let state = self.state.read();
        state.results.is_empty() && state.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorSeverity;

    fn id(raw: &str) -> PatternId {
        PatternId::new(raw).unwrap()
    }

    #[test]
    fn test_record_then_get_round_trips() {
        let registry = ResultRegistry::new();
        let result = PatternResult::violation();

        registry.record_result(id("reentrancy"), result.clone()).unwrap();

        assert_eq!(registry.get(&id("reentrancy")), Some(result));
    }

    #[test]
    fn test_absent_pattern_reads_as_none() {
        let registry = ResultRegistry::new();
        assert_eq!(registry.get(&id("tx-origin")), None);
    }

    #[test]
    fn test_duplicate_result_is_rejected_and_first_value_kept() {
        let registry = ResultRegistry::new();
        registry
            .record_result(id("reentrancy"), PatternResult::violation())
            .unwrap();

        let second = registry.record_result(id("reentrancy"), PatternResult::safe());
        assert!(matches!(second, Err(RegistryError::DuplicateResult(_))));

        assert_eq!(
            registry.get(&id("reentrancy")),
            Some(PatternResult::violation())
        );
    }

    #[test]
    fn test_error_log_keeps_call_order() {
        let registry = ResultRegistry::new();
        registry.record_error(ErrorRecord::new("parse failed", ErrorSeverity::Error));
        registry.record_error(ErrorRecord::new("timeout", ErrorSeverity::Warning));

        let messages: Vec<_> = registry
            .errors()
            .iter()
            .map(|r| r.message.clone())
            .collect();
        assert_eq!(messages, vec!["parse failed", "timeout"]);
    }

    #[test]
    fn test_reset_clears_results_and_errors() {
        let registry = ResultRegistry::new();
        registry
            .record_result(id("overflow"), PatternResult::safe())
            .unwrap();
        registry.record_error(ErrorRecord::new("boom", ErrorSeverity::Fatal));

        registry.reset();

        assert!(registry.is_empty());
        assert!(registry.results().is_empty());
        assert!(registry.errors().is_empty());
        assert_eq!(registry.get(&id("overflow")), None);
    }

    #[test]
    fn test_pattern_is_recordable_again_after_reset() {
        let registry = ResultRegistry::new();
        registry
            .record_result(id("overflow"), PatternResult::safe())
            .unwrap();

        registry.reset();

        assert!(registry
            .record_result(id("overflow"), PatternResult::violation())
            .is_ok());
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_writes() {
        let registry = ResultRegistry::new();
        registry
            .record_result(id("reentrancy"), PatternResult::violation())
            .unwrap();

        let report = registry.snapshot();

        registry
            .record_result(id("overflow"), PatternResult::safe())
            .unwrap();
        registry.record_error(ErrorRecord::new("late", ErrorSeverity::Warning));

        assert_eq!(report.results().len(), 1);
        assert!(report.errors().is_empty());
        assert_eq!(registry.result_count(), 2);
        assert_eq!(registry.error_count(), 1);
    }
}
