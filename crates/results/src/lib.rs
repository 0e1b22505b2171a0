//! ChainCheck Results - run-scoped aggregation for security pattern analysis
//!
//! This crate is the single point of truth for one analysis run: pattern
//! analyzers record the verdict they computed for each named security pattern,
//! along with any errors they hit on the way, and a report generator reads the
//! aggregate back once the run is over.
//!
//! ## Design Philosophy: Explicit Handles over Globals
//!
//! Each run owns exactly one [`ResultRegistry`]. The registry is constructed
//! explicitly and handed (usually behind an `Arc`) to every analyzer and to
//! the report generator, rather than living in a process-wide global. Two
//! runs - say, a test harness and a production scan, or two contracts being
//! analyzed side by side - therefore never share mutable state.
//!
//! ## Concurrency Contract
//!
//! Analyzers run as independent threads or tasks with no coordination between
//! them. The registry absorbs that with one coarse lock per instance:
//!
//! 1. **Writers exclude each other**: `record_result`, `record_error`, and
//!    `reset` are mutually exclusive, so a half-written entry is never
//!    observable.
//!
//! 2. **Readers get snapshots**: `results`, `errors`, and `snapshot` clone
//!    under the read lock. A caller never sees a torn structure, and a slow
//!    consumer never stalls a recording analyzer.
//!
//! 3. **Bounded critical sections**: nothing under the lock performs I/O or
//!    waits on another analyzer's progress.

pub mod catalog;
pub mod core;
pub mod registry;
pub mod report;

pub use catalog::{PatternCatalog, PatternCatalogBuilder, PatternDescriptor};
pub use core::{
    ErrorLog, ErrorRecord, ErrorSeverity, Location, PatternId, PatternResult, RegistryError,
    Severity, Verdict,
};
pub use registry::ResultRegistry;
pub use report::{RunReport, VerdictCount};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_registry_is_empty() {
        let registry = ResultRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.result_count(), 0);
        assert_eq!(registry.error_count(), 0);
    }
}
