//! Core data model for run-scoped pattern analysis results
//!
//! The value types every other layer works in terms of: validated pattern
//! identifiers, the per-pattern verdict with its supporting evidence, the
//! append-only error log, and the contract faults a recording call can
//! surface. All of it is plain data - cloneable, serializable, and free of
//! locking concerns, which live in the registry layer.

pub mod error_log;
pub mod fault;
pub mod pattern;
pub mod result;
pub mod severity;

pub use error_log::{ErrorLog, ErrorRecord};
pub use fault::RegistryError;
pub use pattern::PatternId;
pub use result::{Location, PatternResult, Verdict};
pub use severity::{ErrorSeverity, Severity};
