use thiserror::Error;

use crate::core::pattern::PatternId;

/// Contract faults surfaced by recording operations.
///
/// These indicate caller defects, not analysis findings: an analyzer that hit
/// a problem while evaluating a pattern reports that as an [`ErrorRecord`]
/// through `record_error`, which always succeeds.
///
/// [`ErrorRecord`]: crate::core::ErrorRecord
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate result for pattern '{0}': each pattern is evaluated at most once per run")]
    DuplicateResult(PatternId),

    #[error("invalid pattern identifier {0:?}: must not be empty")]
    InvalidPatternId(String),
}
