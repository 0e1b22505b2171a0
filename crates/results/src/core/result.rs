use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of evaluating one security pattern against the analyzed program.
///
/// The set is closed: an analyzer that could not reach any of these verdicts
/// did not finish, and its failure belongs in the error log rather than the
/// result mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The pattern matched: the analyzed program violates the property.
    Violation,
    /// The pattern did not match: the program is safe with respect to it.
    Safe,
    /// The analysis completed but could not decide either way.
    Inconclusive,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Violation => write!(f, "Violation"),
            Self::Safe => write!(f, "Safe"),
            Self::Inconclusive => write!(f, "Inconclusive"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub snippet: Option<String>,
}

impl Location {
    pub fn new(file: String, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            snippet: None,
        }
    }

    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.snippet = Some(snippet);
        self
    }
}

/// Immutable result of one pattern evaluation: the verdict plus the ordered
/// evidence supporting it. Evidence may be empty, e.g. a `Safe` verdict with
/// nothing to point at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternResult {
    pub verdict: Verdict,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub evidence: Vec<Location>,
}

impl PatternResult {
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            evidence: Vec::new(),
        }
    }

    pub fn violation() -> Self {
        Self::new(Verdict::Violation)
    }

    pub fn safe() -> Self {
        Self::new(Verdict::Safe)
    }

    pub fn inconclusive() -> Self {
        Self::new(Verdict::Inconclusive)
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.evidence.push(location);
        self
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.evidence = locations;
        self
    }

    pub fn is_violation(&self) -> bool {
        self.verdict == Verdict::Violation
    }
}
