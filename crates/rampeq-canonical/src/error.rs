//! Error types for normalization and comparison

use crate::normalize::NormalizeError;
use rampeq_core::ParseError;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors that can occur during canonical JSON rendering
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("float values have no canonical form, represent them as strings")]
    FloatNotAllowed,

    #[error("JSON serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::Serialization(err.to_string())
    }
}

/// Which of the two compared documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicySide {
    First,
    Second,
}

impl Display for PolicySide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicySide::First => f.write_str("policy1"),
            PolicySide::Second => f.write_str("policy2"),
        }
    }
}

/// Errors surfaced by [`are_equivalent`].
///
/// Every variant names the side it came from so callers can tell which
/// input document was malformed. A comparator mismatch is never an error,
/// only `Ok(false)`.
///
/// [`are_equivalent`]: crate::equivalence::are_equivalent
#[derive(Debug, Error)]
pub enum EquivalenceError {
    #[error("parsing {side} failed: {source}")]
    Parse {
        side: PolicySide,
        #[source]
        source: ParseError,
    },

    #[error("normalizing {side} failed: {source}")]
    Normalize {
        side: PolicySide,
        #[source]
        source: NormalizeError,
    },
}

impl EquivalenceError {
    /// The side of the comparison the error came from.
    pub fn side(&self) -> PolicySide {
        match self {
            EquivalenceError::Parse { side, .. } => *side,
            EquivalenceError::Normalize { side, .. } => *side,
        }
    }
}
