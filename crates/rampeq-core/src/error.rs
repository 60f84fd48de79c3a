//! Error types for policy document parsing

use thiserror::Error;

/// Errors produced while turning raw JSON text into a [`Policy`].
///
/// All variants are fatal to the call that produced them; nothing is
/// retried or recovered internally.
///
/// [`Policy`]: crate::types::Policy
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid policy document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("policy document must be a JSON object, found {found}")]
    TopLevel { found: &'static str },

    #[error("Statement must be absent, an object, or an array of objects, found {found}")]
    StatementShape { found: &'static str },

    #[error("invalid statement object: {0}")]
    Statement(#[source] serde_json::Error),
}
