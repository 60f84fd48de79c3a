//! Principal normalization
//!
//! The RAM API rewrites the `Principal` mapping when it echoes a document
//! back: keys are uppercased and single-string values become one-element
//! arrays. Applying the same rewrite to both sides of a comparison makes
//! those differences invisible, while leaving identifier strings untouched
//! so genuine renames still surface.
//!
//! Normalization is idempotent: a normalized map passes through unchanged.

use rampeq_core::{Policy, PrincipalKey, PrincipalMap};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while normalizing a principal mapping
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid principal key: {key}")]
    InvalidPrincipalKey { key: String },

    #[error("invalid principal value for key {key}: expected a string or an array of strings")]
    InvalidPrincipalValue { key: String },
}

/// Rebuild a principal mapping into its canonical shape.
///
/// For every entry: the key is uppercased and must be one of
/// [`PrincipalKey::ALL`]; a bare string value is wrapped in a one-element
/// array; an array value must contain only strings, element order
/// preserved.
///
/// # Errors
///
/// [`NormalizeError::InvalidPrincipalKey`] for a key outside the fixed
/// enumeration, [`NormalizeError::InvalidPrincipalValue`] for a value that
/// is neither a string nor an array of strings.
///
/// # Example
///
/// ```rust
/// use rampeq_canonical::normalize_principal;
/// use serde_json::json;
///
/// let raw = json!({"service": "ecs.aliyuncs.com"})
///     .as_object()
///     .cloned()
///     .unwrap();
///
/// let normalized = normalize_principal(raw).unwrap();
/// assert_eq!(normalized.get("SERVICE"), Some(&json!(["ecs.aliyuncs.com"])));
/// ```
pub fn normalize_principal(principal: PrincipalMap) -> Result<PrincipalMap, NormalizeError> {
    let mut normalized = PrincipalMap::new();

    for (key, value) in principal {
        let upper = key.to_uppercase();
        if PrincipalKey::parse(&upper).is_none() {
            return Err(NormalizeError::InvalidPrincipalKey { key: upper });
        }

        let identifiers = match value {
            Value::String(identifier) => vec![Value::String(identifier)],
            Value::Array(elements) => {
                for element in &elements {
                    if !element.is_string() {
                        return Err(NormalizeError::InvalidPrincipalValue { key });
                    }
                }
                elements
            }
            _ => return Err(NormalizeError::InvalidPrincipalValue { key }),
        };

        normalized.insert(upper, Value::Array(identifiers));
    }

    Ok(normalized)
}

/// Normalize every statement's principal mapping in a parsed policy.
pub fn normalize_policy(mut policy: Policy) -> Result<Policy, NormalizeError> {
    for statement in &mut policy.statements {
        let principal = std::mem::take(&mut statement.principal);
        statement.principal = normalize_principal(principal)?;
    }
    Ok(policy)
}
