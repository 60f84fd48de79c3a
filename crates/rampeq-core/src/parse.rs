//! Policy document parsing
//!
//! Converts raw JSON text into the typed [`Policy`] model. The parser is
//! deliberately shape-tolerant where the RAM API is: the top-level
//! `Statement` field may be absent, a single object, or an array, and
//! unknown keys anywhere are ignored. Principal values keep their raw
//! shape here; tightening them is the normalizer's job, so that a bad
//! principal value surfaces as a normalization error rather than a parse
//! error.

use crate::error::ParseError;
use crate::types::{Policy, Statement};
use serde::Deserialize;
use serde_json::Value;

/// Intermediate decode of the top level, before the statement shape is
/// resolved.
#[derive(Deserialize)]
struct RawPolicy {
    #[serde(rename = "Version", default)]
    version: String,

    #[serde(rename = "Statement")]
    statement: Option<Value>,
}

/// Parse a policy document from raw JSON text.
///
/// A single statement object is promoted to a one-element list; an absent
/// or `null` `Statement` field parses as an empty list. Statement array
/// order is preserved exactly.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not valid JSON, the top level is
/// not an object, the `Statement` field has an unrecognized shape, or a
/// statement's typed fields do not decode.
///
/// # Example
///
/// ```rust
/// use rampeq_core::parse_policy;
///
/// let policy = parse_policy(
///     r#"{"Version":"1","Statement":[{"Effect":"Allow","Principal":{"RAM":["acs:ram::123:root"]},"Action":"sts:AssumeRole"}]}"#,
/// ).unwrap();
///
/// assert_eq!(policy.version, "1");
/// assert_eq!(policy.statements[0].effect, "Allow");
/// ```
pub fn parse_policy(text: &str) -> Result<Policy, ParseError> {
    let root: Value = serde_json::from_str(text)?;
    if !root.is_object() {
        return Err(ParseError::TopLevel {
            found: json_type_name(&root),
        });
    }

    let raw: RawPolicy = serde_json::from_value(root)?;

    let statements = match raw.statement {
        None | Some(Value::Null) => Vec::new(),
        Some(single @ Value::Object(_)) => vec![decode_statement(single)?],
        Some(Value::Array(items)) => items
            .into_iter()
            .map(decode_statement)
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(ParseError::StatementShape {
                found: json_type_name(&other),
            })
        }
    };

    Ok(Policy {
        version: raw.version,
        statements,
    })
}

fn decode_statement(value: Value) -> Result<Statement, ParseError> {
    serde_json::from_value(value).map_err(ParseError::Statement)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
