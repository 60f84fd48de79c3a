//! Canonical JSON rendering
//!
//! Renders a value in the stable textual form the equivalence relation
//! quotients to: minified, object keys sorted lexicographically by UTF-8
//! bytes, arrays order-preserving. Two policies that are semantically
//! equivalent render identically once normalized, which makes the output
//! usable as a cache key (see the fingerprint module) and readable in
//! debug logs of calling layers.
//!
//! Floats are rejected: they have no single canonical representation, and
//! policy documents never legitimately contain them.

use crate::error::CanonicalError;
use rampeq_core::Policy;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

/// Render any serializable value as canonical JSON.
///
/// # Errors
///
/// Returns [`CanonicalError::FloatNotAllowed`] if any float is present.
///
/// # Example
///
/// ```rust
/// use rampeq_canonical::canonical_json;
///
/// let value = serde_json::json!({"z": 1, "a": 2});
/// assert_eq!(canonical_json(&value).unwrap(), r#"{"a":2,"z":1}"#);
/// ```
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let value = serde_json::to_value(value)?;
    let mut out = String::new();
    write_value(&mut out, &value)?;
    Ok(out)
}

/// Render a parsed policy as canonical JSON.
///
/// Most useful after [`normalize_policy`], where the output is the stable
/// form shared by every document equivalent to this one. A single
/// statement is always rendered as a one-element array, matching how the
/// parser models it.
///
/// [`normalize_policy`]: crate::normalize::normalize_policy
pub fn canonical_policy(policy: &Policy) -> Result<String, CanonicalError> {
    canonical_json(policy)
}

fn write_value(out: &mut String, value: &Value) -> Result<(), CanonicalError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                return Err(CanonicalError::FloatNotAllowed);
            }
            write!(out, "{n}").expect("writing to a String cannot fail");
        }
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            // Output order must not depend on how the map was built
            // (the preserve_order feature changes iteration order).
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));

            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, &map[key])?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                write!(out, "\\u{:04x}", c as u32).expect("writing to a String cannot fail");
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_policy;
    use pretty_assertions::assert_eq;
    use rampeq_core::parse_policy;
    use serde_json::json;

    #[test]
    fn test_keys_sorted_and_minified() {
        let value = json!({"z": 1, "a": {"y": 2, "x": 3}});
        assert_eq!(
            canonical_json(&value).unwrap(),
            r#"{"a":{"x":3,"y":2},"z":1}"#
        );
    }

    #[test]
    fn test_arrays_preserve_order() {
        let value = json!([3, 1, 2]);
        assert_eq!(canonical_json(&value).unwrap(), "[3,1,2]");
    }

    #[test]
    fn test_string_escaping() {
        let value = json!("line1\nline2\t\"quoted\"\\\u{1}");
        let rendered = canonical_json(&value).unwrap();
        assert_eq!(rendered, r#""line1\nline2\t\"quoted\"\\\u0001""#);
    }

    #[test]
    fn test_unicode_preserved() {
        let value = json!({"name": "策略"});
        assert_eq!(canonical_json(&value).unwrap(), r#"{"name":"策略"}"#);
    }

    #[test]
    fn test_float_rejected() {
        let value = json!({"Condition": {"NumericEquals": {"x": 1.5}}});
        assert_eq!(
            canonical_json(&value).unwrap_err(),
            CanonicalError::FloatNotAllowed
        );
    }

    #[test]
    fn test_integer_accepted() {
        let value = json!({"count": -42});
        assert_eq!(canonical_json(&value).unwrap(), r#"{"count":-42}"#);
    }

    #[test]
    fn test_equivalent_policies_render_identically_after_normalization() {
        let authored = parse_policy(
            r#"{"Version":"1","Statement":{"Effect":"Allow","Principal":{"service":"ecs.aliyuncs.com"},"Action":"sts:AssumeRole"}}"#,
        )
        .unwrap();
        let echoed = parse_policy(
            r#"{"Statement":[{"Action":"sts:AssumeRole","Effect":"Allow","Principal":{"SERVICE":["ecs.aliyuncs.com"]}}],"Version":"1"}"#,
        )
        .unwrap();

        let authored = normalize_policy(authored).unwrap();
        let echoed = normalize_policy(echoed).unwrap();

        assert_eq!(
            canonical_policy(&authored).unwrap(),
            canonical_policy(&echoed).unwrap()
        );
    }

    #[test]
    fn test_canonical_policy_shape() {
        let policy = parse_policy(
            r#"{"Version":"1","Statement":[{"Effect":"Allow","Principal":{"RAM":["acs:ram::123:root"]}}]}"#,
        )
        .unwrap();

        let rendered = canonical_policy(&policy).unwrap();
        assert_eq!(
            rendered,
            r#"{"Statement":[{"Effect":"Allow","Principal":{"RAM":["acs:ram::123:root"]}}],"Version":"1"}"#
        );
    }
}
