//! Generic deep equality over untyped JSON values
//!
//! Pure and total: a shape mismatch yields `false`, never an error. Arrays
//! are order-sensitive, objects are compared by key set. There is no
//! implicit unwrapping anywhere, so a scalar never equals a one-element
//! array of the same scalar.

use serde_json::{Map, Value};

/// Deep structural equality of two JSON values.
///
/// # Example
///
/// ```rust
/// use rampeq_canonical::values_equal;
/// use serde_json::json;
///
/// assert!(values_equal(&json!(["a", "b"]), &json!(["a", "b"])));
/// assert!(!values_equal(&json!(["b", "a"]), &json!(["a", "b"])));
///
/// // No implicit unwrapping: a scalar is not its singleton array.
/// assert!(!values_equal(&json!("a"), &json!(["a"])));
/// ```
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => objects_equal(a, b),
        _ => false,
    }
}

/// Key-set equality of two JSON objects, with [`values_equal`] per key.
/// Key order is never significant.
pub fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, value)| match b.get(key) {
            Some(other) => values_equal(value, other),
            None => false,
        })
}
