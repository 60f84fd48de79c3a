//! Policy equivalence
//!
//! Composes parsing, normalization, and comparison into the single
//! operation callers use. Equality is field-by-field with per-field
//! semantics: exact match for `Version` and `Effect`, shape-and-order
//! match for `Action`/`NotAction`, normalized comparison for `Principal`,
//! and generic structural equality for `Condition`.

use crate::compare::objects_equal;
use crate::error::{EquivalenceError, PolicySide};
use crate::normalize::normalize_policy;
use rampeq_core::{parse_policy, ConditionMap, Policy, PrincipalMap, Statement};

/// Decide whether two policy document strings are semantically equivalent.
///
/// Both documents are parsed, principal-normalized, and compared. A fast
/// path returns `true` without normalizing when the parsed models are
/// already identical.
///
/// # Errors
///
/// [`EquivalenceError`] when either document fails to parse or contains an
/// invalid principal; the error names the offending side. Malformed input
/// is a distinct outcome from `Ok(false)`, which means both documents are
/// well formed but differ.
///
/// # Example
///
/// ```rust
/// use rampeq_canonical::are_equivalent;
///
/// let authored = r#"{"Version":"1","Statement":[{"Effect":"Allow","Principal":{"Service":"ecs.aliyuncs.com"},"Action":"sts:AssumeRole"}]}"#;
/// let echoed = r#"{"Version":"1","Statement":[{"Effect":"Allow","Principal":{"SERVICE":["ecs.aliyuncs.com"]},"Action":"sts:AssumeRole"}]}"#;
///
/// assert!(are_equivalent(authored, echoed).unwrap());
/// ```
pub fn are_equivalent(policy1: &str, policy2: &str) -> Result<bool, EquivalenceError> {
    let parsed1 = parse_policy(policy1).map_err(|source| EquivalenceError::Parse {
        side: PolicySide::First,
        source,
    })?;
    let parsed2 = parse_policy(policy2).map_err(|source| EquivalenceError::Parse {
        side: PolicySide::Second,
        source,
    })?;

    // Textually different documents often decode to identical models;
    // normalization can be skipped entirely then.
    if parsed1 == parsed2 {
        return Ok(true);
    }

    let normalized1 = normalize_policy(parsed1).map_err(|source| EquivalenceError::Normalize {
        side: PolicySide::First,
        source,
    })?;
    let normalized2 = normalize_policy(parsed2).map_err(|source| EquivalenceError::Normalize {
        side: PolicySide::Second,
        source,
    })?;

    Ok(policies_equal(&normalized1, &normalized2))
}

/// Equality of two normalized policies: exact version match plus
/// positional statement equality.
pub fn policies_equal(a: &Policy, b: &Policy) -> bool {
    a.version == b.version
        && a.statements.len() == b.statements.len()
        && a.statements
            .iter()
            .zip(&b.statements)
            .all(|(x, y)| statements_equal(x, y))
}

/// Equality of two normalized statements.
///
/// A conjunction of five independent checks, short-circuiting on the first
/// failure. `Action`/`NotAction` equality is the derived tagged-union
/// equality: both absent, or both the same shape with identical contents.
pub fn statements_equal(a: &Statement, b: &Statement) -> bool {
    a.action == b.action
        && a.not_action == b.not_action
        && a.effect == b.effect
        && principals_equal(&a.principal, &b.principal)
        && conditions_equal(&a.condition, &b.condition)
}

/// Equality of two normalized principal mappings: same key set and, per
/// key, identical-length identifier arrays compared positionally.
pub fn principals_equal(a: &PrincipalMap, b: &PrincipalMap) -> bool {
    objects_equal(a, b)
}

/// Equality of two condition mappings. An absent condition equals only
/// another absent condition; an explicitly empty mapping equals another
/// empty mapping but never an absent one.
pub fn conditions_equal(a: &Option<ConditionMap>, b: &Option<ConditionMap>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len()
                && a.iter().all(|(operator, keys)| match b.get(operator) {
                    Some(other) => objects_equal(keys, other),
                    None => false,
                })
        }
        _ => false,
    }
}
