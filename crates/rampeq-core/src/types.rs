//! Policy document types
//!
//! These types mirror the assume-role policy wire format. Fields keep the
//! PascalCase names the RAM API uses. Shapes the API accepts loosely
//! (principal values, conditions) stay as untyped JSON values here and are
//! tightened by normalization, not by the parser.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A principal mapping as written in the document: principal-type key to a
/// bare identifier string or an array of identifier strings.
///
/// Normalization (in `rampeq-canonical`) rebuilds this into its canonical
/// shape: uppercase keys, every value an array of strings.
pub type PrincipalMap = serde_json::Map<String, Value>;

/// A condition mapping: operator name to a mapping from condition key to a
/// JSON value. Never normalized, compared structurally only.
pub type ConditionMap = BTreeMap<String, serde_json::Map<String, Value>>;

/// An `Action` or `NotAction` field: a single action name or an ordered
/// list of action names.
///
/// The RAM API never promotes a single action to an array, so the two
/// shapes stay distinct and a string is not equal to a one-element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionSpec {
    Single(String),
    List(Vec<String>),
}

/// One access-control statement.
///
/// At most one of `action`/`not_action` is populated in legitimate
/// documents; this is not enforced, both fields are carried and compared
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    #[serde(default)]
    pub effect: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_action: Option<ActionSpec>,

    #[serde(default)]
    pub principal: PrincipalMap,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionMap>,
}

/// A parsed policy document: a version string and an ordered statement
/// list. Statement order is significant and preserved from the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Policy {
    #[serde(rename = "Version")]
    pub version: String,

    #[serde(rename = "Statement")]
    pub statements: Vec<Statement>,
}

/// The fixed enumeration of principal-type keys the RAM API accepts.
///
/// Read-only process-wide data; any key outside this set is rejected by
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrincipalKey {
    Ram,
    Service,
    Federated,
}

impl PrincipalKey {
    /// All valid principal-type keys.
    pub const ALL: [PrincipalKey; 3] = [
        PrincipalKey::Ram,
        PrincipalKey::Service,
        PrincipalKey::Federated,
    ];

    /// Parse a principal-type key, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use rampeq_core::PrincipalKey;
    ///
    /// assert_eq!(PrincipalKey::parse("ram"), Some(PrincipalKey::Ram));
    /// assert_eq!(PrincipalKey::parse("Service"), Some(PrincipalKey::Service));
    /// assert_eq!(PrincipalKey::parse("ADMIN"), None);
    /// ```
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_uppercase().as_str() {
            "RAM" => Some(PrincipalKey::Ram),
            "SERVICE" => Some(PrincipalKey::Service),
            "FEDERATED" => Some(PrincipalKey::Federated),
            _ => None,
        }
    }

    /// The canonical uppercase wire form of the key.
    pub fn as_str(self) -> &'static str {
        match self {
            PrincipalKey::Ram => "RAM",
            PrincipalKey::Service => "SERVICE",
            PrincipalKey::Federated => "FEDERATED",
        }
    }
}

impl Display for PrincipalKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
