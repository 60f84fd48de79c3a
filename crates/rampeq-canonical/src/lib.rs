//! # rampeq-canonical
//!
//! Normalization and semantic comparison for RAM policy documents.
//!
//! This crate provides:
//! - Principal normalization mirroring the RAM API's idempotent rewrites
//! - A generic deep-equality comparator over untyped JSON values
//! - Policy/statement equality with per-field semantics
//! - Canonical JSON rendering and a SHA256 fingerprint of the normalized form
//!
//! The entry point for callers is [`are_equivalent`]: it decides whether
//! two policy document strings are semantically equivalent, suppressing
//! the purely syntactic differences the API introduces when echoing a
//! document back (principal key case, single-string-to-array promotion,
//! whitespace and key order) while still detecting real changes (reordered
//! actions, renamed identifiers, added or removed statements).
//!
//! ## Example
//!
//! ```rust
//! use rampeq_canonical::are_equivalent;
//!
//! let authored = r#"{"Version":"1","Statement":[{"Effect":"Allow","Principal":{"Service":"ecs.aliyuncs.com"},"Action":"sts:AssumeRole"}]}"#;
//! let echoed = r#"{"Version":"1","Statement":[{"Effect":"Allow","Principal":{"SERVICE":["ecs.aliyuncs.com"]},"Action":"sts:AssumeRole"}]}"#;
//!
//! assert!(are_equivalent(authored, echoed).unwrap());
//! ```
//!
//! An `Err` means a document was malformed (unparseable JSON or an invalid
//! principal); it is a distinct outcome from `Ok(false)`, which means both
//! documents are well formed but differ semantically.

mod canonical;
mod compare;
mod equivalence;
mod error;
mod fingerprint;
mod normalize;

pub use canonical::*;
pub use compare::*;
pub use equivalence::*;
pub use error::*;
pub use fingerprint::*;
pub use normalize::*;
