//! # rampeq-core
//!
//! Document model and parsing for RAM policy equivalence checking.
//!
//! This crate provides:
//! - Type definitions for assume-role policy documents
//! - A shape-tolerant parser from raw JSON text to the typed model
//!
//! The model mirrors the wire format the RAM API accepts and echoes back:
//! a `Version` string plus an ordered `Statement` list, where `Statement`
//! may also arrive as a single object and principal values may arrive as
//! bare strings. Semantic normalization and comparison live in the
//! `rampeq-canonical` crate.
//!
//! ## Example
//!
//! ```rust
//! use rampeq_core::parse_policy;
//!
//! let policy = parse_policy(
//!     r#"{"Version":"1","Statement":{"Effect":"Allow","Principal":{"Service":"ecs.aliyuncs.com"},"Action":"sts:AssumeRole"}}"#,
//! ).unwrap();
//!
//! // A single statement object is promoted to a one-element list.
//! assert_eq!(policy.statements.len(), 1);
//! ```

pub mod error;
pub mod parse;
pub mod types;

// Re-exports for convenience
pub use error::*;
pub use parse::*;
pub use types::*;
