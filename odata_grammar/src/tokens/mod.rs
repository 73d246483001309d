//! Token system for the URL name/identifier grammar
//!
//! Matchers consume a raw byte buffer at an offset and, on success,
//! produce a positioned [`Token`]: a kind from a closed enumeration,
//! the consumed byte span, and a kind-dependent payload. Failure is
//! silent (`None`), so upstream grammar layers can try alternatives
//! in sequence without error handling.
//!
//! ## Token kinds
//!
//! - **Type names**: qualified entity/complex/enum/type-definition
//!   names, the built-in primitive type names, and the
//!   `Collection('...')` wrapper.
//! - **Identifiers**: bare identifiers and their named grammar roles
//!   (namespace part, entity set name, term name, ...).
//! - **Classified identifiers**: the ~25 metadata-validated kinds
//!   produced by the classifier (properties, navigation properties,
//!   actions, functions, and their import variants).
//! - **Enumeration literals**: the whole literal, the value list, and
//!   the individual member tokens.

pub mod token;

// Re-export key types for convenience
pub use token::{tokenize, Token, TokenKind, TokenValue};

// Re-export span types from utils
pub use crate::utils::Span;
