//! URL name and identifier matchers
//!
//! The matcher layer for OData URL syntax tokens: bare identifiers and
//! their named grammar roles, dotted namespace resolution, qualified
//! type names (with the `Collection('...')` wrapper and the built-in
//! primitive catalog), metadata-validated identifier classification,
//! and enumeration literals.
//!
//! Every matcher is a pure function `(buffer, offset, ...) ->
//! Option<Token>`: it either consumes a well-formed production and
//! returns a token spanning exactly the consumed bytes, or returns
//! `None` with no other observable effect. Callers try alternatives in
//! sequence and turn an exhausted alternative set into a syntax error
//! one layer up.

pub mod classifier;
pub mod enumeration;
pub mod identifier;
pub mod namespace;
pub mod qualified;
