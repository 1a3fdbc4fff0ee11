//! The structures used to represent a formula.
//!
//! - [Literals](literal) are signed integers.
//! - A [formula](formula) is a flat sequence of literals, with clauses recovered on request.

pub mod formula;
pub mod literal;
