//! Generic structures and functions, used during evaluation but without any particular relation to formulas.

pub mod stats;
pub mod union_find;
