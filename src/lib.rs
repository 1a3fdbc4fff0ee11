//! A library for extracting structural and statistical features from boolean formulas written in conjunctive normal form.
//!
//! cnf_features reads a formula in the DIMACS format and evaluates a fixed vocabulary of around ninety features of the formula, such as counts of clauses and variables, ratios of literal polarity, histograms of literal and variable frequency, entropy, and counts of connected components.
//! The features are intended for use downstream, e.g. as the input to a predictive model or as an entry in a catalog of benchmarks.
//!
//! # Orientation
//!
//! The library is designed around a single pass from bytes to features:
//!
//! - The [parser](crate::builder) reads DIMACS input one byte at a time, and builds a validated [formula](crate::structures::formula).
//! - The [procedures] evaluate the [features](crate::reports::features) of a formula in five passes.
//!   These passes are built from a handful of [generic] structures, notably [aggregations](crate::generic::stats) of a sequence of numbers and a [union-find](crate::generic::union_find) structure.
//! - A [report](crate::reports) pairs features with the [metadata](crate::reports::metadata) of a file, and is written as JSON.
//!
//! Every file is processed independently and from a cold state.
//! The cli included with the library processes a collection of files with a pool of workers.
//!
//! Useful starting points, then, may be:
//! - The [evaluation procedure](crate::procedures) to see how features are derived.
//! - The [features](crate::reports::features) to see what is derived.
//! - The [configuration](crate::config) to see what may be varied.
//!
//! # Examples
//!
//! + Read and evaluate a DIMACS formula.
//!
//! ```rust
//! # use cnf_features::builder::parse_dimacs;
//! # use cnf_features::config::ParserConfig;
//! let dimacs = b"
//! c Each pair of variables is in some clause.
//! p cnf 3 3
//!  1  2 0
//! -1  3 0
//!  2 -3 0
//! ";
//!
//! let formula = parse_dimacs(dimacs.as_slice(), &ParserConfig::default()).unwrap();
//! let features = formula.evaluate().unwrap();
//!
//! assert_eq!(features.constant.clauses_count, 3);
//! assert_eq!(features.constant.two_literals_clause_count, 3);
//! assert_eq!(features.constant.definite_clauses_count, 2);
//! assert_eq!(features.clause_shape.clauses_length_mean, 2.0);
//! ```
//!
//! + Reject a formula with an empty clause.
//!
//! ```rust
//! # use cnf_features::structures::formula::Formula;
//! # use cnf_features::types::err::{ErrorKind, FormatErrorKind};
//! match "p cnf 2 2\n1 2 0 0\n".parse::<Formula>() {
//!     Err(ErrorKind::Format(e)) => {
//!         assert_eq!(e.kind, FormatErrorKind::EmptyClause);
//!         assert_eq!((e.position.line, e.position.column), (2, 7));
//!     }
//!     _ => panic!("two adjacent terminators"),
//! }
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the [parser](crate::builder) can be filtered with `RUST_LOG=parser …` or,
//! - Counts of connected components can be found with `RUST_LOG=connectivity=trace …`

pub mod builder;
pub mod procedures;

pub mod config;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;
pub mod reports;
