//! Error types used in the library.
//!
//! - Configuration and format errors are external, and arise from a request to read some input.
//! - Statistics, union-find, and evaluation errors are internal, and are not expected to occur on a formula obtained from the parser.
//!   Still, these are returned rather than panicking, so a caller processing many files may report the issue and move on.
//!
//! Names of the error enums overlap with the structures they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::literal::Literal;

/// The error type returned by the public methods of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The configuration of the parser was invalid.
    Config(ConfigError),

    /// The input was not a well-formed DIMACS formula.
    Format(FormatError),

    /// An aggregation was requested of an empty sequence.
    Stats(StatsError),

    /// The union-find structure was indexed outside of its nodes.
    UnionFind(UnionFindError),

    /// Some feature could not be evaluated on the formula.
    Evaluation(EvaluationError),

    /// The byte source failed while reading.
    Io(std::io::ErrorKind),
}

/// Invalid comment prefixes, noted before any input is read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A prefix was the empty string.
    EmptyPrefix,

    /// A prefix would not fit in the word buffer of the parser.
    PrefixTooLong(String),

    /// A prefix contained some whitespace character.
    WhitespaceInPrefix(String),

    /// The header marker `p` may not be ignored.
    HeaderPrefix,
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// A position in some input, with both line and column counted from 1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A violation of the DIMACS format, together with where it happened.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormatError {
    pub position: Position,
    pub kind: FormatErrorKind,
}

/// The ways in which input may fail to be a DIMACS formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatErrorKind {
    /// Some word other than the one required by the header.
    Unexpected {
        found: String,
        expected: &'static str,
    },

    /// A word which should have been an integer.
    NotAnInteger(String),

    /// A negative count in the header.
    NegativeCount(i64),

    /// A count in the header at or above the permitted limit.
    CountLimit { count: i64, limit: i64 },

    /// A literal whose magnitude exceeds the representation of a literal.
    LiteralLimit(i64),

    /// A literal whose variable exceeds the declared count of variables.
    VariableLimit { variable: u32, declared: u32 },

    /// A clause without any literals.
    EmptyClause,

    /// A word which does not fit in the word buffer.
    WordTooLong,

    /// The input ended before the header was complete.
    MissingHeader,

    /// The input contained a header, but no clauses.
    NoClauses,

    /// The final clause was not terminated by a 0.
    MissingTerminator,

    /// The count of clauses read differs from the count declared.
    ClauseCount { declared: u32, found: u32 },
}

impl From<FormatError> for ErrorKind {
    fn from(e: FormatError) -> Self {
        ErrorKind::Format(e)
    }
}

/// Errors from aggregating a sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatsError {
    /// The sequence was empty.
    EmptyInput,
}

impl From<StatsError> for ErrorKind {
    fn from(e: StatsError) -> Self {
        ErrorKind::Stats(e)
    }
}

/// Errors from the union-find structure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnionFindError {
    /// Some node outside of `[0, size)`.
    OutOfRange { node: usize, size: usize },
}

impl From<UnionFindError> for ErrorKind {
    fn from(e: UnionFindError) -> Self {
        ErrorKind::UnionFind(e)
    }
}

/// Errors during the evaluation of features.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// A literal of the formula is on a variable beyond the declared count of variables.
    ///
    /// Only possible if the formula was read without checking variables.
    UndeclaredVariable { literal: Literal, declared: u32 },

    /// The header declares more variables than tables of literals are built for.
    TableLimit { declared: u32, limit: u32 },
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e.kind())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPrefix => write!(f, "line prefixes must not be empty"),
            Self::PrefixTooLong(prefix) => write!(f, "line prefix '{prefix}' is too long"),
            Self::WhitespaceInPrefix(prefix) => {
                write!(f, "line prefixes must not contain spaces, '{prefix}' does")
            }
            Self::HeaderPrefix => write!(f, "p-headers cannot be ignored"),
        }
    }
}

impl std::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unexpected { found, expected } => {
                write!(f, "unexpected '{found}', expected {expected}")
            }
            Self::NotAnInteger(word) => write!(f, "'{word}' is not an integer"),
            Self::NegativeCount(count) => write!(f, "header count {count} is negative"),
            Self::CountLimit { count, limit } => {
                write!(f, "header count {count} is not below the limit of {limit}")
            }
            Self::LiteralLimit(literal) => write!(f, "literal {literal} is out of range"),
            Self::VariableLimit { variable, declared } => {
                write!(f, "{variable} exceeds variable limit {declared}")
            }
            Self::EmptyClause => write!(
                f,
                "empty clauses (ie. clauses with no literals) are not allowed"
            ),
            Self::WordTooLong => write!(f, "word is too long"),
            Self::MissingHeader => write!(f, "input ended before the 'p cnf' header"),
            Self::NoClauses => write!(f, "formula contains no clauses"),
            Self::MissingTerminator => write!(f, "missing 0 to terminate last clause"),
            Self::ClauseCount { declared, found } => {
                write!(f, "expected {declared} clauses, got {found} clauses")
            }
        }
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, at {}", self.kind, self.position)
    }
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot aggregate 0 elements"),
        }
    }
}

impl std::fmt::Display for UnionFindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { node, size } => write!(f, "node {node} exceeds {size} nodes"),
        }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredVariable { literal, declared } => write!(
                f,
                "literal {literal} is on a variable beyond the {declared} declared"
            ),
            Self::TableLimit { declared, limit } => write!(
                f,
                "{declared} declared variables exceed the limit of {limit}"
            ),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Format(e) => write!(f, "format error: {e}"),
            Self::Stats(e) => write!(f, "statistics error: {e}"),
            Self::UnionFind(e) => write!(f, "union-find error: {e}"),
            Self::Evaluation(e) => write!(f, "evaluation error: {e}"),
            Self::Io(e) => write!(f, "read error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
