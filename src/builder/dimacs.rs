use std::{io::Read, str::FromStr};

use crate::{
    config::{
        defaults::{READ_CHUNK, WORD_CAPACITY},
        ParserConfig,
    },
    misc::log::targets::{self},
    structures::{
        formula::Formula,
        literal::{IntLiteral, Literal, VARIABLE_MAX},
    },
    types::err::{self, ErrorKind, FormatErrorKind, Position},
};

use super::is_whitespace;

/// The part of a DIMACS input the parser expects next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// The `p` which begins the header.
    HeaderMarker,

    /// The `cnf` which follows `p`.
    HeaderFormat,

    /// The count of variables.
    VariableCount,

    /// The count of clauses.
    ClauseCount,

    /// Literals, until the input ends.
    Literals,
}

/// The state of a parse, advanced one byte at a time.
///
/// Input may be given in chunks of any size through [feed](DimacsParser::feed), and once all input has been given [finish](DimacsParser::finish) returns the formula read.
/// So, a parse may be suspended between chunks and resumed with the next chunk.
///
/// ```rust
/// # use cnf_features::builder::DimacsParser;
/// # use cnf_features::config::ParserConfig;
/// let config = ParserConfig::default();
/// let mut parser = DimacsParser::new(&config).unwrap();
///
/// assert!(parser.feed(b"c split\np cnf 2 1\n1 ").is_ok());
/// assert!(parser.feed(b"-2 0").is_ok());
///
/// let formula = parser.finish().unwrap();
/// assert_eq!(formula.literals(), &[1, -2, 0]);
/// ```
pub struct DimacsParser<'c> {
    config: &'c ParserConfig,

    /// The position of the most recent byte.
    position: Position,

    /// The position of the first byte of the current word.
    word_start: Position,

    word: [u8; WORD_CAPACITY],
    word_length: usize,

    mode: Mode,

    /// Whether the remainder of the current line is ignored.
    ignoring_line: bool,

    /// Whether the most recent literal was a terminator, or no literal has been read.
    terminated: bool,

    declared_variables: u32,
    declared_clauses: u32,

    clause_count: u32,
    literals: Vec<Literal>,
}

impl<'c> DimacsParser<'c> {
    /// A fresh parser, provided the comment prefixes of `config` are valid.
    pub fn new(config: &'c ParserConfig) -> Result<Self, ErrorKind> {
        config.validate()?;

        Ok(DimacsParser {
            config,
            position: Position { line: 1, column: 0 },
            word_start: Position { line: 1, column: 0 },
            word: [0; WORD_CAPACITY],
            word_length: 0,
            mode: Mode::HeaderMarker,
            ignoring_line: false,
            terminated: true,
            declared_variables: 0,
            declared_clauses: 0,
            clause_count: 0,
            literals: Vec::with_capacity(1 << 16),
        })
    }

    fn error_at(position: Position, kind: FormatErrorKind) -> ErrorKind {
        log::trace!(target: targets::PARSER, "{kind} at {position}");
        ErrorKind::from(err::FormatError { position, kind })
    }

    fn word_error(&self, kind: FormatErrorKind) -> ErrorKind {
        Self::error_at(self.word_start, kind)
    }

    /// Consumes each byte of `chunk`.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<(), ErrorKind> {
        for byte in chunk {
            self.consume(*byte)?;
        }
        Ok(())
    }

    /// Consumes a single byte.
    pub fn consume(&mut self, byte: u8) -> Result<(), ErrorKind> {
        self.position.column += 1;

        if byte == b'\n' {
            self.ignoring_line = false;
            let result = self.end_word(true);
            self.position.line += 1;
            self.position.column = 0;
            return result;
        }

        if self.ignoring_line {
            return Ok(());
        }

        if is_whitespace(byte) {
            return self.end_word(false);
        }

        if self.word_length == 0 {
            self.word_start = self.position;
        }
        if self.word_length == WORD_CAPACITY {
            return Err(self.word_error(FormatErrorKind::WordTooLong));
        }
        self.word[self.word_length] = byte;
        self.word_length += 1;

        Ok(())
    }

    /// Dispatches the current word, if any, on the mode of the parser.
    fn end_word(&mut self, at_newline: bool) -> Result<(), ErrorKind> {
        if self.word_length == 0 {
            return Ok(());
        }

        let buffer = self.word;
        let word = &buffer[..std::mem::take(&mut self.word_length)];

        if self
            .config
            .comment_prefixes
            .iter()
            .any(|prefix| prefix.as_bytes() == word)
        {
            if !at_newline {
                self.ignoring_line = true;
            }
            return Ok(());
        }

        match self.mode {
            Mode::HeaderMarker => {
                if word != b"p" {
                    return Err(self.unexpected(word, "'p' of CNF header"));
                }
                self.mode = Mode::HeaderFormat;
            }

            Mode::HeaderFormat => {
                if word != b"cnf" {
                    return Err(self.unexpected(word, "'cnf' of CNF header"));
                }
                self.mode = Mode::VariableCount;
            }

            Mode::VariableCount => {
                self.declared_variables = self.header_count(word)?;
                self.mode = Mode::ClauseCount;
            }

            Mode::ClauseCount => {
                self.declared_clauses = self.header_count(word)?;
                self.mode = Mode::Literals;
                log::trace!(target: targets::PARSER, "Expected: {} variables and {} clauses", self.declared_variables, self.declared_clauses);
            }

            Mode::Literals => self.literal(word)?,
        }

        Ok(())
    }

    fn unexpected(&self, word: &[u8], expected: &'static str) -> ErrorKind {
        self.word_error(FormatErrorKind::Unexpected {
            found: String::from_utf8_lossy(word).into_owned(),
            expected,
        })
    }

    fn integer(&self, word: &[u8]) -> Result<i64, ErrorKind> {
        std::str::from_utf8(word)
            .ok()
            .and_then(|string| string.parse::<i64>().ok())
            .ok_or_else(|| {
                self.word_error(FormatErrorKind::NotAnInteger(
                    String::from_utf8_lossy(word).into_owned(),
                ))
            })
    }

    fn header_count(&self, word: &[u8]) -> Result<u32, ErrorKind> {
        let count = self.integer(word)?;
        let limit = i32::MAX as i64;

        if count < 0 {
            return Err(self.word_error(FormatErrorKind::NegativeCount(count)));
        }
        if count >= limit {
            return Err(self.word_error(FormatErrorKind::CountLimit { count, limit }));
        }
        Ok(count as u32)
    }

    fn literal(&mut self, word: &[u8]) -> Result<(), ErrorKind> {
        let value = self.integer(word)?;

        if value == 0 {
            if self.terminated {
                return Err(self.word_error(FormatErrorKind::EmptyClause));
            }
            self.terminated = true;
            self.clause_count = self.clause_count.saturating_add(1);
            self.literals.push(0);
            return Ok(());
        }

        if value.unsigned_abs() > VARIABLE_MAX as u64 {
            return Err(self.word_error(FormatErrorKind::LiteralLimit(value)));
        }
        let literal = value as Literal;

        if self.config.check_variables && literal.variable() > self.declared_variables {
            return Err(self.word_error(FormatErrorKind::VariableLimit {
                variable: literal.variable(),
                declared: self.declared_variables,
            }));
        }

        self.terminated = false;
        self.literals.push(literal);
        Ok(())
    }

    /// Completes the parse, returning the formula read.
    ///
    /// A newline is consumed to complete any pending word, and then the formula is checked to end with a terminated clause.
    pub fn finish(mut self) -> Result<Formula, ErrorKind> {
        let end = Position {
            line: self.position.line,
            column: self.position.column + 1,
        };

        self.consume(b'\n')?;

        if self.mode != Mode::Literals {
            return Err(Self::error_at(end, FormatErrorKind::MissingHeader));
        }

        match self.literals.last() {
            None => return Err(Self::error_at(end, FormatErrorKind::NoClauses)),
            Some(literal) if !literal.is_terminator() => {
                return Err(Self::error_at(end, FormatErrorKind::MissingTerminator))
            }
            Some(_) => {}
        }

        if self.config.check_clauses && self.clause_count != self.declared_clauses {
            return Err(Self::error_at(
                end,
                FormatErrorKind::ClauseCount {
                    declared: self.declared_clauses,
                    found: self.clause_count,
                },
            ));
        }

        log::debug!(target: targets::PARSER, "Parse result: {} literals over {} clauses", self.literals.len() - self.clause_count as usize, self.clause_count);

        Ok(Formula::from_parts(
            self.declared_variables,
            self.declared_clauses,
            self.literals,
            self.clause_count,
        ))
    }
}

/// Reads a DIMACS formula from `reader`, in chunks of [READ_CHUNK] bytes.
///
/// ```rust,ignore
/// let formula = parse_dimacs(BufReader::new(&file), &ParserConfig::default())?;
/// ```
///
/// ```rust
/// # use cnf_features::builder::parse_dimacs;
/// # use cnf_features::config::ParserConfig;
/// let dimacs = b"
/// c A formula on three variables.
/// p cnf 3 2
///  1 -2    0
///     2  3 0
/// ";
///
/// let formula = parse_dimacs(dimacs.as_slice(), &ParserConfig::default()).unwrap();
/// assert_eq!(formula.clause_count(), 2);
/// ```
pub fn parse_dimacs(mut reader: impl Read, config: &ParserConfig) -> Result<Formula, ErrorKind> {
    let mut parser = DimacsParser::new(config)?;
    let mut buffer = [0_u8; READ_CHUNK];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(count) => parser.feed(&buffer[..count])?,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ErrorKind::from(e)),
        }
    }

    parser.finish()
}

impl Formula {
    /// Reads a DIMACS formula, see [parse_dimacs].
    pub fn read_dimacs(reader: impl Read, config: &ParserConfig) -> Result<Self, ErrorKind> {
        parse_dimacs(reader, config)
    }
}

impl FromStr for Formula {
    type Err = ErrorKind;

    /// Reads a DIMACS formula from a string, with the default configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dimacs(s.as_bytes(), &ParserConfig::default())
    }
}
