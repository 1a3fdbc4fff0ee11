/*!
Tools for building a formula.

A formula is built by reading DIMACS input one byte at a time.
Each whitespace separated word of the input is passed through a small state machine:

1. The word `p`.
2. The word `cnf`.
3. The count of variables.
4. The count of clauses.
5. Literals, with 0 terminating a clause.

Lines beginning with a comment prefix (by default `c` or `%`) are skipped, and more generally any word matching a comment prefix causes the remainder of its line to be skipped.

# Examples

```rust
# use cnf_features::builder::parse_dimacs;
# use cnf_features::config::ParserConfig;
# use cnf_features::types::err::{ErrorKind, FormatErrorKind};
let config = ParserConfig::default();

let formula = parse_dimacs(b"p cnf 2 2\n1 2 0\n-1 0\n".as_slice(), &config).unwrap();
assert_eq!(formula.literals(), &[1, 2, 0, -1, 0]);

match parse_dimacs(b"p cnf 2 1\n1 2\n".as_slice(), &config) {
    Err(ErrorKind::Format(e)) => assert_eq!(e.kind, FormatErrorKind::MissingTerminator),
    _ => panic!("the final clause is not terminated"),
}
```
*/

mod dimacs;
pub use dimacs::{parse_dimacs, DimacsParser};

/// Whether `byte` is whitespace, being one of tab, line feed, vertical tab, form feed, carriage return, or space.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, 9..=13 | 32)
}
