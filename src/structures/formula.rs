/*!
A formula in conjunctive normal form.

A formula is stored as a flat sequence of literals, with each clause terminated by [TERMINATOR](crate::structures::literal::TERMINATOR).
Clauses are never stored as distinct structures, and are instead recovered as slices of the sequence when required.

Formulas are only built by the [parser](crate::builder), which ensures:
- The sequence of literals is non-empty, and ends with a terminator.
- No two terminators are adjacent, and so no clause is empty.

```rust
# use cnf_features::structures::formula::Formula;
let formula: Formula = "p cnf 3 2\n1 -2 0\n2 3 0\n".parse().unwrap();

assert_eq!(formula.declared_variables(), 3);
assert_eq!(formula.clause_count(), 2);

let clauses = formula.clauses().collect::<Vec<_>>();
assert_eq!(clauses, vec![&[1, -2][..], &[2, 3][..]]);
```
*/

use crate::structures::literal::{IntLiteral, Literal};

/// A formula, read from some DIMACS input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    /// The count of variables declared by the header.
    declared_variables: u32,

    /// The count of clauses declared by the header.
    declared_clauses: u32,

    /// Every literal of the formula, with clauses terminated by 0.
    literals: Vec<Literal>,

    /// The count of clauses read.
    clause_count: u32,
}

impl Formula {
    /// A formula from parts already checked by the parser.
    pub(crate) fn from_parts(
        declared_variables: u32,
        declared_clauses: u32,
        literals: Vec<Literal>,
        clause_count: u32,
    ) -> Self {
        Formula {
            declared_variables,
            declared_clauses,
            literals,
            clause_count,
        }
    }

    /// The count of variables declared in the header of the formula.
    pub fn declared_variables(&self) -> u32 {
        self.declared_variables
    }

    /// The count of clauses declared in the header of the formula.
    pub fn declared_clauses(&self) -> u32 {
        self.declared_clauses
    }

    /// The literals of the formula, including terminators.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The count of clauses read, which may differ from the count declared.
    pub fn clause_count(&self) -> u32 {
        self.clause_count
    }

    /// An iterator over the clauses of the formula, each without its terminator.
    pub fn clauses(&self) -> impl Iterator<Item = &[Literal]> {
        self.literals
            .split_inclusive(|literal| literal.is_terminator())
            .map(|clause| match clause.split_last() {
                Some((last, rest)) if last.is_terminator() => rest,
                _ => clause,
            })
    }
}
