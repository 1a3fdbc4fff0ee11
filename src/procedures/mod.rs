/*!
Procedures for evaluating the features of a formula.

For the most part these are methods accessed via a formula, and primarily placed here for documentation.

# Overview

Evaluation is split into five passes over the literals of a formula, each of which writes a disjoint group of [features](crate::reports::features):

1. [Constant](constant) features, from a single scan of the literals.
2. [Occurrence](occurrence) features, from a table of the occurrences of each literal.
3. [Dispersion](dispersion) features, from the variables and polarities within each clause.
4. [Clause shape](clause_shape) features, from the length and polarity counts of each clause.
5. [Connectivity](connectivity) features, from the components of a union-find structure on literals.

No pass depends on the result of another, and so the passes may be made in any order.
Still, a failure in any pass is a failure to evaluate the formula.

```rust
# use cnf_features::structures::formula::Formula;
let formula: Formula = "p cnf 3 2\n1 -2 0\n2 3 0\n".parse().unwrap();
let features = formula.evaluate().unwrap();

assert_eq!(features.constant.clauses_count, 2);
assert_eq!(features.occurrence.variables_used_count, 3);
assert_eq!(features.connectivity.connected_variable_components_count, 1);
```

# Undeclared variables

The parser only checks the variable of a literal against the header if requested.
As the occurrence and connectivity passes size tables by the declared count of variables, a literal beyond the declared count is an [error](crate::types::err::EvaluationError) for those passes.

Likewise, a header may declare far more variables than a formula uses.
So, tables are only built if at most [TABLE_VARIABLE_LIMIT](crate::config::defaults::TABLE_VARIABLE_LIMIT) variables are declared, and otherwise the evaluation fails before anything is allocated.
*/

pub mod clause_shape;
pub mod connectivity;
pub mod constant;
pub mod dispersion;
pub mod occurrence;

use crate::{
    config::defaults::TABLE_VARIABLE_LIMIT,
    misc::log::targets::{self},
    reports::features::Features,
    structures::{
        formula::Formula,
        literal::{IntLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl Formula {
    /// Evaluates every feature of the formula.
    pub fn evaluate(&self) -> Result<Features, ErrorKind> {
        log::trace!(target: targets::EVALUATION, "Evaluation of {} literals", self.literals().len());

        let features = Features {
            constant: self.constant_features(),
            occurrence: self.occurrence_features()?,
            dispersion: self.dispersion_features()?,
            clause_shape: self.clause_shape_features()?,
            connectivity: self.connectivity_features()?,
        };

        log::debug!(target: targets::EVALUATION, "Evaluation complete");
        Ok(features)
    }

    /// Ok if tables on the declared variables may be built and every literal of the formula is on some declared variable.
    ///
    /// Otherwise, an error noting the excess of declared variables, or the first literal found on an undeclared variable.
    pub(crate) fn check_declared(&self) -> Result<(), err::EvaluationError> {
        let declared = self.declared_variables();
        if declared > TABLE_VARIABLE_LIMIT {
            log::info!(target: targets::EVALUATION, "{declared} declared variables exceed the table limit");
            return Err(err::EvaluationError::TableLimit {
                declared,
                limit: TABLE_VARIABLE_LIMIT,
            });
        }

        match self
            .literals()
            .iter()
            .find(|literal| literal.variable() > declared)
        {
            None => Ok(()),
            Some(literal) => {
                log::info!(target: targets::EVALUATION, "Literal {literal} exceeds the {declared} declared variables");
                Err(err::EvaluationError::UndeclaredVariable {
                    literal: *literal,
                    declared,
                })
            }
        }
    }
}

/// Evaluates every feature of `formula`, see [Formula::evaluate].
pub fn evaluate(formula: &Formula) -> Result<Features, ErrorKind> {
    formula.evaluate()
}

/// The polarity counts and length of a clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ClauseCounts {
    pub positive: u32,
    pub negative: u32,
}

impl ClauseCounts {
    pub fn of(clause: &[Literal]) -> Self {
        clause
            .iter()
            .fold(ClauseCounts::default(), |mut counts, literal| {
                match literal.polarity() {
                    true => counts.positive += 1,
                    false => counts.negative += 1,
                }
                counts
            })
    }

    pub fn length(&self) -> u32 {
        self.positive + self.negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_limit() {
        let at_limit: Formula = format!("p cnf {TABLE_VARIABLE_LIMIT} 1\n1 0\n")
            .parse()
            .unwrap();
        assert!(at_limit.check_declared().is_ok());

        let beyond: Formula = format!("p cnf {} 1\n1 0\n", TABLE_VARIABLE_LIMIT + 1)
            .parse()
            .unwrap();
        assert_eq!(
            beyond.check_declared(),
            Err(err::EvaluationError::TableLimit {
                declared: TABLE_VARIABLE_LIMIT + 1,
                limit: TABLE_VARIABLE_LIMIT
            })
        );
    }
}
