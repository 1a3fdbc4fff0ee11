/*!
Features read from a single scan of the clauses of a formula.

Each clause is classified by the count of its positive and negative literals:
- A clause with exactly one positive literal is *definite*.
- A clause with no positive literal is a *goal*, and the formula is not trivially satisfied by valuing every variable true.
- A clause with no negative literal means the formula is not trivially satisfied by valuing every variable false.

# Tautologies

A clause is counted as tautological on the first literal whose negation appears earlier in the clause, and the remainder of the clause is not examined.
So, [tautological_literals_count](ConstantFeatures::tautological_literals_count) is the count of tautological clauses.

```rust,ignore
clause
    .iter()
    .enumerate()
    .any(|(index, literal)| clause[..index].contains(&literal.negate()))
```
*/

use crate::{
    misc::log::targets::{self},
    reports::features::ConstantFeatures,
    structures::{
        formula::Formula,
        literal::{IntLiteral, Literal},
    },
};

use super::ClauseCounts;

/// Whether some literal of `clause` is preceded by its negation.
fn is_tautology(clause: &[Literal]) -> bool {
    clause
        .iter()
        .enumerate()
        .any(|(index, literal)| clause[..index].contains(&literal.negate()))
}

impl Formula {
    /// Counts and flags of the formula.
    pub fn constant_features(&self) -> ConstantFeatures {
        let mut features = ConstantFeatures {
            nbclauses: self.declared_clauses(),
            nbvars: self.declared_variables(),
            true_trivial: true,
            false_trivial: true,
            ..Default::default()
        };

        let mut extremes: Option<(u32, u32)> = None;

        for clause in self.clauses() {
            let counts = ClauseCounts::of(clause);

            match counts.positive {
                0 => {
                    features.goal_clauses_count += 1;
                    features.true_trivial = false;
                }
                1 => features.definite_clauses_count += 1,
                _ => {}
            }
            if counts.negative == 0 {
                features.false_trivial = false;
            }

            match counts.length() {
                1 if counts.positive > 0 => features.positive_unit_clause_count += 1,
                1 => features.negative_unit_clause_count += 1,
                2 => features.two_literals_clause_count += 1,
                _ => {}
            }

            if is_tautology(clause) {
                features.tautological_literals_count += 1;
            }

            features.clauses_count += 1;
            features.literals_count += counts.length() as u64;
            features.positive_literals_count += counts.positive as u64;

            for literal in clause {
                let variable = literal.variable();
                extremes = match extremes {
                    None => Some((variable, variable)),
                    Some((smallest, largest)) => {
                        Some((smallest.min(variable), largest.max(variable)))
                    }
                };
            }
        }

        if let Some((smallest, largest)) = extremes {
            features.variables_smallest = smallest;
            features.variables_largest = largest;
        }

        log::trace!(target: targets::EVALUATION, "Constant features: {} clauses, {} literals", features.clauses_count, features.literals_count);

        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tautologies() {
        assert!(is_tautology(&[1, -1]));
        assert!(is_tautology(&[2, 1, 3, -1]));
        assert!(is_tautology(&[1, 1, -1, -1]));
        assert!(!is_tautology(&[1, 1, 2]));
        assert!(!is_tautology(&[-3]));
    }

    #[test]
    fn tautologies_count_once_per_clause() {
        let formula: Formula = "p cnf 2 2\n1 1 -1 -1 0\n2 -2 1 -1 0\n".parse().unwrap();
        assert_eq!(formula.constant_features().tautological_literals_count, 2);
    }

    #[test]
    fn trivial_flags() {
        let positive: Formula = "p cnf 2 2\n1 2 0\n2 0\n".parse().unwrap();
        let features = positive.constant_features();
        assert!(features.true_trivial);
        assert!(!features.false_trivial);

        let negative: Formula = "p cnf 2 2\n-1 -2 0\n1 -2 0\n".parse().unwrap();
        let features = negative.constant_features();
        assert!(!features.true_trivial);
        assert!(features.false_trivial);
    }
}
