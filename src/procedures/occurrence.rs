/*!
Features of the occurrences of literals and variables.

# Overview

A table of occurrences is kept with an entry for each literal on a declared variable.
The positive literal of variable *v* is at index *v - 1*, and the negative literal at index *n + v - 1*, where *n* is the count of declared variables.

```rust,ignore
let mut occurrences = vec![0_u32; 2 * variables];
for literal in self.literals().iter().filter(|literal| !literal.is_terminator()) {
    occurrences[table_index(*literal, variables)] += 1;
}
```

From the table:
- A literal is *existential* if it occurs exactly once and its negation never occurs.
- A variable is *used* if either literal on the variable occurs.

# Frequencies

The frequency of a literal is the count of its occurrences divided by the count of clauses declared in the header, limited to at most 1.
If the header declares no clauses, a literal which occurs has frequency 1 and any other literal has frequency 0.
And, the frequency of a variable is the sum of the frequencies of its literals, again limited to at most 1.

Statistics of literal frequencies are taken over the full table, including literals which do not occur.
Histograms of literal and variable frequencies, and statistics of variable frequencies, are restricted to the range of variables observed in the formula.
So, padding of the header with unused variables of high index does not skew these features.

The class of a frequency *f* in the literal histogram is ⌊(100·*f*)/5⌋, while the class in the variable histogram is ⌊20·*f*⌋, with a frequency of 1 folded into the final class in each case.
*/

use crate::{
    generic::stats::{self, Summary},
    misc::log::targets::{self},
    reports::features::{Histogram, OccurrenceFeatures},
    structures::{
        formula::Formula,
        literal::{IntLiteral, Literal, Variable},
    },
    types::err::{ErrorKind, StatsError},
};

/// The index of `literal` in a table of literals on `variables` variables.
fn table_index(literal: Literal, variables: usize) -> usize {
    let variable = literal.variable() as usize;
    match literal.polarity() {
        true => variable - 1,
        false => variables + variable - 1,
    }
}

/// The frequency of a literal with `count` occurrences, relative to `clauses` declared clauses.
fn frequency(count: u32, clauses: u32) -> f32 {
    match clauses {
        0 => f32::from(u8::from(count > 0)),
        _ => f32::min(count as f32 / clauses as f32, 1.0),
    }
}

fn literal_class(frequency: f32) -> usize {
    ((100.0 * frequency) / 5.0) as usize
}

fn variable_class(frequency: f32) -> usize {
    (20.0 * frequency) as usize
}

impl Formula {
    /// Occurrence counts, frequency histograms, and frequency statistics of the formula.
    pub fn occurrence_features(&self) -> Result<OccurrenceFeatures, ErrorKind> {
        self.check_declared()?;

        let variables = self.declared_variables() as usize;
        let mut features = OccurrenceFeatures::default();

        let mut occurrences = vec![0_u32; 2 * variables];
        let mut observed: Option<(Variable, Variable)> = None;

        for literal in self.literals().iter().filter(|l| !l.is_terminator()) {
            occurrences[table_index(*literal, variables)] += 1;

            let variable = literal.variable();
            observed = match observed {
                None => Some((variable, variable)),
                Some((lo, hi)) => Some((lo.min(variable), hi.max(variable))),
            };
        }

        let (lo, hi) = observed.ok_or(StatsError::EmptyInput)?;

        for variable in 1..=variables {
            let positive = occurrences[variable - 1];
            let negative = occurrences[variables + variable - 1];

            if positive == 1 && negative == 0 {
                features.existential_literals_count += 1;
                features.existential_positive_literals_count += 1;
            }
            if negative == 1 && positive == 0 {
                features.existential_literals_count += 1;
            }

            if positive > 0 || negative > 0 {
                features.variables_used_count += 1;
            }
        }

        features.literals_occurence_one_count =
            occurrences.iter().filter(|count| **count == 1).count() as u64;

        let clauses = self.declared_clauses();
        let frequencies = occurrences
            .iter()
            .map(|count| frequency(*count, clauses))
            .collect::<Vec<_>>();

        // Literal frequencies.
        let mut literal_histogram = Histogram::default();
        for variable in lo..=hi {
            let literal = variable as Literal;
            for literal in [literal, literal.negate()] {
                let frequency = frequencies[table_index(literal, variables)];
                literal_histogram.add(literal_class(frequency));
            }
        }
        features.literals_frequency = literal_histogram;

        let summary = Summary::of(&frequencies)?;
        features.literals_frequency_entropy = stats::entropy(&frequencies)?;
        features.literals_frequency_largest = summary.largest as f64;
        features.literals_frequency_mean = summary.mean;
        features.literals_frequency_median = summary.median;
        features.literals_frequency_sd = summary.stdev;
        features.literals_frequency_smallest = summary.smallest as f64;

        // Variable frequencies, over the observed range.
        let variable_frequencies = (lo..=hi)
            .map(|variable| {
                let literal = variable as Literal;
                let positive = frequencies[table_index(literal, variables)];
                let negative = frequencies[table_index(literal.negate(), variables)];
                f32::min(positive + negative, 1.0)
            })
            .collect::<Vec<_>>();

        let mut variable_histogram = Histogram::default();
        for frequency in &variable_frequencies {
            variable_histogram.add(variable_class(*frequency));
        }
        features.variables_frequency = variable_histogram;

        let summary = Summary::of(&variable_frequencies)?;
        features.variables_frequency_entropy = stats::entropy(&variable_frequencies)?;
        features.variables_frequency_largest = summary.largest as f64;
        features.variables_frequency_mean = summary.mean;
        features.variables_frequency_median = summary.median;
        features.variables_frequency_sd = summary.stdev;
        features.variables_frequency_smallest = summary.smallest as f64;

        log::trace!(target: targets::EVALUATION, "Occurrence features: {} of {} variables used, observed range [{lo}, {hi}]", features.variables_used_count, variables);

        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_indicies() {
        assert_eq!(table_index(1, 3), 0);
        assert_eq!(table_index(3, 3), 2);
        assert_eq!(table_index(-1, 3), 3);
        assert_eq!(table_index(-3, 3), 5);
    }

    #[test]
    fn classes() {
        assert_eq!(literal_class(0.0), 0);
        assert_eq!(literal_class(0.5), 10);
        assert_eq!(literal_class(1.0), 20);

        assert_eq!(variable_class(0.0), 0);
        assert_eq!(variable_class(0.25), 5);
        assert_eq!(variable_class(1.0), 20);
    }

    #[test]
    fn classes_at_boundaries() {
        // A boundary, and the f32 immediately below it.
        for (frequency, class) in [(0.05_f32, 1), (0.35, 7), (0.95, 19)] {
            let below = f32::from_bits(frequency.to_bits() - 1);

            assert_eq!(literal_class(frequency), class);
            assert_eq!(variable_class(frequency), class);
            assert_eq!(literal_class(below), class - 1);
            assert_eq!(variable_class(below), class - 1);
        }
    }

    #[test]
    fn frequencies() {
        assert_eq!(frequency(1, 4), 0.25);
        assert_eq!(frequency(6, 4), 1.0);
        assert_eq!(frequency(0, 4), 0.0);

        assert_eq!(frequency(2, 0), 1.0);
        assert_eq!(frequency(0, 0), 0.0);
    }

    #[test]
    fn frequencies_of_declared_clauses() {
        // One clause read of four declared.
        let formula: Formula = "p cnf 2 4\n1 2 0\n".parse().unwrap();
        let features = formula.occurrence_features().unwrap();

        assert_eq!(features.literals_frequency_largest, 0.25);
        assert_eq!(features.variables_frequency_largest, 0.25);
        assert_eq!(features.literals_frequency.buckets()[5], 2);
    }

    #[test]
    fn observed_range() {
        // Variables 1 and 2 are padding, and variable 5 is declared but unused.
        let formula: Formula = "p cnf 5 2\n3 -4 0\n3 0\n".parse().unwrap();
        let features = formula.occurrence_features().unwrap();

        assert_eq!(features.variables_used_count, 2);
        assert_eq!(features.literals_frequency.total(), 4);
        assert_eq!(features.variables_frequency.total(), 2);

        // 3 occurs in each clause, -4 in one of two.
        assert_eq!(features.literals_frequency_largest, 1.0);
        assert_eq!(features.variables_frequency_smallest, 0.5);
        assert_eq!(features.variables_frequency_mean, 0.75);
    }

    #[test]
    fn existential_literals() {
        let formula: Formula = "p cnf 3 3\n1 2 0\n-2 3 0\n3 0\n".parse().unwrap();
        let features = formula.occurrence_features().unwrap();

        // 1 occurs once without -1, while 2 and -2 each occur once.
        assert_eq!(features.existential_literals_count, 1);
        assert_eq!(features.existential_positive_literals_count, 1);
        assert_eq!(features.literals_occurence_one_count, 3);
    }
}
