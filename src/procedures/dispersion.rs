//! Features of the spread of variables and of polarity within each clause.
//!
//! - For each clause the (population) standard deviation of the variables of the clause is taken, and the mean of these deviations is a feature.
//! - For each clause the ratio of positive literals to all literals is taken, and the mean, deviation, and entropy of these ratios are features.
//!
//! Per-clause values are kept as `f32`.

use crate::{
    generic::stats::{self},
    misc::log::targets::{self},
    reports::features::DispersionFeatures,
    structures::{formula::Formula, literal::IntLiteral},
    types::err::ErrorKind,
};

use super::ClauseCounts;

impl Formula {
    /// Features of the spread of variables and polarity within clauses of the formula.
    pub fn dispersion_features(&self) -> Result<DispersionFeatures, ErrorKind> {
        let mut features = DispersionFeatures::default();

        let clause_count = self.clause_count() as usize;
        let mut deviations: Vec<f32> = Vec::with_capacity(clause_count);
        let mut ratios: Vec<f32> = Vec::with_capacity(clause_count);

        let mut variables = Vec::with_capacity(64);
        for clause in self.clauses() {
            variables.clear();
            variables.extend(clause.iter().map(|literal| literal.variable()));

            let mean = stats::mean(&variables)?;
            deviations.push(stats::population_stdev(&variables, mean) as f32);

            let counts = ClauseCounts::of(clause);
            ratios.push((counts.positive as f64 / counts.length() as f64) as f32);
        }

        features.clause_variables_sd_mean = stats::mean(&deviations)?;

        let mean = stats::mean(&ratios)?;
        features.positive_negative_literals_in_clause_ratio_entropy = stats::entropy(&ratios)?;
        features.positive_negative_literals_in_clause_ratio_mean = mean;
        features.positive_negative_literals_in_clause_ratio_stdev =
            stats::population_stdev(&ratios, mean);

        log::trace!(target: targets::EVALUATION, "Dispersion features over {} clauses", ratios.len());

        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios() {
        let formula: Formula = "p cnf 4 2\n1 -2 0\n3 4 0\n".parse().unwrap();
        let features = formula.dispersion_features().unwrap();

        assert_eq!(features.positive_negative_literals_in_clause_ratio_mean, 0.75);
        assert!((features.positive_negative_literals_in_clause_ratio_stdev - 0.25).abs() < 1e-6);
        // -(0.5·log₂0.5 + 1·log₂1)
        assert_eq!(features.positive_negative_literals_in_clause_ratio_entropy, 0.5);
        // Each clause is on two variables at distance 1.
        assert!((features.clause_variables_sd_mean - 0.5).abs() < 1e-6);
    }
}
