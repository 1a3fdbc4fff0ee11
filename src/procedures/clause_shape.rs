//! Features of the length of each clause, and of the count of positive and negative literals in each clause.

use crate::{
    generic::stats::Summary,
    misc::log::targets::{self},
    reports::features::ClauseShapeFeatures,
    structures::formula::Formula,
    types::err::ErrorKind,
};

use super::ClauseCounts;

impl Formula {
    /// Summaries of clause length and polarity counts of the formula.
    pub fn clause_shape_features(&self) -> Result<ClauseShapeFeatures, ErrorKind> {
        let counts = self.clauses().map(ClauseCounts::of).collect::<Vec<_>>();

        let lengths = counts.iter().map(|c| c.length()).collect::<Vec<_>>();
        let negatives = counts.iter().map(|c| c.negative).collect::<Vec<_>>();
        let positives = counts.iter().map(|c| c.positive).collect::<Vec<_>>();

        let length = Summary::of(&lengths)?;
        let negative = Summary::of(&negatives)?;
        let positive = Summary::of(&positives)?;

        log::trace!(target: targets::EVALUATION, "Clause lengths from {} to {}", length.smallest, length.largest);

        Ok(ClauseShapeFeatures {
            clauses_length_largest: length.largest,
            clauses_length_mean: length.mean,
            clauses_length_median: length.median,
            clauses_length_sd: length.stdev,
            clauses_length_smallest: length.smallest,

            negative_literals_in_clause_largest: negative.largest,
            negative_literals_in_clause_mean: negative.mean,
            negative_literals_in_clause_median: negative.median,
            negative_literals_in_clause_sd: negative.stdev,
            negative_literals_in_clause_smallest: negative.smallest,

            positive_literals_in_clause_largest: positive.largest,
            positive_literals_in_clause_mean: positive.mean,
            positive_literals_in_clause_median: positive.median,
            positive_literals_in_clause_sd: positive.stdev,
            positive_literals_in_clause_smallest: positive.smallest,
        })
    }
}
