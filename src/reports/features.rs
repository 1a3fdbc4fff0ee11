/*!
The features of a formula.

Features are grouped by the pass of [evaluate](crate::procedures::evaluate) which writes them, and each group is flattened into a single record on serialization.
So, the JSON key of each feature is the name of its field, and the grouping is invisible to a consumer.

# Histograms

The two frequency histograms are stored as an array of [HISTOGRAM_BUCKETS] counts, addressed by a computed class.
On serialization each bucket is written as a key `<prefix>_<lower>_to_<upper>`, with bounds in percentage points.

```rust
# use cnf_features::reports::features::{Histogram, LiteralBuckets};
let mut histogram = Histogram::<LiteralBuckets>::default();
histogram.add(0);
histogram.add(20);

let json = serde_json::to_value(&histogram).unwrap();
assert_eq!(json["literals_frequency_0_to_5"], 1);
assert_eq!(json["literals_frequency_95_to_100"], 1);
```
*/

use std::marker::PhantomData;

use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::config::defaults::HISTOGRAM_BUCKETS;

/// The prefix of the serialized keys of a histogram.
pub trait BucketLabel {
    const PREFIX: &'static str;
}

/// Label for the histogram of literal frequencies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiteralBuckets;

impl BucketLabel for LiteralBuckets {
    const PREFIX: &'static str = "literals_frequency";
}

/// Label for the histogram of variable frequencies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VariableBuckets;

impl BucketLabel for VariableBuckets {
    const PREFIX: &'static str = "variables_frequency";
}

/// Counts over [HISTOGRAM_BUCKETS] classes of equal width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Histogram<L: BucketLabel> {
    buckets: [u32; HISTOGRAM_BUCKETS],
    label: PhantomData<L>,
}

impl<L: BucketLabel> Default for Histogram<L> {
    fn default() -> Self {
        Histogram {
            buckets: [0; HISTOGRAM_BUCKETS],
            label: PhantomData,
        }
    }
}

impl<L: BucketLabel> Histogram<L> {
    /// Adds one to the count of `class`, with any class past the last folded into the last.
    pub fn add(&mut self, class: usize) {
        let class = std::cmp::min(class, HISTOGRAM_BUCKETS - 1);
        self.buckets[class] += 1;
    }

    /// The count of each class, in order.
    pub fn buckets(&self) -> &[u32; HISTOGRAM_BUCKETS] {
        &self.buckets
    }

    /// The sum of all counts.
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|count| *count as u64).sum()
    }
}

impl<L: BucketLabel> Serialize for Histogram<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let width = 100 / HISTOGRAM_BUCKETS;
        let mut map = serializer.serialize_map(Some(HISTOGRAM_BUCKETS))?;
        for (class, count) in self.buckets.iter().enumerate() {
            let key = format!(
                "{}_{}_to_{}",
                L::PREFIX,
                class * width,
                (class + 1) * width
            );
            map.serialize_entry(&key, count)?;
        }
        map.end()
    }
}

/// Features read from a single scan of the literals.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConstantFeatures {
    pub clauses_count: u32,
    /// Clauses with exactly one positive literal.
    pub definite_clauses_count: u32,
    /// Whether every clause contains a negative literal.
    pub false_trivial: bool,
    /// Clauses without any positive literal.
    pub goal_clauses_count: u32,
    pub literals_count: u64,
    pub nbclauses: u32,
    pub nbvars: u32,
    pub negative_unit_clause_count: u32,
    pub positive_literals_count: u64,
    pub positive_unit_clause_count: u32,
    /// Clauses containing some literal together with its negation.
    pub tautological_literals_count: u32,
    /// Whether every clause contains a positive literal.
    pub true_trivial: bool,
    pub two_literals_clause_count: u32,
    pub variables_largest: u32,
    pub variables_smallest: u32,
}

/// Features of the occurrences of each literal and variable.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OccurrenceFeatures {
    /// Literals occurring exactly once, while the negation never occurs.
    pub existential_literals_count: u32,
    pub existential_positive_literals_count: u32,

    #[serde(flatten)]
    pub literals_frequency: Histogram<LiteralBuckets>,
    pub literals_frequency_entropy: f64,
    pub literals_frequency_largest: f64,
    pub literals_frequency_mean: f64,
    pub literals_frequency_median: f64,
    pub literals_frequency_sd: f64,
    pub literals_frequency_smallest: f64,

    pub literals_occurence_one_count: u64,

    #[serde(flatten)]
    pub variables_frequency: Histogram<VariableBuckets>,
    pub variables_frequency_entropy: f64,
    pub variables_frequency_largest: f64,
    pub variables_frequency_mean: f64,
    pub variables_frequency_median: f64,
    pub variables_frequency_sd: f64,
    pub variables_frequency_smallest: f64,

    pub variables_used_count: u32,
}

/// Features of the spread of variables and polarity within clauses.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DispersionFeatures {
    /// The mean over clauses of the deviation of the variables of each clause.
    pub clause_variables_sd_mean: f64,
    pub positive_negative_literals_in_clause_ratio_entropy: f64,
    pub positive_negative_literals_in_clause_ratio_mean: f64,
    pub positive_negative_literals_in_clause_ratio_stdev: f64,
}

/// Features of the length and polarity counts of clauses.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ClauseShapeFeatures {
    pub clauses_length_largest: u32,
    pub clauses_length_mean: f64,
    pub clauses_length_median: f64,
    pub clauses_length_sd: f64,
    pub clauses_length_smallest: u32,

    pub negative_literals_in_clause_largest: u32,
    pub negative_literals_in_clause_mean: f64,
    pub negative_literals_in_clause_median: f64,
    pub negative_literals_in_clause_sd: f64,
    pub negative_literals_in_clause_smallest: u32,

    pub positive_literals_in_clause_largest: u32,
    pub positive_literals_in_clause_mean: f64,
    pub positive_literals_in_clause_median: f64,
    pub positive_literals_in_clause_sd: f64,
    pub positive_literals_in_clause_smallest: u32,
}

/// Counts of connected components.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConnectivityFeatures {
    /// Components of literals, where literals in a common clause are connected.
    pub connected_literal_components_count: u32,
    /// Components of literals, where additionally each literal is connected to its negation.
    pub connected_variable_components_count: u32,
}

/// All features of a formula.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Features {
    #[serde(flatten)]
    pub constant: ConstantFeatures,

    #[serde(flatten)]
    pub occurrence: OccurrenceFeatures,

    #[serde(flatten)]
    pub dispersion: DispersionFeatures,

    #[serde(flatten)]
    pub clause_shape: ClauseShapeFeatures,

    #[serde(flatten)]
    pub connectivity: ConnectivityFeatures,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_keys() {
        let histogram = Histogram::<VariableBuckets>::default();
        let json = serde_json::to_value(histogram).unwrap();
        let map = json.as_object().unwrap();

        assert_eq!(map.len(), HISTOGRAM_BUCKETS);
        assert!(map.contains_key("variables_frequency_0_to_5"));
        assert!(map.contains_key("variables_frequency_45_to_50"));
        assert!(map.contains_key("variables_frequency_95_to_100"));
        assert!(!map.contains_key("variables_frequency_100_to_105"));
    }

    #[test]
    fn histogram_folds_last_class() {
        let mut histogram = Histogram::<LiteralBuckets>::default();
        histogram.add(19);
        histogram.add(20);
        histogram.add(usize::MAX);
        assert_eq!(histogram.buckets()[19], 3);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn flattened_record() {
        let json = serde_json::to_value(Features::default()).unwrap();
        let map = json.as_object().unwrap();

        // The occurrence features include two histograms of twenty buckets each.
        assert_eq!(map.len(), 15 + (16 + 40) + 4 + 15 + 2);
        assert!(map.contains_key("nbvars"));
        assert!(map.contains_key("literals_frequency_10_to_15"));
        assert!(map.contains_key("negative_literals_in_clause_median"));
        assert!(map.contains_key("connected_variable_components_count"));
    }
}
