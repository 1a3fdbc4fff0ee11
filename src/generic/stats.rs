/*!
Aggregation of a sequence of numbers.

Each aggregation is a pure function on a slice of some [Sample] type, and none mutate the slice given.
The sample types are the unsigned integers used for counts and the floating point types used for ratios.

All aggregations other than [population_stdev] fail on an empty slice.

# Bucketed means

The [mean] of a long sequence is taken by partitioning the sequence into buckets of [BUCKET_SIZE] elements.
Within each bucket, every element is divided by the size of the bucket before being summed, and the sum is then multiplied back by the size of the bucket.
The results of each bucket are then summed and divided by the length of the sequence.

This keeps partial sums close to the magnitude of the elements, at the cost of a division per element, and so the mean of tens of millions of counts does not drift from the mean of the same counts over a shorter sequence.

Every element, bucket result, and sum is an f64, whatever the sample type.
So, the order of operations is fixed, though a mean may differ in the final bits from a mean kept in f32 throughout, and counts above 2<sup>24</sup> are exact.

```rust
# use cnf_features::generic::stats::{mean, median, population_stdev};
let lengths: Vec<u32> = vec![2, 3, 3, 4];

let m = mean(&lengths).unwrap();
assert_eq!(m, 3.0);
assert_eq!(median(&lengths).unwrap(), 3.0);
assert!((population_stdev(&lengths, m) - 0.5_f64.sqrt()).abs() < 1e-12);
```
*/

use std::cmp::Ordering;

use crate::{config::defaults::BUCKET_SIZE, types::err::StatsError};

/// A number which may be aggregated.
pub trait Sample: Copy + PartialOrd {
    /// The number as a double.
    fn as_f64(self) -> f64;

    /// A total order on the type, used when sorting.
    fn order(&self, other: &Self) -> Ordering;
}

macro_rules! unsigned_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

unsigned_sample!(u16, u32, u64);

impl Sample for f32 {
    fn as_f64(self) -> f64 {
        self as f64
    }

    fn order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Sample for f64 {
    fn as_f64(self) -> f64 {
        self
    }

    fn order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// The mean of the elements of `x`, taken over buckets of [BUCKET_SIZE] elements.
pub fn mean<T: Sample>(x: &[T]) -> Result<f64, StatsError> {
    match x {
        [] => return Err(StatsError::EmptyInput),
        [only] => return Ok(only.as_f64()),
        _ => {}
    }

    let buckets = x.chunks_exact(BUCKET_SIZE);
    let trailer = buckets.remainder();

    let mut result = 0.0;

    let bucket_size = BUCKET_SIZE as f64;
    for bucket in buckets {
        let partial = bucket
            .iter()
            .fold(0.0, |sum, value| sum + value.as_f64() / bucket_size);
        result += partial * bucket_size;
    }

    if !trailer.is_empty() {
        let trailer_size = trailer.len() as f64;
        let partial = trailer
            .iter()
            .fold(0.0, |sum, value| sum + value.as_f64() / trailer_size);
        result += partial * trailer_size;
    }

    Ok(result / x.len() as f64)
}

/// The population standard deviation of the elements of `x`, given the mean of `x`.
///
/// The divisor is the length of `x`, rather than one less than the length.
/// And, the deviation of an empty slice is 0.
pub fn population_stdev<T: Sample>(x: &[T], mean: f64) -> f64 {
    if x.is_empty() {
        return 0.0;
    }

    let squares = x.iter().fold(0.0, |sum, value| {
        let deviation = value.as_f64() - mean;
        sum + deviation * deviation
    });

    let factor = (1.0 / x.len() as f64).sqrt();
    factor * squares.sqrt()
}

/// The median of the elements of `x`, or the mean of the two central elements if there is no single median.
///
/// `x` is copied before sorting.
pub fn median<T: Sample>(x: &[T]) -> Result<f64, StatsError> {
    if x.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = x.to_vec();
    sorted.sort_unstable_by(|a, b| a.order(b));

    let mid = sorted.len() / 2;
    match sorted.len() % 2 {
        1 => Ok(sorted[mid].as_f64()),
        _ => Ok((sorted[mid].as_f64() + sorted[mid - 1].as_f64()) / 2.0),
    }
}

/// The largest element of `x`.
pub fn largest<T: Sample>(x: &[T]) -> Result<T, StatsError> {
    let (first, rest) = x.split_first().ok_or(StatsError::EmptyInput)?;
    Ok(rest
        .iter()
        .fold(*first, |max, value| if *value > max { *value } else { max }))
}

/// The smallest element of `x`.
pub fn smallest<T: Sample>(x: &[T]) -> Result<T, StatsError> {
    let (first, rest) = x.split_first().ok_or(StatsError::EmptyInput)?;
    Ok(rest
        .iter()
        .fold(*first, |min, value| if *value < min { *value } else { min }))
}

/// The entropy -Σ p·log₂(p) of the elements of `x`, with each element a weight p.
///
/// Elements which are not strictly positive contribute nothing.
/// Note, the weights are not normalised, and so the entropy of raw counts is not the entropy of their distribution.
pub fn entropy<T: Sample>(x: &[T]) -> Result<f64, StatsError> {
    if x.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let sum = x
        .iter()
        .map(|value| value.as_f64())
        .filter(|p| *p > 0.0)
        .fold(0.0, |sum, p| sum + p * p.log2());

    Ok(-sum)
}

/// The extremes, mean, median, and population standard deviation of a sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary<T> {
    pub smallest: T,
    pub largest: T,
    pub mean: f64,
    pub median: f64,
    pub stdev: f64,
}

impl<T: Sample> Summary<T> {
    /// A summary of `x`, which fails only if `x` is empty.
    pub fn of(x: &[T]) -> Result<Self, StatsError> {
        let mean = mean(x)?;
        Ok(Summary {
            smallest: smallest(x)?,
            largest: largest(x)?,
            mean,
            median: median(x)?,
            stdev: population_stdev(x, mean),
        })
    }
}
