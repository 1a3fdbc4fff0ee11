use crate::config::OutputFormat;

/// Prefixes of lines to be ignored, unless others are given.
pub const COMMENT_PREFIXES: [&str; 2] = ["c", "%"];

/// The capacity of the word buffer of the parser, in bytes.
pub const WORD_CAPACITY: usize = 20;

/// The word which begins the header of a DIMACS formula.
pub const HEADER_MARKER: &str = "p";

/// Bytes read from some source at a time.
pub const READ_CHUNK: usize = 4096;

/// Elements to a bucket when taking the mean of a sequence.
pub const BUCKET_SIZE: usize = 512;

/// Buckets to a frequency histogram.
pub const HISTOGRAM_BUCKETS: usize = 20;

/// The most declared variables for which tables of literals are built during evaluation.
///
/// The occurrence and union-find tables of a formula on this many variables take around 3 GiB.
pub const TABLE_VARIABLE_LIMIT: u32 = 1 << 27;

/// The version of the feature record.
pub const FEATURE_VERSION: &str = "1.0.0";

/// Files to process concurrently.
pub const UNITS: usize = 4;

pub const OUTPUT_FORMAT: OutputFormat = OutputFormat::Json;

/// Appended to the stem of a file to obtain the path of its feature record.
pub const OUTPUT_SUFFIX: &str = ".stats.json";
