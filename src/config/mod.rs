/*!
Configuration of a parse, an evaluation, and the output of features.

- [ParserConfig] is consumed by the [parser](crate::builder), and is checked before any input is read.
- [FeatureConfig] is consumed when gathering [metadata](crate::reports::metadata).
- [OutputConfig] is consumed when writing a [report](crate::reports).

Default values are gathered in [defaults].
*/

use crate::{
    builder::is_whitespace,
    types::err::{self},
};

pub mod defaults;

/// Configuration of the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Words which, at the start of a line or otherwise, cause the remainder of the line to be ignored.
    pub comment_prefixes: Vec<String>,

    /// Require the variable of each literal to be within the count declared by the header.
    pub check_variables: bool,

    /// Require the count of clauses read to be the count declared by the header.
    pub check_clauses: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            comment_prefixes: defaults::COMMENT_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
            check_variables: false,
            check_clauses: false,
        }
    }
}

impl ParserConfig {
    /// Checks each comment prefix is non-empty, free of whitespace, fits in the word buffer, and is not the header marker.
    pub fn validate(&self) -> Result<(), err::ConfigError> {
        for prefix in &self.comment_prefixes {
            if prefix.is_empty() {
                return Err(err::ConfigError::EmptyPrefix);
            }
            if prefix.len() >= defaults::WORD_CAPACITY {
                return Err(err::ConfigError::PrefixTooLong(prefix.clone()));
            }
            if prefix == defaults::HEADER_MARKER {
                return Err(err::ConfigError::HeaderPrefix);
            }
            if prefix.bytes().any(is_whitespace) {
                return Err(err::ConfigError::WhitespaceInPrefix(prefix.clone()));
            }
        }
        Ok(())
    }
}

/// Configuration of the metadata accompanying features.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureConfig {
    /// Record the path of a file as given, rather than the file name.
    pub full_path: bool,

    /// Compute digests of a file.
    pub hashes: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        FeatureConfig {
            full_path: false,
            hashes: true,
        }
    }
}

/// Formats in which features may be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// A JSON array containing a single record.
    #[default]
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration of the output of features.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::ValueEnum;

    #[test]
    fn output_format_names() {
        for format in OutputFormat::value_variants() {
            let value = format.to_possible_value().unwrap();
            assert_eq!(value.get_name(), format.to_string());
        }
        assert_eq!(
            <OutputFormat as ValueEnum>::from_str("json", false),
            Ok(OutputFormat::Json)
        );
    }
}
