/*!
Reports of the features of a file.

A [FeatureReport] pairs the [metadata] of a file with the [features] of the formula read from the file, and is written as a JSON array containing the report as its only element.

```rust
# use cnf_features::config::OutputConfig;
# use cnf_features::reports::{metadata::Metadata, write_report, FeatureReport};
# use cnf_features::structures::formula::Formula;
let formula: Formula = "p cnf 2 1\n1 -2 0\n".parse().unwrap();

let report = FeatureReport {
    metadata: Metadata {
        cnfhash: None,
        filename: "example.cnf".to_string(),
        md5sum: None,
        sha1sum: None,
        timestamp: "2024-01-01T00:00:00".to_string(),
        version: "1.0.0".to_string(),
    },
    featuring: formula.evaluate().unwrap(),
};

let mut out = Vec::default();
write_report(&report, &mut out, &OutputConfig::default()).unwrap();

let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
assert_eq!(json[0]["@filename"], "example.cnf");
assert_eq!(json[0]["featuring"]["clauses_count"], 1);
```
*/

use std::io::Write;

use serde::Serialize;

use crate::{
    config::{OutputConfig, OutputFormat},
    reports::{features::Features, metadata::Metadata},
    types::err::ErrorKind,
};

pub mod features;
pub mod metadata;

/// The metadata and features of a file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureReport {
    #[serde(flatten)]
    pub metadata: Metadata,

    pub featuring: Features,
}

/// Writes `report` to `writer` in the format of `config`.
pub fn write_report(
    report: &FeatureReport,
    mut writer: impl Write,
    config: &OutputConfig,
) -> Result<(), ErrorKind> {
    match config.format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, &[report]).map_err(std::io::Error::from)?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()?;
    Ok(())
}
