/*!
Metadata accompanying the features of a file.

- SHA-1 and MD5 digests of the bytes of the file, as read from disk.
- A digest of the formula read, independent of comments and whitespace.
- The name of the file, or the path as given.
- A timestamp, in UTC.
- The version of the feature record.

Digests are omitted if [FeatureConfig::hashes] is false.

# The formula digest

The formula digest is the SHA-1 digest of a normal rendering of the formula: the header `p cnf V C` with the declared counts, followed by each clause on a line of its own.
Each literal is written in decimal followed by a single space, and each clause ends with `0`.

```rust
# use cnf_features::reports::metadata::formula_digest;
# use cnf_features::structures::formula::Formula;
let a: Formula = "c one\np cnf 2 2\n1 -2 0\n2 0\n".parse().unwrap();
let b: Formula = "p cnf 2 2\n  1   -2 0 2\n 0".parse().unwrap();

assert_eq!(formula_digest(&a), formula_digest(&b));
```
*/

use std::{fmt::Write, io::Read, path::Path};

use md5::Md5;
use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::{
    config::{
        defaults::{FEATURE_VERSION, READ_CHUNK},
        FeatureConfig,
    },
    misc::log::targets::{self},
    structures::{formula::Formula, literal::IntLiteral},
    types::err::ErrorKind,
};

/// Metadata of a file, with keys prefixed by `@` on serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Metadata {
    #[serde(rename = "@cnfhash", skip_serializing_if = "Option::is_none")]
    pub cnfhash: Option<String>,

    #[serde(rename = "@filename")]
    pub filename: String,

    #[serde(rename = "@md5sum", skip_serializing_if = "Option::is_none")]
    pub md5sum: Option<String>,

    #[serde(rename = "@sha1sum", skip_serializing_if = "Option::is_none")]
    pub sha1sum: Option<String>,

    #[serde(rename = "@timestamp")]
    pub timestamp: String,

    #[serde(rename = "@version")]
    pub version: String,
}

/// The SHA-1 and MD5 digests of the bytes of `reader`, as lowercase hex.
pub fn file_digests(mut reader: impl Read) -> Result<(String, String), ErrorKind> {
    let mut sha1 = Sha1::new();
    let mut md5 = Md5::new();
    let mut buffer = [0_u8; READ_CHUNK];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(count) => {
                sha1.update(&buffer[..count]);
                md5.update(&buffer[..count]);
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ErrorKind::from(e)),
        }
    }

    Ok((format!("{:x}", sha1.finalize()), format!("{:x}", md5.finalize())))
}

/// The SHA-1 digest of the normal rendering of `formula`, as lowercase hex.
pub fn formula_digest(formula: &Formula) -> String {
    let mut hasher = Sha1::new();
    let mut line = String::with_capacity(256);

    // Writes to a String do not fail.
    let _ = writeln!(
        line,
        "p cnf {} {}",
        formula.declared_variables(),
        formula.declared_clauses()
    );
    hasher.update(line.as_bytes());

    for literal in formula.literals() {
        line.clear();
        match literal.is_terminator() {
            true => line.push_str("0\n"),
            false => {
                let _ = write!(line, "{literal} ");
            }
        }
        hasher.update(line.as_bytes());
    }

    format!("{:x}", hasher.finalize())
}

/// The current time in UTC, with fractional seconds and without a zone suffix.
pub fn timestamp() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.f")
        .to_string()
}

/// The name of the file at `path`, or the path itself if [FeatureConfig::full_path].
pub fn file_name(path: &Path, config: &FeatureConfig) -> String {
    match config.full_path {
        true => path.display().to_string(),
        false => match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        },
    }
}

impl Metadata {
    /// Gathers the metadata of the file at `path`, from which `formula` was read.
    pub fn gather(
        path: &Path,
        formula: &Formula,
        config: &FeatureConfig,
    ) -> Result<Self, ErrorKind> {
        let (cnfhash, sha1sum, md5sum) = match config.hashes {
            true => {
                let file = std::fs::File::open(path)?;
                let (sha1sum, md5sum) = file_digests(file)?;
                (Some(formula_digest(formula)), Some(sha1sum), Some(md5sum))
            }
            false => (None, None, None),
        };

        let metadata = Metadata {
            cnfhash,
            filename: file_name(path, config),
            md5sum,
            sha1sum,
            timestamp: timestamp(),
            version: FEATURE_VERSION.to_string(),
        };

        log::trace!(target: targets::METADATA, "Metadata of {}: {:?}", path.display(), metadata.sha1sum);

        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digests_of_abc() {
        let (sha1, md5) = file_digests(b"abc".as_slice()).unwrap();
        assert_eq!(sha1, "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(md5, "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn digests_across_chunks() {
        let bytes = vec![b'a'; 3 * READ_CHUNK + 7];
        let (sha1, md5) = file_digests(bytes.as_slice()).unwrap();

        let direct_sha1 = format!("{:x}", Sha1::digest(&bytes));
        let direct_md5 = format!("{:x}", Md5::digest(&bytes));
        assert_eq!(sha1, direct_sha1);
        assert_eq!(md5, direct_md5);
    }

    #[test]
    fn digest_of_rendering() {
        let formula: Formula = "p cnf 2 2\n1 -2 0\n2 0\n".parse().unwrap();
        let rendering = "p cnf 2 2\n1 -2 0\n2 0\n";
        assert_eq!(
            formula_digest(&formula),
            format!("{:x}", Sha1::digest(rendering.as_bytes()))
        );
    }

    #[test]
    fn digest_depends_on_header() {
        let a: Formula = "p cnf 2 1\n1 2 0\n".parse().unwrap();
        let b: Formula = "p cnf 3 1\n1 2 0\n".parse().unwrap();
        assert_ne!(formula_digest(&a), formula_digest(&b));
    }

    #[test]
    fn names() {
        let path = Path::new("some/dir/formula.cnf");

        let config = FeatureConfig::default();
        assert_eq!(file_name(path, &config), "formula.cnf");

        let config = FeatureConfig {
            full_path: true,
            ..Default::default()
        };
        assert_eq!(file_name(path, &config), "some/dir/formula.cnf");
    }

    #[test]
    fn timestamp_without_zone() {
        let stamp = timestamp();
        assert!(!stamp.ends_with('Z'));
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }
}
