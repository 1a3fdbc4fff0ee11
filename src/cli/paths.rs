use std::path::{Path, PathBuf};

use cnf_features::{config::defaults::OUTPUT_SUFFIX, misc::log::targets};

/// The path features of the file at `input` are written to, with the final extension of `input` replaced.
pub fn features_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_SUFFIX.trim_start_matches('.'))
}

/// The path existing features at `input` are moved to, given a timestamp.
pub fn backup_path(input: &Path, timestamp: &str) -> PathBuf {
    input.with_extension(format!("backup{timestamp}{OUTPUT_SUFFIX}"))
}

/// The path features are written to before being moved to `output`, so a failed write leaves nothing at `output`.
pub fn partial_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}

/// The path to write features of `input` to, or None if features exist and are to be skipped.
///
/// If features exist and are not to be skipped the existing features are first moved to a [backup](backup_path).
pub fn derive_output(input: &Path, skip_existing: bool) -> Result<Option<PathBuf>, std::io::Error> {
    let output = features_path(input);

    if !output.exists() {
        return Ok(Some(output));
    }

    if skip_existing {
        return Ok(None);
    }

    let timestamp = chrono::Utc::now().format("%Y%m%d%H%M%S").to_string();
    let backup = backup_path(input, &timestamp);
    std::fs::rename(&output, &backup)?;
    log::info!(target: targets::WORKER, "Existing {} has been renamed to {}", output.display(), backup.display());

    Ok(Some(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions() {
        assert_eq!(
            features_path(Path::new("dir/a.cnf")),
            PathBuf::from("dir/a.stats.json")
        );
        assert_eq!(
            features_path(Path::new("dir/a.cnf.xz")),
            PathBuf::from("dir/a.cnf.stats.json")
        );
        assert_eq!(
            features_path(Path::new("dir/a")),
            PathBuf::from("dir/a.stats.json")
        );
        assert_eq!(
            backup_path(Path::new("a.cnf"), "20240102030405"),
            PathBuf::from("a.backup20240102030405.stats.json")
        );
        assert_eq!(
            partial_path(Path::new("dir/a.stats.json")),
            PathBuf::from("dir/a.stats.json.partial")
        );
    }

    #[test]
    fn fresh_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("f.cnf");

        let output = derive_output(&input, false).unwrap();
        assert_eq!(output, Some(dir.path().join("f.stats.json")));
    }

    #[test]
    fn skip_existing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("f.cnf");
        std::fs::write(dir.path().join("f.stats.json"), "[]").unwrap();

        assert_eq!(derive_output(&input, true).unwrap(), None);
    }

    #[test]
    fn backup_existing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("f.cnf");
        let existing = dir.path().join("f.stats.json");
        std::fs::write(&existing, "[]").unwrap();

        let output = derive_output(&input, false).unwrap();
        assert_eq!(output, Some(existing.clone()));
        assert!(!existing.exists());

        let backups = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("f.backup") && name.ends_with(".stats.json"))
            .count();
        assert_eq!(backups, 1);
    }
}
