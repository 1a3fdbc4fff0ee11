use std::{path::Path, process::Command};

fn cnf_features() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cnf_features"))
}

fn backups_in(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("good.backup")
        })
        .count()
}

mod batch {
    use super::*;

    #[test]
    fn good_and_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.cnf");
        let bad = dir.path().join("bad.cnf");
        std::fs::write(&good, "c fine\np cnf 3 2\n1 -2 0\n2 3 0\n").unwrap();
        std::fs::write(&bad, "p cnf abc 2\n").unwrap();

        let output = cnf_features()
            .args(["-u", "2"])
            .arg(&good)
            .arg(&bad)
            .output()
            .unwrap();

        // The bad file fails, but does not prevent the good file from being evaluated.
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("bad.cnf"));
        assert!(stderr.contains("line 1, col 7"));

        let features = dir.path().join("good.stats.json");
        assert!(features.exists());
        assert!(!dir.path().join("bad.stats.json").exists());

        let json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&features).unwrap()).unwrap();
        assert_eq!(json[0]["@filename"], "good.cnf");
        assert_eq!(json[0]["@version"], "1.0.0");
        assert_eq!(json[0]["featuring"]["clauses_count"], 2);
    }

    #[test]
    fn skip_and_backup() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.cnf");
        std::fs::write(&good, "p cnf 2 1\n1 -2 0\n").unwrap();

        let first = cnf_features().arg("-n").arg(&good).output().unwrap();
        assert!(first.status.success());

        let json: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("good.stats.json")).unwrap(),
        )
        .unwrap();
        assert!(json[0].get("@sha1sum").is_none());

        let skipped = cnf_features().arg("-s").arg(&good).output().unwrap();
        assert!(skipped.status.success());
        assert!(String::from_utf8_lossy(&skipped.stderr).contains("skipping"));
        assert_eq!(backups_in(dir.path()), 0);

        let replaced = cnf_features().arg(&good).output().unwrap();
        assert!(replaced.status.success());
        assert_eq!(backups_in(dir.path()), 1);
        assert!(dir.path().join("good.stats.json").exists());
    }

    #[test]
    fn invalid_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.cnf");
        std::fs::write(&good, "p cnf 2 1\n1 -2 0\n").unwrap();

        let output = cnf_features()
            .args(["--ignore", "p"])
            .arg(&good)
            .output()
            .unwrap();
        assert!(!output.status.success());
        assert!(!dir.path().join("good.stats.json").exists());
    }
}
