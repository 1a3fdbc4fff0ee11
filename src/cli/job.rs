use std::{fs::File, io::BufWriter, path::PathBuf};

use crossbeam::channel::Receiver;

use cnf_features::{
    misc::log::targets,
    reports::{metadata::Metadata, write_report, FeatureReport},
    types::err::{self},
};

use crate::{config_io::JobConfig, misc::load_dimacs, paths::partial_path};

/// A file to evaluate, and where to write the features of the file.
#[derive(Clone, Debug)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

pub enum JobError {
    Read(err::ErrorKind),
    Metadata(err::ErrorKind),
    Evaluation(err::ErrorKind),
    Write(err::ErrorKind),
}

impl std::fmt::Display for JobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::Read(e) => write!(f, "error while processing: {e}"),
            Self::Metadata(e) => write!(f, "metadata failed: {e}"),
            Self::Evaluation(e) => write!(f, "evaluation failed: {e}"),
            Self::Write(e) => write!(f, "error while writing features: {e}"),
        }
    }
}

impl Job {
    /// Reads, evaluates, and writes the features of the file of the job.
    ///
    /// The output file only appears once features have been evaluated and written in full.
    pub fn run(&self, config: &JobConfig) -> Result<(), JobError> {
        log::info!(target: targets::WORKER, "Considering {}", self.input.display());

        let formula = load_dimacs(&self.input, &config.parser).map_err(JobError::Read)?;

        let metadata = Metadata::gather(&self.input, &formula, &config.features)
            .map_err(JobError::Metadata)?;

        let featuring = formula.evaluate().map_err(JobError::Evaluation)?;

        let report = FeatureReport {
            metadata,
            featuring,
        };

        log::info!(target: targets::WORKER, "Writing {}", self.output.display());

        self.write(&report, config).map_err(JobError::Write)
    }

    /// Writes `report` to a partial file beside the output, and then moves the partial file to the output.
    ///
    /// On failure the partial file is removed.
    fn write(&self, report: &FeatureReport, config: &JobConfig) -> Result<(), err::ErrorKind> {
        let partial = partial_path(&self.output);

        let written = File::create(&partial)
            .map_err(err::ErrorKind::from)
            .and_then(|file| write_report(report, BufWriter::new(file), &config.output))
            .and_then(|_| std::fs::rename(&partial, &self.output).map_err(err::ErrorKind::from));

        if written.is_err() && partial.exists() {
            if let Err(e) = std::fs::remove_file(&partial) {
                log::warn!(target: targets::WORKER, "Failed to remove {}: {e}", partial.display());
            }
        }

        written
    }
}

/// Runs each job received until the channel closes, returning the count of failed jobs.
pub fn worker(jobs: Receiver<Job>, config: JobConfig) -> usize {
    let mut failures = 0;

    for job in jobs {
        if let Err(e) = job.run(&config) {
            eprintln!("{}: {e}", job.input.display());
            failures += 1;
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("f.cnf");
        std::fs::write(&input, "p cnf 2 1\n1 -2 0\n").unwrap();

        let job = Job {
            input,
            output: dir.path().join("f.stats.json"),
        };
        assert!(job.run(&JobConfig::default()).is_ok());

        assert!(job.output.exists());
        assert!(!partial_path(&job.output).exists());
    }

    #[test]
    fn failed_write_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("f.cnf");
        std::fs::write(&input, "p cnf 2 1\n1 -2 0\n").unwrap();

        // A directory with contents cannot be replaced by the features.
        let output = dir.path().join("f.stats.json");
        std::fs::create_dir(&output).unwrap();
        std::fs::write(output.join("occupied"), "").unwrap();

        let job = Job { input, output };
        assert!(matches!(
            job.run(&JobConfig::default()),
            Err(JobError::Write(_))
        ));

        assert!(job.output.is_dir());
        assert!(!partial_path(&job.output).exists());
    }

    #[test]
    fn failed_evaluation_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("f.cnf");
        std::fs::write(&input, "p cnf 1 1\n1 2 0\n").unwrap();

        let job = Job {
            input,
            output: dir.path().join("f.stats.json"),
        };
        assert!(matches!(
            job.run(&JobConfig::default()),
            Err(JobError::Evaluation(_))
        ));

        assert!(!job.output.exists());
        assert!(!partial_path(&job.output).exists());
    }
}
