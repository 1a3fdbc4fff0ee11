use std::path::PathBuf;

use clap::ArgMatches;

use cnf_features::config::{defaults::UNITS, FeatureConfig, OutputConfig, ParserConfig};

/// Configuration of the cli, rather than of any file.
#[derive(Clone, Debug)]
pub struct ConfigIO {
    pub files: Vec<PathBuf>,
    pub units: usize,
    pub skip_existing: bool,
}

impl Default for ConfigIO {
    fn default() -> Self {
        ConfigIO {
            files: Vec::default(),
            units: UNITS,
            skip_existing: false,
        }
    }
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut the_config = ConfigIO::default();

        if let Ok(Some(paths)) = args.try_get_many::<PathBuf>("paths") {
            the_config.files = paths.cloned().collect();
        }

        if let Ok(Some(units)) = args.try_get_one::<u32>("units") {
            the_config.units = *units as usize
        };

        if let Ok(Some(value)) = args.try_get_one::<bool>("skip_existing") {
            the_config.skip_existing = *value
        };

        the_config
    }
}

/// Configuration shared by each job.
#[derive(Clone, Debug, Default)]
pub struct JobConfig {
    pub parser: ParserConfig,
    pub features: FeatureConfig,
    pub output: OutputConfig,
}
