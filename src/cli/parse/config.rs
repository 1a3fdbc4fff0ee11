use clap::ArgMatches;

use cnf_features::config::OutputFormat;

use crate::config_io::JobConfig;

pub fn config_from_args(args: &ArgMatches) -> JobConfig {
    let mut the_config = JobConfig::default();

    if let Ok(Some(format)) = args.try_get_one::<OutputFormat>("format") {
        the_config.output.format = *format
    };

    if let Ok(Some(prefixes)) = args.try_get_many::<String>("ignore") {
        the_config.parser.comment_prefixes = prefixes.cloned().collect();
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("check_variables") {
        the_config.parser.check_variables = *value
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("check_clauses") {
        the_config.parser.check_clauses = *value
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("no_hashes") {
        the_config.features.hashes = !*value
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("fullpath") {
        the_config.features.full_path = *value
    };

    the_config
}
