use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use cnf_features::config::{self, OutputFormat};

pub fn cli() -> Command {
    Command::new("cnf_features")
        .about("Extracts structural and statistical features from DIMACS CNF files")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(true)
            .trailing_var_arg(true)
            .num_args(1..)
            .value_name("DIMACSFILES")
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF files to evaluate, each independently.")
            .long_help(format!("The DIMACS form CNF files to evaluate, each independently.

The features of a file are written beside the file, with the final extension replaced by '{}'.", config::defaults::OUTPUT_SUFFIX)))

        .arg(Arg::new("format")
            .short('f')
            .long("format")
            .value_name("FORMAT")
            .value_parser(value_parser!(OutputFormat))
            .required(false)
            .num_args(1)
            .help(format!("The format to write features in.
Default: {}", config::defaults::OUTPUT_FORMAT)))

        .arg(Arg::new("ignore")
            .long("ignore")
            .value_name("PREFIX")
            .value_parser(value_parser!(String))
            .required(false)
            .action(ArgAction::Append)
            .help("A prefix for lines to be ignored, such as 'c'.")
            .long_help(format!("A prefix for lines to be ignored, such as 'c'.
Default: {}

May be given multiple times, and if given replaces the default prefixes.
Prefixes must be non-empty, free of whitespace, shorter than {} bytes, and may not be 'p'.", config::defaults::COMMENT_PREFIXES.join(" "), config::defaults::WORD_CAPACITY)))

        .arg(Arg::new("units")
            .short('u')
            .long("units")
            .value_name("UNITS")
            .value_parser(value_parser!(u32).range(1..))
            .required(false)
            .num_args(1)
            .help(format!("How many files to evaluate concurrently.
Default: {}", config::defaults::UNITS)))

        .arg(Arg::new("no_hashes")
            .short('n')
            .long("no-hashes")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Do not compute digests of each file."))

        .arg(Arg::new("fullpath")
            .short('p')
            .long("fullpath")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Record the path of each file as given, rather than the file name."))

        .arg(Arg::new("skip_existing")
            .short('s')
            .long("skip-existing")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Skip a file if features of the file have already been written.")
            .long_help("Skip a file if features of the file have already been written.

Otherwise, existing features are renamed with a timestamp before new features are written."))

        .arg(Arg::new("check_variables")
            .long("check-variables")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Require every variable to be within the count declared by the header."))

        .arg(Arg::new("check_clauses")
            .long("check-clauses")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Require the count of clauses to be the count declared by the header."))
}
