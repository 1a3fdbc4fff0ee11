use std::{fs::File, io::BufReader, path::Path};

use cnf_features::{
    builder::parse_dimacs,
    config::ParserConfig,
    structures::formula::Formula,
    types::err::{self},
};

/// Reads the DIMACS file at `path`, decompressing the file first if the extension is `xz` and the `xz` feature is enabled.
pub fn load_dimacs(path: &Path, config: &ParserConfig) -> Result<Formula, err::ErrorKind> {
    let file = File::open(path)?;

    #[cfg(feature = "xz")]
    if path.extension().is_some_and(|extension| extension == "xz") {
        return parse_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)), config);
    }

    parse_dimacs(BufReader::new(&file), config)
}
