#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::thread;

use crossbeam::channel::bounded;

use cnf_features::misc::log::targets;

mod config_io;
mod job;
mod misc;
mod parse;
mod paths;

use config_io::ConfigIO;
use job::{worker, Job};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = parse::config::config_from_args(&matches);
    let config_io = ConfigIO::from_args(&matches);

    if let Err(e) = config.parser.validate() {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    }

    let mut failures = 0;

    let mut jobs = Vec::with_capacity(config_io.files.len());
    for input in config_io.files {
        match paths::derive_output(&input, config_io.skip_existing) {
            Ok(Some(output)) => jobs.push(Job { input, output }),

            Ok(None) => eprintln!("{} was processed previously - skipping", input.display()),

            Err(e) => {
                eprintln!("{}: could not move existing features: {e}", input.display());
                failures += 1;
            }
        }
    }

    let units = std::cmp::min(config_io.units, jobs.len());
    log::debug!(target: targets::WORKER, "{} jobs over {units} units", jobs.len());

    let (tx, rx) = bounded::<Job>(units);

    let handles = (0..units)
        .map(|_| {
            let rx = rx.clone();
            let config = config.clone();
            thread::spawn(move || worker(rx, config))
        })
        .collect::<Vec<_>>();
    drop(rx);

    for job in jobs {
        if tx.send(job).is_err() {
            // Every worker has exited.
            break;
        }
    }
    drop(tx);

    for handle in handles {
        match handle.join() {
            Ok(count) => failures += count,
            Err(_) => failures += 1,
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
