//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with the console protocol on stdout.
//! `RUST_LOG` overrides the level chosen from `-v`.

use log::LevelFilter;

/// Maps the `-v` count to a level filter.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes the global logger. Later calls are ignored.
pub fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
