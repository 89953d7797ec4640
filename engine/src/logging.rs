//! Logger setup for hosts and tools.
//!
//! The library itself only emits through the `log` facade: mode transitions
//! and crouch broadcasts at debug, timeline completions at trace, missing
//! curves at warn.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Map a `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes the global logger.
///
/// `RUST_LOG` overrides the level derived from `verbosity`.
pub fn init(verbosity: u8) {
    let env = Env::default().default_filter_or(level_for(verbosity).to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    // `try_init` fails only when a logger is already installed.
    let _ = builder.try_init();
}
