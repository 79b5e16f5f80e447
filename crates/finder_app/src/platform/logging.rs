//! Platform logging initialization for the movie finder.
//!
//! The terminal belongs to the UI, so logs go to a file (truncated on start).

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, WriteLogger};

/// Initialize the global file logger. A file that cannot be created disables
/// logging with a warning on stderr instead of failing start-up.
pub fn initialize(path: &Path, level: LevelFilter) {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            return;
        }
    };
    let _ = CombinedLogger::init(vec![WriteLogger::new(level, build_config(), file)]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("rustls")
        .add_filter_ignore_str("reqwest")
        .build()
}
