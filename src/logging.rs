//! Logger setup
//!
//! `env_logger` behind the `log` facade. `RUST_LOG` overrides the level chosen
//! here when set.

use log::LevelFilter;
use std::env;

/// Initialize logging for the binary
///
/// `debug_enabled` selects `Debug`; otherwise `default_level` is used. The TUI
/// passes `Warn` so log lines do not scribble over the alternate screen.
pub fn init_logger(debug_enabled: bool, default_level: LevelFilter) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        default_level
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (tests, embedding) is harmless; keep the first logger.
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
