// src/logging/init.rs

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger. `RUST_LOG` wins over
/// `default_level` when it is set. Only the first call has any effect.
pub fn init_logging(default_level: LevelFilter) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let mut builder = logger_builder(default_level, rust_log.as_deref());

        // a test harness may already own the global logger
        if builder.try_init().is_ok() {
            log::debug!("logging initialized at {}", log::max_level());
        }
    });
}

fn logger_builder(default_level: LevelFilter, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    match rust_log {
        Some(filters) if !filters.trim().is_empty() => {
            builder.parse_filters(filters);
        }
        _ => {
            builder.filter_level(default_level);
        }
    }
    builder.format_timestamp_millis();
    builder
}
