//! Logging configuration and initialization
//!
//! The library only emits `tracing` events. Callers that want to see them
//! (tests, benches, embedding applications) can install a subscriber here.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Get the log filter string based on verbosity
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize a fmt subscriber. `RUST_LOG` wins over `verbose` when set.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 2)
        .with_test_writer()
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialised with verbosity level: {}", verbose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0), "info");
        assert_eq!(log_level(1), "debug");
        assert_eq!(log_level(2), "trace");
        assert_eq!(log_level(9), "trace");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(1);
        init_logging(2);
    }
}
