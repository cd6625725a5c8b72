//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! `RUST_LOG` is honored unless `-v` asks for something more specific.

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter directive for a `-v` count
#[must_use]
pub const fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => "namaste=debug",
        _ => "namaste=trace",
    }
}

/// Install the global tracing subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    } else {
        EnvFilter::new(filter_directive(verbosity))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(0), "warn");
        assert_eq!(filter_directive(1), "namaste=debug");
        assert_eq!(filter_directive(2), "namaste=trace");
        assert_eq!(filter_directive(9), "namaste=trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(1);
        init(2);
        tracing::debug!("still alive");
    }
}
