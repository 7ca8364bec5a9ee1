//! Logging setup

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "DESKCALC_LOG";

/// Builds the log filter: `DESKCALC_LOG` when set and valid, otherwise
/// the level implied by `-v`/`-q`.
#[must_use]
pub fn filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Installs the stderr subscriber. A second call is a no-op.
pub fn init(verbosity: Verbosity) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(?verbosity, "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_follows_verbosity() {
        // DESKCALC_LOG is not set under cargo test
        if std::env::var_os(LOG_ENV).is_none() {
            assert_eq!(filter(Verbosity::Quiet).to_string(), "error");
            assert_eq!(filter(Verbosity::Normal).to_string(), "warn");
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(Verbosity::Normal);
        init(Verbosity::Debug);
    }
}
