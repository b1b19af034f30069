//! Logging setup.
//!
//! The library itself only emits `tracing` events. Applications that want them
//! printed call [`init_logging`] once at startup.

use crate::config::LogConfig;
use crate::error::{TrieError, TrieResult};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Builds the `EnvFilter` for `config`.
///
/// `RUST_LOG` wins when it is set; otherwise the configured level applies.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Builds the fmt subscriber described by `config` without installing it.
pub fn subscriber(config: &LogConfig) -> Box<dyn Subscriber + Send + Sync> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_line_number(config.source_location)
        .with_file(config.source_location)
        .with_thread_names(true);

    if config.json {
        Box::new(builder.json().finish())
    } else {
        Box::new(builder.finish())
    }
}

/// Installs a global `tracing` subscriber configured from `config`.
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(config: &LogConfig) -> TrieResult<()> {
    tracing::subscriber::set_global_default(subscriber(config))
        .map_err(|e| TrieError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn with_subscriber(config: &LogConfig, f: impl FnOnce() -> bool) -> bool {
        tracing::subscriber::with_default(subscriber(config), f)
    }

    #[test]
    fn test_subscriber_follows_configured_level() {
        let config = LogConfig {
            level: "warn".to_string(),
            ..LogConfig::default()
        };
        assert!(with_subscriber(&config, || tracing::enabled!(Level::ERROR)));
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(with_subscriber(&config, || tracing::enabled!(Level::WARN)));
            assert!(!with_subscriber(&config, || tracing::enabled!(Level::DEBUG)));
        }
    }

    #[test]
    fn test_json_subscriber_with_source_location() {
        let config = LogConfig {
            level: "error".to_string(),
            json: true,
            source_location: true,
        };
        assert!(with_subscriber(&config, || tracing::enabled!(Level::ERROR)));
    }
}
