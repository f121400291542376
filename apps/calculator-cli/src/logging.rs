//! Console logging for the CLI.
//!
//! Events go to stderr so stdout carries only the result. `RUST_LOG` takes
//! precedence over the configured directives.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter from `RUST_LOG` if set, otherwise from `config`.
///
/// # Errors
/// Returns an error if `RUST_LOG` is set but malformed, or if the configured
/// directives do not parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return EnvFilter::try_from_default_env()
            .with_context(|| format!("invalid {} directives", EnvFilter::DEFAULT_ENV));
    }
    let directives = config.directives();
    EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid logging directives '{directives}'"))
}

/// Install the global subscriber.
///
/// Only the first call installs anything; later calls are no-ops.
///
/// # Errors
/// Returns an error if the configured directives do not parse.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
    Ok(())
}
