//! Tracing subscriber setup.

use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level; `--verbose` raises the
/// configured level to at least `debug`. Logs go to stderr so command output
/// on stdout stays clean.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = effective_level(config.level_filter()?, verbose);
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.compact().try_init(),
    }
    .map_err(|e| anyhow!(e))
}

fn effective_level(configured: LevelFilter, verbose: bool) -> LevelFilter {
    if verbose {
        configured.max(LevelFilter::DEBUG)
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(effective_level(LevelFilter::WARN, true), LevelFilter::DEBUG);
        assert_eq!(effective_level(LevelFilter::TRACE, true), LevelFilter::TRACE);
        assert_eq!(effective_level(LevelFilter::WARN, false), LevelFilter::WARN);
    }
}
