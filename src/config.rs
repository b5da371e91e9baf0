//! Logging configuration resolved from flags and the environment.
use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter directive, e.g. `relist=debug`.
pub const LOG_ENV: &str = "RELIST_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
}

impl LogConfig {
    /// An explicit `RELIST_LOG` wins over `--verbose`.
    pub fn resolve(verbose: bool, env_filter: Option<String>) -> Self {
        let filter = env_filter
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| {
                if verbose {
                    VERBOSE_FILTER.to_string()
                } else {
                    DEFAULT_FILTER.to_string()
                }
            });
        Self { filter }
    }

    pub fn from_env(verbose: bool) -> Self {
        Self::resolve(verbose, std::env::var(LOG_ENV).ok())
    }

    /// Install the global subscriber. Logs go to stderr; stdout carries results.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.filter)
            .with_context(|| format!("invalid log filter {:?}", self.filter))?;
        // A subscriber may already be installed (tests); keep the existing one.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .try_init();
        Ok(())
    }
}
