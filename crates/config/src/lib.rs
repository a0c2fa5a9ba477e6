//! # Config - `dmeta` settings
//!
//! All settings come from environment variables with defaults:
//!
//! ```text
//! DMETA_LOG           default tracing filter (RUST_LOG wins)  (default: "warn")
//! DMETA_OUT           write raw output bytes to this file     (default: unset, hex on stdout)
//! DMETA_MAX_INPUT_KB  largest @path input accepted, in KiB    (default: 1024)
//! ```
//!
//! Unparseable numbers fall back to their defaults.

use std::path::PathBuf;

/// Default tracing filter directive.
pub const DEFAULT_LOG: &str = "warn";

/// Default cap on `@path` inputs, in KiB.
pub const DEFAULT_MAX_INPUT_KB: usize = 1024;

/// Settings for one `dmeta` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default `tracing_subscriber::EnvFilter` directive.
    pub log: String,
    /// When set, raw output bytes go to this file instead of hex on stdout.
    pub out: Option<PathBuf>,
    /// Largest file accepted for an `@path` argument, in bytes.
    pub max_input_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: DEFAULT_LOG.to_string(),
            out: None,
            max_input_bytes: DEFAULT_MAX_INPUT_KB * 1024,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let log = env_or("DMETA_LOG", DEFAULT_LOG);
        let out = lookup("DMETA_OUT")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let max_input_kb: usize = env_or("DMETA_MAX_INPUT_KB", "1024")
            .parse()
            .unwrap_or(DEFAULT_MAX_INPUT_KB);

        Self {
            log,
            out,
            max_input_bytes: max_input_kb * 1024,
        }
    }
}

#[cfg(test)]
mod tests;
