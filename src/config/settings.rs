//! Configuration settings and validation.

use crate::{Error, Result};
use std::path::PathBuf;

/// Default soft cap on directories collected per cache build.
const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Main configuration for the Dirscout toolkit.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root paths scanned when building the directory cache.
    ///
    /// Only the roots that exist at build time are walked.
    pub roots: Vec<PathBuf>,

    /// Soft cap on the number of directories collected per cache build.
    pub cache_capacity: usize,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(Error::config("cache_capacity cannot be 0"));
        }

        if self.roots.is_empty() {
            return Err(Error::config("at least one root path is required"));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::config(format!(
                "invalid log level '{}', must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }

    /// The configured roots that exist right now, in configuration order.
    #[must_use]
    pub fn existing_roots(&self) -> Vec<PathBuf> {
        self.roots.iter().filter(|p| p.is_dir()).cloned().collect()
    }
}

/// The default root set: user home, two well-known system prefixes, and
/// the current working directory. Missing entries are filtered out at
/// cache-build time, not here.
fn default_roots() -> Vec<PathBuf> {
    let mut roots = Vec::with_capacity(4);
    if let Some(home) = dirs::home_dir() {
        roots.push(home);
    }
    roots.push(PathBuf::from("/usr"));
    roots.push(PathBuf::from("/etc"));
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    roots
}
