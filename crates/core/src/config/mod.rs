//! CVar configuration files
//!
//! Applies values from TOML files to already registered CVars. Keys are CVar
//! names; nested tables are joined with `.`, so these are equivalent:
//!
//! ```toml
//! "r.Shadow.FixCascade" = 2
//!
//! [r.Shadow]
//! FixCascade = 2
//! ```
//!
//! Values go through the same per-type parsing the console uses. Booleans are
//! written as `1`/`0`. Writes take the programmatic path: READ_ONLY does not
//! block them, INIT_ONCE CVars silently keep their registration value.
//!
//! # Example
//!
//! ```ignore
//! use autocvar_core::config;
//!
//! let report = config::load_file("cvars.toml")?;
//! for name in &report.unknown {
//!     tracing::warn!("No such CVar: {}", name);
//! }
//! ```

mod loader;

pub use loader::{apply_file, apply_str, load_file};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Outcome of applying a config file, by CVar name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigReport {
    /// Keys whose value was stored
    pub applied: Vec<String>,
    /// Keys naming INIT_ONCE CVars; the write was dropped
    pub ignored: Vec<String>,
    /// Keys that match no registered CVar
    pub unknown: Vec<String>,
    /// Keys whose value could not be used, with the reason
    pub rejected: Vec<(String, String)>,
}

impl ConfigReport {
    /// Returns true if every key named a CVar and had a usable value
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty() && self.rejected.is_empty()
    }

    /// Number of keys processed
    pub fn total(&self) -> usize {
        self.applied.len() + self.ignored.len() + self.unknown.len() + self.rejected.len()
    }
}
