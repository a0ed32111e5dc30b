//! Execution and display settings for grouped operations
//!
//! Settings can be built in code or loaded from a TOML file:
//!
//! ```toml
//! [parallel]
//! enabled = true
//! min_groups = 64
//! max_threads = 4
//!
//! [display]
//! max_groups = 2
//! max_rows_per_group = 5
//! max_rows = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming a TOML configuration file
pub const CONFIG_ENV: &str = "GROUPTAB_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    pub parallel: ParallelConfig,
    pub display: DisplayConfig,
}

/// Configuration for per-group parallel execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Whether groups may be processed on several threads
    pub enabled: bool,
    /// Minimum number of groups before work is dispatched to the thread pool
    pub min_groups: usize,
    /// Maximum number of threads to use (None for auto-detection)
    pub max_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_groups: 64,
            max_threads: None,
        }
    }
}

impl ParallelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that always runs groups sequentially
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_min_groups(mut self, min_groups: usize) -> Self {
        self.min_groups = min_groups;
        self
    }

    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = Some(max_threads);
        self
    }

    /// Get the number of threads to use
    pub fn threads(&self) -> usize {
        match self.max_threads {
            Some(n) => n,
            None => num_cpus::get(),
        }
    }

    /// Determine if parallelization should be used for `group_count` groups
    pub fn should_parallelize(&self, group_count: usize) -> bool {
        self.enabled && group_count >= self.min_groups.max(1) && self.threads() > 1
    }
}

/// Limits for text previews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Groups shown in a grouped preview
    pub max_groups: usize,
    /// Rows shown per group in a grouped preview
    pub max_rows_per_group: usize,
    /// Rows shown when printing a plain table
    pub max_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_groups: 2,
            max_rows_per_group: 5,
            max_rows: 10,
        }
    }
}

impl GroupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Parse a configuration from TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GroupConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Load the file named by `GROUPTAB_CONFIG`, or the defaults
    ///
    /// A file that cannot be read or parsed is logged and ignored.
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => match Self::from_file(&path) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("ignoring {} ({}): {}", CONFIG_ENV, path, err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Render the configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.parallel.max_threads == Some(0) {
            return Err(Error::Config("parallel.max_threads must be at least 1".to_string()));
        }
        if self.display.max_groups == 0 || self.display.max_rows_per_group == 0 {
            return Err(Error::Config(
                "display limits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
