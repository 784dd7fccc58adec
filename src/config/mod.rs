//! Configuration
//!
//! Tree sizing and logging settings, layered from defaults, an optional TOML
//! file and `PATHTREE_*` environment variables.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::history::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};

/// Tree configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Advisory maximum node count (0 = unbounded). Reserved; never enforced.
    #[serde(default)]
    pub capacity: usize,

    /// Number of values retained per node
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            capacity: 0,
            history_capacity: default_history_capacity(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TreeConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.history_capacity == 0 {
            return Err(ApiError::ConfigError(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
