//! Built-in defaults, the lowest-precedence layer.

use crate::tree::history::DEFAULT_HISTORY_CAPACITY;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("capacity", 0_i64)?
        .set_default("history_capacity", DEFAULT_HISTORY_CAPACITY as i64)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
