//! Environment variable source: PATHTREE_* prefix with __ separator for nested keys

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const ENV_PREFIX: &str = "PATHTREE";

/// Add environment variable overlay to builder.
///
/// `PATHTREE_HISTORY_CAPACITY` sets `history_capacity`;
/// `PATHTREE_LOGGING__LEVEL` sets `logging.level`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
