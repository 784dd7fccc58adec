//! MergeService: orchestrates sources, applies merge policy, deserializes to TreeConfig.

use crate::config::sources::{environment, file};
use crate::config::TreeConfig;
use crate::error::ApiError;
use std::path::Path;
use tracing::debug;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from defaults, an optional file and the environment.
    /// Precedence: defaults (lowest) -> file -> environment (highest).
    pub fn load(path: Option<&Path>) -> Result<TreeConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = match path {
            Some(path) => file::add_to_builder(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config: TreeConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(
            capacity = config.capacity,
            history_capacity = config.history_capacity,
            "Loaded tree configuration"
        );
        Ok(config)
    }
}
