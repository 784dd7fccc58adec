//! Integration tests for the path-indexed telemetry tree

mod config_loading;
mod tree_structure;
