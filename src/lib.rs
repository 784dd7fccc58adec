//! Pathtree: Path-Indexed Telemetry Cache
//!
//! An in-memory index over hierarchical string-segmented paths. Each path maps
//! to a node holding a bounded history of the values pushed for it. Nodes are
//! reachable both through parent/child edges and through a flat index keyed by
//! the canonical form of the full path.

pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;

pub use config::{ConfigLoader, TreeConfig};
pub use error::{ApiError, TreeError};
pub use tree::history::History;
pub use tree::node::Node;
pub use tree::Tree;
