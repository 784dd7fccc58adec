//! Source composition for [`crate::config::TreeConfig`].

pub mod merge_policy;
pub mod service;
