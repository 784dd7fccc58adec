//! Configuration sources, applied in precedence order by the merge service.

pub mod environment;
pub mod file;
