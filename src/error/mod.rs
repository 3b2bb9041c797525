//! Error module orchestrator following the module orchestrator pattern.

mod types;

pub use self::types::{DistributeError, Result};
