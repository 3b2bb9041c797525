//! Priority normalizer: caller priorities become fractional shares of
//! the grid, ordered so the highest-priority element is placed first.

mod core;

pub use self::core::{normalize_priorities, ElementShare, ZERO_PRIORITY_FLOOR};
