//! Tile catalogue: the rectangle shapes a grid can legally host,
//! grouped by area.
//!
//! Built once per grid configuration and consumed read-only by the
//! search engine.

mod core;

pub use self::core::{AreaClass, TileCatalogue, DEFAULT_MAX_TILE_RATIO, DEFAULT_MIN_TILE_RATIO};
