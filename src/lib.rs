//! Weighted tile placement for fixed-size grids.
//!
//! Given N elements with priorities and a W×H grid, `tilefit` assigns
//! each element a rectangular region so that region areas roughly match
//! the elements' relative priorities, tile aspect ratios stay within a
//! configured range, and leftover cells are minimized. The placement is
//! found by a best-first branch-and-bound search over partial grid
//! assignments; it returns the lowest-cost solution among the states it
//! actually expands, not a proven global optimum.
//!
//! ```
//! use tilefit::{Grid, GridOptions};
//!
//! let grid = Grid::new(GridOptions::new(4, 3))?;
//! let layout = grid.distribute(vec![("pane", 2.0)], |(_, prio)| *prio)?;
//! let layout = layout.expect("4x3 always admits a placement");
//! assert_eq!(layout.len(), 1);
//! # Ok::<(), tilefit::DistributeError>(())
//! ```

pub mod catalogue;
pub mod cost;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod logging;
pub mod metrics;
pub mod priority;
mod search;

pub use catalogue::{AreaClass, TileCatalogue, DEFAULT_MAX_TILE_RATIO, DEFAULT_MIN_TILE_RATIO};
pub use cost::{
    combine_multipliers, ratio_diff_multiplier, CostModel, PlacementContext,
    DEFAULT_COST_OF_EMPTY_CELL, DEFAULT_COST_OF_UNEXPLORED, DEFAULT_RATIO_DIFF_WEIGHT,
};
pub use error::{DistributeError, Result};
pub use geometry::{Rect, Size, TileShape};
pub use grid::{DistributeConfig, Grid, GridOptions, Placement};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{SearchMetrics, SearchSnapshot};
pub use priority::{normalize_priorities, ElementShare};
