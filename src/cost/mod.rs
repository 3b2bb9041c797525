//! Cost model for the placement search.
//!
//! All multipliers live in [0, 1] and compose through
//! [`combine_multipliers`]; a combined multiplier is then scaled by the
//! element's share so a full-share element placed at the worst spot
//! costs as much as never placing it. Overall range: 0 means every
//! element landed on its ideal tile at the grid center with no wasted
//! cells, 1 means nothing was placed.

mod core;

pub use self::core::{
    combine_multipliers, ratio_diff_multiplier, CostModel, PlacementContext,
    DEFAULT_COST_OF_EMPTY_CELL, DEFAULT_COST_OF_UNEXPLORED, DEFAULT_RATIO_DIFF_WEIGHT,
};
