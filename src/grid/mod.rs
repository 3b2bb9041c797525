//! Public setup and distribution surface.
//!
//! A [`Grid`] is configured once (dimensions plus tile aspect-ratio
//! bounds, which fix the tile catalogue) and then handed element lists
//! to distribute.

mod core;

pub use self::core::{DistributeConfig, Grid, GridOptions, Placement};
