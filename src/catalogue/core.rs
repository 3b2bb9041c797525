use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{DistributeError, Result};
use crate::geometry::{Size, TileShape};

/// Default lower bound on tile width/height aspect ratio.
pub const DEFAULT_MIN_TILE_RATIO: f64 = 0.5;
/// Default upper bound on tile width/height aspect ratio.
pub const DEFAULT_MAX_TILE_RATIO: f64 = 2.0;

/// All tile shapes sharing one cell count, tagged with that count's
/// fraction of the total grid area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaClass {
    pub area: u32,
    pub area_ratio: f64,
    pub shapes: Vec<TileShape>,
}

/// Every rectangle a grid can host within the configured aspect-ratio
/// range, grouped by area in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileCatalogue {
    classes: Vec<AreaClass>,
}

impl TileCatalogue {
    /// Enumerate every (w, h) with 1 <= w <= width, 1 <= h <= height whose
    /// w/h ratio lies in `[min_ratio, max_ratio]`.
    ///
    /// Classes are ordered by ascending area; shapes within a class keep
    /// enumeration order (width descending, then height descending).
    pub fn build(size: Size, min_ratio: f64, max_ratio: f64) -> Result<Self> {
        if size.width == 0 || size.height == 0 {
            return Err(DistributeError::InvalidGridSize {
                width: size.width,
                height: size.height,
            });
        }
        if !min_ratio.is_finite() || !max_ratio.is_finite() || min_ratio <= 0.0 || min_ratio > max_ratio
        {
            return Err(DistributeError::InvalidRatioBounds {
                min: min_ratio,
                max: max_ratio,
            });
        }

        let full_area = size.area() as f64;
        let mut grouped: BTreeMap<u32, Vec<TileShape>> = BTreeMap::new();
        for width in (1..=size.width).rev() {
            for height in (1..=size.height).rev() {
                let shape = TileShape::new(width, height);
                let ratio = shape.aspect_ratio();
                if ratio >= min_ratio && ratio <= max_ratio {
                    grouped.entry(shape.area()).or_default().push(shape);
                }
            }
        }

        let classes = grouped
            .into_iter()
            .map(|(area, shapes)| AreaClass {
                area,
                area_ratio: area as f64 / full_area,
                shapes,
            })
            .collect();

        Ok(Self { classes })
    }

    /// Area classes in ascending area order.
    pub fn classes(&self) -> &[AreaClass] {
        &self.classes
    }

    /// True when the ratio bounds admit no shape at all.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
