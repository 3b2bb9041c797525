use serde::Serialize;

use crate::catalogue::{TileCatalogue, DEFAULT_MAX_TILE_RATIO, DEFAULT_MIN_TILE_RATIO};
use crate::cost::CostModel;
use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::logging::Logger;
use crate::priority::normalize_priorities;
use crate::search::{SearchEngine, SearchOutcome};

const LOG_TARGET: &str = "tilefit.search";

/// Grid configuration consumed by [`Grid::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOptions {
    pub width: u16,
    pub height: u16,
    pub min_tile_ratio: f64,
    pub max_tile_ratio: f64,
}

impl GridOptions {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            min_tile_ratio: DEFAULT_MIN_TILE_RATIO,
            max_tile_ratio: DEFAULT_MAX_TILE_RATIO,
        }
    }

    /// Override the width/height aspect-ratio range tiles may take.
    pub fn tile_ratio_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_tile_ratio = min;
        self.max_tile_ratio = max;
        self
    }
}

/// One finalized placement handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement<E> {
    pub position: Rect,
    pub element: E,
}

/// Per-call knobs: the cost model strategies, an optional iteration cap,
/// and an optional structured logger.
pub struct DistributeConfig<E> {
    pub cost: CostModel<E>,
    /// Upper bound on dequeued states. Exceeding it aborts the call with
    /// [`crate::DistributeError::Aborted`] instead of returning a partial
    /// result. `None` leaves the search unbounded.
    pub max_iterations: Option<u64>,
    pub logger: Option<Logger>,
}

impl<E: 'static> Default for DistributeConfig<E> {
    fn default() -> Self {
        Self {
            cost: CostModel::default(),
            max_iterations: None,
            logger: None,
        }
    }
}

/// A fixed-size grid with its precomputed tile catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: Size,
    catalogue: TileCatalogue,
}

impl Grid {
    /// Validate the options and enumerate the tile catalogue once.
    pub fn new(options: GridOptions) -> Result<Self> {
        let size = Size::new(options.width, options.height);
        let catalogue =
            TileCatalogue::build(size, options.min_tile_ratio, options.max_tile_ratio)?;
        Ok(Self { size, catalogue })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn catalogue(&self) -> &TileCatalogue {
        &self.catalogue
    }

    /// Distribute `elements` over the grid with the default configuration.
    ///
    /// `Ok(Some(_))` carries the solution in descending-priority order;
    /// elements missing from it were skipped because nothing fit.
    /// `Ok(None)` means the search exhausted every state without reaching
    /// a terminal one, which only happens when the catalogue is empty.
    pub fn distribute<E: 'static>(
        &self,
        elements: Vec<E>,
        get_priority: impl Fn(&E) -> f64,
    ) -> Result<Option<Vec<Placement<E>>>> {
        self.distribute_with(elements, get_priority, &DistributeConfig::default())
    }

    /// [`Grid::distribute`] with explicit strategies, iteration cap, and
    /// logging.
    pub fn distribute_with<E>(
        &self,
        elements: Vec<E>,
        get_priority: impl Fn(&E) -> f64,
        config: &DistributeConfig<E>,
    ) -> Result<Option<Vec<Placement<E>>>> {
        let shares = normalize_priorities(&elements, &get_priority)?;

        let mut engine = SearchEngine::new(
            self.size,
            &self.catalogue,
            &config.cost,
            &elements,
            shares,
            config.max_iterations,
        );
        let outcome = engine.run();
        let snapshot = engine.metrics().snapshot();
        drop(engine);

        if let Some(logger) = &config.logger {
            let mut event = snapshot.to_log_event(LOG_TARGET);
            if let Ok(SearchOutcome::Solved { cost, .. }) = &outcome {
                event
                    .fields
                    .insert("solution_cost".to_string(), serde_json::json!(cost));
            }
            logger.log_event(event)?;
        }

        match outcome? {
            SearchOutcome::Solved { placements, .. } => {
                // The engine references each element index at most once
                // per solution; taking from the slab keeps that checked
                // in debug builds without panicking in release.
                let mut slab: Vec<Option<E>> = elements.into_iter().map(Some).collect();
                let solution = placements
                    .into_iter()
                    .filter_map(|rec| {
                        let element = slab[rec.element].take();
                        debug_assert!(element.is_some(), "duplicate element index {}", rec.element);
                        element.map(|element| Placement {
                            position: rec.position,
                            element,
                        })
                    })
                    .collect();
                Ok(Some(solution))
            }
            SearchOutcome::Exhausted => Ok(None),
        }
    }
}
