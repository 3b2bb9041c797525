use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::catalogue::TileCatalogue;
use crate::cost::{combine_multipliers, ratio_diff_multiplier, CostModel, PlacementContext};
use crate::error::{DistributeError, Result};
use crate::geometry::{Rect, Size};
use crate::metrics::SearchMetrics;
use crate::priority::ElementShare;

use super::mask::GridMask;
use super::state::{
    FinishedState, OpenNode, PlacementRec, PositionedState, TreeState, UnpositionedState,
};

/// How one search run ended, iteration aborts excluded (those surface as
/// [`DistributeError::Aborted`]).
#[derive(Debug)]
pub(crate) enum SearchOutcome {
    Solved {
        placements: Vec<PlacementRec>,
        cost: f64,
    },
    /// The open set drained without producing a terminal state. Only
    /// reachable when the catalogue admits no shape at all.
    Exhausted,
}

pub(crate) struct SearchEngine<'a, E> {
    grid: Size,
    catalogue: &'a TileCatalogue,
    model: &'a CostModel<E>,
    elements: &'a [E],
    shares: Vec<ElementShare>,
    /// `tail_bound[i]` = heuristic cost of the ranked elements from `i`
    /// onward; `tail_bound[len]` = 0.
    tail_bound: Vec<f64>,
    max_iterations: Option<u64>,
    open: BinaryHeap<OpenNode>,
    seq: u64,
    metrics: SearchMetrics,
}

impl<'a, E> SearchEngine<'a, E> {
    pub fn new(
        grid: Size,
        catalogue: &'a TileCatalogue,
        model: &'a CostModel<E>,
        elements: &'a [E],
        shares: Vec<ElementShare>,
        max_iterations: Option<u64>,
    ) -> Self {
        let mut tail_bound = vec![0.0; shares.len() + 1];
        for (i, share) in shares.iter().enumerate().rev() {
            let guess = (model.cost_of_unexplored)(&elements[share.index]);
            tail_bound[i] = tail_bound[i + 1] + share.ratio * guess;
        }
        Self {
            grid,
            catalogue,
            model,
            elements,
            shares,
            tail_bound,
            max_iterations,
            open: BinaryHeap::new(),
            seq: 0,
            metrics: SearchMetrics::new(),
        }
    }

    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Run the search to the first terminal state or open-set exhaustion.
    pub fn run(&mut self) -> Result<SearchOutcome> {
        self.push(TreeState::Positioned(PositionedState {
            real_cost: 0.0,
            estimated_cost: self.tail_bound[0],
            mask: GridMask::new(self.grid),
            cursor: 0,
            placements: Vec::new(),
        }));

        loop {
            let Some(node) = self.open.pop() else {
                return Ok(SearchOutcome::Exhausted);
            };
            self.metrics.record_iteration();
            if let Some(cap) = self.max_iterations {
                if self.metrics.iterations() > cap {
                    return Err(DistributeError::Aborted { iterations: cap });
                }
            }
            match node.state {
                TreeState::Finished(finished) => {
                    return Ok(SearchOutcome::Solved {
                        placements: finished.placements,
                        cost: finished.real_cost,
                    });
                }
                TreeState::Positioned(positioned) => self.expand_positioned(positioned),
                TreeState::Unpositioned(unpositioned) => self.expand_unpositioned(unpositioned),
            }
        }
    }

    /// Rule 1 and 2: synthesize the terminal state once every element is
    /// processed, otherwise branch one `Unpositioned` state per area
    /// class for the next element.
    fn expand_positioned(&mut self, state: PositionedState) {
        self.metrics.record_positioned_expansion();

        if state.cursor == self.shares.len() {
            let penalty = self
                .model
                .empty_cell_penalty(state.mask.free_cells(), self.grid);
            self.push(TreeState::Finished(FinishedState {
                real_cost: state.real_cost + penalty,
                placements: state.placements,
            }));
            return;
        }

        let share = self.shares[state.cursor];
        let next_bound = self.tail_bound[state.cursor + 1];
        let parent = Rc::new(state);
        for (class_index, class) in self.catalogue.classes().iter().enumerate() {
            let multiplier =
                ratio_diff_multiplier(class.area_ratio, share.ratio, self.model.ratio_diff_weight);
            self.push(TreeState::Unpositioned(UnpositionedState {
                estimated_cost: parent.real_cost + multiplier * share.ratio + next_bound,
                parent: Rc::clone(&parent),
                class_index,
                ratio_diff_multiplier: multiplier,
            }));
        }
    }

    /// Rule 3: one `Positioned` successor per free placement of every
    /// shape in the chosen class; if nothing fits anywhere, a single
    /// fallback successor skips the element permanently.
    fn expand_unpositioned(&mut self, state: UnpositionedState) {
        self.metrics.record_unpositioned_expansion();

        let parent = state.parent;
        let share = self.shares[parent.cursor];
        let element = &self.elements[share.index];
        let class = &self.catalogue.classes()[state.class_index];
        let next_bound = self.tail_bound[parent.cursor + 1];

        let mut placed_any = false;
        for shape in &class.shapes {
            for left in 0..=self.grid.width - shape.width {
                for top in 0..=self.grid.height - shape.height {
                    let position = Rect::new(left, top, shape.width, shape.height);
                    if !parent.mask.is_free(position) {
                        continue;
                    }
                    let multipliers = (self.model.placement_costs)(&PlacementContext {
                        element,
                        position,
                        grid: self.grid,
                        ratio_diff_multiplier: state.ratio_diff_multiplier,
                    });
                    let real_cost =
                        parent.real_cost + combine_multipliers(&multipliers) * share.ratio;
                    let mut placements = parent.placements.clone();
                    placements.push(PlacementRec {
                        position,
                        element: share.index,
                    });
                    self.push(TreeState::Positioned(PositionedState {
                        real_cost,
                        estimated_cost: real_cost + next_bound,
                        mask: parent.mask.with_occupied(position),
                        cursor: parent.cursor + 1,
                        placements,
                    }));
                    placed_any = true;
                }
            }
        }

        if !placed_any {
            let real_cost =
                parent.real_cost + (self.model.skip_multiplier)(element) * share.ratio;
            self.push(TreeState::Positioned(PositionedState {
                real_cost,
                estimated_cost: real_cost + next_bound,
                mask: parent.mask.clone(),
                cursor: parent.cursor + 1,
                placements: parent.placements.clone(),
            }));
            self.metrics.record_fallback_skip();
        }
    }

    fn push(&mut self, state: TreeState) {
        self.seq += 1;
        self.open.push(OpenNode {
            estimated_cost: state.estimated_cost(),
            seq: self.seq,
            state,
        });
        self.metrics.record_enqueue(self.open.len());
    }
}
