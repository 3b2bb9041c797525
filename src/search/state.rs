use std::cmp::Ordering;
use std::rc::Rc;

use crate::geometry::Rect;

use super::mask::GridMask;

/// One finalized placement inside a partial or complete solution,
/// pointing back into the caller's element list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlacementRec {
    pub position: Rect,
    pub element: usize,
}

/// A fully committed partial layout. `cursor` indexes the next ranked
/// element to place; the remaining list is always a suffix of the ranked
/// shares.
#[derive(Debug)]
pub(crate) struct PositionedState {
    pub real_cost: f64,
    pub estimated_cost: f64,
    pub mask: GridMask,
    pub cursor: usize,
    pub placements: Vec<PlacementRec>,
}

/// An area class has been chosen for the next element, but not yet a
/// rectangle or location. Carries the data needed to enumerate the
/// `Positioned` successors on demand instead of a deferred closure.
#[derive(Debug)]
pub(crate) struct UnpositionedState {
    pub estimated_cost: f64,
    pub parent: Rc<PositionedState>,
    pub class_index: usize,
    pub ratio_diff_multiplier: f64,
}

/// Terminal state: every element placed or skipped, empty-cell penalty
/// folded in.
#[derive(Debug)]
pub(crate) struct FinishedState {
    pub real_cost: f64,
    pub placements: Vec<PlacementRec>,
}

#[derive(Debug)]
pub(crate) enum TreeState {
    Positioned(PositionedState),
    Unpositioned(UnpositionedState),
    Finished(FinishedState),
}

impl TreeState {
    pub fn estimated_cost(&self) -> f64 {
        match self {
            TreeState::Positioned(state) => state.estimated_cost,
            TreeState::Unpositioned(state) => state.estimated_cost,
            TreeState::Finished(state) => state.real_cost,
        }
    }
}

/// Heap entry inverting `BinaryHeap`'s max-order into a min-order over
/// estimated cost. Ties break on the sequence number: the
/// earlier-enqueued node pops first (FIFO), which keeps runs
/// reproducible.
#[derive(Debug)]
pub(crate) struct OpenNode {
    pub estimated_cost: f64,
    pub seq: u64,
    pub state: TreeState,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    fn node(estimated_cost: f64, seq: u64) -> OpenNode {
        OpenNode {
            estimated_cost,
            seq,
            state: TreeState::Finished(FinishedState {
                real_cost: estimated_cost,
                placements: Vec::new(),
            }),
        }
    }

    #[test]
    fn heap_pops_lowest_estimated_cost_first() {
        let mut heap = BinaryHeap::new();
        heap.push(node(0.5, 1));
        heap.push(node(0.25, 2));
        heap.push(node(0.75, 3));
        assert_eq!(heap.pop().unwrap().seq, 2);
        assert_eq!(heap.pop().unwrap().seq, 1);
        assert_eq!(heap.pop().unwrap().seq, 3);
    }

    #[test]
    fn equal_costs_pop_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        heap.push(node(0.5, 1));
        heap.push(node(0.5, 2));
        heap.push(node(0.5, 3));
        assert_eq!(heap.pop().unwrap().seq, 1);
        assert_eq!(heap.pop().unwrap().seq, 2);
        assert_eq!(heap.pop().unwrap().seq, 3);
    }
}
