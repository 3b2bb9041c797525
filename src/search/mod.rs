//! Best-first branch-and-bound search over partial grid assignments.
//!
//! The engine owns a single min-priority queue over estimated cost and
//! expands states per the rules in the crate docs: a `Positioned` state
//! branches into one `Unpositioned` state per area class, an
//! `Unpositioned` state expands into one `Positioned` state per free
//! placement of the class's shapes (or a single skip fallback), and a
//! `Positioned` state with no elements left synthesizes a `Finished`
//! state carrying the empty-cell penalty. The first `Finished` state
//! dequeued is the answer.

mod core;
mod mask;
mod state;

pub(crate) use self::core::{SearchEngine, SearchOutcome};
