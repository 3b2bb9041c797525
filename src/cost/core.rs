use crate::geometry::{Rect, Size};

/// Default weight scaling the tile-area mismatch signal. Kept small so
/// placement quality dominates area mismatch.
pub const DEFAULT_RATIO_DIFF_WEIGHT: f64 = 0.1;
/// Default penalty weight for unused grid cells in a finished layout.
pub const DEFAULT_COST_OF_EMPTY_CELL: f64 = 0.75;
/// Default per-element heuristic guess: an unexplored element is assumed
/// to eventually cost half its share.
pub const DEFAULT_COST_OF_UNEXPLORED: f64 = 0.5;

const CENTER_DISTANCE_WEIGHT: f64 = 0.02;

/// Combine independent badness multipliers in [0, 1] into one.
///
/// Behaves like a probabilistic OR: zero only when every input is zero,
/// approaching one as any input approaches one, monotonically
/// non-decreasing in each input.
pub fn combine_multipliers(multipliers: &[f64]) -> f64 {
    1.0 - multipliers.iter().fold(1.0, |acc, m| acc * (1.0 - m))
}

/// Mismatch multiplier between an element's share and an area class.
///
/// Zero when the class covers exactly the element's share of the grid,
/// approaching `weight` as the two diverge.
pub fn ratio_diff_multiplier(area_ratio: f64, element_ratio: f64, weight: f64) -> f64 {
    let closeness = (area_ratio / element_ratio).min(element_ratio / area_ratio);
    (1.0 - closeness) * weight
}

/// Everything a placement-quality strategy may inspect for one candidate
/// rectangle.
pub struct PlacementContext<'a, E> {
    pub element: &'a E,
    pub position: Rect,
    pub grid: Size,
    pub ratio_diff_multiplier: f64,
}

/// Strategy parameters scoring the search. Every field is independently
/// overridable; defaults reproduce the reference constants exactly.
pub struct CostModel<E> {
    /// Weight for [`ratio_diff_multiplier`].
    pub ratio_diff_weight: f64,
    /// Weight for the finished-layout unused-cell penalty.
    pub cost_of_empty_cell: f64,
    /// Heuristic cost guess per not-yet-explored element, in [0, 1].
    pub cost_of_unexplored: Box<dyn Fn(&E) -> f64>,
    /// Multiplier charged when an element cannot be placed anywhere.
    pub skip_multiplier: Box<dyn Fn(&E) -> f64>,
    /// Multipliers in [0, 1] scoring one candidate rectangle. The default
    /// combines the area mismatch with small horizontal and vertical
    /// distance-from-center penalties.
    pub placement_costs: Box<dyn Fn(&PlacementContext<'_, E>) -> Vec<f64>>,
}

// The boxed strategies are 'static trait objects, so the element type
// they close over must be too.
impl<E: 'static> Default for CostModel<E> {
    fn default() -> Self {
        Self {
            ratio_diff_weight: DEFAULT_RATIO_DIFF_WEIGHT,
            cost_of_empty_cell: DEFAULT_COST_OF_EMPTY_CELL,
            cost_of_unexplored: Box::new(|_| DEFAULT_COST_OF_UNEXPLORED),
            skip_multiplier: Box::new(|_| 1.0),
            placement_costs: Box::new(default_placement_costs),
        }
    }
}

impl<E> CostModel<E> {
    /// Penalty for a finished layout leaving `free_cells` of the grid
    /// unused.
    pub fn empty_cell_penalty(&self, free_cells: u32, grid: Size) -> f64 {
        free_cells as f64 / grid.area() as f64 * self.cost_of_empty_cell
    }
}

/// Default placement-quality multipliers: the area mismatch plus the
/// candidate's horizontal and vertical offset from the grid center.
fn default_placement_costs<E>(ctx: &PlacementContext<'_, E>) -> Vec<f64> {
    let position = ctx.position;
    let center_x = (position.left as f64 + position.width as f64 / 2.0) / ctx.grid.width as f64;
    let center_y = (position.top as f64 + position.height as f64 / 2.0) / ctx.grid.height as f64;
    vec![
        ctx.ratio_diff_multiplier,
        (0.5 - center_x).abs() * CENTER_DISTANCE_WEIGHT,
        (0.5 - center_y).abs() * CENTER_DISTANCE_WEIGHT,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_is_zero_only_for_all_zero() {
        assert_eq!(combine_multipliers(&[0.0, 0.0, 0.0]), 0.0);
        assert!(combine_multipliers(&[0.0, 0.1, 0.0]) > 0.0);
    }

    #[test]
    fn combine_saturates_at_one() {
        assert!((combine_multipliers(&[1.0, 0.3]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn combine_matches_probabilistic_or() {
        let combined = combine_multipliers(&[0.5, 0.5]);
        assert!((combined - 0.75).abs() < 1e-12);
    }

    #[test]
    fn combine_is_monotone() {
        assert!(combine_multipliers(&[0.2, 0.3]) < combine_multipliers(&[0.2, 0.4]));
    }

    #[test]
    fn ratio_diff_is_zero_on_exact_match() {
        assert_eq!(ratio_diff_multiplier(0.5, 0.5, 0.1), 0.0);
    }

    #[test]
    fn ratio_diff_is_symmetric_and_weighted() {
        let a = ratio_diff_multiplier(0.25, 0.5, 0.1);
        let b = ratio_diff_multiplier(0.5, 0.25, 0.1);
        assert!((a - b).abs() < 1e-12);
        // Class half/twice the share: closeness 0.5 scaled by 0.1.
        assert!((a - 0.05).abs() < 1e-12);
    }

    #[test]
    fn default_placement_costs_vanish_at_center() {
        let ctx = PlacementContext::<()> {
            element: &(),
            position: Rect::new(0, 0, 4, 3),
            grid: Size::new(4, 3),
            ratio_diff_multiplier: 0.0,
        };
        let costs = default_placement_costs(&ctx);
        assert_eq!(costs.len(), 3);
        assert!(costs.iter().all(|c| c.abs() < 1e-12));
    }

    #[test]
    fn default_placement_costs_penalize_off_center() {
        let ctx = PlacementContext::<()> {
            element: &(),
            position: Rect::new(0, 0, 1, 1),
            grid: Size::new(4, 3),
            ratio_diff_multiplier: 0.0,
        };
        let costs = default_placement_costs(&ctx);
        // x offset |0.5 - 0.125| * 0.02, y offset |0.5 - 1/6| * 0.02.
        assert!((costs[1] - 0.0075).abs() < 1e-12);
        assert!((costs[2] - (0.5 - 1.0 / 6.0) * 0.02).abs() < 1e-12);
    }

    #[test]
    fn default_model_builds_for_owned_element_types() {
        let model = CostModel::<String>::default();
        let element = "pane".to_string();
        assert_eq!(
            (model.cost_of_unexplored)(&element),
            DEFAULT_COST_OF_UNEXPLORED
        );
        assert_eq!((model.skip_multiplier)(&element), 1.0);
    }

    #[test]
    fn empty_cell_penalty_scales_with_free_fraction() {
        let model = CostModel::<()>::default();
        let penalty = model.empty_cell_penalty(4, Size::new(4, 3));
        assert!((penalty - 4.0 / 12.0 * 0.75).abs() < 1e-12);
        assert_eq!(model.empty_cell_penalty(0, Size::new(4, 3)), 0.0);
    }
}
