use crate::error::{DistributeError, Result};

/// Floor applied when the shifted minimum priority lands on zero,
/// expressed as a fraction of the maximum shifted priority. Keeps every
/// share strictly positive without disturbing the ordering.
pub const ZERO_PRIORITY_FLOOR: f64 = 0.01;

/// One element's normalized share of the grid.
///
/// `index` points back into the caller's element list so the element
/// type never needs to be cloned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementShare {
    pub index: usize,
    pub ratio: f64,
}

/// Map caller priorities into ratios in (0, 1] summing to 1, sorted
/// descending so the highest-priority element is attempted first.
///
/// Negative priorities are shifted up by the absolute minimum before
/// normalizing. If the shifted minimum is exactly zero (including the
/// all-zero input), a floor of [`ZERO_PRIORITY_FLOOR`] times the maximum
/// shifted priority lifts every priority, so no element ever receives a
/// zero share. Ties keep input order (stable sort).
pub fn normalize_priorities<E>(
    elements: &[E],
    get_priority: &dyn Fn(&E) -> f64,
) -> Result<Vec<ElementShare>> {
    if elements.is_empty() {
        return Err(DistributeError::NoElements);
    }

    let mut priorities = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let priority = get_priority(element);
        if !priority.is_finite() {
            return Err(DistributeError::NonFinitePriority { index });
        }
        priorities.push(priority);
    }

    let min = priorities.iter().copied().fold(f64::INFINITY, f64::min);
    if min < 0.0 {
        for priority in &mut priorities {
            *priority += -min;
        }
    }

    let shifted_min = priorities.iter().copied().fold(f64::INFINITY, f64::min);
    if shifted_min == 0.0 {
        let max = priorities.iter().copied().fold(0.0_f64, f64::max);
        let floor = if max > 0.0 {
            max * ZERO_PRIORITY_FLOOR
        } else {
            1.0
        };
        for priority in &mut priorities {
            *priority += floor;
        }
    }

    let sum: f64 = priorities.iter().sum();
    let mut shares: Vec<ElementShare> = priorities
        .into_iter()
        .enumerate()
        .map(|(index, priority)| ElementShare {
            index,
            ratio: priority / sum,
        })
        .collect();
    shares.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(priorities: &[f64]) -> Vec<ElementShare> {
        normalize_priorities(priorities, &|p: &f64| *p).unwrap()
    }

    #[test]
    fn shares_sum_to_one_and_sort_descending() {
        let shares = ratios(&[2.0, 2.0, 1.0, 4.0, 0.5]);
        let sum: f64 = shares.iter().map(|s| s.ratio).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(shares[0].index, 3);
        assert_eq!(shares[4].index, 4);
        for pair in shares.windows(2) {
            assert!(pair[0].ratio >= pair[1].ratio);
        }
    }

    #[test]
    fn ties_keep_input_order() {
        let shares = ratios(&[2.0, 2.0]);
        assert_eq!(shares[0].index, 0);
        assert_eq!(shares[1].index, 1);
        assert!((shares[0].ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn negative_priorities_get_smallest_nonzero_share() {
        let shares = ratios(&[-1.0, 3.0]);
        let sum: f64 = shares.iter().map(|s| s.ratio).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(shares[0].index, 1);
        assert_eq!(shares[1].index, 0);
        assert!(shares[1].ratio > 0.0);
        assert!(shares[1].ratio < shares[0].ratio);
    }

    #[test]
    fn all_zero_priorities_degrade_to_uniform_shares() {
        let shares = ratios(&[0.0, 0.0, 0.0]);
        for share in &shares {
            assert!((share.ratio - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn single_element_takes_full_share() {
        let shares = ratios(&[2.0]);
        assert_eq!(shares.len(), 1);
        assert!((shares[0].ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_empty_input() {
        let err = normalize_priorities::<f64>(&[], &|p| *p).unwrap_err();
        assert!(matches!(err, DistributeError::NoElements));
    }

    #[test]
    fn rejects_non_finite_priority() {
        let err = normalize_priorities(&[1.0, f64::NAN], &|p: &f64| *p).unwrap_err();
        assert!(matches!(
            err,
            DistributeError::NonFinitePriority { index: 1 }
        ));
    }
}
