use tracing::trace;

use crate::{
    plan_error::PlanError, plate::Plate, plate_rack::PlateRack, subset_mask::MAX_WORKING_PLATES,
};

/// Slack for floating point comparisons against the remaining weight.
pub const EPSILON: f64 = 0.001;

/// Plates chosen for one side of the bar and what they add up to.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub plates: Vec<Plate>,
    pub actual: f64,
}

/// Loads `weight_per_side` heaviest plate first.
///
/// When the weight can't be hit exactly, the result is rounded to whichever
/// is nearer: the greedy load, or the greedy load plus one of the smallest
/// plate. Ties keep the lighter load.
///
/// # Errors
/// If the load needs more than [`MAX_WORKING_PLATES`] plates. The count is
/// checked before any plate is taken, so huge targets or tiny plates fail
/// fast instead of looping.
///
pub fn select_plates(weight_per_side: f64, rack: &PlateRack) -> Result<Selection, PlanError> {
    let mut plates = Vec::new();
    let mut remaining = weight_per_side;

    for plate in rack.descending() {
        if remaining < plate.weight() - EPSILON {
            continue;
        }

        #[allow(clippy::cast_possible_truncation)]
        let fits = (((remaining + EPSILON) / plate.weight()).floor() as usize).max(1);
        let count = plates.len().saturating_add(fits);
        if count > MAX_WORKING_PLATES {
            return Err(PlanError::TooManyPlates {
                count,
                max: MAX_WORKING_PLATES,
            });
        }

        while remaining >= plate.weight() - EPSILON {
            if plates.len() == MAX_WORKING_PLATES {
                return Err(PlanError::TooManyPlates {
                    count: count.max(MAX_WORKING_PLATES + 1),
                    max: MAX_WORKING_PLATES,
                });
            }
            plates.push(plate);
            remaining -= plate.weight();
        }
    }

    let actual = Plate::total(&plates);

    if remaining > EPSILON {
        let smallest = rack.smallest();
        let rounded_up = actual + smallest.weight();
        if (rounded_up - weight_per_side).abs() < (actual - weight_per_side).abs() {
            if plates.len() >= MAX_WORKING_PLATES {
                return Err(PlanError::TooManyPlates {
                    count: plates.len() + 1,
                    max: MAX_WORKING_PLATES,
                });
            }
            trace!(weight_per_side, rounded_up, "rounding up with smallest plate");
            plates.push(smallest);
            return Ok(Selection {
                plates,
                actual: rounded_up,
            });
        }
    }

    Ok(Selection { plates, actual })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(selection: &Selection) -> Vec<f64> {
        selection.plates.iter().map(Plate::weight).collect()
    }

    #[test]
    fn two_plates_per_side() {
        let selection = select_plates(90.0, &PlateRack::standard()).unwrap();
        assert_eq!(weights(&selection), vec![45.0, 45.0]);
        assert_eq!(selection.actual, 90.0);
    }

    #[test]
    fn single_plate() {
        let selection = select_plates(45.0, &PlateRack::standard()).unwrap();
        assert_eq!(weights(&selection), vec![45.0]);
        assert_eq!(selection.actual, 45.0);
    }

    #[test]
    fn zero_is_empty() {
        let selection = select_plates(0.0, &PlateRack::standard()).unwrap();
        assert!(selection.plates.is_empty());
        assert_eq!(selection.actual, 0.0);
    }

    #[test]
    fn mixed_plates() {
        let selection = select_plates(22.5, &PlateRack::standard()).unwrap();
        assert_eq!(weights(&selection), vec![10.0, 10.0, 2.5]);
        assert_eq!(selection.actual, 22.5);
    }

    #[test]
    fn inexact_rounds_up_when_closer() {
        let selection = select_plates(1.0, &PlateRack::standard()).unwrap();
        assert_eq!(weights(&selection), vec![1.25]);
        assert_eq!(selection.actual, 1.25);
    }

    #[test]
    fn inexact_rounds_down_when_closer() {
        let selection = select_plates(0.5, &PlateRack::standard()).unwrap();
        assert!(selection.plates.is_empty());
        assert_eq!(selection.actual, 0.0);
    }

    #[test]
    fn tie_rounds_down() {
        // 5 is as far from 2.5 as from 0.
        let rack = PlateRack::new(&[5.0]).unwrap();
        let selection = select_plates(2.5, &rack).unwrap();
        assert!(selection.plates.is_empty());
        assert_eq!(selection.actual, 0.0);
    }

    #[test]
    fn without_largest_plate() {
        let rack = PlateRack::new(&[1.25, 2.5, 5.0, 10.0, 25.0]).unwrap();
        let selection = select_plates(90.0, &rack).unwrap();
        assert_eq!(weights(&selection), vec![25.0, 25.0, 25.0, 10.0, 5.0]);
        assert_eq!(selection.actual, 90.0);
    }

    #[test]
    fn fills_exactly_the_plate_limit() {
        let rack = PlateRack::new(&[1.0]).unwrap();
        let selection = select_plates(24.0, &rack).unwrap();
        assert_eq!(selection.plates.len(), MAX_WORKING_PLATES);
        assert_eq!(selection.actual, 24.0);
    }

    #[test]
    fn huge_target_is_refused_up_front() {
        // Subtracting 1 from 1e18 no longer changes it, so counting one
        // plate at a time would never finish.
        let rack = PlateRack::new(&[1.0]).unwrap();
        assert!(matches!(
            select_plates(1e18, &rack),
            Err(PlanError::TooManyPlates { max: MAX_WORKING_PLATES, .. })
        ));
    }

    #[test]
    fn plate_below_epsilon_is_refused() {
        let rack = PlateRack::new(&[1e-300]).unwrap();
        assert!(matches!(
            select_plates(0.5, &rack),
            Err(PlanError::TooManyPlates { max: MAX_WORKING_PLATES, .. })
        ));
    }

    #[test]
    fn rounding_up_counts_toward_the_limit() {
        // 24 plates of 1, then 0.75 left: rounding up would need a 25th.
        let rack = PlateRack::new(&[1.0]).unwrap();
        assert_eq!(
            select_plates(24.75, &rack),
            Err(PlanError::TooManyPlates {
                count: 25,
                max: MAX_WORKING_PLATES
            })
        );
    }
}
