use itertools::Itertools;

use crate::{plan_error::PlanError, plate::Plate};

/// The plate denominations on hand. Quantities are unlimited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlateRack {
    ascending: Vec<Plate>,
}

impl PlateRack {
    ///
    /// # Errors
    /// If `weights` is empty or contains a weight that is not a positive, finite number.
    ///
    pub fn new(weights: &[f64]) -> Result<Self, PlanError> {
        if weights.is_empty() {
            return Err(PlanError::NoPlates);
        }

        if let Some(&bad) = weights.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            return Err(PlanError::InvalidPlate(bad));
        }

        Ok(PlateRack {
            ascending: Plate::from_weights(weights).into_iter().sorted().collect(),
        })
    }

    /// Standard pound plates: 45, 25, 10, 5, 2.5 and 1.25.
    #[must_use]
    pub fn standard() -> Self {
        PlateRack {
            ascending: Plate::from_weights(&[1.25, 2.5, 5.0, 10.0, 25.0, 45.0]),
        }
    }

    pub fn ascending(&self) -> impl Iterator<Item = Plate> + '_ {
        self.ascending.iter().copied()
    }

    pub fn descending(&self) -> impl Iterator<Item = Plate> + '_ {
        self.ascending.iter().rev().copied()
    }

    #[must_use]
    pub fn smallest(&self) -> Plate {
        // Non-empty by construction.
        self.ascending[0]
    }

    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.ascending.iter().map(Plate::weight).collect()
    }
}
