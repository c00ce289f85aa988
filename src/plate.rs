use std::{cmp::Ordering, fmt::Display, iter::Sum};

use serde::{Deserialize, Serialize};

use crate::format::format_weight;

/// A single plate loaded on one side of the bar.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate {
    weight: f64,
}

impl Plate {
    pub fn new(weight: f64) -> Self {
        Plate { weight }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn from_weights(weights: &[f64]) -> Vec<Plate> {
        weights.iter().copied().map(Plate::new).collect()
    }

    /// Total weight of a run of plates.
    pub fn total(plates: &[Plate]) -> f64 {
        plates.iter().copied().sum::<Plate>().weight
    }
}

impl PartialEq for Plate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Plate {}

impl PartialOrd for Plate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Plate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl Sum for Plate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Plate::new(0.0), |acc, plate| {
            Plate::new(acc.weight + plate.weight)
        })
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_weight(self.weight))
    }
}
