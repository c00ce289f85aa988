use std::ops::{BitAnd, Not};

use tracing::trace;

use crate::plate::Plate;

/// Largest working set the subset search will enumerate.
///
/// The search visits every submask, so cost doubles with each plate. Real
/// loads sit well under ten plates per side.
pub const MAX_WORKING_PLATES: usize = 24;

/// Which positions of the working set's plates are loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SubsetMask(u64);

impl SubsetMask {
    pub const EMPTY: SubsetMask = SubsetMask(0);

    /// Every position of a `len` plate working set.
    #[must_use]
    pub fn full(len: usize) -> Self {
        debug_assert!(len < 64);
        SubsetMask((1u64 << len) - 1)
    }

    #[must_use]
    pub fn bits(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index < 64 && self.0 & (1 << index) != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_subset_of(self, other: SubsetMask) -> bool {
        self.0 & !other.0 == 0
    }

    /// All masks contained in `self`, from `self` down to the empty mask.
    pub fn submasks(self) -> Submasks {
        Submasks {
            within: self,
            next: Some(self),
        }
    }
}

impl BitAnd for SubsetMask {
    type Output = SubsetMask;

    fn bitand(self, rhs: Self) -> Self::Output {
        SubsetMask(self.0 & rhs.0)
    }
}

impl Not for SubsetMask {
    type Output = SubsetMask;

    fn not(self) -> Self::Output {
        SubsetMask(!self.0)
    }
}

pub struct Submasks {
    within: SubsetMask,
    next: Option<SubsetMask>,
}

impl Iterator for Submasks {
    type Item = SubsetMask;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current.is_empty() {
            None
        } else {
            Some(SubsetMask((current.0 - 1) & self.within.0))
        };
        Some(current)
    }
}

pub fn subset_weight(plates: &[Plate], mask: SubsetMask) -> f64 {
    plates
        .iter()
        .enumerate()
        .filter(|(i, _)| mask.contains(*i))
        .map(|(_, plate)| plate.weight())
        .sum()
}

/// The masked plates, in working set order.
pub fn subset_plates(plates: &[Plate], mask: SubsetMask) -> Vec<Plate> {
    plates
        .iter()
        .enumerate()
        .filter(|(i, _)| mask.contains(*i))
        .map(|(_, plate)| *plate)
        .collect()
}

/// Finds the selection of `plates`, restricted to `within`, whose weight is
/// closest to `target_per_side`.
///
/// Every submask is tried, from `within` down to the empty mask. On a tie the
/// candidate that doesn't exceed the target wins, so a warmup never lands
/// over its percentage when an equally close lighter load exists.
#[allow(clippy::float_cmp)]
pub fn best_subset_for_target(
    plates: &[Plate],
    target_per_side: f64,
    within: SubsetMask,
) -> SubsetMask {
    let mut best_mask = SubsetMask::EMPTY;
    let mut best_diff = f64::INFINITY;

    for mask in within.submasks() {
        let weight = subset_weight(plates, mask);
        let diff = (weight - target_per_side).abs();
        if diff < best_diff || (diff == best_diff && weight <= target_per_side) {
            best_diff = diff;
            best_mask = mask;
        }
    }

    trace!(target_per_side, mask = best_mask.bits(), best_diff, "best subset");
    best_mask
}
