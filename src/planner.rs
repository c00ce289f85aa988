use itertools::Itertools;
use tracing::debug;

use crate::{
    delta_type::DeltaType,
    greedy::select_plates,
    plan_error::PlanError,
    plate::Plate,
    plate_rack::PlateRack,
    progression::Progression,
    subset_mask::{SubsetMask, best_subset_for_target, subset_plates, subset_weight},
    workout_set::WorkoutSet,
};

/// How many percentage points a warmup may fall short before it gets an
/// extra plate.
pub const UNDERSHOOT_TOLERANCE: f64 = 10.0;

pub const WORKING_LABEL: &str = "Working";

/// Plans warmup progressions for one bar and plate rack.
#[derive(Clone, Debug, PartialEq)]
pub struct Planner {
    bar_weight: f64,
    rack: PlateRack,
}

/// What sits on one side of the bar for a set: some of the working plates,
/// plus at most one corrective plate from the rack.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Loaded {
    mask: SubsetMask,
    extra: Option<Plate>,
}

impl Loaded {
    fn per_side(self, working: &[Plate]) -> f64 {
        subset_weight(working, self.mask) + self.extra.map_or(0.0, |p| p.weight())
    }

    fn plates(self, working: &[Plate]) -> Vec<Plate> {
        let mut plates = subset_plates(working, self.mask);
        plates.extend(self.extra);
        descending(plates)
    }

    fn is_empty(self) -> bool {
        self.mask.is_empty() && self.extra.is_none()
    }
}

impl Planner {
    ///
    /// # Errors
    /// If the bar weight is negative or not finite.
    ///
    pub fn new(bar_weight: f64, rack: PlateRack) -> Result<Self, PlanError> {
        check_weight(bar_weight)?;
        Ok(Planner { bar_weight, rack })
    }

    #[must_use]
    pub fn bar_weight(&self) -> f64 {
        self.bar_weight
    }

    #[must_use]
    pub fn rack(&self) -> &PlateRack {
        &self.rack
    }

    ///
    /// Builds the warmups (ascending) and the working set for `target_weight`.
    ///
    /// # Errors
    /// If the target is lighter than the bar, a weight or percentage is not a
    /// usable number, or the working set needs more plates than the subset
    /// search supports.
    ///
    pub fn plan(&self, target_weight: f64, warmups: &[f64]) -> Result<Progression, PlanError> {
        check_weight(target_weight)?;
        if let Some(&bad) = warmups.iter().find(|pct| !pct.is_finite()) {
            return Err(PlanError::InvalidPercentage(bad));
        }

        let bar = self.bar_weight;
        if target_weight < bar {
            return Err(PlanError::TargetBelowBar {
                bar,
                target: target_weight,
            });
        }

        #[allow(clippy::float_cmp)]
        let bar_only = target_weight == bar;
        if bar_only {
            return Ok(Progression::new(vec![self.workout_set(
                WORKING_LABEL.to_string(),
                100.0,
                target_weight,
                &[],
                Loaded::default(),
                Loaded::default(),
            )]));
        }

        let working = select_plates((target_weight - bar) / 2.0, &self.rack)?;
        debug!(
            target_weight,
            per_side = working.actual,
            plates = working.plates.len(),
            "selected working plates"
        );

        let working_mask = SubsetMask::full(working.plates.len());
        let pcts = warmups
            .iter()
            .copied()
            .sorted_by(f64::total_cmp)
            .collect::<Vec<_>>();

        let masks = self.warmup_masks(&working.plates, working_mask, target_weight, &pcts);
        let extras = self.corrections(&working.plates, working_mask, target_weight, &pcts, &masks);

        let mut sets = Vec::with_capacity(pcts.len() + 1);
        let mut previous = Loaded::default();

        for ((&pct, &mask), &extra) in pcts.iter().zip(&masks).zip(&extras) {
            let current = Loaded { mask, extra };
            sets.push(self.workout_set(
                format!("Warmup {pct}%"),
                pct,
                (target_weight * pct / 100.0).round(),
                &working.plates,
                previous,
                current,
            ));
            previous = current;
        }

        sets.push(self.workout_set(
            WORKING_LABEL.to_string(),
            100.0,
            target_weight,
            &working.plates,
            previous,
            Loaded {
                mask: working_mask,
                extra: None,
            },
        ));

        debug!(sets = sets.len(), "planned progression");
        Ok(Progression::new(sets))
    }

    /// Picks each warmup's plates from the next heavier set's, heaviest
    /// warmup first, so every lighter set nests inside the one after it.
    fn warmup_masks(
        &self,
        working: &[Plate],
        working_mask: SubsetMask,
        target_weight: f64,
        pcts: &[f64],
    ) -> Vec<SubsetMask> {
        let mut masks = vec![SubsetMask::EMPTY; pcts.len()];
        let mut within = working_mask;

        for (i, pct) in pcts.iter().enumerate().rev() {
            let per_side = (target_weight * pct / 100.0 - self.bar_weight) / 2.0;
            masks[i] = if per_side <= 0.0 {
                SubsetMask::EMPTY
            } else {
                best_subset_for_target(working, per_side, within)
            };
            within = masks[i];
        }

        masks
    }

    fn corrections(
        &self,
        working: &[Plate],
        working_mask: SubsetMask,
        target_weight: f64,
        pcts: &[f64],
        masks: &[SubsetMask],
    ) -> Vec<Option<Plate>> {
        pcts.iter()
            .enumerate()
            .map(|(i, &pct)| {
                let per_side = subset_weight(working, masks[i]);
                let ceiling = subset_weight(
                    working,
                    masks.get(i + 1).copied().unwrap_or(working_mask),
                );
                self.correction(target_weight, pct, per_side, ceiling)
            })
            .collect()
    }

    /// Finds one plate that lifts an undershooting warmup back toward its
    /// percentage while staying strictly under `ceiling` per side.
    ///
    /// Plates are tried lightest first and the first one that lands within
    /// tolerance wins. Failing that, the closest plate tried is taken.
    fn correction(
        &self,
        target_weight: f64,
        pct: f64,
        per_side: f64,
        ceiling: f64,
    ) -> Option<Plate> {
        let actual_pct = self.percentage_of(target_weight, per_side);
        if actual_pct >= pct - UNDERSHOOT_TOLERANCE {
            return None;
        }

        let mut best = None;
        let mut best_diff = f64::INFINITY;

        for plate in self.rack.ascending() {
            let loaded = per_side + plate.weight();
            if loaded >= ceiling {
                continue;
            }

            let diff = (self.percentage_of(target_weight, loaded) - pct).abs();
            if diff <= UNDERSHOOT_TOLERANCE {
                debug!(pct, actual_pct, extra = plate.weight(), "corrected undershooting warmup");
                return Some(plate);
            }
            if diff < best_diff {
                best_diff = diff;
                best = Some(plate);
            }
        }

        if let Some(plate) = best {
            debug!(pct, actual_pct, extra = plate.weight(), "closest correction for warmup");
        }
        best
    }

    fn percentage_of(&self, target_weight: f64, per_side: f64) -> f64 {
        (self.bar_weight + per_side * 2.0) / target_weight * 100.0
    }

    fn workout_set(
        &self,
        label: String,
        pct: f64,
        target: f64,
        working: &[Plate],
        previous: Loaded,
        current: Loaded,
    ) -> WorkoutSet {
        let mut delta = subset_plates(working, current.mask & !previous.mask);
        let mut remove_delta = Vec::new();

        if current.extra != previous.extra {
            delta.extend(current.extra);
            remove_delta.extend(previous.extra);
        }

        let delta_type = if !remove_delta.is_empty() {
            DeltaType::Swap
        } else if previous.is_empty() {
            DeltaType::Load
        } else {
            DeltaType::Add
        };

        WorkoutSet {
            label,
            pct,
            target,
            actual: self.bar_weight + current.per_side(working) * 2.0,
            plates: current.plates(working),
            delta: descending(delta),
            remove_delta: descending(remove_delta),
            delta_type,
        }
    }
}

///
/// Plans a progression from raw inputs.
///
/// # Errors
/// See [`PlateRack::new`], [`Planner::new`] and [`Planner::plan`].
///
pub fn plan(
    bar_weight: f64,
    target_weight: f64,
    warmups: &[f64],
    available: &[f64],
) -> Result<Progression, PlanError> {
    Planner::new(bar_weight, PlateRack::new(available)?)?.plan(target_weight, warmups)
}

fn check_weight(weight: f64) -> Result<(), PlanError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidWeight(weight))
    }
}

fn descending(plates: Vec<Plate>) -> Vec<Plate> {
    plates.into_iter().sorted_by(|a, b| b.cmp(a)).collect()
}
