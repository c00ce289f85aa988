use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;

use crate::{delta_type::DeltaType, format::format_weight, plate::Plate};

/// One set of the progression. Plate lists are per side, heaviest first.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub label: String,
    pub pct: f64,
    pub target: f64,
    pub actual: f64,
    pub plates: Vec<Plate>,
    /// Plates put on since the previous set.
    pub delta: Vec<Plate>,
    /// Plates taken off since the previous set. Only set on a swap.
    pub remove_delta: Vec<Plate>,
    pub delta_type: DeltaType,
}

impl WorkoutSet {
    pub fn per_side(&self) -> f64 {
        Plate::total(&self.plates)
    }

    pub fn actual_pct(&self) -> f64 {
        self.actual / self.target * 100.0
    }
}

impl Display for WorkoutSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} [{}] {}",
            self.label,
            format_weight(self.target),
            format_weight(self.actual),
            self.plates.iter().join(", "),
            self.delta_type,
        )?;

        for plate in &self.remove_delta {
            write!(f, " -{plate}")?;
        }
        for plate in &self.delta {
            write!(f, " +{plate}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_set() -> WorkoutSet {
        WorkoutSet {
            label: "Working".to_string(),
            pct: 100.0,
            target: 225.0,
            actual: 225.0,
            plates: Plate::from_weights(&[45.0, 45.0]),
            delta: Plate::from_weights(&[45.0]),
            remove_delta: Plate::from_weights(&[10.0]),
            delta_type: DeltaType::Swap,
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(swap_set()).unwrap();
        assert_eq!(json["removeDelta"], serde_json::json!([10.0]));
        assert_eq!(json["deltaType"], "swap");
        assert_eq!(json["plates"], serde_json::json!([45.0, 45.0]));
    }

    #[test]
    fn display_lists_removals_before_additions() {
        assert_eq!(
            swap_set().to_string(),
            "Working (225): 225 [45, 45] swap -10 +45"
        );
    }

    #[test]
    fn per_side_sums_plates() {
        assert_eq!(swap_set().per_side(), 90.0);
        assert_eq!(swap_set().actual_pct(), 100.0);
    }
}
