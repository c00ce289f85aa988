use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{plan_error::PlanError, plate_rack::PlateRack, planner::Planner};

/// Bar, plates and warmup scheme. Missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub bar_weight: f64,
    pub plates: Vec<f64>,
    pub warmups: Vec<f64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            bar_weight: 45.0,
            plates: vec![45.0, 25.0, 10.0, 5.0, 2.5, 1.25],
            warmups: vec![50.0, 75.0],
        }
    }
}

impl PlannerConfig {
    ///
    /// # Errors
    /// If `json` is not a valid config document.
    ///
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    ///
    /// # Errors
    /// If the file can't be read or parsed.
    ///
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("parsing config {}", path.display()))
    }

    ///
    /// # Errors
    /// If the plates or bar weight are unusable.
    ///
    pub fn planner(&self) -> Result<Planner, PlanError> {
        Planner::new(self.bar_weight, PlateRack::new(&self.plates)?)
    }
}
