use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// How the bar changes on the way into a set.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaType {
    /// Plates go onto an empty bar.
    Load,
    /// Plates are only added.
    Add,
    /// A plate comes off before others go on.
    Swap,
}

impl Display for DeltaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeltaType::Load => write!(f, "load"),
            DeltaType::Add => write!(f, "add"),
            DeltaType::Swap => write!(f, "swap"),
        }
    }
}
