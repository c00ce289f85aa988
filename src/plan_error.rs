use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("target must be at least bar weight")]
    TargetBelowBar { bar: f64, target: f64 },
    #[error("no plates available")]
    NoPlates,
    #[error("invalid plate weight {0}; plates must be positive")]
    InvalidPlate(f64),
    #[error("invalid weight {0}; weights must be finite and non-negative")]
    InvalidWeight(f64),
    #[error("invalid warmup percentage {0}")]
    InvalidPercentage(f64),
    #[error("working set needs {count} plates per side, at most {max} are supported")]
    TooManyPlates { count: usize, max: usize },
}
