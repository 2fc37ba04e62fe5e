use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanningError {
    #[error("catalog must not be empty")]
    EmptyCatalog,

    #[error("days must be > 0")]
    ZeroDays,

    #[error("meal types must not be empty")]
    EmptyMealTypes,

    #[error("budget must be finite and > 0, got {0}")]
    InvalidBudget(f64),
}
