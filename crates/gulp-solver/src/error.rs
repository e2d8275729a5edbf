use thiserror::Error;

use crate::constants::{Category, Status};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProgramError {
    #[error("Objective not set: add a non-empty objective before constraints")]
    ObjectiveNotSet,
    #[error("Objective already set")]
    ObjectiveAlreadySet,
    #[error("Program already solved with status {0}")]
    AlreadySolved(Status),
    #[error("Non-finite coefficient for variable {variable}")]
    NonFiniteCoefficient { variable: String },
    #[error("Non-finite right-hand side: {0}")]
    NonFiniteRhs(f64),
    #[error("Variable {0} conflicts with an existing variable of a different kind")]
    ConflictingVariable(String),
    #[error("Variable {variable} is {category}; only continuous variables can be solved")]
    UnsupportedCategory { variable: String, category: Category },
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
    #[error("Constraint {0} has no unit column to start the basis from")]
    NoInitialBasis(usize),
}
