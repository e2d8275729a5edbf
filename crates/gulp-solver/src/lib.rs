//! Linear programs solved with the Big-M simplex method on a dense tableau.

mod config;
mod constants;
mod display;
mod error;
mod model;
mod problem;
mod solution;
mod tableau;

pub use config::SolverConfig;
pub use constants::{Category, ConstraintType, Sense, Status};
pub use error::ProgramError;
pub use model::{Expression, Term, Variable, VariableKind};
pub use problem::{Constraint, LinearProgram};
pub use solution::Solution;
pub use tableau::{ColumnIndex, PivotOutcome, Tableau};
