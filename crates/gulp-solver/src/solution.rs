use std::collections::BTreeMap;

use crate::constants::{Sense, Status};
use crate::model::VariableKind;
use crate::tableau::Tableau;

/// The result of solving a linear program
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Solution status
    pub status: Status,
    /// Optimal objective value in the caller's sense, only set when optimal
    pub objective_value: Option<f64>,
    /// Value of every decision variable, only set when optimal
    pub values: BTreeMap<String, f64>,
    /// Pivots performed
    pub iterations: usize,
}

impl Solution {
    pub fn not_solved() -> Self {
        Self::without_values(Status::NotSolved, 0)
    }

    pub fn infeasible(iterations: usize) -> Self {
        Self::without_values(Status::Infeasible, iterations)
    }

    pub fn unbounded(iterations: usize) -> Self {
        Self::without_values(Status::Unbounded, iterations)
    }

    pub fn undefined(iterations: usize) -> Self {
        Self::without_values(Status::Undefined, iterations)
    }

    fn without_values(status: Status, iterations: usize) -> Self {
        Self {
            status,
            objective_value: None,
            values: BTreeMap::new(),
            iterations,
        }
    }

    /// Read the final tableau.
    ///
    /// A tableau that stopped optimal but still has an artificial variable
    /// basic above `tolerance`, relative to the magnitude of its row,
    /// describes an infeasible program. The reported value counts decision
    /// variables only.
    pub fn extract(tableau: &Tableau, status: Status, sense: Sense, iterations: usize, tolerance: f64) -> Self {
        match status {
            Status::Optimal => {}
            Status::Unbounded => return Self::unbounded(iterations),
            Status::Infeasible => return Self::infeasible(iterations),
            Status::Undefined | Status::NotSolved => return Self::undefined(iterations),
        }

        let columns = tableau.columns();
        let stuck = tableau
            .basis()
            .iter()
            .zip(tableau.rhs())
            .enumerate()
            .find(|&(row, (&col, &value))| {
                columns.kind(col) == VariableKind::Artificial && value > tolerance * tableau.row_scale(row)
            });
        if let Some((_, (&col, &value))) = stuck {
            tracing::debug!(
                component = "solution",
                artificial = columns.name(col),
                value,
                "Artificial variable remains basic"
            );
            return Self::infeasible(iterations);
        }

        let mut values: BTreeMap<String, f64> = columns
            .names()
            .iter()
            .enumerate()
            .filter(|&(col, _)| columns.kind(col) == VariableKind::Decision)
            .map(|(_, name)| (name.clone(), 0.0))
            .collect();
        for (&col, &value) in tableau.basis().iter().zip(tableau.rhs()) {
            if columns.kind(col) == VariableKind::Decision {
                let value = if value.abs() <= tolerance { 0.0 } else { value };
                values.insert(columns.name(col).to_string(), value);
            }
        }

        Self {
            status: Status::Optimal,
            objective_value: Some(tableau.decision_value() * sense.sign()),
            values,
            iterations,
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }
}
