use std::collections::HashMap;

use crate::config::SolverConfig;
use crate::constants::Status;
use crate::error::ProgramError;
use crate::model::{Expression, VariableKind};
use crate::problem::Constraint;

/// Column layout shared by the objective row and every constraint row
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    names: Vec<String>,
    kinds: Vec<VariableKind>,
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Register `name`, returning its column; repeated names map to the first column.
    fn insert(&mut self, name: &str, kind: VariableKind) -> usize {
        if let Some(&col) = self.positions.get(name) {
            return col;
        }
        let col = self.names.len();
        self.names.push(name.to_string());
        self.kinds.push(kind);
        self.positions.insert(name.to_string(), col);
        col
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn name(&self, col: usize) -> &str {
        &self.names[col]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn kind(&self, col: usize) -> VariableKind {
        self.kinds[col]
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}

/// Result of one call to [`Tableau::pivot`]
#[derive(Debug, Clone, PartialEq)]
pub enum PivotOutcome {
    /// A basis exchange happened
    Pivoted {
        entering: usize,
        leaving_row: usize,
        outgoing: String,
    },
    /// No reduced cost is positive
    Optimal,
    /// The entering column has no positive entry, so it can grow forever
    Unbounded { entering: usize },
}

/// Dense simplex tableau for a program in standard form
///
/// Owned by a single solve. `basis[row]` is the column currently basic in
/// `row` and `basis_values[row]` its objective coefficient.
///
/// Each row is divided by the power of two nearest its largest decision
/// coefficient, so the rows hold the same feasible set with entries near 1.
/// Slack and artificial entries stay at ±1.
#[derive(Debug, Clone)]
pub struct Tableau {
    columns: ColumnIndex,
    objective_row: Vec<f64>,
    rows: Vec<Vec<f64>>,
    rhs: Vec<f64>,
    /// Magnitude of each initial row, used to judge a leftover artificial
    row_scales: Vec<f64>,
    basis: Vec<usize>,
    basis_values: Vec<f64>,
    z_row: Vec<f64>,
    reduced_costs: Vec<f64>,
    value: f64,
}

impl Tableau {
    /// Build the initial tableau from the augmented objective and its standard-form constraints.
    pub fn new(objective: &Expression, constraints: &[Constraint]) -> Result<Self, ProgramError> {
        let mut columns = ColumnIndex::default();
        let mut objective_row = Vec::with_capacity(objective.len());
        for term in objective.terms() {
            let col = columns.insert(term.variable.name(), term.variable.kind());
            if col == objective_row.len() {
                objective_row.push(0.0);
            }
            objective_row[col] += term.coefficient;
        }

        let mut rows = Vec::with_capacity(constraints.len());
        let mut rhs = Vec::with_capacity(constraints.len());
        let mut row_scales = Vec::with_capacity(constraints.len());
        for c in constraints {
            let mut row = vec![0.0; columns.len()];
            for term in c.expression.terms() {
                // Every constraint variable was registered in the objective when the constraint was added.
                if let Some(col) = columns.position(term.variable.name()) {
                    row[col] += term.coefficient;
                }
            }
            let mut b = c.rhs;
            let divisor = Self::equilibration(&columns, &row);
            if divisor != 1.0 {
                for (col, v) in row.iter_mut().enumerate() {
                    if columns.kind(col) == VariableKind::Decision {
                        *v /= divisor;
                    }
                }
                b /= divisor;
            }
            let largest = row.iter().fold(b.abs(), |acc, v| acc.max(v.abs()));
            row_scales.push(largest.max(1.0));
            rows.push(row);
            rhs.push(b);
        }

        let mut basis = Vec::with_capacity(rows.len());
        for i in 0..rows.len() {
            let col = Self::unit_column(&rows, i).ok_or(ProgramError::NoInitialBasis(i + 1))?;
            basis.push(col);
        }
        let basis_values = basis.iter().map(|&col| objective_row[col]).collect();

        let n_cols = columns.len();
        let mut tableau = Self {
            columns,
            objective_row,
            rows,
            rhs,
            row_scales,
            basis,
            basis_values,
            z_row: vec![0.0; n_cols],
            reduced_costs: vec![0.0; n_cols],
            value: 0.0,
        };
        tableau.price();

        tracing::debug!(
            component = "tableau",
            operation = "build",
            rows = tableau.rows.len(),
            columns = n_cols,
            basis = ?tableau.basis_names(),
            value = tableau.value,
            "Built initial tableau"
        );
        Ok(tableau)
    }

    /// Power of two nearest the largest decision coefficient of `row`; 1 for a row without one
    fn equilibration(columns: &ColumnIndex, row: &[f64]) -> f64 {
        let largest = row
            .iter()
            .enumerate()
            .filter(|&(col, _)| columns.kind(col) == VariableKind::Decision)
            .fold(0.0_f64, |acc, (_, v)| acc.max(v.abs()));
        if largest == 0.0 {
            1.0
        } else {
            largest.log2().round().exp2()
        }
    }

    /// Last column of `row` that is 1 there and 0 in every other row
    fn unit_column(rows: &[Vec<f64>], row: usize) -> Option<usize> {
        (0..rows[row].len()).rev().find(|&col| {
            rows[row][col] == 1.0
                && rows
                    .iter()
                    .enumerate()
                    .all(|(k, other)| k == row || other[col] == 0.0)
        })
    }

    /// Recompute the Z row, reduced costs and objective value from the current basis.
    fn price(&mut self) {
        for j in 0..self.columns.len() {
            let z: f64 = self
                .rows
                .iter()
                .zip(&self.basis_values)
                .map(|(row, &cb)| row[j] * cb)
                .sum();
            self.z_row[j] = z;
            self.reduced_costs[j] = self.objective_row[j] - z;
        }
        self.value = self
            .rhs
            .iter()
            .zip(&self.basis_values)
            .map(|(&b, &cb)| b * cb)
            .sum();
    }

    /// True when no reduced cost exceeds `tolerance`.
    pub fn is_optimal(&self, tolerance: f64) -> bool {
        self.reduced_costs.iter().all(|&rc| rc <= tolerance)
    }

    /// First column with the strictly largest reduced cost above `tolerance`
    fn entering_column(&self, tolerance: f64) -> Option<usize> {
        let mut max_val = tolerance;
        let mut max_col = None;

        for (j, &rc) in self.reduced_costs.iter().enumerate() {
            if rc > max_val {
                max_val = rc;
                max_col = Some(j);
            }
        }

        max_col
    }

    /// Minimum ratio test over rows with a positive entry in `col`; ties keep the first row.
    fn leaving_row(&self, col: usize, tolerance: f64) -> Option<usize> {
        let mut min_ratio = f64::INFINITY;
        let mut min_row = None;

        for (i, row) in self.rows.iter().enumerate() {
            let val = row[col];
            if val > tolerance {
                let ratio = self.rhs[i] / val;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    min_row = Some(i);
                }
            }
        }

        min_row
    }

    /// Perform one simplex iteration.
    pub fn pivot(&mut self, tolerance: f64) -> PivotOutcome {
        let Some(col) = self.entering_column(tolerance) else {
            return PivotOutcome::Optimal;
        };
        let Some(row) = self.leaving_row(col, tolerance) else {
            return PivotOutcome::Unbounded { entering: col };
        };

        let outgoing = self.basis[row];
        self.basis[row] = col;
        self.basis_values[row] = self.objective_row[col];

        // An expelled artificial may never come back.
        if self.columns.kind(outgoing) == VariableKind::Artificial {
            self.objective_row[outgoing] = 0.0;
            for r in &mut self.rows {
                r[outgoing] = 0.0;
            }
            self.z_row[outgoing] = 0.0;
            self.reduced_costs[outgoing] = 0.0;
        }

        // Scale pivot row
        let pivot_val = self.rows[row][col];
        for v in &mut self.rows[row] {
            *v /= pivot_val;
        }
        self.rhs[row] /= pivot_val;

        // Eliminate column in other rows
        let pivot_row = self.rows[row].clone();
        let pivot_rhs = self.rhs[row];
        for (i, r) in self.rows.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = r[col];
            if factor == 0.0 {
                continue;
            }
            for (v, &p) in r.iter_mut().zip(&pivot_row) {
                *v -= factor * p;
            }
            self.rhs[i] -= factor * pivot_rhs;
        }

        self.price();

        PivotOutcome::Pivoted {
            entering: col,
            leaving_row: row,
            outgoing: self.columns.name(outgoing).to_string(),
        }
    }

    /// Pivot until optimal, unbounded or out of iterations.
    ///
    /// Returns the terminal status and the number of pivots performed.
    /// `Optimal` here only means no column can enter; whether an artificial
    /// is still carrying weight is decided when the solution is extracted.
    pub fn optimize(&mut self, config: &SolverConfig) -> (Status, usize) {
        let mut iterations = 0;
        loop {
            if iterations >= config.max_iterations && !self.is_optimal(config.tolerance) {
                tracing::warn!(
                    component = "tableau",
                    max_iterations = config.max_iterations,
                    value = self.value,
                    "Iteration limit reached"
                );
                return (Status::Undefined, iterations);
            }

            match self.pivot(config.tolerance) {
                PivotOutcome::Optimal => return (Status::Optimal, iterations),
                PivotOutcome::Unbounded { entering } => {
                    tracing::debug!(
                        component = "tableau",
                        column = self.columns.name(entering),
                        "No positive entry in entering column"
                    );
                    return (Status::Unbounded, iterations);
                }
                PivotOutcome::Pivoted { entering, leaving_row, outgoing } => {
                    iterations += 1;
                    tracing::trace!(
                        component = "tableau",
                        iteration = iterations,
                        entering = self.columns.name(entering),
                        leaving_row,
                        outgoing = %outgoing,
                        value = self.value,
                        "Pivoted"
                    );
                    tracing::trace!("\n{}", self);
                }
            }
        }
    }

    pub fn columns(&self) -> &ColumnIndex {
        &self.columns
    }

    pub fn objective_row(&self) -> &[f64] {
        &self.objective_row
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    pub fn basis_names(&self) -> Vec<&str> {
        self.basis.iter().map(|&col| self.columns.name(col)).collect()
    }

    pub fn basis_values(&self) -> &[f64] {
        &self.basis_values
    }

    pub fn z_row(&self) -> &[f64] {
        &self.z_row
    }

    pub fn reduced_costs(&self) -> &[f64] {
        &self.reduced_costs
    }

    /// Objective value of the current basic solution, maximization form
    ///
    /// Includes the penalty of any artificial still in the basis.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Objective value contributed by basic decision variables only
    pub fn decision_value(&self) -> f64 {
        self.basis
            .iter()
            .zip(&self.rhs)
            .zip(&self.basis_values)
            .filter(|&((&col, _), _)| self.columns.kind(col) == VariableKind::Decision)
            .map(|((_, &b), &cb)| b * cb)
            .sum()
    }

    /// Largest magnitude in the initial `row`, at least 1
    pub fn row_scale(&self, row: usize) -> f64 {
        self.row_scales[row]
    }
}
