use std::collections::BTreeMap;

use crate::config::SolverConfig;
use crate::constants::{Category, ConstraintType, Sense, Status};
use crate::error::ProgramError;
use crate::model::{Expression, Term, Variable};
use crate::solution::Solution;
use crate::tableau::Tableau;

/// A constraint in standard form
///
/// Once added to a [`LinearProgram`] the type is always `Eq`, the right-hand
/// side is non-negative and the terms end with the slack and/or artificial
/// variable the constraint introduced.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Comparison operator
    pub constraint_type: ConstraintType,
    /// Left-hand side
    pub expression: Expression,
    /// Right-hand side value
    pub rhs: f64,
}

impl Constraint {
    pub fn new(expression: Expression, constraint_type: ConstraintType, rhs: f64) -> Self {
        Self {
            constraint_type,
            expression,
            rhs,
        }
    }
}

/// A linear program built from an objective and a list of constraints
///
/// The objective is kept in maximization form and grows by one term for
/// every variable a constraint introduces, so its terms are the full column
/// set of the tableau.
#[derive(Debug, Clone)]
pub struct LinearProgram {
    config: SolverConfig,
    /// Sense the caller asked for
    sense: Sense,
    /// Objective as the caller wrote it
    declared_objective: Expression,
    /// Augmented objective in maximization form
    objective: Expression,
    constraints: Vec<Constraint>,
    solution: Solution,
}

impl Default for LinearProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearProgram {
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            sense: Sense::Maximize,
            declared_objective: Expression::default(),
            objective: Expression::default(),
            constraints: Vec::new(),
            solution: Solution::not_solved(),
        }
    }

    pub fn with_config(config: SolverConfig) -> Result<Self, ProgramError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Set the objective. Minimization is stored negated; the tableau only maximizes.
    pub fn add_objective(&mut self, sense: Sense, expression: Expression) -> Result<&mut Self, ProgramError> {
        if self.has_objective() {
            return Err(ProgramError::ObjectiveAlreadySet);
        }
        check_finite(&expression)?;
        check_consistent(expression.terms(), &Expression::default())?;

        self.sense = sense;
        self.declared_objective = expression.clone();
        self.objective = expression;
        if sense == Sense::Minimize {
            self.objective.negate();
        }

        tracing::debug!(
            component = "program",
            operation = "add_objective",
            sense = %sense,
            terms = self.objective.len(),
            "Set objective function"
        );
        Ok(self)
    }

    /// Add `expression <type> rhs`, converting it to an equality with a
    /// non-negative right-hand side.
    pub fn add_constraint(
        &mut self,
        expression: Expression,
        constraint_type: ConstraintType,
        rhs: f64,
    ) -> Result<&mut Self, ProgramError> {
        if self.solution.status.is_solved() {
            return Err(ProgramError::AlreadySolved(self.solution.status));
        }
        if !self.has_objective() {
            return Err(ProgramError::ObjectiveNotSet);
        }
        check_finite(&expression)?;
        if !rhs.is_finite() {
            return Err(ProgramError::NonFiniteRhs(rhs));
        }
        check_consistent(expression.terms(), &self.objective)?;

        let index = self.constraints.len() + 1;
        let slack = Variable::slack(index);
        let artificial = Variable::artificial(index);
        for synthesized in [&slack, &artificial] {
            if self.objective.contains(synthesized.name()) || expression.contains(synthesized.name()) {
                return Err(ProgramError::ConflictingVariable(synthesized.name().to_string()));
            }
        }

        let mut expression = expression;
        let mut rhs = rhs;
        let mut constraint_type = constraint_type;
        let flipped = rhs < 0.0;
        if flipped {
            expression.negate();
            rhs = -rhs;
            constraint_type = constraint_type.flipped();
        }

        // Variables first seen here still need a column.
        for variable in expression.variables() {
            if !self.objective.contains(variable.name()) {
                self.objective.push(Term::new(0.0, variable.clone()));
            }
        }

        let mut injected = Vec::new();
        if matches!(constraint_type, ConstraintType::Eq | ConstraintType::Ge) {
            expression.push(Term::new(1.0, artificial.clone()));
            self.objective.push(Term::new(-self.penalty(), artificial.clone()));
            injected.push(artificial.name().to_string());
        }
        if matches!(constraint_type, ConstraintType::Le | ConstraintType::Ge) {
            let sign = if constraint_type == ConstraintType::Le { 1.0 } else { -1.0 };
            expression.push(Term::new(sign, slack.clone()));
            self.objective.push(Term::new(0.0, slack.clone()));
            injected.push(slack.name().to_string());
        }

        tracing::debug!(
            component = "program",
            operation = "add_constraint",
            index,
            relation = %constraint_type,
            flipped,
            rhs,
            injected = ?injected,
            "Added constraint in standard form"
        );

        self.constraints.push(Constraint::new(expression, ConstraintType::Eq, rhs));
        Ok(self)
    }

    /// Run the simplex method and record status, value and solution.
    ///
    /// Unbounded and infeasible programs are reported through [`Status`]; only
    /// misuse of the program is an error.
    pub fn solve(&mut self) -> Result<&mut Self, ProgramError> {
        if self.solution.status.is_solved() {
            return Err(ProgramError::AlreadySolved(self.solution.status));
        }
        if !self.has_objective() {
            return Err(ProgramError::ObjectiveNotSet);
        }
        if let Some(variable) = self
            .variables()
            .into_iter()
            .find(|v| v.category() != Category::Continuous)
        {
            return Err(ProgramError::UnsupportedCategory {
                variable: variable.name().to_string(),
                category: variable.category(),
            });
        }

        let mut tableau = Tableau::new(&self.objective, &self.constraints)?;
        let (status, iterations) = tableau.optimize(&self.config);
        self.solution = Solution::extract(&tableau, status, self.sense, iterations, self.config.tolerance);

        tracing::info!(
            component = "program",
            operation = "solve",
            status = %self.solution.status,
            iterations,
            objective_value = ?self.solution.objective_value,
            "Solve finished"
        );
        Ok(self)
    }

    pub fn has_objective(&self) -> bool {
        !self.declared_objective.is_empty()
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Objective cost of one unit of an artificial variable
    ///
    /// `big_m` times the largest objective coefficient (at least 1), so an
    /// artificial always costs more than any decision variable can earn.
    pub fn penalty(&self) -> f64 {
        let largest = self
            .declared_objective
            .terms()
            .iter()
            .fold(1.0_f64, |acc, t| acc.max(t.coefficient.abs()));
        self.config.big_m * largest
    }

    /// The caller's sense, not the internal maximization one
    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn declared_objective(&self) -> &Expression {
        &self.declared_objective
    }

    /// The augmented maximization-form objective
    pub fn objective(&self) -> &Expression {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Decision variables in column order
    pub fn variables(&self) -> Vec<&Variable> {
        self.objective
            .variables()
            .into_iter()
            .filter(|v| v.is_decision())
            .collect()
    }

    pub fn status(&self) -> Status {
        self.solution.status
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Optimal value in the caller's sense; `None` unless the status is `Optimal`
    pub fn optimal_value(&self) -> Option<f64> {
        self.solution.objective_value
    }

    pub fn values(&self) -> &BTreeMap<String, f64> {
        &self.solution.values
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.solution.values.get(name).copied()
    }

    pub fn iterations(&self) -> usize {
        self.solution.iterations
    }
}

fn check_finite(expression: &Expression) -> Result<(), ProgramError> {
    match expression.terms().iter().find(|t| !t.coefficient.is_finite()) {
        Some(term) => Err(ProgramError::NonFiniteCoefficient {
            variable: term.variable.name().to_string(),
        }),
        None => Ok(()),
    }
}

/// Every name has to denote one variable: same kind and category wherever it appears.
fn check_consistent(terms: &[Term], known: &Expression) -> Result<(), ProgramError> {
    for (i, term) in terms.iter().enumerate() {
        let name = term.variable.name();
        let earlier = known
            .terms()
            .iter()
            .chain(&terms[..i])
            .find(|t| t.variable.name() == name);
        if let Some(existing) = earlier {
            if existing.variable != term.variable {
                return Err(ProgramError::ConflictingVariable(name.to_string()));
            }
        }
    }
    Ok(())
}
