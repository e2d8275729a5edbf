//! Built-in sample programs.

use gulp_solver::{ConstraintType, Expression, LinearProgram, ProgramError, Sense, Variable};

pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Result<LinearProgram, ProgramError>,
}

impl Sample {
    pub fn build(&self) -> Result<LinearProgram, ProgramError> {
        (self.build)()
    }
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "fruit",
        description: "Maximize 7 * Apples + 6 * Bananas under two capacity limits",
        build: fruit,
    },
    Sample {
        name: "mixed",
        description: "Minimize with <=, flipped and = constraints",
        build: mixed,
    },
    Sample {
        name: "infeasible",
        description: "x >= 5 and x <= 3",
        build: infeasible,
    },
    Sample {
        name: "unbounded",
        description: "Maximize x1 with only x2 limited",
        build: unbounded,
    },
];

pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name == name)
}

fn expr(coefs: &[f64], vars: &[Variable]) -> Expression {
    coefs.iter().zip(vars).map(|(&c, v)| c * v).collect()
}

fn fruit() -> Result<LinearProgram, ProgramError> {
    let v = [Variable::new("Apples"), Variable::new("Bananas")];
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Maximize, expr(&[7.0, 6.0], &v))?
        .add_constraint(expr(&[2.0, 4.0], &v), ConstraintType::Le, 16.0)?
        .add_constraint(expr(&[3.0, 2.0], &v), ConstraintType::Le, 12.0)?;
    Ok(lp)
}

fn mixed() -> Result<LinearProgram, ProgramError> {
    let v = [Variable::new("x1"), Variable::new("x2"), Variable::new("x3")];
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Minimize, expr(&[-6.0, 7.0, 4.0], &v))?
        .add_constraint(expr(&[2.0, 5.0, -1.0], &v), ConstraintType::Le, 18.0)?
        .add_constraint(expr(&[1.0, -1.0, -2.0], &v), ConstraintType::Le, -14.0)?
        .add_constraint(expr(&[3.0, 2.0, 2.0], &v), ConstraintType::Eq, 26.0)?;
    Ok(lp)
}

fn infeasible() -> Result<LinearProgram, ProgramError> {
    let v = [Variable::new("x")];
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Minimize, expr(&[1.0], &v))?
        .add_constraint(expr(&[1.0], &v), ConstraintType::Ge, 5.0)?
        .add_constraint(expr(&[1.0], &v), ConstraintType::Le, 3.0)?;
    Ok(lp)
}

fn unbounded() -> Result<LinearProgram, ProgramError> {
    let v = [Variable::new("x1"), Variable::new("x2")];
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Maximize, expr(&[1.0], &v[..1]))?
        .add_constraint(expr(&[1.0], &v[1..]), ConstraintType::Le, 5.0)?;
    Ok(lp)
}
