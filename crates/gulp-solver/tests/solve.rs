use gulp_solver::{
    ConstraintType, Expression, LinearProgram, ProgramError, Sense, SolverConfig, Status, Variable,
};

fn variables(names: &[&str]) -> Vec<Variable> {
    names.iter().map(|n| Variable::new(*n)).collect()
}

fn expr(coefs: &[f64], vars: &[Variable]) -> Expression {
    coefs.iter().zip(vars).map(|(&c, v)| c * v).collect()
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{} = {} (expected {})",
        what,
        actual,
        expected
    );
}

#[test]
fn test_solve_maximum() {
    // Maximize: 7x1 + 6x2
    // Subject to:
    //   2x1 + 4x2 <= 16
    //   3x1 + 2x2 <= 12
    // Optimal: x1=2, x2=3, obj=32
    let x = variables(&["Apples", "Bananas"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Maximize, expr(&[7.0, 6.0], &x))
        .unwrap()
        .add_constraint(expr(&[2.0, 4.0], &x), ConstraintType::Le, 16.0)
        .unwrap()
        .add_constraint(expr(&[3.0, 2.0], &x), ConstraintType::Le, 12.0)
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(lp.sense(), Sense::Maximize);
    assert_eq!(lp.status(), Status::Optimal);
    assert_close(lp.optimal_value().unwrap(), 32.0, "obj");
    assert_close(lp.value("Apples").unwrap(), 2.0, "Apples");
    assert_close(lp.value("Bananas").unwrap(), 3.0, "Bananas");
    assert_eq!(lp.values().len(), 2);
}

#[test]
fn test_solve_minimum() {
    // Minimize: -6x1 + 7x2 + 4x3
    // Subject to:
    //   2x1 + 5x2 - x3 <= 18
    //   x1 - x2 - 2x3 <= -14
    //   3x1 + 2x2 + 2x3 = 26
    // Optimal: x1=3, x2=0, x3=8.5, obj=16
    let x = variables(&["x1", "x2", "x3"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Minimize, expr(&[-6.0, 7.0, 4.0], &x))
        .unwrap()
        .add_constraint(expr(&[2.0, 5.0, -1.0], &x), ConstraintType::Le, 18.0)
        .unwrap()
        .add_constraint(expr(&[1.0, -1.0, -2.0], &x), ConstraintType::Le, -14.0)
        .unwrap()
        .add_constraint(expr(&[3.0, 2.0, 2.0], &x), ConstraintType::Eq, 26.0)
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(lp.sense(), Sense::Minimize);
    assert_eq!(lp.status(), Status::Optimal);
    assert_close(lp.optimal_value().unwrap(), 16.0, "obj");
    assert_close(lp.value("x1").unwrap(), 3.0, "x1");
    assert_close(lp.value("x2").unwrap(), 0.0, "x2");
    assert_close(lp.value("x3").unwrap(), 8.5, "x3");

    // The reported value matches the caller's objective at the reported point.
    let at_solution = lp.declared_objective().evaluate(|name| lp.value(name));
    assert_close(at_solution, 16.0, "objective at solution");
}

#[test]
fn test_minimization_with_ge() {
    // Minimize: 2x + 3y
    // Subject to:
    //   x + y >= 4
    //   x <= 3
    //   y <= 3
    // Optimal: x=3, y=1, obj=9
    let v = variables(&["x", "y"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Minimize, expr(&[2.0, 3.0], &v))
        .unwrap()
        .add_constraint(expr(&[1.0, 1.0], &v), ConstraintType::Ge, 4.0)
        .unwrap()
        .add_constraint(expr(&[1.0], &v[..1]), ConstraintType::Le, 3.0)
        .unwrap()
        .add_constraint(expr(&[1.0], &v[1..]), ConstraintType::Le, 3.0)
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(lp.status(), Status::Optimal);
    assert_close(lp.optimal_value().unwrap(), 9.0, "obj");
    assert_close(lp.value("x").unwrap(), 3.0, "x");
    assert_close(lp.value("y").unwrap(), 1.0, "y");
}

#[test]
fn test_constraint_before_objective_is_rejected() {
    let x = variables(&["Apples", "Bananas"]);
    let mut lp = LinearProgram::new();
    let result = lp.add_constraint(expr(&[2.0, 4.0], &x), ConstraintType::Le, 16.0);
    assert!(matches!(result, Err(ProgramError::ObjectiveNotSet)));
    assert_eq!(lp.status(), Status::NotSolved);
}

#[test]
fn test_solve_without_objective_is_rejected() {
    let mut lp = LinearProgram::new();
    assert!(matches!(lp.solve(), Err(ProgramError::ObjectiveNotSet)));
}

#[test]
fn test_unbounded_without_upper_limit() {
    // Maximize x1 where only x2 is limited
    let x = variables(&["x1", "x2"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Maximize, expr(&[1.0], &x[..1]))
        .unwrap()
        .add_constraint(expr(&[1.0], &x[1..]), ConstraintType::Le, 5.0)
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(lp.status(), Status::Unbounded);
    assert!(lp.optimal_value().is_none());
    assert!(lp.values().is_empty());
}

#[test]
fn test_unbounded_without_constraints() {
    let x = variables(&["x1"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Maximize, expr(&[1.0], &x)).unwrap().solve().unwrap();
    assert_eq!(lp.status(), Status::Unbounded);
}

#[test]
fn test_unbounded_after_ge_constraint() {
    // Maximize x subject to x >= 2
    let x = variables(&["x"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Maximize, expr(&[1.0], &x))
        .unwrap()
        .add_constraint(expr(&[1.0], &x), ConstraintType::Ge, 2.0)
        .unwrap()
        .solve()
        .unwrap();
    assert_eq!(lp.status(), Status::Unbounded);
}

#[test]
fn test_infeasible() {
    // x >= 5
    // x <= 3
    let x = variables(&["x"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Minimize, expr(&[1.0], &x))
        .unwrap()
        .add_constraint(expr(&[1.0], &x), ConstraintType::Ge, 5.0)
        .unwrap()
        .add_constraint(expr(&[1.0], &x), ConstraintType::Le, 3.0)
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(lp.status(), Status::Infeasible);
    assert!(lp.optimal_value().is_none());
    assert!(lp.values().is_empty());
}

#[test]
fn test_infeasible_equalities() {
    // x + y = 2 and x + y = 3
    let v = variables(&["x", "y"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Maximize, expr(&[1.0, 1.0], &v))
        .unwrap()
        .add_constraint(expr(&[1.0, 1.0], &v), ConstraintType::Eq, 2.0)
        .unwrap()
        .add_constraint(expr(&[1.0, 1.0], &v), ConstraintType::Eq, 3.0)
        .unwrap()
        .solve()
        .unwrap();
    assert_eq!(lp.status(), Status::Infeasible);
}

#[test]
fn test_artificials_never_reported() {
    let x = variables(&["x1", "x2", "x3"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Minimize, expr(&[-6.0, 7.0, 4.0], &x))
        .unwrap()
        .add_constraint(expr(&[2.0, 5.0, -1.0], &x), ConstraintType::Le, 18.0)
        .unwrap()
        .add_constraint(expr(&[1.0, -1.0, -2.0], &x), ConstraintType::Le, -14.0)
        .unwrap()
        .add_constraint(expr(&[3.0, 2.0, 2.0], &x), ConstraintType::Eq, 26.0)
        .unwrap()
        .solve()
        .unwrap();

    let names: Vec<&str> = lp.values().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["x1", "x2", "x3"]);
}

#[test]
fn test_redundant_equality_is_feasible() {
    // The second row repeats the first, leaving an artificial basic at zero.
    let v = variables(&["x", "y"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Maximize, expr(&[1.0, 2.0], &v))
        .unwrap()
        .add_constraint(expr(&[1.0, 1.0], &v), ConstraintType::Eq, 4.0)
        .unwrap()
        .add_constraint(expr(&[2.0, 2.0], &v), ConstraintType::Eq, 8.0)
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(lp.status(), Status::Optimal);
    assert_close(lp.optimal_value().unwrap(), 8.0, "obj");
    assert_close(lp.value("y").unwrap(), 4.0, "y");
}

#[test]
fn test_degenerate_origin() {
    // Zero right-hand sides make every ratio zero.
    let v = variables(&["x", "y"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Maximize, expr(&[1.0, 1.0], &v))
        .unwrap()
        .add_constraint(expr(&[1.0, -1.0], &v), ConstraintType::Le, 0.0)
        .unwrap()
        .add_constraint(expr(&[-1.0, 1.0], &v), ConstraintType::Le, 0.0)
        .unwrap()
        .add_constraint(expr(&[1.0, 1.0], &v), ConstraintType::Le, 6.0)
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(lp.status(), Status::Optimal);
    assert_close(lp.optimal_value().unwrap(), 6.0, "obj");
    assert_close(lp.value("x").unwrap(), 3.0, "x");
    assert_close(lp.value("y").unwrap(), 3.0, "y");
}

#[test]
fn test_iteration_limit_gives_undefined() {
    let x = variables(&["x1", "x2"]);
    let config = SolverConfig::new().with_max_iterations(1);
    let mut lp = LinearProgram::with_config(config).unwrap();
    lp.add_objective(Sense::Maximize, expr(&[7.0, 6.0], &x))
        .unwrap()
        .add_constraint(expr(&[2.0, 4.0], &x), ConstraintType::Le, 16.0)
        .unwrap()
        .add_constraint(expr(&[3.0, 2.0], &x), ConstraintType::Le, 12.0)
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(lp.status(), Status::Undefined);
    assert_eq!(lp.iterations(), 1);
    assert!(lp.optimal_value().is_none());
}

#[test]
fn test_custom_big_m() {
    let x = variables(&["x"]);
    let config = SolverConfig::new().with_big_m(1e4);
    let mut lp = LinearProgram::with_config(config).unwrap();
    lp.add_objective(Sense::Minimize, expr(&[3.0], &x))
        .unwrap()
        .add_constraint(expr(&[1.0], &x), ConstraintType::Eq, 2.0)
        .unwrap();

    let a1 = lp.objective().terms().iter().find(|t| t.variable.is_artificial()).unwrap();
    // scaled by the largest objective coefficient
    assert_eq!(a1.coefficient, -3e4);

    lp.solve().unwrap();
    assert_close(lp.optimal_value().unwrap(), 6.0, "obj");
}

#[test]
fn test_objective_coefficient_above_big_m() {
    // Minimize 2e6 x subject to x >= 1
    let x = variables(&["x"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Minimize, expr(&[2e6], &x))
        .unwrap()
        .add_constraint(expr(&[1.0], &x), ConstraintType::Ge, 1.0)
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(lp.status(), Status::Optimal);
    assert_close(lp.optimal_value().unwrap(), 2e6, "obj");
    assert_close(lp.value("x").unwrap(), 1.0, "x");
}

#[test]
fn test_tiny_coefficients_reach_a_feasible_optimum() {
    // Maximize -x - y subject to 1e-10 x >= 1e-10
    let v = variables(&["x", "y"]);
    let mut lp = LinearProgram::new();
    lp.add_objective(Sense::Maximize, expr(&[-1.0, -1.0], &v))
        .unwrap()
        .add_constraint(expr(&[1e-10], &v[..1]), ConstraintType::Ge, 1e-10)
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(lp.status(), Status::Optimal);
    assert_close(lp.value("x").unwrap(), 1.0, "x");
    assert_close(lp.value("y").unwrap(), 0.0, "y");
    assert_close(lp.optimal_value().unwrap(), -1.0, "obj");
}

#[test]
fn test_invalid_config_rejected() {
    let config = SolverConfig::new().with_big_m(-1.0);
    assert!(matches!(
        LinearProgram::with_config(config),
        Err(ProgramError::InvalidConfig(_))
    ));
}
