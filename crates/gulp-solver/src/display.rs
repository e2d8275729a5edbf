//! Human-readable rendering of terms, expressions, constraints, programs and tableaus.

use std::fmt;

use crate::model::{Expression, Term};
use crate::problem::{Constraint, LinearProgram};
use crate::tableau::Tableau;

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {}", self.coefficient, self.variable.name())
    }
}

/// Renders as `7 * x1 + 6 * x2 - 1 * x3`; signs live between the terms.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        for (i, term) in self.terms().iter().enumerate() {
            let negative = term.coefficient < 0.0;
            match (i, negative) {
                (0, false) => {}
                (0, true) => f.write_str("- ")?,
                (_, false) => f.write_str(" + ")?,
                (_, true) => f.write_str(" - ")?,
            }
            write!(f, "{} * {}", term.coefficient.abs(), term.variable.name())?;
        }
        Ok(())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.expression, self.constraint_type, self.rhs)
    }
}

impl fmt::Display for LinearProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sense().label(), self.declared_objective())?;
        for c in self.constraints() {
            write!(f, "\n\t{}", c)?;
        }
        Ok(())
    }
}

const CELL: usize = 10;

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.columns().names();

        write!(f, "{:>w$} {:>w$}", "basis", "c_b", w = CELL)?;
        for name in names {
            write!(f, " {:>w$}", name, w = CELL)?;
        }
        writeln!(f, " {:>w$}", "rhs", w = CELL)?;

        write!(f, "{:>w$} {:>w$}", "", "c", w = CELL)?;
        write_cells(f, self.objective_row())?;
        writeln!(f)?;

        let basis = self.basis_names();
        for (i, row) in self.rows().iter().enumerate() {
            write!(f, "{:>w$} {:>w$}", basis[i], fmt_cell(self.basis_values()[i]), w = CELL)?;
            write_cells(f, row)?;
            writeln!(f, " {:>w$}", fmt_cell(self.rhs()[i]), w = CELL)?;
        }

        write!(f, "{:>w$} {:>w$}", "", "Z", w = CELL)?;
        write_cells(f, self.z_row())?;
        writeln!(f, " {:>w$}", fmt_cell(self.value()), w = CELL)?;

        write!(f, "{:>w$} {:>w$}", "", "C-Z", w = CELL)?;
        write_cells(f, self.reduced_costs())
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    for &v in values {
        write!(f, " {:>w$}", fmt_cell(v), w = CELL)?;
    }
    Ok(())
}

fn fmt_cell(value: f64) -> String {
    if value.abs() >= 1e5 {
        format!("{:.2e}", value)
    } else {
        format!("{:.3}", value)
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::{ConstraintType, Sense};
    use crate::model::{Expression, Term, Variable};
    use crate::problem::LinearProgram;
    use crate::tableau::Tableau;

    fn x(i: usize) -> Variable {
        Variable::new(format!("x{}", i))
    }

    #[test]
    fn test_term() {
        assert_eq!(Term::new(7.0, x(1)).to_string(), "7 * x1");
        assert_eq!(Term::new(-0.5, x(2)).to_string(), "-0.5 * x2");
    }

    #[test]
    fn test_expression_signs() {
        let e = Expression::new(vec![-6.0 * &x(1), 7.0 * &x(2), -1.0 * &x(3)]);
        assert_eq!(e.to_string(), "- 6 * x1 + 7 * x2 - 1 * x3");
        let e = Expression::new(vec![7.0 * &x(1), 6.0 * &x(2)]);
        assert_eq!(e.to_string(), "7 * x1 + 6 * x2");
        assert_eq!(Expression::default().to_string(), "0");
    }

    #[test]
    fn test_program_shows_declared_objective_and_standard_form() {
        let mut lp = LinearProgram::new();
        lp.add_objective(Sense::Minimize, Expression::new(vec![-6.0 * &x(1), 7.0 * &x(2)]))
            .unwrap()
            .add_constraint(Expression::new(vec![2.0 * &x(1), 5.0 * &x(2)]), ConstraintType::Le, 18.0)
            .unwrap()
            .add_constraint(Expression::new(vec![1.0 * &x(1), -1.0 * &x(2)]), ConstraintType::Le, -14.0)
            .unwrap();

        assert_eq!(
            lp.to_string(),
            "Min: - 6 * x1 + 7 * x2\n\
             \t2 * x1 + 5 * x2 + 1 * s1 = 18\n\
             \t- 1 * x1 + 1 * x2 + 1 * a2 - 1 * s2 = 14"
        );
    }

    #[test]
    fn test_tableau_lists_every_column_and_row() {
        let mut lp = LinearProgram::new();
        lp.add_objective(Sense::Maximize, Expression::new(vec![7.0 * &x(1), 6.0 * &x(2)]))
            .unwrap()
            .add_constraint(Expression::new(vec![2.0 * &x(1), 4.0 * &x(2)]), ConstraintType::Le, 16.0)
            .unwrap();
        let tableau = Tableau::new(lp.objective(), lp.constraints()).unwrap();
        let rendered = tableau.to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("x1") && lines[0].contains("s1") && lines[0].contains("rhs"));
        assert!(lines[2].trim_start().starts_with("s1"));
        // 2x1 + 4x2 <= 16 is shown divided by 4
        assert!(lines[2].ends_with("4.000"));
        assert!(lines[4].contains("C-Z"));
    }
}
