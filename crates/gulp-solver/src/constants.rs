use std::fmt;

/// Optimization direction of the objective
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    Minimize,
    #[default]
    Maximize,
}

impl Sense {
    /// Sign that converts a value of this sense into maximization form and back
    pub fn sign(self) -> f64 {
        match self {
            Sense::Minimize => -1.0,
            Sense::Maximize => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "Minimize",
            Sense::Maximize => "Maximize",
        }
    }

    /// Short label used when rendering a program
    pub fn label(self) -> &'static str {
        match self {
            Sense::Minimize => "Min",
            Sense::Maximize => "Max",
        }
    }
}

/// Relation between a constraint's expression and its right-hand side
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintType {
    /// Less than or equal (<=)
    Le,
    /// Equal (=)
    Eq,
    /// Greater than or equal (>=)
    Ge,
}

impl ConstraintType {
    /// Direction after multiplying both sides by -1
    pub fn flipped(self) -> Self {
        match self {
            ConstraintType::Le => ConstraintType::Ge,
            ConstraintType::Eq => ConstraintType::Eq,
            ConstraintType::Ge => ConstraintType::Le,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConstraintType::Le => "<=",
            ConstraintType::Eq => "=",
            ConstraintType::Ge => ">=",
        }
    }
}

/// Lifecycle of a linear program
///
/// `NotSolved` is the only non-terminal state; a program moves to exactly one
/// of the others when solved and is never solved again.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    NotSolved,
    /// An optimal solution was found
    Optimal,
    /// No assignment satisfies every constraint
    Infeasible,
    /// The objective can be improved without limit
    Unbounded,
    /// The iteration limit ran out before a terminal condition was reached
    Undefined,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::NotSolved => "Not Solved",
            Status::Optimal => "Optimal",
            Status::Infeasible => "Infeasible",
            Status::Unbounded => "Unbounded",
            Status::Undefined => "Undefined",
        }
    }

    pub fn is_solved(self) -> bool {
        self != Status::NotSolved
    }
}

/// Domain of a decision variable. Only `Continuous` variables can be solved.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Continuous,
    Integer,
    Binary,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Continuous => "Continuous",
            Category::Integer => "Integer",
            Category::Binary => "Binary",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Sense, ConstraintType, Status, Category);
