use std::ops::{Mul, Neg};

use crate::constants::Category;

/// What introduced a variable into the program
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// A caller-declared unknown
    Decision,
    /// Absorbs the unused capacity of an inequality
    Slack,
    /// Gives an equality or >= row an initial basic variable
    Artificial,
}

/// A named unknown of a linear program
///
/// Variables are plain values: every [`Term`] carries its own copy, and two
/// variables are the same column when their names match.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    kind: VariableKind,
    category: Category,
}

impl Variable {
    /// A continuous decision variable
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_category(name, Category::Continuous)
    }

    pub fn with_category(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Decision,
            category,
        }
    }

    /// Slack introduced by the constraint at 1-based position `index`
    pub(crate) fn slack(index: usize) -> Self {
        Self {
            name: format!("s{}", index),
            kind: VariableKind::Slack,
            category: Category::Continuous,
        }
    }

    /// Artificial introduced by the constraint at 1-based position `index`
    pub(crate) fn artificial(index: usize) -> Self {
        Self {
            name: format!("a{}", index),
            kind: VariableKind::Artificial,
            category: Category::Continuous,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_slack(&self) -> bool {
        self.kind == VariableKind::Slack
    }

    pub fn is_artificial(&self) -> bool {
        self.kind == VariableKind::Artificial
    }

    pub fn is_decision(&self) -> bool {
        self.kind == VariableKind::Decision
    }
}

/// One weighted occurrence of a variable
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub variable: Variable,
}

impl Term {
    pub fn new(coefficient: f64, variable: Variable) -> Self {
        Self { coefficient, variable }
    }
}

impl Mul<&Variable> for f64 {
    type Output = Term;

    fn mul(self, variable: &Variable) -> Term {
        Term::new(self, variable.clone())
    }
}

impl Neg for Term {
    type Output = Term;

    fn neg(self) -> Term {
        Term::new(-self.coefficient, self.variable)
    }
}

/// A linear combination of variables
///
/// Term order only matters for rendering. Repeated variables are not merged
/// here; they add up when the tableau is built.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// Multiply every coefficient by -1 in place
    pub fn negate(&mut self) {
        for term in &mut self.terms {
            term.coefficient = -term.coefficient;
        }
    }

    /// Whether any term refers to a variable called `name`
    pub fn contains(&self, name: &str) -> bool {
        self.terms.iter().any(|t| t.variable.name() == name)
    }

    /// Variables in order of first appearance, without repeats
    pub fn variables(&self) -> Vec<&Variable> {
        let mut seen: Vec<&Variable> = Vec::new();
        for term in &self.terms {
            if !seen.iter().any(|v| v.name() == term.variable.name()) {
                seen.push(&term.variable);
            }
        }
        seen
    }

    /// Evaluate the expression for the given assignment; missing variables count as zero
    pub fn evaluate(&self, value_of: impl Fn(&str) -> Option<f64>) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coefficient * value_of(t.variable.name()).unwrap_or(0.0))
            .sum()
    }
}

impl From<Vec<Term>> for Expression {
    fn from(terms: Vec<Term>) -> Self {
        Self::new(terms)
    }
}

impl FromIterator<Term> for Expression {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<Term> for Expression {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}

impl Neg for Expression {
    type Output = Expression;

    fn neg(mut self) -> Expression {
        self.negate();
        self
    }
}
