//! # Surface form of a linear program
//!
//! A linear program as it is written down: an objective expression with a direction, a list of
//! constraints and a list of variable bounds. The same expression can be written in several
//! interchangeable shapes (a bare variable, a scaled variable or a sum of those) and a comparison
//! in two (an expression compared to one value, or an expression between two values). Each shape
//! is a variant here, so that the compiler can match on them exhaustively.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;

/// A single term as written, before normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum Term<F> {
    /// A variable without coefficient, such as `x`. The coefficient is implicitly one.
    Variable(String),
    /// A variable with a coefficient, such as `4 x`.
    Scaled(F, String),
}

impl<F> Term<F> {
    /// Name of the variable in this term.
    pub fn variable(&self) -> &str {
        match self {
            Term::Variable(name) | Term::Scaled(_, name) => name,
        }
    }
}

/// An expression as written, before normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression<F> {
    /// A single term.
    Term(Term<F>),
    /// A sum of terms, from left to right.
    Sum(Vec<Term<F>>),
}

impl<F> Expression<F> {
    /// Shorthand for a bare variable.
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Term(Term::Variable(name.into()))
    }

    /// Shorthand for a scaled variable.
    pub fn scaled(coefficient: F, name: impl Into<String>) -> Self {
        Expression::Term(Term::Scaled(coefficient, name.into()))
    }
}

/// Comparison operators that can be written down.
///
/// Only `Equal`, `LessEqual` and `GreaterEqual` describe a linear program. The others can be
/// written, but are rejected when compiling.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Comparator {
    /// `=`
    Equal,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `!=`
    NotEqual,
}

impl Comparator {
    /// Textual representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Equal => "=",
            Comparator::LessEqual => "<=",
            Comparator::GreaterEqual => ">=",
            Comparator::Less => "<",
            Comparator::Greater => ">",
            Comparator::NotEqual => "!=",
        }
    }
}

impl Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A constraint or bound as written.
#[derive(Clone, Debug, PartialEq)]
pub enum Comparison<F> {
    /// `expression OPERATOR value`
    Simple {
        /// Operator between the expression and the value.
        comparator: Comparator,
        /// Left hand side.
        expression: Expression<F>,
        /// Right hand side.
        value: F,
    },
    /// `left OPERATOR expression OPERATOR right`, the operator being the same twice.
    Chained {
        /// Operator used on both sides of the expression.
        comparator: Comparator,
        /// Value written before the expression.
        left: F,
        /// Expression in the middle.
        expression: Expression<F>,
        /// Value written after the expression.
        right: F,
    },
}

impl<F> Comparison<F> {
    /// The expression being compared, regardless of the shape.
    pub fn expression(&self) -> &Expression<F> {
        match self {
            Comparison::Simple { expression, .. } | Comparison::Chained { expression, .. } => expression,
        }
    }

    /// The operator, regardless of the shape.
    pub fn comparator(&self) -> Comparator {
        match self {
            Comparison::Simple { comparator, .. } | Comparison::Chained { comparator, .. } => *comparator,
        }
    }
}

/// Direction of optimization, as written.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

impl Sense {
    /// Keyword introducing the objective.
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "minimize",
            Sense::Maximize => "maximize",
        }
    }
}

/// A complete request to compile: direction, objective, constraints and bounds.
///
/// Whether a comparison ends up as a row or as a column bound is decided by the list it is in,
/// never by its shape. A single variable constraint in `constraints` is a row.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem<F> {
    /// Minimize or maximize.
    pub sense: Sense,
    /// Expression to optimize. Its variables, in order, are the columns of the model.
    pub objective: Expression<F>,
    /// Constraints, in row order.
    pub constraints: Vec<Comparison<F>>,
    /// Bounds on single variables.
    pub bounds: Vec<Comparison<F>>,
}

impl<F> Problem<F> {
    /// Create a new `Problem` instance.
    pub fn new(
        sense: Sense,
        objective: Expression<F>,
        constraints: Vec<Comparison<F>>,
        bounds: Vec<Comparison<F>>,
    ) -> Self {
        Self { sense, objective, constraints, bounds }
    }
}

impl<F: Display> Display for Term<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(name) => f.write_str(name),
            Term::Scaled(coefficient, name) => write!(f, "{} {}", coefficient, name),
        }
    }
}

impl<F: Display> Display for Expression<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Term(term) => term.fmt(f),
            Expression::Sum(terms) => f.write_str(&terms.iter().join(" + ")),
        }
    }
}

impl<F: Display> Display for Comparison<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Simple { comparator, expression, value } => {
                write!(f, "{} {} {}", expression, comparator, value)
            },
            Comparison::Chained { comparator, left, expression, right } => {
                write!(f, "{} {} {} {} {}", left, comparator, expression, comparator, right)
            },
        }
    }
}
