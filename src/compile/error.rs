//! # Error reporting for compilation
//!
//! Compilation either succeeds completely or fails on the first problem found. There is no partial
//! model.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::data::surface::Comparator;

/// Shorthand for results of compilation steps.
pub type CompileResult<T> = Result<T, Compile>;

/// A `Compile` error is created when a linear program description can't be compiled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Compile {
    /// A constraint or bound uses an operator that doesn't describe a linear program, or that
    /// can't be used in the shape it was written in.
    ///
    /// Only `=`, `<=` and `>=` can be used in the simple shape, only `<=` and `>=` in the chained
    /// shape.
    InvalidComparator {
        #[allow(missing_docs)]
        comparator: Comparator,
        #[allow(missing_docs)]
        shape: Shape,
    },
    /// An expression doesn't fit where it was used.
    MalformedExpression(Malformed),
}

/// The two shapes a comparison can be written in.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    Simple,
    Chained,
}

/// Ways in which an expression can be used incorrectly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Malformed {
    /// A variable appears more than once in the objective.
    ///
    /// Terms are not merged, so this would result in two columns for the same variable.
    DuplicateObjectiveVariable(String),
    /// A constraint or bound mentions a variable that is not in the objective.
    ///
    /// Only variables of the objective get a column.
    UnknownVariable(String),
    /// A bound was given on an expression that is not a single variable.
    BoundOnExpression {
        /// Number of terms in the expression.
        nr_terms: usize,
    },
    /// A variable has more than one entry in the list of bounds.
    DuplicateBound(String),
    /// A bound on a variable with coefficient zero; it can't be normalized.
    ZeroBoundCoefficient(String),
}

impl Compile {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Compile::InvalidComparator { .. } => "INVALID_COMPARATOR",
            Compile::MalformedExpression(malformed) => malformed.code(),
        }
    }
}

impl Malformed {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Malformed::DuplicateObjectiveVariable(_) => "MALFORMED_DUPLICATE_OBJECTIVE_VARIABLE",
            Malformed::UnknownVariable(_) => "MALFORMED_UNKNOWN_VARIABLE",
            Malformed::BoundOnExpression { .. } => "MALFORMED_BOUND_ON_EXPRESSION",
            Malformed::DuplicateBound(_) => "MALFORMED_DUPLICATE_BOUND",
            Malformed::ZeroBoundCoefficient(_) => "MALFORMED_ZERO_BOUND_COEFFICIENT",
        }
    }
}

impl From<Malformed> for Compile {
    fn from(malformed: Malformed) -> Self {
        Compile::MalformedExpression(malformed)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Simple => "simple",
            Shape::Chained => "chained",
        })
    }
}

impl Display for Malformed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::DuplicateObjectiveVariable(name) => {
                write!(f, "Variable \"{}\" appears more than once in the objective", name)
            },
            Malformed::UnknownVariable(name) => {
                write!(f, "Variable \"{}\" does not appear in the objective", name)
            },
            Malformed::BoundOnExpression { nr_terms } => {
                write!(f, "A bound should be on a single variable, but its expression has {} terms", nr_terms)
            },
            Malformed::DuplicateBound(name) => {
                write!(f, "Variable \"{}\" is bounded more than once", name)
            },
            Malformed::ZeroBoundCoefficient(name) => {
                write!(f, "Variable \"{}\" is bounded with a zero coefficient", name)
            },
        }
    }
}

impl Display for Compile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Compile::InvalidComparator { comparator, shape } => write!(
                f,
                "[{}] Comparator \"{}\" can't be used in the {} form",
                self.code(),
                comparator,
                shape,
            ),
            Compile::MalformedExpression(malformed) => write!(f, "[{}] {}", self.code(), malformed),
        }
    }
}

impl Error for Compile {}

#[cfg(test)]
mod test {
    use crate::compile::error::{Compile, Malformed, Shape};
    use crate::data::surface::Comparator;

    #[test]
    fn display_prefixes_error_code() {
        let error = Compile::InvalidComparator { comparator: Comparator::Less, shape: Shape::Chained };
        assert_eq!(error.to_string(), "[INVALID_COMPARATOR] Comparator \"<\" can't be used in the chained form");

        let error = Compile::from(Malformed::UnknownVariable("z".to_string()));
        assert!(error.to_string().starts_with("[MALFORMED_UNKNOWN_VARIABLE]"));
    }
}
