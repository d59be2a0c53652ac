//! # Building blocks to describe linear programs.
use std::fmt;
use std::fmt::Display;

use enum_map::Enum;

/// A coefficient together with the variable it multiplies.
///
/// Produced by normalization. Coefficients that were not written down are explicitly one here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Term<F> {
    #[allow(missing_docs)]
    pub coefficient: F,
    #[allow(missing_docs)]
    pub variable: String,
}

impl<F> Term<F> {
    /// Create a new `Term` instance.
    pub fn new(coefficient: F, variable: impl Into<String>) -> Self {
        Self { coefficient, variable: variable.into() }
    }
}

/// Normalized expression.
///
/// The order of the terms is the order in which they were written. Terms for the same variable are
/// not merged.
pub type Expression<F> = Vec<Term<F>>;

/// An expression together with the values it is bounded by.
///
/// At least one of the bounds is present for any comparison that was resolved successfully.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoundTriple<F> {
    #[allow(missing_docs)]
    pub expression: Expression<F>,
    #[allow(missing_docs)]
    pub lower: Option<F>,
    #[allow(missing_docs)]
    pub upper: Option<F>,
}

impl<F> BoundTriple<F> {
    /// The single term of this expression, if that is all there is.
    pub fn single_term(&self) -> Option<&Term<F>> {
        match self.expression.as_slice() {
            [term] => Some(term),
            _ => None,
        }
    }
}

/// How a row or column is bounded.
///
/// The discriminants follow the GLPK convention for bound types, see `solver_code`.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundKind {
    /// -inf < x < +inf
    Free,
    /// b <= x (< +inf)
    Lower,
    /// (-inf <) x <= b
    Upper,
    /// l <= x <= u
    Double,
    /// x = b
    Fixed,
}

impl BoundKind {
    /// Classify a bound by which of its values are present.
    ///
    /// Both values present but different is a `Double` bound, regardless of their order.
    pub fn classify<F: PartialEq>(lower: Option<&F>, upper: Option<&F>) -> Self {
        match (lower, upper) {
            (Some(lower), Some(upper)) if lower == upper => BoundKind::Fixed,
            (Some(_), Some(_)) => BoundKind::Double,
            (Some(_), None) => BoundKind::Lower,
            (None, Some(_)) => BoundKind::Upper,
            (None, None) => BoundKind::Free,
        }
    }

    /// Integer code used by GLPK style solver interfaces.
    pub fn solver_code(self) -> i32 {
        match self {
            BoundKind::Free => 1,
            BoundKind::Lower => 2,
            BoundKind::Upper => 3,
            BoundKind::Double => 4,
            BoundKind::Fixed => 5,
        }
    }

    /// Short name.
    pub fn as_str(self) -> &'static str {
        match self {
            BoundKind::Free => "free",
            BoundKind::Lower => "lower",
            BoundKind::Upper => "upper",
            BoundKind::Double => "double",
            BoundKind::Fixed => "fixed",
        }
    }

    /// Whether the lower value of a bound of this kind carries meaning.
    pub fn has_lower(self) -> bool {
        matches!(self, BoundKind::Lower | BoundKind::Double | BoundKind::Fixed)
    }

    /// Whether the upper value of a bound of this kind carries meaning.
    pub fn has_upper(self) -> bool {
        matches!(self, BoundKind::Upper | BoundKind::Double | BoundKind::Fixed)
    }
}

impl Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<F: Display> Display for Term<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coefficient, self.variable)
    }
}
