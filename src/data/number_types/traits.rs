//! # Traits
//!
//! The numbers appearing in a linear program description are coefficients and bound values. The
//! only arithmetic the compiler performs on them is a division, when a bound on a scaled variable
//! is normalized, and a sign test, when that division flips the direction of the bound. Writing a
//! double bounded row to MPS needs the width of its range, a subtraction.
use std::fmt::{Debug, Display};
use std::ops::{Div, Neg, Sub};

use num_traits::{One, Zero};

/// Numbers that can appear as coefficients and bound values.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Coefficient:
    Zero + // Default for absent bound values
    One + // Implicit coefficient of a bare variable
    Neg<Output=Self> +
    Sub<Output=Self> +
    Div<Output=Self> +
    PartialEq +
    PartialOrd +
    // Practicalities
    Clone +
    Debug +
    Display
{
}

impl<T> Coefficient for T
where
    T: Zero + One + Neg<Output=T> + Sub<Output=T> + Div<Output=T> + PartialEq + PartialOrd + Clone + Debug + Display,
{
}
