//! # Number types
//!
//! Compilation is defined over any number type that behaves like an ordered field. This allows the
//! compiler to be tested for correctness using fractional numbers, while the same code is used
//! without adaptation with floating point numbers.
//!
//! Exact rationals, such as `relp_num::Rational64` or `relp_num::RationalBig`, are the intended
//! coefficient types: normalizing a variable bound divides by the coefficient of that variable,
//! which can't be done without rounding in floating point.
pub mod traits;
