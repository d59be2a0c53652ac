//! # Describing linear programs algebraically
//!
//! Linear programs are written as an objective, a list of constraints and a list of variable
//! bounds, in a small algebraic surface syntax. This crate compiles such a description into a
//! normalized, matrix oriented model: row and column metadata with bound kinds, a sparse
//! coefficient matrix with 1-based indices and an objective vector in column order. That model can
//! be handed to a solver directly, or written out in the MPS format.
//!
//! ```
//! use relp_dsl::compile::compile;
//! use relp_dsl::io::alp;
//!
//! let problem = alp::parse::<f64>("
//!     maximize 4 x + 7 y
//!     subject to
//!         x + y <= 10
//!     bounds
//!         x >= 0
//! ").unwrap();
//! let model = compile(&problem).unwrap();
//!
//! assert_eq!(model.nr_rows(), 1);
//! assert_eq!(model.nr_columns(), 2);
//! ```
#![warn(missing_docs)]

pub mod compile;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
