//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs in memory: the
//! surface form as it is written down by a user, and the normalized model that compilation in
//! `compile` produces from it.

pub mod linear_program;
pub mod number_types;
pub mod surface;
