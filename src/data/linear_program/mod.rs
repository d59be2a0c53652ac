//! # Representing linear programs
//!
//! This module contains the normalized representation of linear programs. Expressions in here are
//! lists of coefficient, variable pairs and bounds are classified by kind. A compiled model refers
//! to variables and constraints by position rather than by name.
pub mod elements;
pub mod model;
