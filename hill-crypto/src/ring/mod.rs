//! # Ring Module
//!
//! Provides the [`Ring`] struct for the finite ring Z_m that all Hill arithmetic
//! lives in, plus the exact modular matrix operations built on top of it.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{extended_gcd, gcd, map_matrix, map_vector};
pub use math::Ring;
