//! Algorithms built on the tensor primitives
//!
//! - [`linalg`] - pivoted LU decomposition, permutation reconstruction and
//!   the determinant derived from it

pub mod linalg;

pub use linalg::{LuAlgorithms, LuFactorization, PluDecomposition};
