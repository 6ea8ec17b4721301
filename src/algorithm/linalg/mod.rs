//! Pivoted LU decomposition over device-typed tensors
//!
//! # Module Structure
//!
//! - `config`: native pivot width ([`IndexWidth`], [`LinalgConfig`])
//! - `backend`: per-device-class LU kernels and dispatch
//! - `pivot`: LAPACK pivots to permutation index conversion
//! - `lu`: validation, layout bridging, P/L/U assembly, determinant
//! - `decompositions`: result types
//! - `traits`: [`LuAlgorithms`], the client-method surface
//! - `helpers`: validation utilities

pub mod backend;
pub mod config;
pub mod decompositions;
pub mod helpers;
pub mod lu;
pub mod pivot;
pub mod traits;

pub use backend::{LuBackend, SelectedBackend, select_backend};
#[cfg(feature = "accelerator")]
pub use backend::AcceleratorLuBackend;
#[cfg(feature = "cpu")]
pub use backend::CpuLuBackend;
pub use config::{CpuLinalgInt, IndexWidth, LinalgConfig, NATIVE_CPU_INDEX_WIDTH};
pub use decompositions::{LuFactorization, PluDecomposition};
pub use helpers::{validate_linalg_dtype, validate_lu_input, validate_matrix_2d, validate_square_matrix};
pub use lu::{
    det, det_with_config, lu, lu_with_config, lu_with_ipiv, lu_with_ipiv_with_config,
    output_to_plu,
};
pub use pivot::{col_permutation, count_row_swaps, get_col_permutation, pivots_to_host};
pub use traits::LuAlgorithms;
