//! # pivlu
//!
//! **Pivoted LU decomposition with explicit P, L, U reconstruction over
//! device-typed tensors.**
//!
//! pivlu factors a square F32/F64 matrix A with partial pivoting and hands
//! back either the packed LAPACK-style result (pivots plus the combined L/U
//! buffer) or explicit factors satisfying `A = P @ L @ U`.
//!
//! ## Features
//!
//! - **Layout bridging**: row-major tensors in, column-major native kernels
//!   underneath, row-major results out
//! - **Per-device dispatch**: CPU and accelerator backends chosen from the
//!   tensor's device type, with pivot width matched to the backend
//! - **Pivot replay**: 1-indexed LAPACK pivots converted to a permutation
//!   matrix, with out-of-range pivots reported as errors
//! - **Pluggable runtimes**: any type implementing [`runtime::Runtime`] and
//!   the [`ops`] traits gets the LU routines
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pivlu::prelude::*;
//!
//! let device = CpuDevice::new();
//! let client = CpuRuntime::default_client(&device);
//! let a = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[2, 2], &device);
//!
//! let plu = client.lu(&a, false)?;
//! let packed = client.lu_with_ipiv(&a)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): CPU runtime and LU backend
//! - `accelerator`: LU backend for devices reporting `DeviceType::Accelerator`
//! - `ilp64`: 64-bit native linalg integers on the CPU backend (I64 pivots)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::linalg::{
        IndexWidth, LinalgConfig, LuAlgorithms, LuFactorization, PluDecomposition,
    };
    pub use crate::dtype::DType;
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        IndexingOps, LinalgOps, MatmulOps, TensorOps, TypeConversionOps, UtilityOps,
    };
    pub use crate::runtime::{Device, DeviceType, Runtime, RuntimeClient};
    pub use crate::tensor::{Layout, Tensor};

    #[cfg(feature = "cpu")]
    pub use crate::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
}

/// Default runtime based on enabled features
#[cfg(feature = "cpu")]
pub type DefaultRuntime = runtime::cpu::CpuRuntime;
