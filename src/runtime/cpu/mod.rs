//! CPU runtime implementation
//!
//! The CPU runtime uses standard heap allocation. Device pointers are plain
//! host addresses, so kernels can operate on them directly.

mod client;
mod device;
pub(crate) mod kernels;
mod ops;
mod runtime;

pub use crate::tensor::Tensor;
pub use client::CpuClient;
pub use device::CpuDevice;
pub use kernels::getrf::{LinalgElement, PivotIndex, getrf_kernel};
#[cfg(feature = "accelerator")]
pub(crate) use kernels::getrf::getrf_slice;
pub use runtime::CpuRuntime;
