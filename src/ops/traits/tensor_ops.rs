//! High-level TensorOps trait
//!
//! Aggregates all operation traits into a single convenience trait.

use crate::runtime::Runtime;

use super::{IndexingOps, LinalgOps, MatmulOps, TypeConversionOps, UtilityOps};

/// Core tensor operations trait
///
/// This trait aggregates all operation traits into a single convenience trait.
/// It is implemented by `RuntimeClient` types, giving operations access to
/// the device for creating output tensors.
///
/// # Example
///
/// ```ignore
/// let device = CpuDevice::new();
/// let client = CpuRuntime::default_client(&device);
///
/// let a = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2], &device);
/// let p = client.eye(2, DType::F32)?;
/// let c = client.matmul(&p, &a)?;
/// ```
pub trait TensorOps<R: Runtime>:
    TypeConversionOps<R> + UtilityOps<R> + IndexingOps<R> + MatmulOps<R> + LinalgOps<R>
{
    // All methods are provided by the individual trait implementations
}
