//! Utility operations trait

use crate::dtype::DType;
use crate::error::Result;
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Tensor creation operations
pub trait UtilityOps<R: Runtime> {
    /// Create an `n x n` identity matrix of the given dtype
    fn eye(&self, n: usize, dtype: DType) -> Result<Tensor<R>>;

    /// Create a 1D tensor with evenly spaced values within a half-open interval [start, stop)
    ///
    /// Values are generated using the formula: start + step * i for i in 0..n
    /// where n = ceil((stop - start) / step)
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `step` is zero or points away from `stop`.
    fn arange(&self, start: f64, stop: f64, step: f64, dtype: DType) -> Result<Tensor<R>>;
}
