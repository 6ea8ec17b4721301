//! Matrix multiplication operations trait

use crate::error::Result;
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Matrix multiplication operations
pub trait MatmulOps<R: Runtime> {
    /// Matrix multiplication: `C = A @ B` for 2D operands
    ///
    /// `a` is `[m, k]`, `b` is `[k, n]`, the result is `[m, n]`. Both
    /// operands must share dtype and device.
    fn matmul(&self, a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>>;
}
