//! Linear algebra primitives trait

use crate::error::Result;
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Dense linear algebra primitives
pub trait LinalgOps<R: Runtime> {
    /// Split a square matrix into its upper and unit-lower triangles
    ///
    /// Returns `(upper, lower)`: `upper` keeps the diagonal and everything
    /// above it, `lower` keeps everything strictly below the diagonal and has
    /// ones on the diagonal. Both are contiguous and zero elsewhere.
    fn triul(&self, a: &Tensor<R>) -> Result<(Tensor<R>, Tensor<R>)>;

    /// Inverse of a square F32/F64 matrix
    ///
    /// # Errors
    ///
    /// Returns `SingularMatrix` if the matrix has no inverse.
    fn inverse(&self, a: &Tensor<R>) -> Result<Tensor<R>>;
}
