//! Type conversion operations trait

use crate::dtype::DType;
use crate::error::Result;
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Type conversion operations
pub trait TypeConversionOps<R: Runtime> {
    /// Cast tensor to a different data type
    ///
    /// The output has the same shape as the input and is contiguous. Float to
    /// integer conversion truncates toward zero. Casting to the tensor's own
    /// dtype still produces a fresh buffer.
    fn cast(&self, a: &Tensor<R>, dtype: DType) -> Result<Tensor<R>>;
}
