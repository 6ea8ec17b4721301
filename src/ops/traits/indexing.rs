//! Indexing operations trait

use crate::error::Result;
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Indexing operations
pub trait IndexingOps<R: Runtime> {
    /// Select slices along a dimension by index
    ///
    /// `out[.., i, ..] = a[.., indices[i], ..]` along `dim`. The output shape is
    /// the input shape with `shape[dim]` replaced by `indices.len()`.
    ///
    /// # Arguments
    ///
    /// * `a` - Input tensor
    /// * `dim` - Dimension to gather along (supports negative indexing)
    /// * `indices` - 1D I64 or I32 tensor of 0-indexed positions
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if `dim` is out of range
    /// - `UnsupportedDType` if `indices` is not I64/I32
    /// - `IndexOutOfBounds` if an index exceeds `shape[dim]`
    fn index_select(&self, a: &Tensor<R>, dim: isize, indices: &Tensor<R>) -> Result<Tensor<R>>;
}
