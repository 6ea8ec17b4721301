//! Operation traits for tensor operations
//!
//! This module contains trait definitions for the tensor primitives the LU
//! routines compose. Implementations are in the backend-specific modules;
//! backends without native kernels can delegate to [`crate::ops::impl_generic`].

mod indexing;
mod linalg;
mod matmul;
mod tensor_ops;
mod type_conversion;
mod utility;

pub use indexing::IndexingOps;
pub use linalg::LinalgOps;
pub use matmul::MatmulOps;
pub use tensor_ops::TensorOps;
pub use type_conversion::TypeConversionOps;
pub use utility::UtilityOps;
