//! Tensor operations
//!
//! This module defines the operation traits the LU routines compose, plus
//! backend-agnostic implementations of them.
//!
//! # Design
//!
//! Operations are defined as traits that are implemented by `RuntimeClient`.
//! This gives operations access to the device for creating output tensors.
//!
//! ```text
//! RuntimeClient<R>
//!   └── implements TensorOps<R>
//!         ├── cast               (TypeConversionOps)
//!         ├── eye, arange        (UtilityOps)
//!         ├── index_select       (IndexingOps)
//!         ├── matmul             (MatmulOps)
//!         └── triul, inverse     (LinalgOps)
//! ```
//!
//! # Implementing Operations for a New Backend
//!
//! Implement each trait for your `Client` type, then the empty aggregate:
//!
//! ```ignore
//! impl MatmulOps<MyRuntime> for MyClient {
//!     fn matmul(&self, a: &Tensor<MyRuntime>, b: &Tensor<MyRuntime>) -> Result<Tensor<MyRuntime>> {
//!         pivlu::ops::impl_generic::matmul_impl(self, a, b)
//!     }
//! }
//! // ... other traits
//! impl TensorOps<MyRuntime> for MyClient {}
//! ```

mod dispatch;
pub mod impl_generic;
pub mod traits;

pub use impl_generic::matmul::validate_matmul_shapes;
pub use traits::{
    IndexingOps, LinalgOps, MatmulOps, TensorOps, TypeConversionOps, UtilityOps,
};
