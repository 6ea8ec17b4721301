//! Generic implementations of the tensor primitives
//!
//! These functions are backend-agnostic: they stage operands through host
//! memory with the runtime's copy primitives, compute on the host, and upload
//! the result to the client's device. Every runtime (including ones defined
//! outside this crate) can implement the operation traits by delegating here.
//!
//! ```text
//! impl_generic/linalg.rs
//!     └── triul_impl<R, C>()
//!             │
//!             ├── runtime/cpu/ops.rs delegates here
//!             └── external runtimes delegate here
//! ```

pub mod indexing;
pub mod linalg;
pub mod matmul;
pub mod type_conversion;
pub mod utility;

pub use indexing::index_select_impl;
pub use linalg::{inverse_impl, triul_impl};
pub use matmul::matmul_impl;
pub use type_conversion::cast_impl;
pub use utility::{arange_impl, eye_impl};
