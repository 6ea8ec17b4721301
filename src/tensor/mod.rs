//! Tensor types
//!
//! This module provides the core `Tensor` type, which represents an n-dimensional
//! array stored on a compute device (CPU, accelerator).

mod core;
mod layout;
mod storage;

pub use core::Tensor;
pub use layout::{Layout, Shape, Strides};
pub use storage::Storage;
