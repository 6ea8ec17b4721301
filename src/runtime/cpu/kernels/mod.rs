//! Host-side compute kernels
//!
//! Kernels operate on raw pointers and carry no tensor metadata. Callers
//! are responsible for shapes, layouts and allocation.

pub mod getrf;
