//! Runtime backends for tensor computation
//!
//! This module defines the `Runtime` trait and provides the CPU backend.
//! Other backends (accelerators, test doubles) live outside the crate and
//! plug in by implementing the same traits.
//!
//! # Architecture
//!
//! ```text
//! Runtime (backend identity)
//! ├── Device (identifies a specific compute unit and its DeviceType)
//! └── Client (dispatches operations)
//! ```

pub mod traits;

#[cfg(feature = "cpu")]
pub mod cpu;

pub use traits::{Device, DeviceType, Runtime, RuntimeClient};
