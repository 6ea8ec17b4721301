//! Native integer width configuration for LU pivot arrays

use crate::dtype::DType;
use crate::error::{Error, Result};

/// Native integer type of the CPU linalg kernels
///
/// `i64` when the crate is built with the `ilp64` feature, `i32` otherwise.
#[cfg(feature = "ilp64")]
pub type CpuLinalgInt = i64;

/// Native integer type of the CPU linalg kernels
///
/// `i64` when the crate is built with the `ilp64` feature, `i32` otherwise.
#[cfg(not(feature = "ilp64"))]
pub type CpuLinalgInt = i32;

/// Width of the integers a backend writes pivot indices in
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexWidth {
    /// 32-bit pivots (`DType::I32`)
    I32,
    /// 64-bit pivots (`DType::I64`)
    I64,
}

impl IndexWidth {
    /// Resolve a native integer size in bytes
    ///
    /// # Errors
    ///
    /// `UnsupportedIndexWidth` for anything other than 4 or 8.
    pub fn from_size_in_bytes(bytes: usize) -> Result<Self> {
        match bytes {
            4 => Ok(Self::I32),
            8 => Ok(Self::I64),
            bytes => Err(Error::UnsupportedIndexWidth { bytes }),
        }
    }

    /// Pivot tensor dtype for this width
    #[inline]
    pub const fn dtype(self) -> DType {
        match self {
            Self::I32 => DType::I32,
            Self::I64 => DType::I64,
        }
    }

    /// Size of one pivot in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::I32 => 4,
            Self::I64 => 8,
        }
    }
}

/// Configuration threaded into LU dispatch
///
/// The default reflects how the crate was built: `cpu_index_width` follows
/// [`CpuLinalgInt`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinalgConfig {
    /// Pivot width used by the CPU backend
    pub cpu_index_width: IndexWidth,
}

impl LinalgConfig {
    /// Build a config from an explicit native integer size in bytes
    pub fn from_native_int_size(bytes: usize) -> Result<Self> {
        Ok(Self {
            cpu_index_width: IndexWidth::from_size_in_bytes(bytes)?,
        })
    }

    /// Replace the CPU pivot width
    pub fn with_cpu_index_width(mut self, width: IndexWidth) -> Self {
        self.cpu_index_width = width;
        self
    }
}

/// Pivot width of [`CpuLinalgInt`], resolved at compile time
///
/// Any width other than 4 or 8 bytes fails the build.
pub const NATIVE_CPU_INDEX_WIDTH: IndexWidth = match std::mem::size_of::<CpuLinalgInt>() {
    4 => IndexWidth::I32,
    8 => IndexWidth::I64,
    _ => panic!("CpuLinalgInt must be 4 or 8 bytes wide"),
};

impl Default for LinalgConfig {
    fn default() -> Self {
        Self {
            cpu_index_width: NATIVE_CPU_INDEX_WIDTH,
        }
    }
}
