//! Error types for pivlu

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using pivlu's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pivlu operations
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid dimension index
    #[error("Invalid dimension {dim} for tensor with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid dimension
        dim: isize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// DType mismatch between operands
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Left-hand side dtype
        lhs: DType,
        /// Right-hand side dtype
        rhs: DType,
    },

    /// Matrix operand is not rank 2
    #[error("Tensor must be 2D, but got {ndim}D")]
    NotTwoDimensional {
        /// Rank of the offending tensor
        ndim: usize,
    },

    /// Matrix operand is not square
    #[error("Tensor must be square, but got {rows} x {cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Matrix operand has a zero-sized dimension
    #[error("Tensor shapes should not contain dimensions with zero")]
    ZeroDimension,

    /// Native linalg integer width is neither 4 nor 8 bytes
    #[error("Unsupported native linalg integer width: {bytes} bytes (expected 4 or 8)")]
    UnsupportedIndexWidth {
        /// Width in bytes
        bytes: usize,
    },

    /// No LU backend is compiled in for the tensor's device
    #[error("Unsupported backend: no LU kernel available for device '{device}'")]
    UnsupportedBackend {
        /// Device name
        device: String,
    },

    /// Factorization hit an exactly zero pivot
    #[error("Singular matrix: U({pivot}, {pivot}) is exactly zero")]
    SingularMatrix {
        /// 1-indexed position of the zero diagonal element
        pivot: usize,
    },

    /// Native kernel reported an illegal argument
    #[error("{backend} LU kernel failed with info = {info}")]
    KernelFailure {
        /// The backend that ran the kernel
        backend: &'static str,
        /// LAPACK-style status code
        info: i64,
    },

    /// Pivot value outside [1, n]
    #[error("Invalid pivot ipiv[{index}] = {value}, expected a value in [1, {n}]")]
    InvalidPivot {
        /// Position in the pivot array
        index: usize,
        /// The offending value
        value: i64,
        /// Matrix dimension
        n: usize,
    },

    /// Device mismatch between operands
    #[error("Device mismatch: tensors must be on the same device")]
    DeviceMismatch,

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Tensor is not contiguous when contiguous memory is required
    #[error("Operation requires contiguous tensor")]
    NotContiguous,

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Map a LAPACK-style `info` status to a result
    ///
    /// `info == 0` is success, `info > 0` names the zero pivot, `info < 0`
    /// names the illegal argument.
    pub fn check_info(backend: &'static str, info: i64) -> Result<()> {
        match info {
            0 => Ok(()),
            i if i > 0 => Err(Self::SingularMatrix { pivot: i as usize }),
            i => Err(Self::KernelFailure { backend, info: i }),
        }
    }
}
