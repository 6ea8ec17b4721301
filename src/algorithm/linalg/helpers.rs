//! Validation helpers for linear algebra inputs

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Validate dtype is F32 or F64
pub fn validate_linalg_dtype(dtype: DType, op: &'static str) -> Result<()> {
    match dtype {
        DType::F32 | DType::F64 => Ok(()),
        dtype => Err(Error::UnsupportedDType { dtype, op }),
    }
}

/// Validate matrix is 2D
pub fn validate_matrix_2d(shape: &[usize]) -> Result<(usize, usize)> {
    if shape.len() != 2 {
        return Err(Error::NotTwoDimensional { ndim: shape.len() });
    }
    Ok((shape[0], shape[1]))
}

/// Validate matrix is square
pub fn validate_square_matrix(shape: &[usize]) -> Result<usize> {
    let (rows, cols) = validate_matrix_2d(shape)?;
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Validate an LU input and return its dimension `n`
///
/// Checks run in a fixed order so the first violated rule is reported:
/// dtype, rank, squareness, then non-zero size.
pub fn validate_lu_input<R: Runtime>(a: &Tensor<R>) -> Result<usize> {
    validate_linalg_dtype(a.dtype(), "lu")?;
    let n = validate_square_matrix(a.shape())?;
    if n == 0 {
        return Err(Error::ZeroDimension);
    }
    Ok(n)
}
