//! Pivot-index to permutation conversion
//!
//! LAPACK pivots describe a sequence of row swaps. Replaying those swaps on
//! `[0, 1, ..., n-1]` yields the gather index that reorders the identity into
//! the permutation the factorization applied.

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::ops::TensorOps;
use crate::runtime::{Runtime, RuntimeClient};
use crate::tensor::Tensor;

/// Replay 1-indexed pivots against the identity ordering
///
/// ```text
/// full = [0, 1, ..., n-1]
/// for i in 0..n: swap(full[i], full[ipiv[i] - 1])
/// ```
///
/// # Example
/// ```
/// use pivlu::algorithm::linalg::col_permutation;
/// assert_eq!(col_permutation(&[2, 3, 3], 3).unwrap(), vec![1, 2, 0]);
/// ```
///
/// # Errors
///
/// - `ShapeMismatch` if `ipiv.len() != n`
/// - `InvalidPivot` if any value lies outside `[1, n]`
pub fn col_permutation(ipiv: &[i64], n: usize) -> Result<Vec<i64>> {
    let mut full: Vec<i64> = (0..n as i64).collect();
    replay_pivots(&mut full, ipiv)?;
    Ok(full)
}

/// Apply the row swaps described by `ipiv` to `full` in place
fn replay_pivots(full: &mut [i64], ipiv: &[i64]) -> Result<()> {
    let n = full.len();
    if ipiv.len() != n {
        return Err(Error::ShapeMismatch {
            expected: vec![n],
            got: vec![ipiv.len()],
        });
    }

    for (i, &value) in ipiv.iter().enumerate() {
        if value < 1 || value as usize > n {
            return Err(Error::InvalidPivot { index: i, value, n });
        }
        full.swap(i, (value - 1) as usize);
    }
    Ok(())
}

/// Number of steps that actually exchanged two rows
pub fn count_row_swaps(ipiv: &[i64]) -> usize {
    ipiv.iter()
        .enumerate()
        .filter(|&(i, &p)| p != i as i64 + 1)
        .count()
}

/// Read a pivot tensor into host `i64` values
pub fn pivots_to_host<R: Runtime>(ipiv: &Tensor<R>) -> Result<Vec<i64>> {
    if ipiv.ndim() != 1 {
        return Err(Error::ShapeMismatch {
            expected: vec![ipiv.numel()],
            got: ipiv.shape().to_vec(),
        });
    }
    match ipiv.dtype() {
        DType::I32 => Ok(ipiv
            .try_to_vec::<i32>()?
            .into_iter()
            .map(i64::from)
            .collect()),
        DType::I64 => ipiv.try_to_vec::<i64>(),
        dtype => Err(Error::UnsupportedDType {
            dtype,
            op: "lu pivots",
        }),
    }
}

/// Column-permutation index vector of a pivot tensor
///
/// The identity ordering comes from `arange` and the pivots are widened to
/// I64 with `cast`; both are read back to the host, where the swaps are
/// replayed. Returns an I64 tensor of shape `[n]` on the pivot tensor's
/// device.
///
/// # Errors
///
/// - `UnsupportedDType` unless `ipiv` is I32/I64
/// - `ShapeMismatch` if `ipiv` is not a `[n]` vector
/// - `InvalidPivot` if any value lies outside `[1, n]`
pub fn get_col_permutation<R, C>(client: &C, ipiv: &Tensor<R>, n: usize) -> Result<Tensor<R>>
where
    R: Runtime,
    C: RuntimeClient<R> + TensorOps<R>,
{
    if !matches!(ipiv.dtype(), DType::I32 | DType::I64) {
        return Err(Error::UnsupportedDType {
            dtype: ipiv.dtype(),
            op: "lu pivots",
        });
    }
    if ipiv.ndim() != 1 {
        return Err(Error::ShapeMismatch {
            expected: vec![n],
            got: ipiv.shape().to_vec(),
        });
    }

    let full = client.arange(0.0, n as f64, 1.0, DType::I64)?;
    let pivots = client.cast(ipiv, DType::I64)?;
    client.synchronize();

    let mut perm = full.try_to_vec::<i64>()?;
    replay_pivots(&mut perm, &pivots.try_to_vec::<i64>()?)?;

    Tensor::try_from_slice(&perm, &[n], client.device())?.to_device(ipiv.device())
}
