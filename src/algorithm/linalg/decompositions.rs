//! Decomposition result types

use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Packed LU factorization: P^-1 A = L U with P encoded by `ipiv`
///
/// `output` is row-major contiguous. Its strictly lower part is L (unit
/// diagonal implied) and the rest is U.
#[derive(Debug)]
pub struct LuFactorization<R: Runtime> {
    /// 1-indexed pivots in LAPACK `getrf` convention: at step `i`, row `i + 1`
    /// was exchanged with row `ipiv[i]`. I32 or I64, shape `[n]`.
    pub ipiv: Tensor<R>,

    /// Packed L and U factors, shape `[n, n]`
    pub output: Tensor<R>,
}

/// Explicit pivoted LU decomposition: A = P L U
///
/// When built with `permute_l`, `lower` holds `P L` instead, so A = lower @ upper.
#[derive(Debug)]
pub struct PluDecomposition<R: Runtime> {
    /// Permutation matrix P, contiguous, same dtype as A
    pub permutation: Tensor<R>,

    /// Unit lower-triangular factor L (or `P L`)
    pub lower: Tensor<R>,

    /// Upper-triangular factor U
    pub upper: Tensor<R>,
}
