//! In-place LU factorization with partial pivoting (LAPACK `getrf` convention)
//!
//! The matrix is stored column-major with leading dimension `n`, so element
//! `(row, col)` lives at `a[row + col * n]`. On return the strictly lower part
//! holds the unit-lower factor L (diagonal implied) and the rest holds U.
//! `ipiv[j]` is the 1-indexed row that was exchanged with row `j + 1` at
//! step `j`.

use crate::dtype::Element;

/// Floating point element the factorization kernels accept
pub trait LinalgElement: Element + Sized {
    /// Returns absolute value
    fn abs_val(&self) -> Self;
    /// Returns true for an exact zero
    fn is_exact_zero(&self) -> bool;
}

impl LinalgElement for f32 {
    #[inline]
    fn abs_val(&self) -> Self {
        self.abs()
    }
    #[inline]
    fn is_exact_zero(&self) -> bool {
        *self == 0.0
    }
}

impl LinalgElement for f64 {
    #[inline]
    fn abs_val(&self) -> Self {
        self.abs()
    }
    #[inline]
    fn is_exact_zero(&self) -> bool {
        *self == 0.0
    }
}

/// Integer element a pivot array can be written in
pub trait PivotIndex: Element {
    /// Convert a 1-indexed row number into this index type
    fn from_row(row: usize) -> Self;
    /// Widen to i64
    fn to_i64(self) -> i64;
}

impl PivotIndex for i32 {
    #[inline]
    fn from_row(row: usize) -> Self {
        row as i32
    }
    #[inline]
    fn to_i64(self) -> i64 {
        self as i64
    }
}

impl PivotIndex for i64 {
    #[inline]
    fn from_row(row: usize) -> Self {
        row as i64
    }
    #[inline]
    fn to_i64(self) -> i64 {
        self
    }
}

/// Factor a column-major `n x n` matrix in place
///
/// Returns the LAPACK `info` status:
/// - `0`: success
/// - `k > 0`: `U(k, k)` is exactly zero; the factorization was completed
///   but U is singular
/// - `-3`: `a` is null
/// - `-5`: `ipiv` is null
///
/// # Safety
/// - `a` must be valid for reads and writes of `n * n` elements
/// - `ipiv` must be valid for writes of `n` elements
/// - the two regions must not overlap
pub unsafe fn getrf_kernel<T: LinalgElement, I: PivotIndex>(
    a: *mut T,
    ipiv: *mut I,
    n: usize,
) -> i64 {
    if n == 0 {
        return 0;
    }
    if a.is_null() {
        return -3;
    }
    if ipiv.is_null() {
        return -5;
    }

    // SAFETY: the caller guarantees both regions are valid and disjoint.
    let (a, ipiv) = unsafe {
        (
            std::slice::from_raw_parts_mut(a, n * n),
            std::slice::from_raw_parts_mut(ipiv, n),
        )
    };
    getrf_slice(a, ipiv, n)
}

/// Safe core of [`getrf_kernel`]
///
/// `a` must hold `n * n` elements and `ipiv` at least `n`.
pub(crate) fn getrf_slice<T: LinalgElement, I: PivotIndex>(
    a: &mut [T],
    ipiv: &mut [I],
    n: usize,
) -> i64 {
    debug_assert!(a.len() >= n * n);
    debug_assert!(ipiv.len() >= n);

    let mut info = 0i64;

    for j in 0..n {
        let col = j * n;

        // First row of maximum magnitude wins ties, as idamax does
        let mut pivot_row = j;
        let mut max_val = a[col + j].abs_val();
        for row in (j + 1)..n {
            let val = a[col + row].abs_val();
            if val > max_val {
                max_val = val;
                pivot_row = row;
            }
        }
        ipiv[j] = I::from_row(pivot_row + 1);

        if !a[col + pivot_row].is_exact_zero() {
            if pivot_row != j {
                for c in 0..n {
                    a.swap(c * n + j, c * n + pivot_row);
                }
            }

            let pivot = a[col + j];
            for row in (j + 1)..n {
                a[col + row] = a[col + row] / pivot;
            }
        } else if info == 0 {
            info = (j + 1) as i64;
        }

        // Rank-1 update of the trailing submatrix
        for c in (j + 1)..n {
            let u = a[c * n + j];
            if u.is_exact_zero() {
                continue;
            }
            for row in (j + 1)..n {
                a[c * n + row] = a[c * n + row] - a[col + row] * u;
            }
        }
    }

    info
}
