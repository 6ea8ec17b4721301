//! Generic implementations of triangular split and matrix inverse

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::{Runtime, RuntimeClient};
use crate::tensor::Tensor;

fn matrix_dims(shape: &[usize]) -> Result<(usize, usize)> {
    if shape.len() != 2 {
        return Err(Error::NotTwoDimensional { ndim: shape.len() });
    }
    Ok((shape[0], shape[1]))
}

/// Split `a` into `(upper, lower)`; `lower` has a unit diagonal
pub fn triul_impl<R, C>(client: &C, a: &Tensor<R>) -> Result<(Tensor<R>, Tensor<R>)>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let (rows, cols) = matrix_dims(a.shape())?;

    crate::dispatch_dtype!(a.dtype(), T => {
        let src = a.try_to_vec::<T>()?;
        let mut upper = vec![<T as Element>::zero(); rows * cols];
        let mut lower = vec![<T as Element>::zero(); rows * cols];

        for i in 0..rows {
            for j in 0..cols {
                let idx = i * cols + j;
                if j >= i {
                    upper[idx] = src[idx];
                } else {
                    lower[idx] = src[idx];
                }
                if j == i {
                    lower[idx] = <T as Element>::one();
                }
            }
        }

        let device = client.device();
        Ok((
            Tensor::try_from_slice(&upper, &[rows, cols], device)?,
            Tensor::try_from_slice(&lower, &[rows, cols], device)?,
        ))
    }, "triul")
}

/// Gauss-Jordan inverse with partial pivoting, accumulated in `f64`
fn invert_host(a: &mut [f64], n: usize) -> Result<Vec<f64>> {
    let mut inv = vec![0.0; n * n];
    for i in 0..n {
        inv[i * n + i] = 1.0;
    }

    for col in 0..n {
        let mut pivot_row = col;
        let mut max_val = a[col * n + col].abs();
        for row in (col + 1)..n {
            let val = a[row * n + col].abs();
            if val > max_val {
                max_val = val;
                pivot_row = row;
            }
        }
        if max_val == 0.0 {
            return Err(Error::SingularMatrix { pivot: col + 1 });
        }

        if pivot_row != col {
            for j in 0..n {
                a.swap(col * n + j, pivot_row * n + j);
                inv.swap(col * n + j, pivot_row * n + j);
            }
        }

        let pivot = a[col * n + col];
        for j in 0..n {
            a[col * n + j] /= pivot;
            inv[col * n + j] /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = a[row * n + col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                a[row * n + j] -= factor * a[col * n + j];
                inv[row * n + j] -= factor * inv[col * n + j];
            }
        }
    }

    Ok(inv)
}

/// Inverse of a square F32/F64 matrix
pub fn inverse_impl<R, C>(client: &C, a: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let dtype = a.dtype();
    if !matches!(dtype, DType::F32 | DType::F64) {
        return Err(Error::unsupported_dtype(dtype, "inverse"));
    }
    let (rows, cols) = matrix_dims(a.shape())?;
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }

    crate::dispatch_float_dtype!(dtype, T => {
        let mut work: Vec<f64> = a
            .try_to_vec::<T>()?
            .into_iter()
            .map(Element::to_f64)
            .collect();
        let inv: Vec<T> = invert_host(&mut work, rows)?
            .into_iter()
            .map(T::from_f64)
            .collect();
        Tensor::try_from_slice(&inv, &[rows, rows], client.device())
    }, "inverse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_host_permutation_is_transpose() {
        // Rows of the identity in order [1, 2, 0]
        let mut p = vec![0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0];
        let inv = invert_host(&mut p, 3).unwrap();
        assert_eq!(inv, vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_invert_host_2x2() {
        let mut a = vec![4.0, 7.0, 2.0, 6.0];
        let inv = invert_host(&mut a, 2).unwrap();
        let expected = [0.6, -0.7, -0.2, 0.4];
        for (x, y) in inv.iter().zip(expected.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invert_host_singular() {
        let mut a = vec![1.0, 2.0, 2.0, 4.0];
        assert!(matches!(
            invert_host(&mut a, 2),
            Err(Error::SingularMatrix { pivot: 2 })
        ));
    }
}
