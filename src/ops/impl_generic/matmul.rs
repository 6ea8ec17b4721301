//! Generic implementation of 2D matrix multiplication

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::runtime::{Device, Runtime, RuntimeClient};
use crate::tensor::Tensor;

/// Validate matmul operands, returning `(m, k, n)`
pub fn validate_matmul_shapes(a_shape: &[usize], b_shape: &[usize]) -> Result<(usize, usize, usize)> {
    if a_shape.len() != 2 {
        return Err(Error::NotTwoDimensional { ndim: a_shape.len() });
    }
    if b_shape.len() != 2 {
        return Err(Error::NotTwoDimensional { ndim: b_shape.len() });
    }
    let (m, k) = (a_shape[0], a_shape[1]);
    if b_shape[0] != k {
        return Err(Error::ShapeMismatch {
            expected: vec![k, b_shape[1]],
            got: b_shape.to_vec(),
        });
    }
    Ok((m, k, b_shape[1]))
}

/// `C = A @ B` computed on the host
pub fn matmul_impl<R, C>(client: &C, a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    if a.dtype() != b.dtype() {
        return Err(Error::DTypeMismatch {
            lhs: a.dtype(),
            rhs: b.dtype(),
        });
    }
    if !a.device().is_same(b.device()) {
        return Err(Error::DeviceMismatch);
    }
    let (m, k, n) = validate_matmul_shapes(a.shape(), b.shape())?;

    crate::dispatch_dtype!(a.dtype(), T => {
        let lhs = a.try_to_vec::<T>()?;
        let rhs = b.try_to_vec::<T>()?;
        let mut out = vec![<T as Element>::zero(); m * n];

        // i-k-j order keeps the inner loop on contiguous rows
        for i in 0..m {
            for kk in 0..k {
                let a_ik = lhs[i * k + kk];
                for j in 0..n {
                    out[i * n + j] = out[i * n + j] + a_ik * rhs[kk * n + j];
                }
            }
        }
        Tensor::try_from_slice(&out, &[m, n], client.device())
    }, "matmul")
}
