//! Generic implementation of index_select

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::runtime::{Device, Runtime, RuntimeClient};
use crate::tensor::Tensor;

/// Read a 1D integer index tensor into host `i64` values
pub(crate) fn indices_to_host<R: Runtime>(indices: &Tensor<R>) -> Result<Vec<i64>> {
    if indices.ndim() != 1 {
        return Err(Error::InvalidArgument {
            arg: "indices",
            reason: format!("expected a 1D tensor, got shape {:?}", indices.shape()),
        });
    }
    match indices.dtype() {
        DType::I64 => indices.try_to_vec::<i64>(),
        DType::I32 => Ok(indices
            .try_to_vec::<i32>()?
            .into_iter()
            .map(i64::from)
            .collect()),
        dtype => Err(Error::UnsupportedDType {
            dtype,
            op: "index_select (indices must be I64 or I32)",
        }),
    }
}

/// Gather slices of `a` along `dim`
pub fn index_select_impl<R, C>(
    client: &C,
    a: &Tensor<R>,
    dim: isize,
    indices: &Tensor<R>,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    if !a.device().is_same(indices.device()) {
        return Err(Error::DeviceMismatch);
    }
    let dim_idx = a
        .layout()
        .normalize_dim(dim)
        .ok_or(Error::InvalidDimension {
            dim,
            ndim: a.ndim(),
        })?;

    let index = indices_to_host(indices)?;
    let shape = a.shape();
    let dim_size = shape[dim_idx];

    let mut positions = Vec::with_capacity(index.len());
    for &i in &index {
        if i < 0 {
            return Err(Error::InvalidArgument {
                arg: "indices",
                reason: format!("negative index {i}"),
            });
        }
        if i as usize >= dim_size {
            return Err(Error::IndexOutOfBounds {
                index: i as usize,
                size: dim_size,
            });
        }
        positions.push(i as usize);
    }

    let outer: usize = shape[..dim_idx].iter().product();
    let inner: usize = shape[dim_idx + 1..].iter().product();
    let mut out_shape = shape.to_vec();
    out_shape[dim_idx] = positions.len();

    crate::dispatch_dtype!(a.dtype(), T => {
        let src = a.try_to_vec::<T>()?;
        let mut out = Vec::with_capacity(outer * positions.len() * inner);
        for o in 0..outer {
            for &p in &positions {
                let start = (o * dim_size + p) * inner;
                out.extend_from_slice(&src[start..start + inner]);
            }
        }
        Tensor::try_from_slice(&out, &out_shape, client.device())
    }, "index_select")
}
