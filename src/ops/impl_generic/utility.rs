//! Generic implementations of tensor creation operations

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::{Runtime, RuntimeClient};
use crate::tensor::Tensor;

/// Identity matrix built on the host and uploaded to the client's device
pub fn eye_impl<R, C>(client: &C, n: usize, dtype: DType) -> Result<Tensor<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    crate::dispatch_dtype!(dtype, T => {
        let mut data = vec![<T as Element>::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = <T as Element>::one();
        }
        Tensor::try_from_slice(&data, &[n, n], client.device())
    }, "eye")
}

/// Number of elements `arange(start, stop, step)` produces
pub fn arange_len(start: f64, stop: f64, step: f64) -> Result<usize> {
    if step == 0.0 || !step.is_finite() {
        return Err(Error::InvalidArgument {
            arg: "step",
            reason: format!("arange requires a finite, non-zero step, got {step}"),
        });
    }
    if (stop - start) * step < 0.0 {
        return Err(Error::InvalidArgument {
            arg: "step",
            reason: format!("step {step} moves away from stop ({start} -> {stop})"),
        });
    }
    Ok(((stop - start) / step).ceil().max(0.0) as usize)
}

/// Evenly spaced values in `[start, stop)`
pub fn arange_impl<R, C>(
    client: &C,
    start: f64,
    stop: f64,
    step: f64,
    dtype: DType,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let len = arange_len(start, stop, step)?;
    crate::dispatch_dtype!(dtype, T => {
        let data: Vec<T> = (0..len)
            .map(|i| T::from_f64(start + step * i as f64))
            .collect();
        Tensor::try_from_slice(&data, &[len], client.device())
    }, "arange")
}
