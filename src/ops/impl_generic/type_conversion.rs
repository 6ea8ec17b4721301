//! Generic implementation of dtype casts

use crate::dtype::{DType, Element};
use crate::error::Result;
use crate::runtime::{Runtime, RuntimeClient};
use crate::tensor::Tensor;

/// Cast every element of `a` to `dtype`
///
/// Values are routed through `f64`, which is exact for every integer that
/// fits in 53 bits and for both float types.
pub fn cast_impl<R, C>(client: &C, a: &Tensor<R>, dtype: DType) -> Result<Tensor<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let src_dtype = a.dtype();
    let values: Vec<f64> = crate::dispatch_dtype!(src_dtype, S => {
        Ok(a.try_to_vec::<S>()?.into_iter().map(Element::to_f64).collect::<Vec<f64>>())
    }, "cast")?;

    crate::dispatch_dtype!(dtype, T => {
        let data: Vec<T> = values.iter().map(|&v| T::from_f64(v)).collect();
        Tensor::try_from_slice(&data, a.shape(), client.device())
    }, "cast")
}
