//! Operation trait implementations for the CPU runtime
//!
//! Every primitive delegates to the generic host implementations; on the CPU
//! the host staging copies are plain memcpys.

use super::{CpuClient, CpuRuntime};
use crate::dtype::DType;
use crate::error::Result;
use crate::ops::impl_generic::{
    arange_impl, cast_impl, eye_impl, index_select_impl, inverse_impl, matmul_impl, triul_impl,
};
use crate::ops::{
    IndexingOps, LinalgOps, MatmulOps, TensorOps, TypeConversionOps, UtilityOps,
};
use crate::tensor::Tensor;

impl TypeConversionOps<CpuRuntime> for CpuClient {
    fn cast(&self, a: &Tensor<CpuRuntime>, dtype: DType) -> Result<Tensor<CpuRuntime>> {
        cast_impl(self, a, dtype)
    }
}

impl UtilityOps<CpuRuntime> for CpuClient {
    fn eye(&self, n: usize, dtype: DType) -> Result<Tensor<CpuRuntime>> {
        eye_impl(self, n, dtype)
    }

    fn arange(&self, start: f64, stop: f64, step: f64, dtype: DType) -> Result<Tensor<CpuRuntime>> {
        arange_impl(self, start, stop, step, dtype)
    }
}

impl IndexingOps<CpuRuntime> for CpuClient {
    fn index_select(
        &self,
        a: &Tensor<CpuRuntime>,
        dim: isize,
        indices: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        index_select_impl(self, a, dim, indices)
    }
}

impl MatmulOps<CpuRuntime> for CpuClient {
    fn matmul(&self, a: &Tensor<CpuRuntime>, b: &Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>> {
        matmul_impl(self, a, b)
    }
}

impl LinalgOps<CpuRuntime> for CpuClient {
    fn triul(
        &self,
        a: &Tensor<CpuRuntime>,
    ) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
        triul_impl(self, a)
    }

    fn inverse(&self, a: &Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>> {
        inverse_impl(self, a)
    }
}

impl TensorOps<CpuRuntime> for CpuClient {}
