//! Client-level LU algorithm trait

use super::config::LinalgConfig;
use super::decompositions::{LuFactorization, PluDecomposition};
use super::lu;
use crate::error::Result;
use crate::ops::TensorOps;
use crate::runtime::{Runtime, RuntimeClient};
use crate::tensor::Tensor;

/// Pivoted LU decomposition as client methods
///
/// Implemented for every client that provides the [`TensorOps`] primitives,
/// so external runtimes get these methods once their operation traits are in
/// place.
///
/// # Example
///
/// ```ignore
/// let plu = client.lu(&a, false)?;
/// let a_again = client.matmul(&client.matmul(&plu.permutation, &plu.lower)?, &plu.upper)?;
/// ```
pub trait LuAlgorithms<R: Runtime> {
    /// Packed factors and pivots, see [`lu::lu_with_ipiv_with_config`]
    fn lu_with_ipiv(&self, a: &Tensor<R>) -> Result<LuFactorization<R>> {
        self.lu_with_ipiv_with_config(a, &LinalgConfig::default())
    }

    /// Packed factors and pivots with an explicit config
    fn lu_with_ipiv_with_config(
        &self,
        a: &Tensor<R>,
        config: &LinalgConfig,
    ) -> Result<LuFactorization<R>>;

    /// Explicit P, L, U factors, see [`lu::lu_with_config`]
    fn lu(&self, a: &Tensor<R>, permute_l: bool) -> Result<PluDecomposition<R>> {
        self.lu_with_config(a, permute_l, &LinalgConfig::default())
    }

    /// Explicit P, L, U factors with an explicit config
    fn lu_with_config(
        &self,
        a: &Tensor<R>,
        permute_l: bool,
        config: &LinalgConfig,
    ) -> Result<PluDecomposition<R>>;

    /// Determinant as a 0-dimensional tensor, see [`lu::det_with_config`]
    fn det(&self, a: &Tensor<R>) -> Result<Tensor<R>> {
        self.det_with_config(a, &LinalgConfig::default())
    }

    /// Determinant with an explicit config
    fn det_with_config(&self, a: &Tensor<R>, config: &LinalgConfig) -> Result<Tensor<R>>;
}

impl<R, C> LuAlgorithms<R> for C
where
    R: Runtime,
    C: RuntimeClient<R> + TensorOps<R>,
{
    fn lu_with_ipiv_with_config(
        &self,
        a: &Tensor<R>,
        config: &LinalgConfig,
    ) -> Result<LuFactorization<R>> {
        lu::lu_with_ipiv_with_config(self, a, config)
    }

    fn lu_with_config(
        &self,
        a: &Tensor<R>,
        permute_l: bool,
        config: &LinalgConfig,
    ) -> Result<PluDecomposition<R>> {
        lu::lu_with_config(self, a, permute_l, config)
    }

    fn det_with_config(&self, a: &Tensor<R>, config: &LinalgConfig) -> Result<Tensor<R>> {
        lu::det_with_config(self, a, config)
    }
}
