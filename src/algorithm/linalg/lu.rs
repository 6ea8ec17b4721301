//! Pivoted LU decomposition
//!
//! The routines here bridge row-major tensors and column-major native
//! kernels:
//!
//! 1. validate the input (dtype, rank, squareness, size)
//! 2. `A.t().deep_clone()` gives A's elements in column-major order
//! 3. the backend factors that buffer in place and returns 1-indexed pivots
//! 4. `buffer.t().contiguous()` restores row-major order
//!
//! [`lu`] additionally splits the packed result into explicit P, L, U
//! factors with A = P @ L @ U.

use super::backend::{LuBackend, select_backend};
use super::config::LinalgConfig;
use super::decompositions::{LuFactorization, PluDecomposition};
use super::helpers::{validate_lu_input, validate_square_matrix};
use super::pivot::{count_row_swaps, get_col_permutation, pivots_to_host};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::TensorOps;
use crate::runtime::{Device, Runtime, RuntimeClient};
use crate::tensor::Tensor;
use log::trace;

/// Packed LU factorization with the default [`LinalgConfig`]
pub fn lu_with_ipiv<R, C>(client: &C, a: &Tensor<R>) -> Result<LuFactorization<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    lu_with_ipiv_with_config(client, a, &LinalgConfig::default())
}

/// Packed LU factorization
///
/// Returns the pivots and the row-major packed factors without
/// reconstructing P, L, U. `a` is never modified.
///
/// # Errors
///
/// - `UnsupportedDType` unless `a` is F32/F64
/// - `NotTwoDimensional`, `NotSquare`, `ZeroDimension` for bad shapes
/// - `DeviceMismatch` if `a` is not on the client's device
/// - `UnsupportedBackend` if no backend is compiled in for the device
/// - `SingularMatrix` / `KernelFailure` from the native kernel
pub fn lu_with_ipiv_with_config<R, C>(
    client: &C,
    a: &Tensor<R>,
    config: &LinalgConfig,
) -> Result<LuFactorization<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let n = validate_lu_input(a)?;
    if !client.device().is_same(a.device()) {
        return Err(Error::DeviceMismatch);
    }
    let backend = select_backend(a.device(), config)?;

    let mut buffer = a.t()?.deep_clone()?;
    trace!(
        "lu: staged {n}x{n} {} input as column-major buffer {:?}",
        a.dtype(),
        buffer.layout()
    );

    let ipiv = backend.getrf(&mut buffer, n)?;

    let output = buffer.t()?.contiguous()?;
    trace!("lu: packed factors restored to row-major {:?}", output.layout());

    Ok(LuFactorization { ipiv, output })
}

/// Expand a packed factorization into explicit P, L, U
///
/// `upper` and `lower` come from [`LinalgOps::triul`](crate::ops::LinalgOps::triul);
/// `permutation` is the inverse of the identity gathered by the replayed
/// pivots. With `permute_l`, `lower` is replaced by `permutation @ lower`.
pub fn output_to_plu<R, C>(
    client: &C,
    output: &Tensor<R>,
    ipiv: &Tensor<R>,
    permute_l: bool,
) -> Result<PluDecomposition<R>>
where
    R: Runtime,
    C: RuntimeClient<R> + TensorOps<R>,
{
    let n = validate_square_matrix(output.shape())?;

    let (upper, lower) = client.triul(output)?;

    let perm = get_col_permutation(client, ipiv, n)?;
    let identity = client.eye(n, output.dtype())?;
    let permutation = client
        .inverse(&client.index_select(&identity, 0, &perm)?)?
        .contiguous()?;

    let lower = if permute_l {
        client.matmul(&permutation, &lower)?
    } else {
        lower
    };

    Ok(PluDecomposition {
        permutation,
        lower,
        upper,
    })
}

/// Explicit LU decomposition with the default [`LinalgConfig`]
pub fn lu<R, C>(client: &C, a: &Tensor<R>, permute_l: bool) -> Result<PluDecomposition<R>>
where
    R: Runtime,
    C: RuntimeClient<R> + TensorOps<R>,
{
    lu_with_config(client, a, permute_l, &LinalgConfig::default())
}

/// Explicit LU decomposition: A = P @ L @ U
///
/// When `permute_l` is set, the returned `lower` is `P @ L`, so that
/// A = lower @ upper. `permutation` is returned either way.
pub fn lu_with_config<R, C>(
    client: &C,
    a: &Tensor<R>,
    permute_l: bool,
    config: &LinalgConfig,
) -> Result<PluDecomposition<R>>
where
    R: Runtime,
    C: RuntimeClient<R> + TensorOps<R>,
{
    let LuFactorization { ipiv, output } = lu_with_ipiv_with_config(client, a, config)?;
    output_to_plu(client, &output, &ipiv, permute_l)
}

/// Determinant with the default [`LinalgConfig`]
pub fn det<R, C>(client: &C, a: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    det_with_config(client, a, &LinalgConfig::default())
}

/// Determinant from the packed LU factors
///
/// `det(A) = (-1)^s * prod(U[i, i])` where `s` counts the pivots with
/// `ipiv[i] != i + 1`. Returns a 0-dimensional tensor of A's dtype.
///
/// # Errors
///
/// Same as [`lu_with_ipiv_with_config`]; an exactly singular input reports
/// `SingularMatrix`.
pub fn det_with_config<R, C>(client: &C, a: &Tensor<R>, config: &LinalgConfig) -> Result<Tensor<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let LuFactorization { ipiv, output } = lu_with_ipiv_with_config(client, a, config)?;
    client.synchronize();
    let n = output.shape()[0];
    let swaps = count_row_swaps(&pivots_to_host(&ipiv)?);

    crate::dispatch_float_dtype!(output.dtype(), T => {
        let packed = output.try_to_vec::<T>()?;
        let mut value = <T as Element>::one();
        for i in 0..n {
            value = value * packed[i * n + i];
        }
        if swaps % 2 == 1 {
            value = <T as Element>::zero() - value;
        }
        Tensor::try_from_slice(&[value], &[], output.device())
    }, "det")
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::dtype::DType;
    use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    fn setup() -> (crate::runtime::cpu::CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        (CpuRuntime::default_client(&device), device)
    }

    #[test]
    fn test_lu_with_ipiv_2x2() {
        let (client, device) = setup();
        let a = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[2, 2], &device);

        let LuFactorization { ipiv, output } = lu_with_ipiv(&client, &a).unwrap();
        assert_eq!(ipiv.dtype(), LinalgConfig::default().cpu_index_width.dtype());
        assert_eq!(pivots_to_host(&ipiv).unwrap(), vec![2, 2]);

        assert!(output.is_contiguous());
        let packed = output.to_vec::<f64>();
        // Row-major [[3, 4], [1/3, 2/3]]
        assert!((packed[0] - 3.0).abs() < 1e-12);
        assert!((packed[1] - 4.0).abs() < 1e-12);
        assert!((packed[2] - 1.0 / 3.0).abs() < 1e-12);
        assert!((packed[3] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_output_to_plu_known_pivots() {
        let (client, device) = setup();
        let output = Tensor::<CpuRuntime>::from_slice(
            &[2.0f64, 1.0, 1.0, 0.5, 3.0, 1.0, 0.25, 0.5, 4.0],
            &[3, 3],
            &device,
        );
        let ipiv = Tensor::<CpuRuntime>::from_slice(&[2i32, 3, 3], &[3], &device);

        let plu = output_to_plu(&client, &output, &ipiv, false).unwrap();
        // perm = [1, 2, 0]; P = inverse(rows [e1, e2, e0]) = its transpose
        assert_eq!(
            plu.permutation.to_vec::<f64>(),
            [0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(
            plu.lower.to_vec::<f64>(),
            [1.0, 0.0, 0.0, 0.5, 1.0, 0.0, 0.25, 0.5, 1.0]
        );
        assert_eq!(
            plu.upper.to_vec::<f64>(),
            [2.0, 1.0, 1.0, 0.0, 3.0, 1.0, 0.0, 0.0, 4.0]
        );
    }

    #[test]
    fn test_det_values() {
        let (client, device) = setup();

        let a = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[2, 2], &device);
        let d: f64 = det(&client, &a).unwrap().item().unwrap();
        assert!((d - (-2.0)).abs() < 1e-12);

        let a = Tensor::<CpuRuntime>::from_slice(&[7.0f32], &[1, 1], &device);
        let d = det(&client, &a).unwrap();
        assert_eq!(d.shape(), &[] as &[usize]);
        assert_eq!(d.dtype(), DType::F32);
        assert_eq!(d.item::<f32>().unwrap(), 7.0);
    }
}
