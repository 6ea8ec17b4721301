//! LU backend dispatch
//!
//! A backend factors a column-major buffer in place and returns its pivot
//! tensor. The backend is chosen from the buffer's [`DeviceType`]:
//!
//! ```text
//! DeviceType::Cpu         -> CpuLuBackend          (pivots: LinalgConfig::cpu_index_width)
//! DeviceType::Accelerator -> AcceleratorLuBackend  (pivots: I32, feature "accelerator")
//! ```

#[cfg(feature = "cpu")]
use super::config::IndexWidth;
use super::config::LinalgConfig;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::runtime::{Device, DeviceType, Runtime};
use crate::tensor::Tensor;
use log::{debug, warn};

#[cfg(feature = "cpu")]
use crate::runtime::cpu::getrf_kernel;

/// In-place LU factorization capability of one backend
pub trait LuBackend {
    /// Short name used in logs and kernel errors
    fn name(&self) -> &'static str;

    /// Dtype of the pivot tensor this backend produces
    fn pivot_dtype(&self) -> DType;

    /// Factor `buffer` in place and return the 1-indexed pivots
    ///
    /// `buffer` holds an `n x n` F32/F64 matrix in column-major order (a
    /// contiguous `[n, n]` tensor whose memory is read as Fortran order) and
    /// must uniquely own its storage. The pivot tensor has shape `[n]`, dtype
    /// [`LuBackend::pivot_dtype`], and lives on the buffer's device.
    ///
    /// # Errors
    ///
    /// - `SingularMatrix` if the kernel reports an exact zero on U's diagonal
    /// - `KernelFailure` if the kernel reports an illegal argument
    fn getrf<R: Runtime>(&self, buffer: &mut Tensor<R>, n: usize) -> Result<Tensor<R>>;
}

/// Check the invariants every backend relies on before touching memory
#[cfg(feature = "cpu")]
fn check_factor_buffer<R: Runtime>(buffer: &Tensor<R>, n: usize) -> Result<()> {
    if buffer.shape() != [n, n] {
        return Err(Error::shape_mismatch(&[n, n], buffer.shape()));
    }
    if !buffer.is_contiguous() {
        return Err(Error::NotContiguous);
    }
    if !buffer.storage().is_unique() {
        return Err(Error::InvalidArgument {
            arg: "buffer",
            reason: "in-place factorization requires uniquely owned storage".to_string(),
        });
    }
    Ok(())
}

/// Host CPU backend
///
/// Runs [`getrf_kernel`] directly on the buffer's device pointer, so it
/// requires runtimes whose `Cpu` devices hand out host addresses.
#[cfg(feature = "cpu")]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CpuLuBackend {
    /// Width of the pivots the native kernel writes
    pub index_width: IndexWidth,
}

#[cfg(feature = "cpu")]
impl CpuLuBackend {
    /// Create a CPU backend writing pivots of the given width
    pub fn new(index_width: IndexWidth) -> Self {
        Self { index_width }
    }
}

#[cfg(feature = "cpu")]
impl LuBackend for CpuLuBackend {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn pivot_dtype(&self) -> DType {
        self.index_width.dtype()
    }

    fn getrf<R: Runtime>(&self, buffer: &mut Tensor<R>, n: usize) -> Result<Tensor<R>> {
        check_factor_buffer(buffer, n)?;

        let ipiv = Tensor::<R>::try_empty(&[n], self.pivot_dtype(), buffer.device())?;
        let a_ptr = buffer.ptr();
        let ipiv_ptr = ipiv.ptr();
        let width = self.index_width;

        let info = crate::dispatch_float_dtype!(buffer.dtype(), T => {
            // SAFETY: the buffer is a uniquely owned contiguous [n, n] host
            // allocation and ipiv is a fresh [n] allocation of the pivot dtype.
            let info = unsafe {
                match width {
                    IndexWidth::I32 => getrf_kernel::<T, i32>(a_ptr as *mut T, ipiv_ptr as *mut i32, n),
                    IndexWidth::I64 => getrf_kernel::<T, i64>(a_ptr as *mut T, ipiv_ptr as *mut i64, n),
                }
            };
            Ok(info)
        }, "lu")?;

        Error::check_info(self.name(), info)?;
        Ok(ipiv)
    }
}

/// Accelerator backend
///
/// Accelerator kernels take 32-bit pivots. The buffer is staged through
/// host memory with the runtime's copy primitives, factored by the host
/// kernel, and written back to the device, so any runtime whose devices
/// report [`DeviceType::Accelerator`] is supported.
#[cfg(feature = "accelerator")]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceleratorLuBackend;

#[cfg(feature = "accelerator")]
impl LuBackend for AcceleratorLuBackend {
    fn name(&self) -> &'static str {
        "accelerator"
    }

    fn pivot_dtype(&self) -> DType {
        DType::I32
    }

    fn getrf<R: Runtime>(&self, buffer: &mut Tensor<R>, n: usize) -> Result<Tensor<R>> {
        use crate::runtime::cpu::getrf_slice;

        check_factor_buffer(buffer, n)?;

        crate::dispatch_float_dtype!(buffer.dtype(), T => {
            let mut host = buffer.try_to_vec::<T>()?;
            let mut pivots = vec![0i32; n];
            let info = getrf_slice(&mut host, &mut pivots, n);
            Error::check_info(self.name(), info)?;

            buffer.write_from_slice(&host)?;
            Tensor::try_from_slice(&pivots, &[n], buffer.device())
        }, "lu")
    }
}

/// The backend selected for one device
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectedBackend {
    /// Host CPU kernel
    #[cfg(feature = "cpu")]
    Cpu(CpuLuBackend),
    /// Accelerator kernel
    #[cfg(feature = "accelerator")]
    Accelerator(AcceleratorLuBackend),
}

impl LuBackend for SelectedBackend {
    fn name(&self) -> &'static str {
        match *self {
            #[cfg(feature = "cpu")]
            Self::Cpu(b) => b.name(),
            #[cfg(feature = "accelerator")]
            Self::Accelerator(b) => b.name(),
        }
    }

    fn pivot_dtype(&self) -> DType {
        match *self {
            #[cfg(feature = "cpu")]
            Self::Cpu(b) => b.pivot_dtype(),
            #[cfg(feature = "accelerator")]
            Self::Accelerator(b) => b.pivot_dtype(),
        }
    }

    #[cfg_attr(not(feature = "cpu"), allow(unused_variables))]
    fn getrf<R: Runtime>(&self, buffer: &mut Tensor<R>, n: usize) -> Result<Tensor<R>> {
        match *self {
            #[cfg(feature = "cpu")]
            Self::Cpu(b) => b.getrf(buffer, n),
            #[cfg(feature = "accelerator")]
            Self::Accelerator(b) => b.getrf(buffer, n),
        }
    }
}

/// Choose the LU backend for `device`
///
/// # Errors
///
/// `UnsupportedBackend` when the device's class has no backend compiled in.
pub fn select_backend<D: Device>(
    device: &D,
    #[cfg_attr(not(feature = "cpu"), allow(unused_variables))] config: &LinalgConfig,
) -> Result<SelectedBackend> {
    let selected: Option<SelectedBackend> = match device.device_type() {
        #[cfg(feature = "cpu")]
        DeviceType::Cpu => Some(SelectedBackend::Cpu(CpuLuBackend::new(
            config.cpu_index_width,
        ))),
        #[cfg(feature = "accelerator")]
        DeviceType::Accelerator => Some(SelectedBackend::Accelerator(AcceleratorLuBackend)),
        #[allow(unreachable_patterns)]
        DeviceType::Cpu | DeviceType::Accelerator => None,
    };

    match selected {
        Some(backend) => {
            debug!(
                "lu: {} device {} -> {} backend ({} pivots)",
                device.device_type(),
                device.name(),
                backend.name(),
                backend.pivot_dtype()
            );
            Ok(backend)
        }
        None => {
            warn!(
                "lu: no backend compiled in for device {}; rebuild with the matching cargo feature",
                device.name()
            );
            Err(Error::UnsupportedBackend {
                device: device.name(),
            })
        }
    }
}
