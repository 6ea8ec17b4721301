//! Core Tensor type

use super::{Layout, Storage};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use std::borrow::Cow;
use std::fmt;

/// N-dimensional array stored on a compute device
///
/// `Tensor` consists of:
/// - **Storage**: Reference-counted device memory
/// - **Layout**: Shape, strides, and offset defining the view into storage
/// - **DType**: Element type (determined at runtime)
///
/// # Zero-Copy Views
///
/// `transpose` and `t` create new tensors that share the same underlying
/// storage with swapped strides. `Clone` is also zero-copy; use
/// [`Tensor::deep_clone`] for an independent buffer.
///
/// # Example
///
/// ```ignore
/// use pivlu::prelude::*;
///
/// let a = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2], &device);
/// let b = a.t()?; // Zero-copy, shares storage with a
/// ```
pub struct Tensor<R: Runtime> {
    storage: Storage<R>,
    layout: Layout,
}

impl<R: Runtime> Tensor<R> {
    /// Create a tensor from storage and layout
    pub fn from_parts(storage: Storage<R>, layout: Layout) -> Self {
        Self { storage, layout }
    }

    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize], device: &R::Device) -> Self {
        Self::try_from_slice(data, shape, device).expect("Tensor::from_slice failed")
    }

    /// Create a tensor from a slice of data (fallible version)
    ///
    /// Returns an error if `data.len()` does not equal the product of the `shape` dimensions,
    /// or if memory allocation fails.
    pub fn try_from_slice<T: Element>(
        data: &[T],
        shape: &[usize],
        device: &R::Device,
    ) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        let storage = Storage::from_slice(data, device)?;
        Ok(Self::from_parts(storage, Layout::contiguous(shape)))
    }

    /// Allocate a contiguous tensor
    ///
    /// Every runtime hands out zero-initialized memory, so the contents
    /// read as zeros until written.
    pub fn try_empty(shape: &[usize], dtype: DType, device: &R::Device) -> Result<Self> {
        let len: usize = shape.iter().product();
        let storage = Storage::new(len, dtype, device)?;
        Ok(Self::from_parts(storage, Layout::contiguous(shape)))
    }

    // ===== Accessors =====

    /// Get the storage
    #[inline]
    pub fn storage(&self) -> &Storage<R> {
        &self.storage
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Get the device
    #[inline]
    pub fn device(&self) -> &R::Device {
        self.storage.device()
    }

    /// Check if the tensor is contiguous in memory
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Device address of the first viewed element
    ///
    /// Kernels receive this value; for the CPU runtime it is a host pointer.
    #[inline]
    pub fn ptr(&self) -> u64 {
        self.storage.ptr() + (self.layout.offset() * self.dtype().size_in_bytes()) as u64
    }

    // ===== View Operations (Zero-Copy) =====

    /// Transpose two dimensions (zero-copy)
    pub fn transpose(&self, dim0: isize, dim1: isize) -> Result<Self> {
        let new_layout =
            self.layout
                .transpose(dim0, dim1)
                .ok_or_else(|| Error::InvalidDimension {
                    dim: dim0,
                    ndim: self.ndim(),
                })?;

        Ok(Self::from_parts(self.storage.clone(), new_layout))
    }

    /// Transpose last two dimensions (matrix transpose)
    pub fn t(&self) -> Result<Self> {
        self.transpose(-2, -1)
    }

    // ===== Copies =====

    /// Make tensor contiguous (copy if needed)
    ///
    /// If the tensor is already contiguous, returns a view (zero-copy).
    /// Otherwise, allocates new storage and copies the data to a contiguous
    /// layout through `Runtime::copy_strided`.
    pub fn contiguous(&self) -> Result<Self> {
        if self.is_contiguous() {
            Ok(self.clone())
        } else {
            self.copy_to_contiguous()
        }
    }

    /// Copy into a fresh, uniquely owned, contiguous buffer
    ///
    /// Unlike [`Clone`], the result never aliases `self`. A transposed view
    /// is materialized in its viewed order, so `a.t()?.deep_clone()?` holds
    /// the elements of `a` in column-major order.
    pub fn deep_clone(&self) -> Result<Self> {
        self.copy_to_contiguous()
    }

    fn copy_to_contiguous(&self) -> Result<Self> {
        let dtype = self.dtype();
        let device = self.storage.device();
        let new_storage = Storage::new(self.numel(), dtype, device)?;
        let elem_size = dtype.size_in_bytes();

        if self.is_contiguous() {
            R::copy_within_device(
                self.ptr(),
                new_storage.ptr(),
                self.numel() * elem_size,
                device,
            )?;
        } else {
            R::copy_strided(
                self.storage.ptr(),
                self.layout.offset() * elem_size,
                new_storage.ptr(),
                self.shape(),
                self.strides(),
                elem_size,
                device,
            )?;
        }

        Ok(Self::from_parts(new_storage, Layout::contiguous(self.shape())))
    }

    /// Copy this tensor onto another device of the same runtime
    pub fn to_device(&self, device: &R::Device) -> Result<Self> {
        let src = self.contiguous()?;
        let mut bytes = vec![0u8; src.numel() * src.dtype().size_in_bytes()];
        R::copy_from_device(src.ptr(), &mut bytes, src.device())?;
        let storage = Storage::from_bytes(&bytes, src.dtype(), device)?;
        Ok(Self::from_parts(storage, Layout::contiguous(src.shape())))
    }

    // ===== Data Access =====

    /// Copy tensor data to a Vec on the host
    ///
    /// Non-contiguous views are materialized first, so the result is always
    /// in row-major order of the viewed shape.
    pub fn try_to_vec<T: Element>(&self) -> Result<Vec<T>> {
        if T::DTYPE != self.dtype() {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype(),
                rhs: T::DTYPE,
            });
        }

        let tensor = if self.is_contiguous() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.contiguous()?)
        };

        // Allocate with correct alignment for T, then cast to bytes for copy.
        let mut result = vec![T::zeroed(); tensor.numel()];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut result);
        R::copy_from_device(tensor.ptr(), bytes, tensor.device())?;
        Ok(result)
    }

    /// Copy tensor data to a Vec on the host
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the tensor's dtype or the device copy
    /// fails. For a fallible alternative, use [`Self::try_to_vec`].
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        self.try_to_vec().expect("Tensor::to_vec failed")
    }

    /// Overwrite the tensor's contents from host memory
    ///
    /// The tensor must be contiguous, uniquely own its storage, and hold
    /// exactly `data.len()` elements of type `T`.
    pub fn write_from_slice<T: Element>(&mut self, data: &[T]) -> Result<()> {
        if T::DTYPE != self.dtype() {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype(),
                rhs: T::DTYPE,
            });
        }
        if data.len() != self.numel() {
            return Err(Error::ShapeMismatch {
                expected: self.shape().to_vec(),
                got: vec![data.len()],
            });
        }
        if !self.is_contiguous() {
            return Err(Error::NotContiguous);
        }
        if !self.storage.is_unique() {
            return Err(Error::InvalidArgument {
                arg: "self",
                reason: "storage is shared with another tensor".to_string(),
            });
        }

        R::copy_to_device(bytemuck::cast_slice(data), self.ptr(), self.device())
    }

    /// Extract the scalar value from a single-element tensor
    pub fn item<T: Element>(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(Error::ShapeMismatch {
                expected: vec![1],
                got: self.shape().to_vec(),
            });
        }
        Ok(self.try_to_vec::<T>()?[0])
    }
}

impl<R: Runtime> Clone for Tensor<R> {
    /// Clone creates a new tensor sharing the same storage (zero-copy)
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            layout: self.layout.clone(),
        }
    }
}

impl<R: Runtime> fmt::Debug for Tensor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("contiguous", &self.is_contiguous())
            .finish()
    }
}

impl<R: Runtime> fmt::Display for Tensor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({:?}, dtype={})", self.shape(), self.dtype())
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    #[test]
    fn test_from_slice() {
        let device = CpuDevice::new();
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let tensor = Tensor::<CpuRuntime>::from_slice(&data, &[2, 3], &device);

        assert_eq!(tensor.shape(), &[2, 3]);
        assert_eq!(tensor.dtype(), DType::F32);
        assert!(tensor.is_contiguous());
        assert_eq!(tensor.numel(), 6);

        let result: Vec<f32> = tensor.to_vec();
        assert_eq!(result, data);
    }

    #[test]
    fn test_from_slice_shape_mismatch() {
        let device = CpuDevice::new();
        let result = Tensor::<CpuRuntime>::try_from_slice(&[1.0f64, 2.0, 3.0], &[2, 2], &device);
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_transpose_shares_storage() {
        let device = CpuDevice::new();
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let tensor = Tensor::<CpuRuntime>::from_slice(&data, &[2, 3], &device);

        let transposed = tensor.t().unwrap();

        assert_eq!(transposed.shape(), &[3, 2]);
        assert!(!transposed.is_contiguous());
        assert_eq!(transposed.storage().ptr(), tensor.storage().ptr());
    }

    #[test]
    fn test_contiguous_from_transpose() {
        let device = CpuDevice::new();
        // [[1, 2, 3], [4, 5, 6]]
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let tensor = Tensor::<CpuRuntime>::from_slice(&data, &[2, 3], &device);

        let contiguous = tensor.t().unwrap().contiguous().unwrap();
        assert!(contiguous.is_contiguous());
        assert_eq!(contiguous.shape(), &[3, 2]);

        let result: Vec<f32> = contiguous.to_vec();
        assert_eq!(result, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_deep_clone_never_aliases() {
        let device = CpuDevice::new();
        let tensor = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[2, 2], &device);

        let copy = tensor.deep_clone().unwrap();
        assert_ne!(copy.storage().ptr(), tensor.storage().ptr());
        assert!(copy.storage().is_unique());
        assert_eq!(copy.to_vec::<f64>(), tensor.to_vec::<f64>());

        // A transposed deep clone holds the source in column-major order
        let col_major = tensor.t().unwrap().deep_clone().unwrap();
        assert_eq!(col_major.to_vec::<f64>(), [1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_to_vec_dtype_mismatch() {
        let device = CpuDevice::new();
        let tensor = Tensor::<CpuRuntime>::from_slice(&[1i32, 2], &[2], &device);
        assert!(matches!(
            tensor.try_to_vec::<f32>(),
            Err(Error::DTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_write_from_slice() {
        let device = CpuDevice::new();
        let mut tensor = Tensor::<CpuRuntime>::try_empty(&[3], DType::I32, &device).unwrap();
        assert_eq!(tensor.to_vec::<i32>(), [0, 0, 0]);

        tensor.write_from_slice(&[4i32, 5, 6]).unwrap();
        assert_eq!(tensor.to_vec::<i32>(), [4, 5, 6]);

        let _view = tensor.clone();
        assert!(tensor.write_from_slice(&[1i32, 2, 3]).is_err());
    }

    #[test]
    fn test_to_device_copies() {
        let device = CpuDevice::new();
        let tensor = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2], &device);
        let moved = tensor.t().unwrap().to_device(&device).unwrap();
        assert!(moved.is_contiguous());
        assert_eq!(moved.to_vec::<f32>(), [1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_item_scalar() {
        let device = CpuDevice::new();

        let tensor = Tensor::<CpuRuntime>::from_slice(&[std::f32::consts::PI], &[], &device);
        let val: f32 = tensor.item().unwrap();
        assert!((val - std::f32::consts::PI).abs() < 1e-6);

        let tensor = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0], &[2], &device);
        assert!(tensor.item::<f32>().is_err());
    }
}
