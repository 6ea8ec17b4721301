//! Common test utilities
#![allow(dead_code)]

use pivlu::error::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use pivlu::ops::impl_generic;
use pivlu::prelude::*;

/// Create a CPU client and device for testing
pub fn create_cpu_client() -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    (client, device)
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Deterministic pseudo-random `n x n` matrix with entries in [-1, 1)
pub fn test_matrix(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..n * n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
        })
        .collect()
}

/// Check that a row-major `n x n` matrix has exactly one 1 per row and column
pub fn assert_permutation_matrix(p: &[f64], n: usize) {
    assert_eq!(p.len(), n * n);
    for i in 0..n {
        let row = &p[i * n..(i + 1) * n];
        assert_eq!(row.iter().filter(|&&v| v == 1.0).count(), 1, "row {i}");
        assert_eq!(row.iter().filter(|&&v| v == 0.0).count(), n - 1, "row {i}");

        let col_ones = (0..n).filter(|&r| p[r * n + i] == 1.0).count();
        assert_eq!(col_ones, 1, "column {i}");
    }
}

// ============================================================================
// Mock accelerator runtime
// ============================================================================
//
// Simulates a downstream crate plugging an accelerator into pivlu. Device
// memory is host heap, so every transfer forwards to the CPU runtime; only
// the device type differs.

/// Accelerator device reporting `DeviceType::Accelerator`
#[derive(Clone, Debug, Default)]
pub struct AccelDevice {
    id: usize,
}

impl AccelDevice {
    pub fn new(id: usize) -> Self {
        Self { id }
    }
}

impl Device for AccelDevice {
    fn id(&self) -> usize {
        self.id
    }

    fn device_type(&self) -> DeviceType {
        DeviceType::Accelerator
    }
}

#[derive(Clone, Debug)]
pub struct AccelClient {
    device: AccelDevice,
    syncs: Arc<AtomicUsize>,
}

impl AccelClient {
    /// Number of `synchronize` calls made through this client and its clones
    pub fn sync_count(&self) -> usize {
        self.syncs.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Debug)]
pub struct AccelRuntime;

impl Runtime for AccelRuntime {
    type Device = AccelDevice;
    type Client = AccelClient;

    fn name() -> &'static str {
        "mock-accelerator"
    }

    fn allocate(size_bytes: usize, _device: &Self::Device) -> Result<u64> {
        CpuRuntime::allocate(size_bytes, &CpuDevice::new())
    }

    fn deallocate(ptr: u64, size_bytes: usize, _device: &Self::Device) {
        CpuRuntime::deallocate(ptr, size_bytes, &CpuDevice::new())
    }

    fn copy_to_device(src: &[u8], dst: u64, _device: &Self::Device) -> Result<()> {
        CpuRuntime::copy_to_device(src, dst, &CpuDevice::new())
    }

    fn copy_from_device(src: u64, dst: &mut [u8], _device: &Self::Device) -> Result<()> {
        CpuRuntime::copy_from_device(src, dst, &CpuDevice::new())
    }

    fn copy_within_device(
        src: u64,
        dst: u64,
        size_bytes: usize,
        _device: &Self::Device,
    ) -> Result<()> {
        CpuRuntime::copy_within_device(src, dst, size_bytes, &CpuDevice::new())
    }

    fn copy_strided(
        src_handle: u64,
        src_byte_offset: usize,
        dst_handle: u64,
        shape: &[usize],
        strides: &[isize],
        elem_size: usize,
        _device: &Self::Device,
    ) -> Result<()> {
        CpuRuntime::copy_strided(
            src_handle,
            src_byte_offset,
            dst_handle,
            shape,
            strides,
            elem_size,
            &CpuDevice::new(),
        )
    }

    fn default_device() -> Self::Device {
        AccelDevice::new(0)
    }

    fn default_client(device: &Self::Device) -> Self::Client {
        AccelClient {
            device: device.clone(),
            syncs: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl RuntimeClient<AccelRuntime> for AccelClient {
    fn device(&self) -> &AccelDevice {
        &self.device
    }

    fn synchronize(&self) {
        self.syncs.fetch_add(1, Ordering::SeqCst);
    }
}

impl TypeConversionOps<AccelRuntime> for AccelClient {
    fn cast(&self, a: &Tensor<AccelRuntime>, dtype: DType) -> Result<Tensor<AccelRuntime>> {
        impl_generic::cast_impl(self, a, dtype)
    }
}

impl UtilityOps<AccelRuntime> for AccelClient {
    fn eye(&self, n: usize, dtype: DType) -> Result<Tensor<AccelRuntime>> {
        impl_generic::eye_impl(self, n, dtype)
    }

    fn arange(&self, start: f64, stop: f64, step: f64, dtype: DType) -> Result<Tensor<AccelRuntime>> {
        impl_generic::arange_impl(self, start, stop, step, dtype)
    }
}

impl IndexingOps<AccelRuntime> for AccelClient {
    fn index_select(
        &self,
        a: &Tensor<AccelRuntime>,
        dim: isize,
        indices: &Tensor<AccelRuntime>,
    ) -> Result<Tensor<AccelRuntime>> {
        impl_generic::index_select_impl(self, a, dim, indices)
    }
}

impl MatmulOps<AccelRuntime> for AccelClient {
    fn matmul(
        &self,
        a: &Tensor<AccelRuntime>,
        b: &Tensor<AccelRuntime>,
    ) -> Result<Tensor<AccelRuntime>> {
        impl_generic::matmul_impl(self, a, b)
    }
}

impl LinalgOps<AccelRuntime> for AccelClient {
    fn triul(
        &self,
        a: &Tensor<AccelRuntime>,
    ) -> Result<(Tensor<AccelRuntime>, Tensor<AccelRuntime>)> {
        impl_generic::triul_impl(self, a)
    }

    fn inverse(&self, a: &Tensor<AccelRuntime>) -> Result<Tensor<AccelRuntime>> {
        impl_generic::inverse_impl(self, a)
    }
}

impl TensorOps<AccelRuntime> for AccelClient {}

/// Create a mock accelerator client and device
pub fn create_accel_client() -> (AccelClient, AccelDevice) {
    let device = AccelRuntime::default_device();
    let client = AccelRuntime::default_client(&device);
    (client, device)
}
