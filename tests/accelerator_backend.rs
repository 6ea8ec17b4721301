//! LU dispatch for devices reporting `DeviceType::Accelerator`

mod common;

use common::{AccelRuntime, create_accel_client, test_matrix};
use pivlu::algorithm::linalg::{get_col_permutation, select_backend};
use pivlu::prelude::*;

#[test]
fn test_accel_device_identity() {
    let (client, device) = create_accel_client();
    assert_eq!(device.device_type(), DeviceType::Accelerator);
    assert_eq!(device.name(), "Accelerator:0");
    assert!(client.device().is_same(&device));
}

#[test]
fn test_col_permutation_on_accelerator() {
    let (client, device) = create_accel_client();
    let ipiv = Tensor::<AccelRuntime>::from_slice(&[2i32, 3, 3], &[3], &device);

    let perm = get_col_permutation(&client, &ipiv, 3).unwrap();
    assert_eq!(perm.dtype(), DType::I64);
    assert_eq!(perm.device().device_type(), DeviceType::Accelerator);
    assert_eq!(perm.to_vec::<i64>(), vec![1, 2, 0]);

    // Device results are synchronized before the host reads them
    assert_eq!(client.sync_count(), 1);
}

#[cfg(feature = "accelerator")]
mod enabled {
    use super::*;
    use super::common::{assert_allclose_f32, assert_allclose_f64, create_cpu_client};
    use pivlu::algorithm::linalg::{LuBackend, pivots_to_host};

    #[test]
    fn test_select_accelerator_backend() {
        let (_client, device) = create_accel_client();
        let backend = select_backend(&device, &LinalgConfig::default()).unwrap();
        assert_eq!(backend.name(), "accelerator");
        assert_eq!(backend.pivot_dtype(), DType::I32);
    }

    #[test]
    fn test_pivots_are_i32_regardless_of_config() {
        let (client, device) = create_accel_client();
        let a = Tensor::<AccelRuntime>::from_slice(&test_matrix(4, 1), &[4, 4], &device);

        let wide = LinalgConfig::default().with_cpu_index_width(IndexWidth::I64);
        let factors = client.lu_with_ipiv_with_config(&a, &wide).unwrap();
        assert_eq!(factors.ipiv.dtype(), DType::I32);
        assert_eq!(factors.ipiv.device().device_type(), DeviceType::Accelerator);
        assert_eq!(factors.output.device().device_type(), DeviceType::Accelerator);
    }

    #[test]
    fn test_matches_cpu_backend() {
        let (cpu, cpu_device) = create_cpu_client();
        let (accel, accel_device) = create_accel_client();

        for n in [1usize, 3, 6] {
            let data = test_matrix(n, n as u64);
            let a_cpu = Tensor::<CpuRuntime>::from_slice(&data, &[n, n], &cpu_device);
            let a_accel = Tensor::<AccelRuntime>::from_slice(&data, &[n, n], &accel_device);

            let on_cpu = cpu.lu_with_ipiv(&a_cpu).unwrap();
            let on_accel = accel.lu_with_ipiv(&a_accel).unwrap();
            assert_eq!(
                pivots_to_host(&on_cpu.ipiv).unwrap(),
                pivots_to_host(&on_accel.ipiv).unwrap()
            );
            assert_allclose_f64(
                &on_accel.output.to_vec::<f64>(),
                &on_cpu.output.to_vec::<f64>(),
                0.0,
                1e-14,
                &format!("packed factors, n={n}"),
            );
        }
    }

    #[test]
    fn test_lu_reconstructs_on_accelerator() {
        let (client, device) = create_accel_client();
        let n = 5;
        let data: Vec<f32> = test_matrix(n, 77).into_iter().map(|v| v as f32).collect();
        let a = Tensor::<AccelRuntime>::from_slice(&data, &[n, n], &device);

        let plu = client.lu(&a, true).unwrap();
        let rebuilt: Vec<f32> = client.matmul(&plu.lower, &plu.upper).unwrap().to_vec();
        assert_allclose_f32(&rebuilt, &data, 1e-4, 1e-4, "(P @ L) @ U");
        assert_eq!(a.to_vec::<f32>(), data);

        let before = client.sync_count();
        let d = client.det(&a).unwrap();
        assert_eq!(d.shape(), &[] as &[usize]);
        assert!(client.sync_count() > before);
    }

    #[test]
    fn test_singular_on_accelerator() {
        let (client, device) = create_accel_client();
        let a = Tensor::<AccelRuntime>::from_slice(&[1.0f64, 2.0, 2.0, 4.0], &[2, 2], &device);
        assert!(matches!(
            client.lu_with_ipiv(&a),
            Err(Error::SingularMatrix { pivot: 2 })
        ));
    }
}

#[cfg(not(feature = "accelerator"))]
mod disabled {
    use super::*;

    #[test]
    fn test_unsupported_backend() {
        let (client, device) = create_accel_client();
        let a = Tensor::<AccelRuntime>::from_slice(&test_matrix(3, 2), &[3, 3], &device);

        match client.lu(&a, false) {
            Err(Error::UnsupportedBackend { device }) => assert_eq!(device, "Accelerator:0"),
            other => panic!("expected UnsupportedBackend, got {other:?}"),
        }
        assert!(matches!(
            select_backend(&device, &LinalgConfig::default()),
            Err(Error::UnsupportedBackend { .. })
        ));
    }

    #[test]
    fn test_validation_precedes_backend_selection() {
        let (client, device) = create_accel_client();
        let a = Tensor::<AccelRuntime>::from_slice(&[1.0f64; 6], &[2, 3], &device);
        assert!(matches!(
            client.lu_with_ipiv(&a),
            Err(Error::NotSquare { .. })
        ));
    }
}
