//! DType dispatch utilities
//!
//! `dispatch_dtype!` takes a `DType` value and executes a code block with
//! `T` bound to the corresponding Rust type. `dispatch_float_dtype!` does the
//! same for the floating point types only.
//!
//! # Usage
//!
//! ```ignore
//! fn my_operation(dtype: DType) -> Result<usize> {
//!     dispatch_dtype!(dtype, T => {
//!         // T is now a concrete type (f32, f64, i32, etc.)
//!         Ok(std::mem::size_of::<T>())
//!     }, "my_operation")
//! }
//! ```
//!
//! ## Supported Types
//!
//! - `F64` -> `f64`, `F32` -> `f32`
//! - `I64` -> `i64`, `I32` -> `i32`, `I16` -> `i16`, `I8` -> `i8`
//! - `U32` -> `u32`, `U8` -> `u8`
//! - `Bool` -> Returns `UnsupportedDType` error

/// Macro for runtime dtype dispatch to typed operations
#[macro_export]
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::I64 => {
                type $T = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $T = i32;
                $body
            }
            $crate::dtype::DType::I16 => {
                type $T = i16;
                $body
            }
            $crate::dtype::DType::I8 => {
                type $T = i8;
                $body
            }
            $crate::dtype::DType::U32 => {
                type $T = u32;
                $body
            }
            $crate::dtype::DType::U8 => {
                type $T = u8;
                $body
            }
            dtype => Err($crate::error::Error::UnsupportedDType {
                dtype,
                op: $error_op,
            }),
        }
    };
}

/// Macro for runtime dtype dispatch restricted to `F32`/`F64`
#[macro_export]
macro_rules! dispatch_float_dtype {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            dtype => Err($crate::error::Error::UnsupportedDType {
                dtype,
                op: $error_op,
            }),
        }
    };
}
