//! Trait for device identification

use std::fmt;

/// Execution context class of a device
///
/// LU dispatch routes on this value: `Cpu` devices run the host kernel with
/// the configured native integer width, `Accelerator` devices run the
/// accelerator kernel with 32-bit pivots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Host CPU
    Cpu,
    /// GPU or other accelerator
    Accelerator,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "CPU"),
            Self::Accelerator => write!(f, "Accelerator"),
        }
    }
}

/// Trait for device identification
pub trait Device: Clone + Send + Sync + 'static {
    /// Unique identifier for this device
    fn id(&self) -> usize;

    /// Execution context class
    fn device_type(&self) -> DeviceType;

    /// Check if two devices are the same
    fn is_same(&self, other: &Self) -> bool {
        self.device_type() == other.device_type() && self.id() == other.id()
    }

    /// Human-readable name, e.g. `CPU:0`
    fn name(&self) -> String {
        format!("{}:{}", self.device_type(), self.id())
    }
}
