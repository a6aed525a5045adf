use crate::InferError;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Cpu,
    Cuda { device_id: i32 },
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "CPU"),
            Device::Cuda { device_id } => write!(f, "CUDA(device_id={device_id})"),
        }
    }
}

/// Parses `cpu`, `cuda` or `cuda:<id>`.
impl FromStr for Device {
    type Err = InferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "cpu" => Ok(Device::Cpu),
            "cuda" => Ok(Device::Cuda { device_id: 0 }),
            other => other
                .strip_prefix("cuda:")
                .and_then(|id| id.parse().ok())
                .map(|device_id| Device::Cuda { device_id })
                .ok_or_else(|| InferError::Runtime(format!("unknown device: {s}"))),
        }
    }
}
