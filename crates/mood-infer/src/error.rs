use crate::Device;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    ModelLoad(String),
    Runtime(String),
    Shape(String),
    UnknownLabel(String),
    UnsupportedDevice(Device),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Runtime(msg) => write!(f, "runtime error: {msg}"),
            InferError::Shape(msg) => write!(f, "shape error: {msg}"),
            InferError::UnknownLabel(label) => write!(f, "unknown emotion label: {label:?}"),
            InferError::UnsupportedDevice(device) => write!(f, "unsupported device: {device}"),
        }
    }
}

impl std::error::Error for InferError {}
