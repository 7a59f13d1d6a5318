//! Error carrier for driver operations

use crate::codes::Code;
use thiserror::Error;

/// Failure report a provider hands back to the lifecycle controller.
///
/// Pairs a [`Code`] the controller can act on with a human-readable message
/// for operators. Providers construct these at their outermost layer, after
/// classifying whatever vendor error caused the operation to fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct Status {
    /// Machine-readable classification
    pub code: Code,

    /// Human-readable description of the failure
    pub message: String,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Code::Internal, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Code::NotFound, message)
    }

    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::new(Code::Unimplemented, message)
    }
}

pub type Result<T> = std::result::Result<T, Status>;
