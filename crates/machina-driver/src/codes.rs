//! Status codes for driver operations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse classification of a failed driver operation.
///
/// Providers fold their vendor errors into one of these codes; the machine
/// lifecycle controller switches on the code to choose between retrying,
/// backing off, and marking the machine as permanently failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    /// Operation completed successfully
    Ok,

    /// Operation was canceled, typically by the caller
    Canceled,

    /// Failure that none of the other codes describe
    Unknown,

    /// Caller specified an invalid argument
    InvalidArgument,

    /// Deadline expired before the operation could complete
    DeadlineExceeded,

    /// Requested entity was not found
    NotFound,

    /// Entity the caller attempted to create already exists
    AlreadyExists,

    /// Caller does not have permission for the operation
    PermissionDenied,

    /// Some resource has been exhausted, for example zone capacity
    ResourceExhausted,

    /// System is not in a state required for the operation
    FailedPrecondition,

    /// Operation was aborted, typically due to a concurrency conflict
    Aborted,

    /// Operation was attempted past the valid range
    OutOfRange,

    /// Operation is not implemented or not supported by the provider
    Unimplemented,

    /// Internal error; an invariant expected by the system was broken
    Internal,

    /// Service is currently unavailable; usually a transient condition
    Unavailable,

    /// Unrecoverable data loss or corruption
    DataLoss,

    /// Request does not have valid authentication credentials
    Unauthenticated,
}

impl Code {
    /// Canonical string form, as written into logs and machine status records
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::Canceled => "CANCELED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// Whether the controller may retry the failed operation later.
    ///
    /// Retryable codes describe transient conditions (deadline pressure,
    /// exhausted capacity, conflicts, outages); everything else needs either
    /// a spec change or operator attention before another attempt makes sense.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Code::DeadlineExceeded | Code::ResourceExhausted | Code::Aborted | Code::Unavailable
        )
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized status code string
#[derive(Error, Debug)]
#[error("Unknown status code: {0}")]
pub struct UnknownCode(String);

impl FromStr for Code {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(Code::Ok),
            "CANCELED" => Ok(Code::Canceled),
            "UNKNOWN" => Ok(Code::Unknown),
            "INVALID_ARGUMENT" => Ok(Code::InvalidArgument),
            "DEADLINE_EXCEEDED" => Ok(Code::DeadlineExceeded),
            "NOT_FOUND" => Ok(Code::NotFound),
            "ALREADY_EXISTS" => Ok(Code::AlreadyExists),
            "PERMISSION_DENIED" => Ok(Code::PermissionDenied),
            "RESOURCE_EXHAUSTED" => Ok(Code::ResourceExhausted),
            "FAILED_PRECONDITION" => Ok(Code::FailedPrecondition),
            "ABORTED" => Ok(Code::Aborted),
            "OUT_OF_RANGE" => Ok(Code::OutOfRange),
            "UNIMPLEMENTED" => Ok(Code::Unimplemented),
            "INTERNAL" => Ok(Code::Internal),
            "UNAVAILABLE" => Ok(Code::Unavailable),
            "DATA_LOSS" => Ok(Code::DataLoss),
            "UNAUTHENTICATED" => Ok(Code::Unauthenticated),
            other => Err(UnknownCode(other.to_string())),
        }
    }
}
