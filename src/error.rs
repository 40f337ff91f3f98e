//! Driver error types
//!
//! Operations return [`Result`]; [`StatusCode`] is the numeric contract
//! handed to callers that still speak in status codes.

use core::fmt;

/// Result type for driver operations
pub type Result<T> = core::result::Result<T, GpioError>;

/// Driver-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// A mode enumerant is not valid for an otherwise valid pin
    Parameter,
    /// Port or pin is out of range, or the resource is unavailable
    Pin,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::Parameter => write!(f, "invalid parameter"),
            GpioError::Pin => write!(f, "invalid or unavailable pin"),
        }
    }
}

impl core::error::Error for GpioError {}

/// Status codes, numbered like the CMSIS-Driver GPIO API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i32)]
pub enum StatusCode {
    Ok = 0,
    ErrorParameter = -5,
    ErrorPin = -7,
}

impl StatusCode {
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<GpioError> for StatusCode {
    fn from(err: GpioError) -> Self {
        match err {
            GpioError::Parameter => StatusCode::ErrorParameter,
            GpioError::Pin => StatusCode::ErrorPin,
        }
    }
}

impl<T> From<Result<T>> for StatusCode {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(_) => StatusCode::Ok,
            Err(err) => err.into(),
        }
    }
}
