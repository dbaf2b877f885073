use std::error::Error;
use std::fmt::{Display, Formatter};
use std::{fmt, result};

pub type Result<T> = result::Result<T, ControlError>;

/// Failures surfaced by the pointing core. None of these are fatal: every
/// variant leaves the prior mount state intact and is for the caller to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// A motion command was issued while the mount is parked. Advisory: the
    /// caller must unpark first.
    Parked(String),
    /// The device reported a status code outside the known vocabulary. The
    /// previous motion state is retained; the caller may re-read.
    InvalidStatusCode(i32),
    /// Observer location out of range. A configuration bug, caught at the
    /// config boundary before any coordinates are transformed.
    InvalidLocation(String),
}

impl Display for ControlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::Parked(msg) => write!(f, "Mount is parked: {}", msg),
            ControlError::InvalidStatusCode(code) => {
                write!(f, "Unrecognized mount status code: {}", code)
            }
            ControlError::InvalidLocation(msg) => write!(f, "Invalid observer location: {}", msg),
        }
    }
}

impl Error for ControlError {}
