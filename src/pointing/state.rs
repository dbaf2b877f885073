use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical motion state of the mount. Exactly one value at any time;
/// changed only through the state machine transitions or the status mapper.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum MotionState {
    Idle = 0,
    Slewing = 1,
    Tracking = 2,
    Parking = 3,
    Parked = 4,
}

impl MotionState {
    /// Numeric form for property publication.
    pub fn as_code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MotionState::Idle => "Idle",
            MotionState::Slewing => "Slewing",
            MotionState::Tracking => "Tracking",
            MotionState::Parking => "Parking",
            MotionState::Parked => "Parked",
        };
        write!(f, "{}", name)
    }
}

/// Which state the mount lands in after unparking. Vendor firmwares disagree
/// here, so it is a configuration choice rather than a fixed rule.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnparkPolicy {
    #[default]
    Idle,
    Tracking,
}

impl UnparkPolicy {
    pub fn resulting_state(self) -> MotionState {
        match self {
            UnparkPolicy::Idle => MotionState::Idle,
            UnparkPolicy::Tracking => MotionState::Tracking,
        }
    }
}
