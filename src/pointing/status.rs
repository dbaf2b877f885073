use num_enum::{IntoPrimitive, TryFromPrimitive};
use tracing::{debug, info};

use crate::errors::{ControlError, Result};
use crate::pointing::state::MotionState;

/// Status vocabulary reported by real mount firmware, one code per poll.
/// A closed set: anything outside it is a transport or parsing fault, not a
/// status. `Unknown` is a member of the vocabulary, meaning the firmware has
/// no motion information to give.
#[derive(Debug, Copy, Clone, Eq, PartialEq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum MountStatusCode {
    Tracking = 0,
    Stopped = 1,
    Parking = 2,
    Unparking = 3,
    SlewingToHome = 4,
    Parked = 5,
    SlewingOrStopping = 6,
    NotTrackingAndNotMoving = 7,
    MotorsTooCold = 8,
    TrackingOutsideLimits = 9,
    FollowingSatellite = 10,
    NeedsUserIntervention = 11,
    Unknown = 98,
    Error = 99,
}

impl MountStatusCode {
    /// Maps every vendor code onto the canonical motion state. Total over the
    /// vocabulary; codes with no motion meaning conservatively map to Idle.
    pub fn motion_state(self) -> MotionState {
        match self {
            MountStatusCode::Tracking => MotionState::Tracking,
            MountStatusCode::Stopped => MotionState::Idle,
            MountStatusCode::Parking => MotionState::Parking,
            MountStatusCode::Unparking => MotionState::Tracking,
            MountStatusCode::SlewingToHome => MotionState::Slewing,
            MountStatusCode::Parked => MotionState::Parked,
            MountStatusCode::SlewingOrStopping => MotionState::Slewing,
            MountStatusCode::NotTrackingAndNotMoving => MotionState::Idle,
            MountStatusCode::MotorsTooCold => MotionState::Idle,
            MountStatusCode::TrackingOutsideLimits => MotionState::Tracking,
            MountStatusCode::FollowingSatellite => MotionState::Tracking,
            MountStatusCode::NeedsUserIntervention => MotionState::Idle,
            MountStatusCode::Unknown => MotionState::Idle,
            MountStatusCode::Error => MotionState::Idle,
        }
    }

    pub const ALL: [MountStatusCode; 14] = [
        MountStatusCode::Tracking,
        MountStatusCode::Stopped,
        MountStatusCode::Parking,
        MountStatusCode::Unparking,
        MountStatusCode::SlewingToHome,
        MountStatusCode::Parked,
        MountStatusCode::SlewingOrStopping,
        MountStatusCode::NotTrackingAndNotMoving,
        MountStatusCode::MotorsTooCold,
        MountStatusCode::TrackingOutsideLimits,
        MountStatusCode::FollowingSatellite,
        MountStatusCode::NeedsUserIntervention,
        MountStatusCode::Unknown,
        MountStatusCode::Error,
    ];
}

/// Per-session wrapper around the status map for real-hardware backends.
/// Logs status transitions edge-triggered (only when the code changes) and
/// latches the parked flag once when the firmware first reports Parked.
#[derive(Debug, Default)]
pub struct StatusMonitor {
    last_code: Option<MountStatusCode>,
    parked: bool,
}

impl StatusMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests one raw status value. An unrecognized value fails without
    /// touching the monitor, so the previous state stands and the caller may
    /// re-read.
    pub fn apply(&mut self, raw: i32) -> Result<MotionState> {
        let code = MountStatusCode::try_from(raw)
            .map_err(|_| ControlError::InvalidStatusCode(raw))?;

        match self.last_code {
            Some(last) if last != code => {
                debug!("Mount status changed from {:?} to {:?}", last, code);
            }
            _ => {}
        }
        self.last_code = Some(code);

        if code == MountStatusCode::Parked && !self.parked {
            self.parked = true;
            info!("Mount reports parked");
        }

        Ok(code.motion_state())
    }

    pub fn is_parked(&self) -> bool {
        self.parked
    }

    pub fn last_code(&self) -> Option<MountStatusCode> {
        self.last_code
    }

    /// Called by the unpark command path once the firmware acknowledges.
    pub fn mark_unparked(&mut self) {
        self.parked = false;
    }
}
