use std::time::Duration;

use tracing::{info, warn};

use crate::astro_math::{self, Degrees};
use crate::errors::{ControlError, Result};
use crate::pointing::position::EquatorialPosition;
use crate::pointing::state::{MotionState, UnparkPolicy};

/// Default simulated slew speed, degrees per second on each axis.
pub const DEFAULT_SLEW_RATE: Degrees = 3.;

/// Owns the current and target pointing directions and the canonical motion
/// state, and integrates simulated motion toward the target one poll at a
/// time. Created once per mount session; not safe for concurrent mutation,
/// so a multi-threaded host must keep it behind a single lock or owned by
/// the polling task.
#[derive(Debug)]
pub struct PointingStateMachine {
    current: EquatorialPosition,
    target: EquatorialPosition,
    state: MotionState,
    slew_rate: Degrees,
    unpark_policy: UnparkPolicy,
}

impl PointingStateMachine {
    pub fn new(
        initial: EquatorialPosition,
        slew_rate: Degrees,
        unpark_policy: UnparkPolicy,
    ) -> Self {
        Self {
            current: initial,
            target: initial,
            state: MotionState::Idle,
            slew_rate,
            unpark_policy,
        }
    }

    pub fn current(&self) -> EquatorialPosition {
        self.current
    }

    pub fn target(&self) -> EquatorialPosition {
        self.target
    }

    pub fn motion_state(&self) -> MotionState {
        self.state
    }

    pub fn is_parked(&self) -> bool {
        self.state == MotionState::Parked
    }

    /// Guard for manual motion commands (pan/nudge). Advisory failure only;
    /// nothing changes.
    pub fn check_motion_allowed(&self) -> Result<()> {
        if self.is_parked() {
            return Err(ControlError::Parked(
                "please unpark the mount before issuing any motion commands".to_string(),
            ));
        }
        Ok(())
    }

    /// Starts (or retargets) a slew. Retargeting mid-slew is allowed; only a
    /// parked mount rejects the command.
    pub fn goto(&mut self, target: EquatorialPosition) -> Result<()> {
        self.check_motion_allowed()?;

        self.target = target;
        self.state = MotionState::Slewing;
        info!("Slewing to {}", target);
        Ok(())
    }

    /// Parks the mount wherever it stands. Unconditional; motion commands are
    /// rejected until `unpark`.
    pub fn park(&mut self) -> Result<()> {
        self.state = MotionState::Parked;
        info!("Mount parked");
        Ok(())
    }

    /// Leaves the parked state, landing in Idle or Tracking per policy.
    /// Unparking an unparked mount is a no-op, not an error.
    pub fn unpark(&mut self) -> Result<()> {
        if self.state != MotionState::Parked {
            warn!("Mount is already unparked");
            return Ok(());
        }
        self.state = self.unpark_policy.resulting_state();
        info!("Mount unparked");
        Ok(())
    }

    /// Stops any motion in place. The cancellation primitive: observed by the
    /// next tick, which will find nothing to do.
    pub fn abort(&mut self) -> Result<()> {
        self.state = MotionState::Idle;
        info!("Motion aborted");
        Ok(())
    }

    /// Advances simulated motion by `elapsed`. Each axis gets an angular
    /// budget of `slew_rate * elapsed`; an axis whose remaining distance fits
    /// inside the budget snaps to the target and counts as locked, otherwise
    /// it moves by the full budget toward the target. Right ascension
    /// distances are compared in degrees (hours * 15). When both axes lock
    /// the same tick the slew is complete and the mount starts tracking.
    ///
    /// Cumulative behavior is independent of how the elapsed time is split
    /// across calls: motion is monotonic toward the target and never
    /// overshoots.
    pub fn tick(&mut self, elapsed: Duration) -> MotionState {
        if self.state != MotionState::Slewing {
            // Tracking means current already equals target; nothing to
            // integrate in any non-slewing state.
            return self.state;
        }

        let budget = self.slew_rate * elapsed.as_secs_f64();
        let mut nlocked = 0;

        let dx = astro_math::hours_to_deg(self.target.right_ascension - self.current.right_ascension);
        if dx.abs() <= budget {
            self.current.right_ascension = self.target.right_ascension;
            nlocked += 1;
        } else {
            self.current.right_ascension += astro_math::deg_to_hours(budget.copysign(dx));
        }

        let dy = self.target.declination - self.current.declination;
        if dy.abs() <= budget {
            self.current.declination = self.target.declination;
            nlocked += 1;
        } else {
            self.current.declination += budget.copysign(dy);
        }

        if nlocked == 2 {
            self.state = MotionState::Tracking;
            info!("Slew is complete. Tracking...");
        }

        self.state
    }
}
