pub mod properties;

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::Result;
use crate::pointing::machine::PointingStateMachine;
use crate::pointing::position::{
    check_dec, check_ra, EquatorialPosition, GeodeticLocation, HorizontalPosition,
};
use crate::pointing::state::MotionState;
use crate::pointing::transform::equatorial_to_horizontal;
use self::properties::{PropertyQuality, PropertySink};

/// Manual nudge directions, the pan commands of a hand controller.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ManualDirection {
    North,
    South,
    East,
    West,
}

/// One simulated mount session: the pointing state machine plus the observer
/// context and the sink refreshed quantities are published through. Lives
/// from connect to disconnect and is polled by a single driver loop.
#[derive(Debug)]
pub struct Mount<S: PropertySink> {
    machine: PointingStateMachine,
    location: GeodeticLocation,
    sink: S,
    prev_state: Option<MotionState>,
    last_equatorial: Option<EquatorialPosition>,
    last_horizontal: Option<HorizontalPosition>,
}

impl<S: PropertySink> Mount<S> {
    pub fn new(config: &Config, sink: S) -> Result<Self> {
        config.observation_location.validate()?;

        let initial =
            EquatorialPosition::new(config.mount.initial_ra, config.mount.initial_dec);
        let machine = PointingStateMachine::new(
            initial,
            config.mount.slew_rate,
            config.mount.unpark_policy,
        );

        Ok(Mount {
            machine,
            location: config.observation_location,
            sink,
            prev_state: None,
            last_equatorial: None,
            last_horizontal: None,
        })
    }

    pub fn current_pointing(&self) -> EquatorialPosition {
        self.machine.current()
    }

    pub fn motion_state(&self) -> MotionState {
        self.machine.motion_state()
    }

    pub fn location(&self) -> GeodeticLocation {
        self.location
    }

    pub fn goto(&mut self, target: EquatorialPosition) -> Result<()> {
        debug_assert!(check_ra(target.right_ascension) && check_dec(target.declination));
        self.machine.goto(target)
    }

    pub fn park(&mut self) -> Result<()> {
        self.machine.park()
    }

    pub fn unpark(&mut self) -> Result<()> {
        self.machine.unpark()
    }

    pub fn abort(&mut self) -> Result<()> {
        self.machine.abort()
    }

    /// Manual pan command. The simulated drive has nothing to move, but a
    /// parked mount still rejects the request.
    pub fn move_manual(&mut self, direction: ManualDirection) -> Result<()> {
        self.machine.check_motion_allowed()?;
        debug!(?direction, "manual motion command accepted");
        Ok(())
    }

    /// One driver-loop iteration: integrate motion over the measured elapsed
    /// time, refresh horizontal coordinates for `now`, and publish whatever
    /// changed since the previous poll.
    pub fn poll(&mut self, elapsed: Duration, now: DateTime<Utc>) -> MotionState {
        let state = self.machine.tick(elapsed);

        match self.prev_state {
            Some(prev) if prev != state => {
                info!("Mount state changed from {} to {}", prev, state);
            }
            _ => {}
        }

        let eq = self.machine.current();
        let hz = equatorial_to_horizontal(eq, self.location, now);
        debug!("Current {}; {}; state {}", eq, hz, state);

        let quality = match state {
            MotionState::Slewing | MotionState::Parking => PropertyQuality::Busy,
            MotionState::Tracking => PropertyQuality::Ok,
            MotionState::Idle | MotionState::Parked => PropertyQuality::Idle,
        };

        if self.last_equatorial != Some(eq) {
            self.sink
                .publish("right_ascension", eq.right_ascension, quality);
            self.sink.publish("declination", eq.declination, quality);
            self.last_equatorial = Some(eq);
        }
        if self.last_horizontal != Some(hz) {
            self.sink.publish("azimuth", hz.azimuth, quality);
            self.sink.publish("altitude", hz.altitude, quality);
            self.last_horizontal = Some(hz);
        }
        if self.prev_state != Some(state) {
            self.sink
                .publish("motion_state", state.as_code() as f64, quality);
            self.prev_state = Some(state);
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::properties::test_util::RecordingSink;
    use super::*;
    use crate::errors::ControlError;
    use assert_float_eq::*;
    use chrono::TimeZone;

    fn test_mount() -> Mount<RecordingSink> {
        Mount::new(&Config::default(), RecordingSink::default()).unwrap()
    }

    fn noon() -> DateTime<Utc> {
        Utc.ymd(2021, 1, 30).and_hms(12, 0, 0)
    }

    #[test]
    fn test_invalid_location_is_rejected_at_construction() {
        let mut config = Config::default();
        config.observation_location.latitude = -120.;
        let err = Mount::new(&config, RecordingSink::default()).unwrap_err();
        assert!(matches!(err, ControlError::InvalidLocation(_)));
    }

    #[test]
    fn test_poll_publishes_all_quantities_initially() {
        let mut mount = test_mount();
        mount.poll(Duration::from_secs(1), noon());

        let names: Vec<&str> = mount
            .sink
            .published
            .iter()
            .map(|(n, _, _)| n.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "right_ascension",
                "declination",
                "azimuth",
                "altitude",
                "motion_state"
            ]
        );
    }

    #[test]
    fn test_idle_poll_does_not_republish_equatorial() {
        let mut mount = test_mount();
        let when = noon();
        mount.poll(Duration::from_secs(1), when);
        mount.poll(Duration::from_secs(1), when);

        // Position, horizontal coords and state are all unchanged on the
        // second poll at the same instant, so nothing is published again.
        assert_eq!(mount.sink.values_for("right_ascension").len(), 1);
        assert_eq!(mount.sink.values_for("azimuth").len(), 1);
        assert_eq!(mount.sink.values_for("motion_state").len(), 1);
    }

    #[test]
    fn test_slew_publishes_each_tick() {
        let mut mount = test_mount();
        mount.goto(EquatorialPosition::new(6., 0.)).unwrap();
        mount.poll(Duration::from_secs(1), noon());
        mount.poll(Duration::from_secs(1), noon());

        assert_eq!(mount.sink.values_for("right_ascension").len(), 2);
        // Slewing then still slewing: one state publication
        assert_eq!(mount.sink.values_for("motion_state").len(), 1);
        assert_float_absolute_eq!(
            mount.sink.values_for("motion_state")[0],
            MotionState::Slewing.as_code() as f64,
            0.
        );
    }

    #[test]
    fn test_slew_completion_reaches_tracking() {
        let mut mount = test_mount();
        mount.goto(EquatorialPosition::new(6., 0.)).unwrap();
        let state = mount.poll(Duration::from_secs(30), noon());
        assert_eq!(state, MotionState::Tracking);
        assert_float_absolute_eq!(mount.current_pointing().right_ascension, 6., 1E-9);
    }

    #[test]
    fn test_manual_motion_guard() {
        let mut mount = test_mount();
        mount.move_manual(ManualDirection::North).unwrap();

        mount.park().unwrap();
        let err = mount.move_manual(ManualDirection::West).unwrap_err();
        assert!(matches!(err, ControlError::Parked(_)));

        mount.unpark().unwrap();
        mount.move_manual(ManualDirection::East).unwrap();
    }
}
