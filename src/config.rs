use serde::{Deserialize, Serialize};

use crate::astro_math::{Degrees, Hours};
use crate::pointing::machine::DEFAULT_SLEW_RATE;
use crate::pointing::position::EquatorialPosition;
use crate::pointing::state::UnparkPolicy;

pub use crate::pointing::position::GeodeticLocation;

/* Config */
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub observation_location: GeodeticLocation,
    pub mount: MountSettings,
    pub polling: PollSettings,
}

/* Mount Settings */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountSettings {
    /// Simulated slew speed in degrees per second, shared by both axes
    pub slew_rate: Degrees,
    pub unpark_policy: UnparkPolicy,
    /// Pointing direction at session start
    pub initial_ra: Hours,
    pub initial_dec: Degrees,
    /// Optional target to slew to on startup
    pub target: Option<EquatorialPosition>,
}

impl Default for MountSettings {
    fn default() -> Self {
        Self {
            slew_rate: DEFAULT_SLEW_RATE,
            unpark_policy: UnparkPolicy::default(),
            initial_ra: 0.0,
            initial_dec: 90.0,
            target: None,
        }
    }
}

/* Polling */
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct PollSettings {
    pub interval_millis: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_millis: 1000,
        }
    }
}
