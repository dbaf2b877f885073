use crate::astro_math::{self, Degrees, Hours};
use crate::errors::{ControlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/* Equatorial */

/// A pointing direction on the celestial sphere. Value type; current and
/// target positions are always independent instances.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquatorialPosition {
    /// Right ascension in hours, [0, 24)
    pub right_ascension: Hours,
    /// Declination in degrees, [-90, 90]
    pub declination: Degrees,
}

impl EquatorialPosition {
    pub fn new(right_ascension: Hours, declination: Degrees) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }
}

impl fmt::Display for EquatorialPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA: {} - DEC: {}",
            astro_math::format_sexa(self.right_ascension),
            astro_math::format_sexa(self.declination)
        )
    }
}

/* Location */

/// Observer geodetic location. Longitude is accepted in either the [0, 360)
/// or the [-180, 180) convention and folded before use.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeodeticLocation {
    pub latitude: Degrees,
    pub longitude: Degrees,
    pub elevation: f64,
}

impl Default for GeodeticLocation {
    fn default() -> Self {
        Self {
            latitude: 51.47,
            longitude: 0.0,
            elevation: 15.0,
        }
    }
}

impl GeodeticLocation {
    /// East-positive longitude folded into (-180, 180].
    pub fn normalized_longitude(&self) -> Degrees {
        let lng = astro_math::modulo(self.longitude, 360.);
        if lng > 180. {
            lng - 360.
        } else {
            lng
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(-90. ..=90.).contains(&self.latitude) {
            return Err(ControlError::InvalidLocation(format!(
                "latitude of {} is not valid",
                self.latitude
            )));
        }
        if !(-180. ..360.).contains(&self.longitude) {
            return Err(ControlError::InvalidLocation(format!(
                "longitude of {} is not valid",
                self.longitude
            )));
        }
        Ok(())
    }
}

/* Horizontal */

/// Horizon-relative pointing direction. Derived on every poll, never stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HorizontalPosition {
    /// Azimuth in degrees, [0, 360), measured from north increasing eastward
    pub azimuth: Degrees,
    /// Altitude in degrees above the horizon, [-90, 90]
    pub altitude: Degrees,
}

impl fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AZ: {} - ALT: {}",
            astro_math::format_sexa(self.azimuth),
            astro_math::format_sexa(self.altitude)
        )
    }
}

pub fn check_ra(ra: Hours) -> bool {
    (0. ..24.).contains(&ra)
}

pub fn check_dec(dec: Degrees) -> bool {
    (-90. ..=90.).contains(&dec)
}
