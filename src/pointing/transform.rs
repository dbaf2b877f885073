use chrono::{DateTime, Utc};

use crate::astro_math;
use crate::pointing::position::{EquatorialPosition, GeodeticLocation, HorizontalPosition};

/// Derives horizontal coordinates for an equatorial position as seen from
/// `loc` at `when`. Stateless; recomputed on every poll.
///
/// The underlying rotation yields an azimuth measured from the south point
/// increasing westward; the result is re-based to the north point increasing
/// eastward by adding 180 degrees and folding into [0, 360).
///
/// Inputs are expected well-formed: callers validate the location at the
/// configuration boundary, so an out-of-range latitude here is a programming
/// bug and fails fast rather than being clamped.
pub fn equatorial_to_horizontal(
    eq: EquatorialPosition,
    loc: GeodeticLocation,
    when: DateTime<Utc>,
) -> HorizontalPosition {
    assert!(
        (-90. ..=90.).contains(&loc.latitude),
        "latitude {} out of range",
        loc.latitude
    );

    let longitude = loc.normalized_longitude();
    let ha = astro_math::calculate_hour_angle(when, longitude, eq.right_ascension);

    let altitude = astro_math::calculate_alt_from_ha_dec(ha, eq.declination, loc.latitude);
    let az_south = astro_math::calculate_az_south_from_ha_dec(ha, eq.declination, loc.latitude);

    HorizontalPosition {
        azimuth: astro_math::modulo(az_south + 180., 360.),
        altitude,
    }
}
