//! # Spherical geodesy routines
//!
//! Great-circle distance and azimuth computation between two geographic points,
//! plus the degree ↔ kilometer conversion at the fixed reference radius
//! ([`EARTH_MEAN_RADIUS_KM`](crate::constants::EARTH_MEAN_RADIUS_KM)).
//!
//! All angles are in degrees at the API boundary. The distance is computed with
//! the haversine formulation, which is numerically stable for small separations
//! where the plain spherical law of cosines loses precision.

use crate::constants::{Degree, Kilometer, KM_PER_DEGREE, RADEG};

/// Normalize an angle in degrees to the interval [0, 360).
fn norm360(angle: Degree) -> Degree {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Compute the great-circle distance and azimuths between two geographic points.
///
/// Arguments
/// ---------
/// * `lat1`, `lon1`: coordinates of the first point in degrees
/// * `lat2`, `lon2`: coordinates of the second point in degrees
///
/// Return
/// ------
/// * A tuple `(distance, azimuth, back_azimuth)`:
///     - `distance`: geocentric surface distance in degrees of arc
///     - `azimuth`: bearing from the first point towards the second, degrees clockwise from north in [0, 360)
///     - `back_azimuth`: bearing from the second point towards the first, same convention
pub fn delazi(lat1: Degree, lon1: Degree, lat2: Degree, lon2: Degree) -> (Degree, Degree, Degree) {
    let phi1 = lat1 * RADEG;
    let phi2 = lat2 * RADEG;
    let dphi = (lat2 - lat1) * RADEG;
    let dlambda = (lon2 - lon1) * RADEG;

    let half_chord =
        (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let dist = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    let az = (dlambda.sin() * phi2.cos())
        .atan2(phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos());
    let baz = ((-dlambda).sin() * phi1.cos())
        .atan2(phi2.cos() * phi1.sin() - phi2.sin() * phi1.cos() * dlambda.cos());

    (dist / RADEG, norm360(az / RADEG), norm360(baz / RADEG))
}

/// Convert a distance in degrees of arc to kilometers on the reference sphere.
pub fn deg2km(distance: Degree) -> Kilometer {
    distance * KM_PER_DEGREE
}

/// Convert a distance in kilometers to degrees of arc on the reference sphere.
pub fn km2deg(distance: Kilometer) -> Degree {
    distance / KM_PER_DEGREE
}
