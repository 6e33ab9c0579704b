//! Great-circle bearing and distance on a spherical Earth
//!
//! Distance uses the haversine formula and bearing the initial great-circle
//! bearing formula, both over a fixed mean radius. Accuracy is more than
//! sufficient for pointing at transmitter sites tens to hundreds of
//! kilometres away.

use crate::angles::normalize_degrees;
use crate::types::Coordinate;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geometry of one coordinate relative to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingDistance {
    /// Initial great-circle bearing in degrees true, in [0, 360)
    pub bearing_degrees: f64,
    /// Great-circle distance in kilometres
    pub distance_km: f64,
}

/// Compute the initial bearing and great-circle distance from `from` to `to`.
///
/// Pure and total: identical coordinates yield a distance of 0 km and a
/// bearing of 0° (the formula's natural value at zero delta), which callers
/// treat like any other result rather than special-casing.
///
/// # Example
/// ```
/// use signal_compass::{Coordinate, bearing_and_distance};
///
/// let auckland = Coordinate::new(-36.8485, 174.7633);
/// let wellington = Coordinate::new(-41.2866, 174.7756);
///
/// let geometry = bearing_and_distance(auckland, wellington);
/// assert!((geometry.distance_km - 493.4).abs() < 5.0);
/// assert!((0.0..360.0).contains(&geometry.bearing_degrees));
/// ```
pub fn bearing_and_distance(from: Coordinate, to: Coordinate) -> BearingDistance {
    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon2 = to.longitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    // Haversine distance
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let distance_km = EARTH_RADIUS_KM * c;

    // Initial bearing; atan2 yields (-180°, 180°], normalized into [0, 360)
    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    let bearing_degrees = normalize_degrees(y.atan2(x).to_degrees());

    BearingDistance {
        bearing_degrees,
        distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    /// One degree of latitude along a meridian on the reference sphere
    const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * core::f64::consts::PI / 180.0;

    #[test]
    fn test_identical_coordinates_are_degenerate_but_deterministic() {
        let here = Coordinate::new(-36.8485, 174.7633);
        let geometry = bearing_and_distance(here, here);

        assert!(geometry.distance_km.abs() < EPSILON);
        assert!(geometry.bearing_degrees.abs() < EPSILON);
    }

    #[test]
    fn test_cardinal_bearings_from_equator() {
        let origin = Coordinate::new(0.0, 0.0);

        let north = bearing_and_distance(origin, Coordinate::new(1.0, 0.0));
        assert!(north.bearing_degrees.abs() < 1e-6);
        assert!((north.distance_km - KM_PER_DEGREE).abs() < 0.01);

        let east = bearing_and_distance(origin, Coordinate::new(0.0, 1.0));
        assert!((east.bearing_degrees - 90.0).abs() < 1e-6);
        assert!((east.distance_km - KM_PER_DEGREE).abs() < 0.01);

        let south = bearing_and_distance(origin, Coordinate::new(-1.0, 0.0));
        assert!((south.bearing_degrees - 180.0).abs() < 1e-6);

        let west = bearing_and_distance(origin, Coordinate::new(0.0, -1.0));
        assert!((west.bearing_degrees - 270.0).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_always_in_range() {
        let user = Coordinate::new(-37.0, 174.9);
        for lat_step in -5..=5 {
            for lon_step in -5..=5 {
                let target = Coordinate::new(
                    user.latitude + f64::from(lat_step) * 0.7,
                    user.longitude + f64::from(lon_step) * 0.7,
                );
                let geometry = bearing_and_distance(user, target);
                assert!(
                    (0.0..360.0).contains(&geometry.bearing_degrees),
                    "bearing {} out of range for ({}, {})",
                    geometry.bearing_degrees,
                    target.latitude,
                    target.longitude
                );
                assert!(geometry.distance_km >= 0.0);
            }
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::new(-36.8485, 174.7633);
        let b = Coordinate::new(-41.2866, 174.7756);

        let forward = bearing_and_distance(a, b);
        let reverse = bearing_and_distance(b, a);

        assert!((forward.distance_km - reverse.distance_km).abs() < 1e-9);
    }

    #[test]
    fn test_reciprocal_bearings_differ_by_half_turn() {
        let a = Coordinate::new(-36.8485, 174.7633);
        let b = Coordinate::new(-38.0, 175.5);

        let forward = bearing_and_distance(a, b);
        let reverse = bearing_and_distance(b, a);

        // Meridian convergence over this span is under half a degree, so
        // the back bearing sits close to 180° away from the forward one
        let difference = (forward.bearing_degrees - reverse.bearing_degrees).rem_euclid(360.0);
        assert!(
            (difference - 180.0).abs() < 1.0,
            "expected ~180° separation, got {difference}"
        );
    }

    #[test]
    fn test_known_distance_auckland_to_wellington() {
        let auckland = Coordinate::new(-36.8485, 174.7633);
        let wellington = Coordinate::new(-41.2866, 174.7756);

        let geometry = bearing_and_distance(auckland, wellington);

        // Straight-line distance is about 493 km, almost due south
        assert!((geometry.distance_km - 493.4).abs() < 2.0);
        assert!((geometry.bearing_degrees - 180.0).abs() < 2.0);
    }
}
