//! Approximate magnetic declination for the New Zealand region
//!
//! A coarse linear fit to the geomagnetic field over New Zealand, where
//! declination grows toward the south and west of the country. This is a
//! deliberate approximation with a known accuracy limit of a degree or two,
//! not a World Magnetic Model evaluation; the clamp keeps the estimate
//! inside the plausible national range even for positions outside the fit's
//! validity.

use crate::types::Coordinate;

/// Declination in degrees east assumed before any position is known,
/// tuned for Auckland.
pub const DEFAULT_DECLINATION: f64 = 20.3;

/// Declination at the reference position
const BASE_DECLINATION: f64 = 20.3;
/// Absolute latitude of the reference position
const REFERENCE_LATITUDE: f64 = 37.0;
/// Longitude of the reference position
const REFERENCE_LONGITUDE: f64 = 174.5;
/// Declination change per degree of latitude away from the equator
const LATITUDE_SLOPE: f64 = 0.4;
/// Declination change per degree of longitude west of the reference
const LONGITUDE_SLOPE: f64 = 0.4;
/// Plausible declination bounds for New Zealand
const MIN_DECLINATION: f64 = 18.0;
const MAX_DECLINATION: f64 = 28.0;

/// Estimate the magnetic declination in degrees east at `coord`.
///
/// Adds latitude- and longitude-dependent linear adjustments to the
/// Auckland base value and clamps the result to [18.0, 28.0]. Pure and
/// total for all finite coordinates.
///
/// # Example
/// ```
/// use signal_compass::{Coordinate, declination};
///
/// // At the reference position both adjustments vanish
/// let estimate = declination::estimate(Coordinate::new(-37.0, 174.5));
/// assert!((estimate - 20.3).abs() < 1e-6);
/// ```
pub fn estimate(coord: Coordinate) -> f64 {
    let lat_adjustment = (coord.latitude.abs() - REFERENCE_LATITUDE) * LATITUDE_SLOPE;
    let lon_adjustment = (REFERENCE_LONGITUDE - coord.longitude) * LONGITUDE_SLOPE;
    (BASE_DECLINATION + lat_adjustment + lon_adjustment).clamp(MIN_DECLINATION, MAX_DECLINATION)
}
