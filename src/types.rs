//! Core data types for the signal-compass pipeline

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::declination::DEFAULT_DECLINATION;
use crate::heading::DEFAULT_SMOOTHING;

/// A geographic position in decimal degrees.
///
/// Serialized with the compact `lat`/`lng` keys used by the transmitter
/// dataset. Positions come from a GPS fix or the dataset and are never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in degrees, positive east
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A fixed broadcast transmitter site.
///
/// The fields the pipeline computes with are typed; every other descriptive
/// field in the dataset — location, elevation, power, service, channel
/// list, polarity and whatever else a record carries — is preserved
/// untouched in [`details`](Self::details) for display layers to render
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transmitter {
    /// Stable identifier, unique within the dataset
    pub id: String,
    /// Human-readable site name
    pub name: String,
    /// Site position
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Coverage area the site belongs to, matched by the area filter
    pub area: String,
    /// Opaque descriptive fields passed through for display
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

/// A transmitter annotated with its geometry relative to the user.
///
/// Derived fresh on every ranking pass and never cached across fixes; a new
/// pass supersedes the previous selection wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTransmitter {
    /// The underlying site
    pub transmitter: Transmitter,
    /// Initial great-circle bearing from the user in degrees true, [0, 360)
    pub bearing_degrees: f64,
    /// Great-circle distance from the user in kilometres
    pub distance_km: f64,
}

/// Tunable pipeline parameters.
///
/// # Example
/// ```
/// use signal_compass::PipelineSettings;
///
/// let settings = PipelineSettings {
///     display_budget: 6,
///     ..Default::default()
/// };
/// assert!(settings.smoothing_factor > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Heading filter smoothing factor in (0, 1]
    pub smoothing_factor: f64,
    /// Maximum number of transmitters in a display selection
    pub display_budget: usize,
    /// Declination in degrees east applied before the first GPS fix
    pub fallback_declination: f64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            smoothing_factor: DEFAULT_SMOOTHING,
            display_budget: 4,
            fallback_declination: DEFAULT_DECLINATION,
        }
    }
}
