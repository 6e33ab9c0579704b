//! signal-compass — bearing, distance and smoothed heading for pointing a
//! handheld device at fixed broadcast transmitter sites.
//!
//! Given a GPS fix and a stream of raw magnetic compass headings, this
//! crate computes the great-circle bearing and distance to a set of known
//! transmitters, corrects headings for regional magnetic declination,
//! smooths sensor jitter with a wraparound-aware exponential filter and
//! keeps a distance-ranked display selection up to date. The host
//! application supplies the sensor events and renders the resulting
//! rotations; beyond reading the transmitter dataset, the crate does no
//! I/O of its own.
//!
//! # Features
//!
//! - Haversine distance and initial great-circle bearing on a spherical Earth
//! - Regional magnetic-declination estimate (coarse linear model, not a WMM)
//! - Exponentially weighted heading smoothing with correct 0°/360° wraparound
//! - Distance-ranked, area-filtered transmitter selection with a display budget
//! - A synchronous pipeline emitting render-ready rotations through a
//!   [`RenderSink`] collaborator
//!
//! # Quick Start
//!
//! ```rust
//! use signal_compass::{
//!     ArrowUpdate, Coordinate, OrientationPipeline, RankedTransmitter, RenderSink, dataset,
//! };
//!
//! struct Console;
//!
//! impl RenderSink for Console {
//!     fn show_selection(&mut self, selection: &[RankedTransmitter]) {
//!         for ranked in selection {
//!             println!("{}: {:.1} km", ranked.transmitter.name, ranked.distance_km);
//!         }
//!     }
//!     fn show_orientation(&mut self, needle_rotation: f64, _arrows: &[ArrowUpdate<'_>]) {
//!         println!("needle at {needle_rotation:.1}°");
//!     }
//!     fn show_not_ready(&mut self) {
//!         println!("waiting for GPS");
//!     }
//! }
//!
//! let transmitters = dataset::from_json(
//!     r#"[{"id": "waiatarua", "name": "Waiatarua", "lat": -36.9311,
//!          "lng": 174.5561, "area": "Auckland"}]"#,
//! )
//! .expect("valid dataset");
//!
//! let mut pipeline = OrientationPipeline::new(Console);
//! pipeline.load_transmitters(transmitters);
//! pipeline.on_fix_acquired(Coordinate::new(-36.8485, 174.7633));
//! pipeline.on_orientation_tick(271.0);
//! ```

mod angles;
pub mod dataset;
pub mod declination;
pub mod geodesy;
mod heading;
mod pipeline;
pub mod ranking;
mod types;

// Re-export the public surface at the crate root
pub use dataset::DatasetError;
pub use declination::DEFAULT_DECLINATION;
pub use geodesy::{BearingDistance, EARTH_RADIUS_KM, bearing_and_distance};
pub use heading::{DEFAULT_SMOOTHING, HeadingFilter};
pub use pipeline::{ArrowUpdate, OrientationPipeline, Phase, RenderSink};
pub use ranking::{AreaFilter, rank};
pub use types::{Coordinate, PipelineSettings, RankedTransmitter, Transmitter};
