//! Orientation pipeline: the orchestrator behind the compass display
//!
//! The pipeline owns every piece of mutable state in the crate — the
//! transmitter list, the active area filter, the last GPS fix, the current
//! declination, the heading filter and the last display selection — and is
//! driven synchronously by two independent external event sources: GPS
//! fixes and raw orientation ticks. Render output goes through the
//! [`RenderSink`] collaborator, which keeps the numeric core independent of
//! any particular UI toolkit.

use tracing::{debug, trace};

use crate::declination;
use crate::heading::HeadingFilter;
use crate::ranking::{self, AreaFilter};
use crate::types::{Coordinate, PipelineSettings, RankedTransmitter, Transmitter};

/// Pipeline lifecycle phase.
///
/// `Uninitialized` until the transmitter dataset is loaded, `AwaitingFix`
/// until the first GPS fix arrives, then `Active` for the rest of the
/// session. There is no terminal phase; the pipeline ends with session
/// teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No dataset loaded yet
    #[default]
    Uninitialized,
    /// Dataset loaded, no GPS fix yet
    AwaitingFix,
    /// At least one fix received; orientation ticks are being consumed
    Active,
}

/// One directional indicator update, emitted for every selected transmitter
/// on each orientation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowUpdate<'a> {
    /// Identifier of the transmitter this arrow points at
    pub transmitter_id: &'a str,
    /// Rotation to apply to the arrow in degrees: the transmitter bearing
    /// minus the smoothed heading, offset by +360 and otherwise left
    /// unnormalized — CSS-style rotation transforms take values outside
    /// [0, 360) as-is
    pub rotation_degrees: f64,
    /// Distance to the transmitter in kilometres
    pub distance_km: f64,
}

/// Rendering collaborator driven synchronously by the pipeline.
///
/// Implementations map selections and rotations onto whatever display
/// technology hosts the compass; the pipeline itself renders nothing and
/// never blocks on the sink.
pub trait RenderSink {
    /// A ranking pass produced a new display selection, replacing any
    /// previous one wholesale.
    fn show_selection(&mut self, selection: &[RankedTransmitter]);

    /// New rotations for the compass needle and every selected arrow.
    /// `needle_rotation` is the negated smoothed heading, so a north
    /// indicator drawn at 0° stays pointed at true north as the device
    /// turns.
    fn show_orientation(&mut self, needle_rotation: f64, arrows: &[ArrowUpdate<'_>]);

    /// An operation that needs a GPS fix ran before one arrived; surface a
    /// user-facing prompt.
    fn show_not_ready(&mut self);
}

/// The orchestrator: consumes GPS fixes and raw orientation ticks, emits
/// render-ready selections and rotations.
///
/// Single-threaded and synchronous by design. Ticks are processed strictly
/// in arrival order and each result depends only on events consumed before
/// it; nothing is reordered or batched.
///
/// # Example
/// ```
/// use signal_compass::{
///     ArrowUpdate, Coordinate, OrientationPipeline, Phase, RankedTransmitter, RenderSink,
/// };
///
/// struct NullSink;
///
/// impl RenderSink for NullSink {
///     fn show_selection(&mut self, _selection: &[RankedTransmitter]) {}
///     fn show_orientation(&mut self, _needle: f64, _arrows: &[ArrowUpdate<'_>]) {}
///     fn show_not_ready(&mut self) {}
/// }
///
/// let mut pipeline = OrientationPipeline::new(NullSink);
/// pipeline.load_transmitters(Vec::new());
/// pipeline.on_fix_acquired(Coordinate::new(-36.85, 174.76));
/// pipeline.on_orientation_tick(90.0);
///
/// assert_eq!(pipeline.phase(), Phase::Active);
/// assert!(pipeline.heading().is_some());
/// ```
pub struct OrientationPipeline<S: RenderSink> {
    settings: PipelineSettings,
    sink: S,
    transmitters: Vec<Transmitter>,
    area_filter: AreaFilter,
    user_position: Option<Coordinate>,
    declination: f64,
    heading_filter: HeadingFilter,
    selection: Vec<RankedTransmitter>,
    phase: Phase,
}

impl<S: RenderSink> OrientationPipeline<S> {
    /// Create a pipeline with default settings.
    pub fn new(sink: S) -> Self {
        Self::with_settings(PipelineSettings::default(), sink)
    }

    /// Create a pipeline with custom settings.
    pub fn with_settings(settings: PipelineSettings, sink: S) -> Self {
        Self {
            sink,
            transmitters: Vec::new(),
            area_filter: AreaFilter::All,
            user_position: None,
            declination: settings.fallback_declination,
            heading_filter: HeadingFilter::with_smoothing(settings.smoothing_factor),
            selection: Vec::new(),
            phase: Phase::Uninitialized,
            settings,
        }
    }

    /// Load the transmitter dataset, replacing any previous one.
    ///
    /// Moves a freshly created pipeline out of `Uninitialized`. Loading
    /// again after a fix re-ranks against the new dataset immediately.
    pub fn load_transmitters(&mut self, transmitters: Vec<Transmitter>) {
        debug!(count = transmitters.len(), "transmitter dataset loaded");
        self.transmitters = transmitters;
        if self.phase == Phase::Uninitialized {
            self.phase = Phase::AwaitingFix;
        }
        if self.user_position.is_some() {
            self.rebuild_selection();
        }
    }

    /// Record a GPS fix.
    ///
    /// Stores the position, estimates the local declination, rebuilds the
    /// display selection and moves the pipeline to `Active`. Later fixes
    /// re-run the same path with the updated position.
    pub fn on_fix_acquired(&mut self, position: Coordinate) {
        self.user_position = Some(position);
        self.declination = declination::estimate(position);
        debug!(
            latitude = position.latitude,
            longitude = position.longitude,
            declination = self.declination,
            "GPS fix acquired"
        );
        self.phase = Phase::Active;
        self.rebuild_selection();
    }

    /// Consume one raw magnetic heading sample in degrees.
    ///
    /// Ticks arriving before the first fix are dropped: there is no
    /// position-specific declination to correct with and nothing selected
    /// to rotate. Dropping is a no-op, not an error.
    pub fn on_orientation_tick(&mut self, raw_heading: f64) {
        if self.user_position.is_none() {
            trace!(raw_heading, "orientation tick before first fix, dropped");
            return;
        }
        let smoothed = self.heading_filter.update(raw_heading, self.declination);
        self.emit_orientation(smoothed);
    }

    /// Switch the coverage-area filter.
    ///
    /// Before the first fix the new filter is recorded for the fix to use
    /// and the sink is told to show its not-ready prompt. Afterwards the
    /// selection is rebuilt at the stored position and, once any heading
    /// has been smoothed, arrows for the new selection are oriented
    /// immediately rather than waiting for the next tick.
    pub fn on_area_filter_changed(&mut self, filter: AreaFilter) {
        debug!(?filter, "area filter changed");
        self.area_filter = filter;
        if self.user_position.is_none() {
            self.sink.show_not_ready();
            return;
        }
        self.rebuild_selection();
        if let Some(heading) = self.heading_filter.heading() {
            self.emit_orientation(heading);
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The selection produced by the most recent ranking pass.
    pub fn selection(&self) -> &[RankedTransmitter] {
        &self.selection
    }

    /// Declination currently applied to headings, in degrees east.
    ///
    /// The settings' fallback until the first fix allows an estimate.
    pub fn declination(&self) -> f64 {
        self.declination
    }

    /// Smoothed true heading, or `None` before the first consumed tick.
    pub fn heading(&self) -> Option<f64> {
        self.heading_filter.heading()
    }

    /// Area filter applied to ranking passes.
    pub fn area_filter(&self) -> &AreaFilter {
        &self.area_filter
    }

    /// The render sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the render sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn rebuild_selection(&mut self) {
        let Some(user) = self.user_position else {
            return;
        };
        self.selection = ranking::rank(
            &self.transmitters,
            user,
            &self.area_filter,
            self.settings.display_budget,
        );
        debug!(count = self.selection.len(), "display selection rebuilt");
        self.sink.show_selection(&self.selection);
    }

    fn emit_orientation(&mut self, smoothed_heading: f64) {
        let arrows: Vec<ArrowUpdate<'_>> = self
            .selection
            .iter()
            .map(|ranked| ArrowUpdate {
                transmitter_id: &ranked.transmitter.id,
                rotation_degrees: 360.0 + (ranked.bearing_degrees - smoothed_heading),
                distance_km: ranked.distance_km,
            })
            .collect();
        self.sink.show_orientation(-smoothed_heading, &arrows);
    }
}
