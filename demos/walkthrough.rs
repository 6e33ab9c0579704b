//! Console walkthrough of a full session: load a small dataset, change the
//! area filter too early, take a GPS fix, stream a few noisy heading
//! samples, then widen the filter back out.
//!
//! Run with `RUST_LOG=debug` to see the pipeline's own tracing output.

use signal_compass::{
    AreaFilter, ArrowUpdate, Coordinate, OrientationPipeline, RankedTransmitter, RenderSink,
    dataset,
};

const DATASET: &str = r#"[
    {"id": "waiatarua", "name": "Waiatarua", "lat": -36.9311, "lng": 174.5561,
     "area": "Auckland", "elevation_m": 390, "power": "40 kW", "polarity": "horizontal"},
    {"id": "sky-tower", "name": "Sky Tower", "lat": -36.8485, "lng": 174.7622,
     "area": "Auckland", "elevation_m": 328},
    {"id": "te-aroha", "name": "Te Aroha", "lat": -37.5421, "lng": 175.7442,
     "area": "Waikato"},
    {"id": "kaukau", "name": "Kaukau", "lat": -41.2486, "lng": 174.7658,
     "area": "Wellington", "power": "100 kW"}
]"#;

struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn show_selection(&mut self, selection: &[RankedTransmitter]) {
        println!("-- selection ({} sites) --", selection.len());
        for ranked in selection {
            println!(
                "   {:<10} {:7.1} km at {:5.1}° true",
                ranked.transmitter.name, ranked.distance_km, ranked.bearing_degrees
            );
        }
    }

    fn show_orientation(&mut self, needle_rotation: f64, arrows: &[ArrowUpdate<'_>]) {
        print!("needle {needle_rotation:8.2}° |");
        for arrow in arrows {
            print!(" {} -> {:.1}°", arrow.transmitter_id, arrow.rotation_degrees);
        }
        println!();
    }

    fn show_not_ready(&mut self) {
        println!("(waiting for a GPS fix before filtering)");
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let transmitters = dataset::from_json(DATASET).expect("embedded dataset is valid");
    println!("areas: {}", dataset::areas(&transmitters).join(", "));

    let mut pipeline = OrientationPipeline::new(ConsoleSink);

    // Too early: no fix yet, the sink gets a not-ready prompt and the
    // filter is kept for the fix below
    pipeline.on_area_filter_changed(AreaFilter::from_selection("Auckland"));

    pipeline.load_transmitters(transmitters);
    pipeline.on_fix_acquired(Coordinate::new(-36.8509, 174.7645));

    for raw_heading in [140.0, 152.0, 147.0, 149.5, 148.2] {
        pipeline.on_orientation_tick(raw_heading);
    }

    pipeline.on_area_filter_changed(AreaFilter::from_selection("all"));
}
