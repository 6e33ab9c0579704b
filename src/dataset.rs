//! Loading the transmitter dataset
//!
//! The dataset is a JSON array of transmitter records, one per site, read
//! once at startup. Parsing is the only fallible boundary in the crate:
//! past it, records are assumed well formed and the numeric core never
//! validates them again.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::types::Transmitter;

/// Errors raised while loading a transmitter dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset source could not be read
    #[error("failed to read transmitter dataset: {0}")]
    Io(#[from] std::io::Error),
    /// The dataset was read but is not a valid transmitter array
    #[error("failed to parse transmitter dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a transmitter dataset from JSON text.
///
/// # Example
/// ```
/// use signal_compass::dataset;
///
/// let sites = dataset::from_json(
///     r#"[{"id": "kaukau", "name": "Kaukau", "lat": -41.2486,
///          "lng": 174.7658, "area": "Wellington"}]"#,
/// ).unwrap();
/// assert_eq!(sites.len(), 1);
/// ```
pub fn from_json(json: &str) -> Result<Vec<Transmitter>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a transmitter dataset from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Transmitter>, DatasetError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a transmitter dataset from a file on disk.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Transmitter>, DatasetError> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// Sorted, deduplicated coverage-area names, ready for a region selector.
pub fn areas(transmitters: &[Transmitter]) -> Vec<String> {
    let unique: BTreeSet<&str> = transmitters
        .iter()
        .map(|transmitter| transmitter.area.as_str())
        .collect();
    unique.into_iter().map(str::to_owned).collect()
}
