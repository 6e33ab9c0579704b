//! Selection and ranking of the nearest transmitters
//!
//! A ranking pass filters the dataset by coverage area, computes each
//! surviving site's bearing and distance from the user, sorts ascending by
//! distance, and keeps only as many sites as the display budget allows.

use crate::geodesy::bearing_and_distance;
use crate::types::{Coordinate, RankedTransmitter, Transmitter};

/// Coverage-area filter for a ranking pass.
///
/// [`All`](Self::All) keeps every site. The UI's region selector uses the
/// literal string `"all"` for that choice; [`from_selection`](Self::from_selection)
/// maps it onto the enum so the sentinel never leaks past the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AreaFilter {
    /// Keep every transmitter regardless of area
    #[default]
    All,
    /// Keep only transmitters whose area matches exactly
    Area(String),
}

impl AreaFilter {
    /// Build a filter from a region-selector value, treating `"all"` as
    /// the match-everything sentinel.
    pub fn from_selection(value: &str) -> Self {
        if value == "all" {
            AreaFilter::All
        } else {
            AreaFilter::Area(value.to_string())
        }
    }

    /// Whether a transmitter in `area` passes this filter.
    pub fn matches(&self, area: &str) -> bool {
        match self {
            AreaFilter::All => true,
            AreaFilter::Area(wanted) => wanted == area,
        }
    }
}

/// Rank `transmitters` by distance from `user`.
///
/// Applies `filter`, computes bearing and distance for each surviving site,
/// sorts ascending by distance (stable, so equidistant sites keep their
/// dataset order) and truncates to `display_budget` entries.
///
/// Pure given its inputs: identical arguments produce identical output. An
/// empty result — zero budget, or a filter matching nothing — is valid,
/// not an error.
///
/// # Example
/// ```
/// use signal_compass::{AreaFilter, Coordinate, Transmitter, rank};
///
/// let sites: Vec<Transmitter> = serde_json::from_str(
///     r#"[{"id": "a", "name": "A", "lat": -36.9, "lng": 174.8, "area": "Auckland"},
///         {"id": "b", "name": "B", "lat": -36.8, "lng": 174.7, "area": "Auckland"}]"#,
/// ).unwrap();
///
/// let ranked = rank(&sites, Coordinate::new(-37.0, 174.9), &AreaFilter::All, 1);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].transmitter.id, "a");
/// ```
pub fn rank(
    transmitters: &[Transmitter],
    user: Coordinate,
    filter: &AreaFilter,
    display_budget: usize,
) -> Vec<RankedTransmitter> {
    let mut ranked: Vec<RankedTransmitter> = transmitters
        .iter()
        .filter(|transmitter| filter.matches(&transmitter.area))
        .map(|transmitter| {
            let geometry = bearing_and_distance(user, transmitter.coordinate);
            RankedTransmitter {
                transmitter: transmitter.clone(),
                bearing_degrees: geometry.bearing_degrees,
                distance_km: geometry.distance_km,
            }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(display_budget);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(id: &str, latitude: f64, longitude: f64, area: &str) -> Transmitter {
        Transmitter {
            id: id.to_string(),
            name: id.to_uppercase(),
            coordinate: Coordinate::new(latitude, longitude),
            area: area.to_string(),
            details: Default::default(),
        }
    }

    fn fixture() -> Vec<Transmitter> {
        vec![
            site("te-aroha", -37.5421, 175.7442, "Waikato"),
            site("waiatarua", -36.9311, 174.5561, "Auckland"),
            site("sky-tower", -36.8485, 174.7622, "Auckland"),
            site("kaukau", -41.2486, 174.7658, "Wellington"),
        ]
    }

    #[test]
    fn test_sorted_ascending_by_distance() {
        let user = Coordinate::new(-36.85, 174.76);
        let ranked = rank(&fixture(), user, &AreaFilter::All, 10);

        assert_eq!(ranked.len(), 4);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        // Right next to the Sky Tower, it must rank first
        assert_eq!(ranked[0].transmitter.id, "sky-tower");
    }

    #[test]
    fn test_budget_truncates() {
        let user = Coordinate::new(-36.85, 174.76);
        let ranked = rank(&fixture(), user, &AreaFilter::All, 2);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_area_filter_keeps_matching_sites_only() {
        let user = Coordinate::new(-36.85, 174.76);
        let filter = AreaFilter::Area("Auckland".to_string());
        let ranked = rank(&fixture(), user, &filter, 10);

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.transmitter.area == "Auckland"));
    }

    #[test]
    fn test_unmatched_area_yields_empty_selection() {
        let user = Coordinate::new(-36.85, 174.76);
        let filter = AreaFilter::Area("Otago".to_string());
        let ranked = rank(&fixture(), user, &filter, 10);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_all_sentinel_maps_to_match_everything() {
        assert_eq!(AreaFilter::from_selection("all"), AreaFilter::All);
        assert_eq!(
            AreaFilter::from_selection("Waikato"),
            AreaFilter::Area("Waikato".to_string())
        );
        assert!(AreaFilter::All.matches("anything"));
        assert!(!AreaFilter::Area("Waikato".to_string()).matches("Auckland"));
    }

    #[test]
    fn test_closest_of_two_candidates_wins() {
        let sites = vec![
            site("a", -36.9, 174.8, "Auckland"),
            site("b", -36.8, 174.7, "Auckland"),
        ];
        let user = Coordinate::new(-37.0, 174.9);

        // Assert the geometry directly, then that the ranker agrees with it
        let to_a = bearing_and_distance(user, sites[0].coordinate);
        let to_b = bearing_and_distance(user, sites[1].coordinate);
        assert!(to_a.distance_km < to_b.distance_km);

        let ranked = rank(&sites, user, &AreaFilter::All, 1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].transmitter.id, "a");
        assert!((ranked[0].distance_km - to_a.distance_km).abs() < 1e-12);
        assert!((ranked[0].bearing_degrees - to_a.bearing_degrees).abs() < 1e-12);
    }

    #[test]
    fn test_equidistant_sites_keep_dataset_order() {
        // Identical coordinates force a distance tie
        let sites = vec![
            site("first", -37.1, 174.6, "Auckland"),
            site("second", -37.1, 174.6, "Auckland"),
        ];
        let ranked = rank(&sites, Coordinate::new(-36.9, 174.8), &AreaFilter::All, 10);

        assert_eq!(ranked[0].transmitter.id, "first");
        assert_eq!(ranked[1].transmitter.id, "second");
    }

    #[test]
    fn test_rank_is_idempotent() {
        let user = Coordinate::new(-36.85, 174.76);
        let first = rank(&fixture(), user, &AreaFilter::All, 3);
        let second = rank(&fixture(), user, &AreaFilter::All, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_budget_yields_empty_selection() {
        let ranked = rank(
            &fixture(),
            Coordinate::new(-36.85, 174.76),
            &AreaFilter::All,
            0,
        );
        assert!(ranked.is_empty());
    }
}
