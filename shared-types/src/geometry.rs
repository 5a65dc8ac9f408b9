use serde::{Deserialize, Serialize};

use crate::entry::{format_koordinat, ProoferEntry};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

/// One connecting line between two pins on the map.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: LatLong,
    pub end: LatLong,
}

/// Every unordered pair (i, j), i < j, as a line segment. Quadratic in the
/// number of entries, which stays small enough here; a single entry draws
/// no lines at all.
pub fn connecting_segments(entries: &[ProoferEntry]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(entries.len() * entries.len().saturating_sub(1) / 2);
    for (i, first) in entries.iter().enumerate() {
        for second in &entries[i + 1..] {
            segments.push(Segment {
                start: first.position(),
                end: second.position(),
            });
        }
    }
    segments
}

/// Number of distinct coordinate pairs among the entries, for the community
/// stats card. Keyed on the koordinat string shape so -0.0 and 0.0 stay
/// distinct the same way they would in the store.
pub fn unique_location_count(entries: &[ProoferEntry]) -> usize {
    let mut keys: Vec<String> = entries
        .iter()
        .map(|entry| format_koordinat(entry.lat, entry.long))
        .collect();
    keys.sort();
    keys.dedup();
    keys.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(username: &str, lat: f64, long: f64) -> ProoferEntry {
        ProoferEntry {
            username: username.to_string(),
            lat,
            long,
            message: String::new(),
        }
    }

    #[test]
    fn no_entries_no_segments() {
        assert!(connecting_segments(&[]).is_empty());
        assert!(connecting_segments(&[entry("solo", 0.0, 0.0)]).is_empty());
    }

    #[test]
    fn pair_count_is_n_choose_two() {
        for n in 2..8usize {
            let entries: Vec<ProoferEntry> =
                (0..n).map(|i| entry(&format!("u{i}"), i as f64, 0.0)).collect();
            assert_eq!(connecting_segments(&entries).len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn segments_connect_the_right_endpoints() {
        let entries = vec![
            entry("a", -6.2, 106.8),
            entry("b", -1.6, 103.61),
            entry("c", -2.53, 140.7),
        ];
        let segments = connecting_segments(&entries);
        assert_eq!(
            segments,
            vec![
                Segment {
                    start: LatLong { lat: -6.2, long: 106.8 },
                    end: LatLong { lat: -1.6, long: 103.61 },
                },
                Segment {
                    start: LatLong { lat: -6.2, long: 106.8 },
                    end: LatLong { lat: -2.53, long: 140.7 },
                },
                Segment {
                    start: LatLong { lat: -1.6, long: 103.61 },
                    end: LatLong { lat: -2.53, long: 140.7 },
                },
            ]
        );
    }

    #[test]
    fn unique_locations_dedupe_shared_coordinates() {
        let entries = vec![
            entry("a", -6.2, 106.8),
            entry("b", -6.2, 106.8),
            entry("c", -2.53, 140.7),
        ];
        assert_eq!(unique_location_count(&entries), 2);
        assert_eq!(unique_location_count(&[]), 0);
    }
}
