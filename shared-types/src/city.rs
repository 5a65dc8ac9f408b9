use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::entry::KoordinatError;
use crate::geometry::LatLong;

/// One row of the static city dataset. Coordinates are kept as the decimal
/// strings found in the dataset and only parsed when a city is resolved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CityRecord {
    pub name: String,
    pub lat: String,
    pub lng: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin2: Option<String>,
}

impl CityRecord {
    pub fn coords(&self) -> Result<LatLong, KoordinatError> {
        LatLong::from_decimal_strings(&self.lat, &self.lng)
    }
}

static CITIES: LazyLock<Vec<CityRecord>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/cities.json"))
        .expect("embedded city dataset is valid JSON")
});

/// The static dataset, loaded once and read-only afterwards.
pub fn cities() -> &'static [CityRecord] {
    &CITIES
}

/// Upper bound on the number of suggestions shown for one input.
pub const MAX_SUGGESTIONS: usize = 8;

/// Prefix-matches `input` against the dataset, case-insensitively, keeping
/// the dataset's relative order. Inputs of one character or less yield
/// nothing so the dropdown clears as soon as the field is emptied.
pub fn suggest_cities<'a>(input: &str, dataset: &'a [CityRecord]) -> Vec<&'a CityRecord> {
    if input.chars().count() <= 1 {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    dataset
        .iter()
        .filter(|city| city.name.to_lowercase().starts_with(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Exact name match, first occurrence wins. Submission goes through this, so
/// anything not selected from the suggestions is rejected.
pub fn resolve_city<'a>(name: &str, dataset: &'a [CityRecord]) -> Option<&'a CityRecord> {
    dataset.iter().find(|city| city.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, lat: &str, lng: &str) -> CityRecord {
        CityRecord {
            name: name.to_string(),
            lat: lat.to_string(),
            lng: lng.to_string(),
            country: "ID".to_string(),
            admin1: None,
            admin2: None,
        }
    }

    fn dataset() -> Vec<CityRecord> {
        vec![
            record("Jakarta", "-6.2", "106.8"),
            record("Jambi", "-1.6", "103.61"),
            record("Jayapura", "-2.53", "140.7"),
            record("Bandung", "-6.92", "107.61"),
        ]
    }

    #[test]
    fn short_input_yields_nothing() {
        let data = dataset();
        assert!(suggest_cities("", &data).is_empty());
        assert!(suggest_cities("J", &data).is_empty());
    }

    #[test]
    fn prefix_match_is_case_insensitive_and_ordered() {
        let data = dataset();
        let names: Vec<&str> = suggest_cities("jA", &data)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Jakarta", "Jambi", "Jayapura"]);
    }

    #[test]
    fn suggestions_are_capped_at_eight() {
        let data: Vec<CityRecord> = (0..20)
            .map(|i| record(&format!("Santa {i}"), "0.0", "0.0"))
            .collect();
        let matches = suggest_cities("Santa", &data);
        assert_eq!(matches.len(), MAX_SUGGESTIONS);
        // the first eight in dataset order, nothing reshuffled
        assert_eq!(matches[0].name, "Santa 0");
        assert_eq!(matches[7].name, "Santa 7");
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(suggest_cities("Xanadu", &dataset()).is_empty());
    }

    #[test]
    fn resolution_is_exact() {
        let data = dataset();
        assert_eq!(resolve_city("Jakarta", &data).unwrap().lat, "-6.2");
        assert!(resolve_city("jakarta", &data).is_none());
        assert!(resolve_city("Jak", &data).is_none());
    }

    #[test]
    fn coords_parse_the_decimal_strings() {
        let at = record("Jakarta", "-6.2", "106.8").coords().unwrap();
        assert_eq!(at, LatLong { lat: -6.2, long: 106.8 });
        assert!(record("Nowhere", "not-a-number", "0.0").coords().is_err());
    }

    #[test]
    fn embedded_dataset_loads_and_knows_jakarta() {
        let data = cities();
        assert!(!data.is_empty());
        let jakarta = resolve_city("Jakarta", data).expect("Jakarta is in the dataset");
        jakarta.coords().expect("Jakarta has parseable coordinates");
        let names: Vec<&str> = suggest_cities("Jak", data)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert!(names.contains(&"Jakarta"));
    }
}
