use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::LatLong;

/// A community member's pin: location plus a short story. `username` is the
/// logical unique key in the store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProoferEntry {
    pub username: String,
    pub lat: f64,
    pub long: f64,
    pub message: String,
}

impl ProoferEntry {
    pub fn position(&self) -> LatLong {
        LatLong {
            lat: self.lat,
            long: self.long,
        }
    }

    /// Case-insensitive substring match over username and message, used by
    /// the find-proofers search box. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.username.to_lowercase().contains(&query)
            || self.message.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum KoordinatError {
    #[error("expected \"lat,lng\", got {0:?}")]
    Shape(String),
    #[error("bad latitude {0:?}")]
    Latitude(String),
    #[error("bad longitude {0:?}")]
    Longitude(String),
}

impl LatLong {
    pub fn from_decimal_strings(lat: &str, lng: &str) -> Result<Self, KoordinatError> {
        let lat_parsed = lat
            .trim()
            .parse()
            .map_err(|_| KoordinatError::Latitude(lat.to_string()))?;
        let long_parsed = lng
            .trim()
            .parse()
            .map_err(|_| KoordinatError::Longitude(lng.to_string()))?;
        Ok(LatLong {
            lat: lat_parsed,
            long: long_parsed,
        })
    }
}

/// Parses the store's comma-joined `"lat,lng"` column.
pub fn parse_koordinat(raw: &str) -> Result<LatLong, KoordinatError> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| KoordinatError::Shape(raw.to_string()))?;
    LatLong::from_decimal_strings(lat, lng)
}

/// Inverse of [`parse_koordinat`]; this exact shape is what lands in the
/// store's koordinat column.
pub fn format_koordinat(lat: f64, long: f64) -> String {
    format!("{lat},{long}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_store_shape() {
        assert_eq!(
            parse_koordinat("-6.2,106.8").unwrap(),
            LatLong { lat: -6.2, long: 106.8 }
        );
        // tolerate stray whitespace around the components
        assert_eq!(
            parse_koordinat(" -6.2 , 106.8 ").unwrap(),
            LatLong { lat: -6.2, long: 106.8 }
        );
    }

    #[test]
    fn rejects_malformed_koordinat() {
        assert!(matches!(parse_koordinat("106.8"), Err(KoordinatError::Shape(_))));
        assert!(matches!(
            parse_koordinat("north,106.8"),
            Err(KoordinatError::Latitude(_))
        ));
        assert!(matches!(
            parse_koordinat("-6.2,east"),
            Err(KoordinatError::Longitude(_))
        ));
    }

    #[test]
    fn format_round_trips() {
        let raw = format_koordinat(-6.2, 106.8);
        assert_eq!(raw, "-6.2,106.8");
        assert_eq!(
            parse_koordinat(&raw).unwrap(),
            LatLong { lat: -6.2, long: 106.8 }
        );
    }

    #[test]
    fn query_matches_username_and_message() {
        let entry = ProoferEntry {
            username: "alice".to_string(),
            lat: -6.2,
            long: 106.8,
            message: "Hello from Jakarta".to_string(),
        };
        assert!(entry.matches_query(""));
        assert!(entry.matches_query("ALI"));
        assert!(entry.matches_query("jakarta"));
        assert!(!entry.matches_query("bob"));
    }
}
