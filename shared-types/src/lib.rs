pub mod city;
pub mod entry;
pub mod geometry;

pub use city::{cities, resolve_city, suggest_cities, CityRecord, MAX_SUGGESTIONS};
pub use entry::{format_koordinat, parse_koordinat, KoordinatError, ProoferEntry};
pub use geometry::{connecting_segments, unique_location_count, LatLong, Segment};
