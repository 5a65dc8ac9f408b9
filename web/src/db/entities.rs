use shared_types::{parse_koordinat, ProoferEntry};

/// Raw row of the "Location" table. Column names follow the store schema:
/// koordinat is the comma-joined "lat,lng" pair, pesan is the message.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    pub username: String,
    pub koordinat: String,
    pub pesan: String,
}

impl LocationRow {
    /// A row with an unparseable koordinat yields None and is skipped by the
    /// caller, leaving the rest of the fetch intact.
    pub fn into_entry(self) -> Option<ProoferEntry> {
        let at = parse_koordinat(&self.koordinat).ok()?;
        Some(ProoferEntry {
            username: self.username,
            lat: at.lat,
            long: at.long,
            message: self.pesan,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_splits_koordinat_into_coordinates() {
        let row = LocationRow {
            username: "alice".to_string(),
            koordinat: "-6.2,106.8".to_string(),
            pesan: "Hello".to_string(),
        };
        let entry = row.into_entry().unwrap();
        assert_eq!(entry.username, "alice");
        assert_eq!(entry.lat, -6.2);
        assert_eq!(entry.long, 106.8);
        assert_eq!(entry.message, "Hello");
    }

    #[test]
    fn malformed_koordinat_drops_the_row() {
        let row = LocationRow {
            username: "bob".to_string(),
            koordinat: "somewhere".to_string(),
            pesan: String::new(),
        };
        assert!(row.into_entry().is_none());
    }
}
