//! Destinations known to the forecaster

use crate::types::GpsCoordinates;

/// A named destination with its forecast coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    pub key: &'static str,
    pub name: &'static str,
    /// ISO 3166-1 alpha-2
    pub country_code: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Destination {
    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.latitude, self.longitude)
    }
}

pub const DESTINATIONS: &[Destination] = &[
    Destination {
        key: "kingston",
        name: "Kingston, Jamaica",
        country_code: "JM",
        latitude: 17.97,
        longitude: -76.79,
    },
    Destination {
        key: "montego_bay",
        name: "Montego Bay, Jamaica",
        country_code: "JM",
        latitude: 18.47,
        longitude: -77.91,
    },
    Destination {
        key: "bridgetown",
        name: "Bridgetown, Barbados",
        country_code: "BB",
        latitude: 13.1,
        longitude: -59.61,
    },
    Destination {
        key: "nassau",
        name: "Nassau, Bahamas",
        country_code: "BS",
        latitude: 25.04,
        longitude: -77.35,
    },
    Destination {
        key: "port_of_spain",
        name: "Port of Spain, Trinidad & Tobago",
        country_code: "TT",
        latitude: 10.65,
        longitude: -61.51,
    },
];

/// Look up a destination by key, ignoring case
pub fn find_destination(key: &str) -> Option<&'static Destination> {
    DESTINATIONS
        .iter()
        .find(|d| d.key.eq_ignore_ascii_case(key.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_destination_is_case_insensitive() {
        let d = find_destination("Montego_Bay").unwrap();
        assert_eq!(d.name, "Montego Bay, Jamaica");
        assert_eq!(d.country_code, "JM");
        assert!(find_destination(" NASSAU ").is_some());
    }

    #[test]
    fn test_unknown_destination() {
        assert!(find_destination("atlantis").is_none());
        assert!(find_destination("").is_none());
    }

    #[test]
    fn test_destination_coordinates_are_valid() {
        for d in DESTINATIONS {
            assert!(crate::validation::validate_coordinates(&d.coordinates()).is_ok());
        }
    }
}
