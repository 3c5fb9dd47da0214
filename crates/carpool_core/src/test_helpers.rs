//! Test helpers for common fixtures.
//!
//! Positions are laid out around a fixed origin so distances are easy to reason
//! about: moving due north by `km` changes nothing but latitude.

use crate::model::{Category, Coordinates, Participant};

/// Kilometres per degree of latitude on the 6371 km sphere.
pub const KM_PER_DEGREE_LAT: f64 = 111.194_926_644_558_73;

/// Fixed origin used across tests (Melbourne CBD).
pub fn test_origin() -> Coordinates {
    Coordinates::new(-37.8136, 144.9631)
}

/// A point `km` due north of `origin` (negative values go south).
pub fn north_of(origin: Coordinates, km: f64) -> Coordinates {
    Coordinates::new(origin.lat + km / KM_PER_DEGREE_LAT, origin.lng)
}

/// A driver `km` north of the test origin.
pub fn driver_at(name: &str, km: f64) -> Participant {
    Participant::new(name, north_of(test_origin(), km))
}

/// A passenger `km` north of the test origin.
pub fn passenger_at(name: &str, km: f64) -> Participant {
    Participant::new(name, north_of(test_origin(), km))
}

/// Same as [`driver_at`] with a departure category.
pub fn categorized_driver(name: &str, km: f64, category: Category) -> Participant {
    driver_at(name, km).with_category(category)
}

/// Same as [`passenger_at`] with a departure category.
pub fn categorized_passenger(name: &str, km: f64, category: Category) -> Participant {
    passenger_at(name, km).with_category(category)
}
