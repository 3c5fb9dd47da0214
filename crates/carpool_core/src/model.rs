//! Survey respondents and the labels derived from their answers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `None` unless both values are finite, latitude is within [-90, 90] and
    /// longitude within [-180, 180].
    pub fn checked(lat: f64, lng: f64) -> Option<Self> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
        (lat_ok && lng_ok).then(|| Self::new(lat, lng))
    }
}

/// Departure category derived from the free-text "when can you leave" answer.
///
/// The engine only compares categories for equality; how an answer maps to a
/// category is decided once, at ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    OnTime,
    Late,
}

impl Category {
    /// Classify a departure answer against the on-time sentinel phrase.
    ///
    /// Comparison is case-insensitive with surrounding whitespace trimmed. Every
    /// other answer, including an empty one, is `Late`.
    pub fn from_answer(answer: &str, on_time_answer: &str) -> Self {
        if answer.trim().to_lowercase() == on_time_answer.trim().to_lowercase() {
            Self::OnTime
        } else {
            Self::Late
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OnTime => "on-time",
            Self::Late => "late",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One survey respondent after geocoding.
///
/// `coordinates` is `None` when the postcode could not be resolved; such people
/// never reach the matching pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub coordinates: Option<Coordinates>,
    pub is_driver: bool,
    pub category: Option<Category>,
}

impl Person {
    pub fn new(name: impl Into<String>, coordinates: Option<Coordinates>, is_driver: bool) -> Self {
        Self {
            name: name.into(),
            coordinates,
            is_driver,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Resolved view of this person, or `None` if geocoding failed.
    pub fn participant(&self) -> Option<Participant> {
        self.coordinates.map(|position| Participant {
            name: self.name.clone(),
            position,
            category: self.category,
        })
    }
}

/// A resolved person as seen by the matching pass: either a driver or a passenger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub position: Coordinates,
    /// `None` in the base mode, where everyone shares one implicit category.
    pub category: Option<Category>,
}

impl Participant {
    pub fn new(name: impl Into<String>, position: Coordinates) -> Self {
        Self {
            name: name.into(),
            position,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_answer_is_on_time_regardless_of_case_and_padding() {
        let sentinel = "Friday after work";
        assert_eq!(Category::from_answer("friday AFTER work", sentinel), Category::OnTime);
        assert_eq!(Category::from_answer("  Friday after work \n", sentinel), Category::OnTime);
    }

    #[test]
    fn any_other_answer_is_late() {
        let sentinel = "Friday after work";
        assert_eq!(Category::from_answer("Saturday morning", sentinel), Category::Late);
        assert_eq!(Category::from_answer("Friday after work?", sentinel), Category::Late);
        assert_eq!(Category::from_answer("", sentinel), Category::Late);
    }

    #[test]
    fn unresolved_person_has_no_participant_view() {
        let person = Person::new("Ari", None, false);
        assert!(person.participant().is_none());

        let resolved = Person::new("Bo", Some(Coordinates::new(-37.8, 145.0)), true)
            .with_category(Category::Late);
        let participant = resolved.participant().expect("resolved");
        assert_eq!(participant.name, "Bo");
        assert_eq!(participant.category, Some(Category::Late));
    }

    #[test]
    fn checked_coordinates_reject_non_finite_and_out_of_range() {
        assert_eq!(
            Coordinates::checked(-37.8, 144.9),
            Some(Coordinates::new(-37.8, 144.9))
        );
        assert!(Coordinates::checked(90.0, -180.0).is_some());
        assert!(Coordinates::checked(f64::NAN, 144.9).is_none());
        assert!(Coordinates::checked(-37.8, f64::INFINITY).is_none());
        assert!(Coordinates::checked(90.5, 144.9).is_none());
        assert!(Coordinates::checked(-37.8, 999.0).is_none());
    }

    #[test]
    fn category_labels_are_kebab_case() {
        assert_eq!(Category::OnTime.to_string(), "on-time");
        assert_eq!(Category::Late.to_string(), "late");
    }
}
