//! In-memory collection of resolved survey respondents.

use log::{info, warn};

use crate::model::{Participant, Person};

/// Resolved people split by role, each side kept in survey order.
///
/// People without coordinates are dropped on insertion and remembered by name so
/// callers can tell "never matched" apart from "resolved but unassigned".
#[derive(Debug, Clone, Default)]
pub struct PersonRegistry {
    drivers: Vec<Participant>,
    passengers: Vec<Participant>,
    unresolved: Vec<String>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people<I>(people: I) -> Self
    where
        I: IntoIterator<Item = Person>,
    {
        let mut registry = Self::new();
        for person in people {
            registry.insert(person);
        }
        info!(
            "registry holds {} drivers and {} passengers ({} unresolved dropped)",
            registry.drivers.len(),
            registry.passengers.len(),
            registry.unresolved.len()
        );
        registry
    }

    /// Add a person. Returns `false` if they were dropped for missing coordinates.
    pub fn insert(&mut self, person: Person) -> bool {
        match person.participant() {
            Some(participant) if person.is_driver => self.drivers.push(participant),
            Some(participant) => self.passengers.push(participant),
            None => {
                warn!("dropping {}: no coordinates", person.name);
                self.unresolved.push(person.name);
                return false;
            }
        }
        true
    }

    pub fn drivers(&self) -> &[Participant] {
        &self.drivers
    }

    pub fn passengers(&self) -> &[Participant] {
        &self.passengers
    }

    /// Names of people dropped because their location never resolved.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn len(&self) -> usize {
        self.drivers.len() + self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
