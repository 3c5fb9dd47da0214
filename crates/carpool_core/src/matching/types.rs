use serde::Serialize;

use crate::model::Category;
use crate::spatial::round_to_tenth;

/// Literal shown in place of an empty passenger list.
pub const NO_PASSENGERS: &str = "None";

/// The driver picked for one passenger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverChoice {
    pub driver_index: usize,
    pub distance_km: f64,
}

/// A passenger placed with a driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub passenger: String,
    pub driver: String,
    pub category: Option<Category>,
    /// Unrounded great-circle distance.
    pub distance_km: f64,
}

impl Assignment {
    /// Distance rounded to one decimal place, as reported.
    pub fn rounded_distance_km(&self) -> f64 {
        round_to_tenth(self.distance_km)
    }
}

/// A passenger for whom no eligible driver existed when they were processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unassigned {
    pub passenger: String,
    pub category: Option<Category>,
}

/// One driver and the passengers placed with them, in assignment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedResult {
    pub driver: String,
    pub category: Option<Category>,
    pub passengers: Vec<String>,
}

impl GroupedResult {
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// Comma-joined passenger names, or `"None"` for an empty car.
    pub fn passengers_label(&self) -> String {
        if self.passengers.is_empty() {
            NO_PASSENGERS.to_string()
        } else {
            self.passengers.join(", ")
        }
    }
}

/// Everything one matching pass produces.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MatchOutcome {
    /// In passenger-processing order.
    pub assignments: Vec<Assignment>,
    /// In passenger-processing order.
    pub unassigned: Vec<Unassigned>,
    /// One entry per driver, in driver order, including empty cars.
    pub groups: Vec<GroupedResult>,
}

impl MatchOutcome {
    pub fn total_distance_km(&self) -> f64 {
        self.assignments.iter().map(|a| a.distance_km).sum()
    }

    pub fn passenger_count(&self) -> usize {
        self.assignments.len() + self.unassigned.len()
    }

    pub fn has_unassigned(&self) -> bool {
        !self.unassigned.is_empty()
    }
}
