#![allow(dead_code)]

use std::collections::HashMap;

use carpool_core::test_helpers::test_origin;
use carpool_core::{Coordinates, MatchOutcome, Participant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Passengers per driver name, counted from the assignment list.
pub fn load_by_driver(outcome: &MatchOutcome) -> HashMap<String, usize> {
    let mut load = HashMap::new();
    for assignment in &outcome.assignments {
        *load.entry(assignment.driver.clone()).or_insert(0) += 1;
    }
    load
}

pub fn assigned_names(outcome: &MatchOutcome) -> Vec<&str> {
    outcome.assignments.iter().map(|a| a.passenger.as_str()).collect()
}

pub fn unassigned_names(outcome: &MatchOutcome) -> Vec<&str> {
    outcome.unassigned.iter().map(|u| u.passenger.as_str()).collect()
}

/// A seeded scatter of people within ~0.3 degrees of the test origin.
pub fn scatter(prefix: &str, count: usize, seed: u64) -> Vec<Participant> {
    let mut rng = StdRng::seed_from_u64(seed);
    let origin = test_origin();
    (0..count)
        .map(|i| {
            let lat = origin.lat + rng.gen_range(-0.3..0.3);
            let lng = origin.lng + rng.gen_range(-0.3..0.3);
            Participant::new(format!("{prefix}{i}"), Coordinates::new(lat, lng))
        })
        .collect()
}

/// People placed on a handful of shared points, so many pairs are exactly equidistant.
pub fn stacked(prefix: &str, count: usize, points: usize, seed: u64) -> Vec<Participant> {
    let anchors = scatter("anchor", points.max(1), seed);
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    (0..count)
        .map(|i| {
            let anchor = &anchors[rng.gen_range(0..anchors.len())];
            Participant::new(format!("{prefix}{i}"), anchor.position)
        })
        .collect()
}
