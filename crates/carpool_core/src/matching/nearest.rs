use rayon::prelude::*;

use crate::model::Participant;
use crate::spatial::distance_km;

use super::algorithm::MatchingAlgorithm;
use super::policy::Eligibility;
use super::types::DriverChoice;

/// Driver count from which the distance row is computed in parallel.
/// Below this the rayon overhead outweighs the work.
pub const PARALLEL_SCAN_MIN_DRIVERS: usize = 256;

/// Greedy nearest-eligible-driver selection.
///
/// Scans drivers in sequence order and keeps the first driver achieving the
/// smallest distance. Comparison is strict, so an equally close driver later in
/// the sequence never displaces an earlier one.
///
/// # Performance
///
/// O(D) distance evaluations per passenger. For large driver sets the distances
/// are computed with rayon, but selection still walks the drivers in order.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestEligibleDriver;

impl NearestEligibleDriver {
    fn first_strict_minimum(candidates: impl Iterator<Item = (usize, f64)>) -> Option<DriverChoice> {
        let mut best: Option<DriverChoice> = None;
        for (driver_index, distance_km) in candidates {
            let best_km = best.map_or(f64::INFINITY, |choice| choice.distance_km);
            if distance_km < best_km {
                best = Some(DriverChoice {
                    driver_index,
                    distance_km,
                });
            }
        }
        best
    }
}

impl MatchingAlgorithm for NearestEligibleDriver {
    fn select_driver(
        &self,
        passenger: &Participant,
        drivers: &[Participant],
        eligibility: &Eligibility<'_>,
    ) -> Option<DriverChoice> {
        if drivers.len() >= PARALLEL_SCAN_MIN_DRIVERS {
            let distances: Vec<f64> = drivers
                .par_iter()
                .map(|driver| distance_km(passenger.position, driver.position))
                .collect();
            return Self::first_strict_minimum(
                drivers
                    .iter()
                    .zip(distances)
                    .enumerate()
                    .filter(|(idx, (driver, _))| eligibility.admits(passenger, *idx, driver))
                    .map(|(idx, (_, dist))| (idx, dist)),
            );
        }

        Self::first_strict_minimum(
            drivers
                .iter()
                .enumerate()
                .filter(|(idx, driver)| eligibility.admits(passenger, *idx, driver))
                .map(|(idx, driver)| (idx, distance_km(passenger.position, driver.position))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{CapacityLedger, CategoryPolicy};
    use crate::model::{Category, Coordinates};

    fn at(name: &str, lat: f64, lng: f64) -> Participant {
        Participant::new(name, Coordinates::new(lat, lng))
    }

    #[test]
    fn selects_closer_driver_regardless_of_order() {
        let passenger = at("p", -37.80, 144.96);
        let drivers = vec![at("far", -38.20, 144.96), at("near", -37.81, 144.96)];
        let ledger = CapacityLedger::new(drivers.len(), 4);
        let eligibility = Eligibility::new(&ledger, CategoryPolicy::Ignore);

        let choice = NearestEligibleDriver
            .select_driver(&passenger, &drivers, &eligibility)
            .expect("a driver");
        assert_eq!(choice.driver_index, 1);
    }

    #[test]
    fn equidistant_drivers_resolve_to_the_first() {
        let passenger = at("p", 0.0, 0.0);
        // Mirror images across the passenger are exactly equidistant.
        let drivers = vec![at("east", 0.0, 0.1), at("west", 0.0, -0.1)];
        let ledger = CapacityLedger::new(drivers.len(), 1);
        let eligibility = Eligibility::new(&ledger, CategoryPolicy::Ignore);

        let choice = NearestEligibleDriver
            .select_driver(&passenger, &drivers, &eligibility)
            .expect("a driver");
        assert_eq!(choice.driver_index, 0);
    }

    #[test]
    fn skips_full_and_mismatched_drivers() {
        let passenger = at("p", -37.80, 144.96).with_category(Category::Late);
        let drivers = vec![
            at("full", -37.80, 144.96).with_category(Category::Late),
            at("on-time", -37.80, 144.97).with_category(Category::OnTime),
            at("late", -37.90, 144.96).with_category(Category::Late),
        ];
        let mut ledger = CapacityLedger::new(drivers.len(), 1);
        ledger.take_seat(0);
        let eligibility = Eligibility::new(&ledger, CategoryPolicy::MustMatch);

        let choice = NearestEligibleDriver
            .select_driver(&passenger, &drivers, &eligibility)
            .expect("a driver");
        assert_eq!(choice.driver_index, 2);
    }

    #[test]
    fn no_eligible_driver_yields_none() {
        let passenger = at("p", 0.0, 0.0).with_category(Category::Late);
        let drivers = vec![at("d", 0.0, 0.0).with_category(Category::OnTime)];
        let ledger = CapacityLedger::new(drivers.len(), 4);
        let eligibility = Eligibility::new(&ledger, CategoryPolicy::MustMatch);

        assert!(NearestEligibleDriver
            .select_driver(&passenger, &drivers, &eligibility)
            .is_none());
    }

    #[test]
    fn parallel_scan_matches_sequential_choice() {
        let passenger = at("p", -37.80, 144.96);
        let drivers: Vec<_> = (0..PARALLEL_SCAN_MIN_DRIVERS + 10)
            .map(|i| at(&format!("d{i}"), -37.0 - (i % 17) as f64 * 0.05, 144.0 + (i % 5) as f64 * 0.2))
            .collect();
        let ledger = CapacityLedger::new(drivers.len(), 1);
        let eligibility = Eligibility::new(&ledger, CategoryPolicy::Ignore);

        let parallel = NearestEligibleDriver
            .select_driver(&passenger, &drivers, &eligibility)
            .expect("a driver");
        let sequential = NearestEligibleDriver
            .select_driver(&passenger, &drivers[..PARALLEL_SCAN_MIN_DRIVERS - 1], &eligibility)
            .expect("a driver");

        // Positions repeat every 85 drivers, so the first minimum lies in both slices.
        assert_eq!(parallel.driver_index, sequential.driver_index);
        assert_eq!(parallel.distance_km, sequential.distance_km);
    }
}
