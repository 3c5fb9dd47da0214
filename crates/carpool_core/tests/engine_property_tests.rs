mod support;

use std::collections::HashSet;

use carpool_core::spatial::distance_km;
use carpool_core::test_helpers::{driver_at, passenger_at};
use carpool_core::{
    AssignmentEngine, Category, MatchOutcome, Participant, PoolConfig, PoolMode,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use support::{load_by_driver, scatter, stacked};

const SEEDS: u64 = 40;
const MODES: [PoolMode; 2] = [PoolMode::Base, PoolMode::ByDepartureTime];

fn with_random_categories(people: Vec<Participant>, seed: u64) -> Vec<Participant> {
    let mut rng = StdRng::seed_from_u64(seed);
    people
        .into_iter()
        .map(|p| {
            let category = if rng.gen_bool(0.35) {
                Category::Late
            } else {
                Category::OnTime
            };
            p.with_category(category)
        })
        .collect()
}

/// (passengers, drivers, max_capacity) for one seed. Odd seeds stack people on
/// shared points to force equal distances.
fn layout(seed: u64) -> (Vec<Participant>, Vec<Participant>, u32) {
    let mut rng = StdRng::seed_from_u64(seed);
    let driver_count = rng.gen_range(1..15);
    let passenger_count = rng.gen_range(0..70);
    let max_capacity = rng.gen_range(1..5);

    let (drivers, passengers) = if seed % 2 == 1 {
        let points = rng.gen_range(1..5);
        (
            stacked("driver-", driver_count, points, seed),
            stacked("passenger-", passenger_count, points, seed + 1),
        )
    } else {
        (
            scatter("driver-", driver_count, seed),
            scatter("passenger-", passenger_count, seed + 1_000),
        )
    };

    (
        with_random_categories(passengers, seed + 2_000),
        with_random_categories(drivers, seed + 3_000),
        max_capacity,
    )
}

fn run(mode: PoolMode, max_capacity: u32, passengers: &[Participant], drivers: &[Participant]) -> MatchOutcome {
    AssignmentEngine::new(
        PoolConfig::default()
            .with_max_capacity(max_capacity)
            .with_mode(mode),
    )
    .run(passengers, drivers)
    .expect("run")
}

fn for_each_case(check: impl Fn(PoolMode, u32, &[Participant], &[Participant], &MatchOutcome)) {
    for seed in 0..SEEDS {
        let (passengers, drivers, max_capacity) = layout(seed);
        for mode in MODES {
            let outcome = run(mode, max_capacity, &passengers, &drivers);
            check(mode, max_capacity, &passengers, &drivers, &outcome);
        }
    }
}

#[test]
fn no_driver_exceeds_capacity() {
    for_each_case(|_, max_capacity, _, drivers, outcome| {
        for (driver, load) in load_by_driver(outcome) {
            assert!(load <= max_capacity as usize, "{driver} carries {load}");
        }
        assert_eq!(outcome.groups.len(), drivers.len());
        for group in &outcome.groups {
            assert!(group.passenger_count() <= max_capacity as usize);
        }
    });
}

#[test]
fn every_passenger_lands_in_exactly_one_list() {
    for_each_case(|_, _, passengers, _, outcome| {
        let assigned: HashSet<_> = outcome.assignments.iter().map(|a| &a.passenger).collect();
        let unassigned: HashSet<_> = outcome.unassigned.iter().map(|u| &u.passenger).collect();

        assert_eq!(outcome.passenger_count(), passengers.len());
        assert!(assigned.is_disjoint(&unassigned));
        for passenger in passengers {
            assert!(assigned.contains(&passenger.name) || unassigned.contains(&passenger.name));
        }
    });
}

#[test]
fn departure_mode_never_crosses_categories() {
    for_each_case(|mode, _, _, drivers, outcome| {
        if mode != PoolMode::ByDepartureTime {
            return;
        }
        for assignment in &outcome.assignments {
            let driver = drivers
                .iter()
                .find(|d| d.name == assignment.driver)
                .expect("driver exists");
            assert_eq!(assignment.category, driver.category);
        }
    });
}

/// Replays the run seat by seat: every assigned passenger went to the first of
/// the nearest eligible drivers, and every unassigned one had none eligible.
#[test]
fn each_decision_matches_the_eligible_drivers_at_that_moment() {
    for_each_case(|mode, max_capacity, passengers, drivers, outcome| {
        let policy = mode.category_policy();
        let mut seats: Vec<u32> = vec![max_capacity; drivers.len()];
        let mut assignments = outcome.assignments.iter().peekable();
        let mut unassigned = outcome.unassigned.iter().peekable();

        for passenger in passengers {
            let eligible: Vec<(usize, f64)> = drivers
                .iter()
                .enumerate()
                .filter(|(idx, driver)| seats[*idx] > 0 && policy.admits(passenger, driver))
                .map(|(idx, driver)| (idx, distance_km(passenger.position, driver.position)))
                .collect();

            if let Some(assignment) = assignments.next_if(|a| a.passenger == passenger.name) {
                let nearest_km = eligible
                    .iter()
                    .map(|(_, d)| *d)
                    .fold(f64::INFINITY, f64::min);
                let first_nearest = eligible
                    .iter()
                    .find(|(_, d)| *d == nearest_km)
                    .map(|(idx, _)| *idx)
                    .expect("an eligible driver existed");
                assert_eq!(assignment.driver, drivers[first_nearest].name);
                assert_eq!(assignment.distance_km, nearest_km);
                seats[first_nearest] -= 1;
            } else {
                let left = unassigned.next().expect("passenger recorded as unassigned");
                assert_eq!(left.passenger, passenger.name);
                assert!(
                    eligible.is_empty(),
                    "{} left unassigned with {} eligible drivers",
                    passenger.name,
                    eligible.len()
                );
            }
        }
        assert!(assignments.next().is_none());
        assert!(unassigned.next().is_none());
    });
}

#[test]
fn identical_input_gives_identical_output() {
    for seed in 0..SEEDS {
        let (passengers, drivers, max_capacity) = layout(seed);
        for mode in MODES {
            let first = run(mode, max_capacity, &passengers, &drivers);
            let second = run(mode, max_capacity, &passengers, &drivers);
            assert_eq!(format!("{first:?}"), format!("{second:?}"));
        }
    }
}

#[test]
fn stacked_drivers_always_resolve_to_the_earliest() {
    let drivers = vec![driver_at("first", 2.0), driver_at("second", 2.0), driver_at("third", 2.0)];
    let passengers: Vec<_> = (0..5).map(|i| passenger_at(&format!("p{i}"), 0.0)).collect();

    let outcome = run(PoolMode::Base, 2, &passengers, &drivers);
    let order: Vec<_> = outcome.assignments.iter().map(|a| a.driver.as_str()).collect();
    assert_eq!(order, ["first", "first", "second", "second", "third"]);
}

#[test]
fn reordering_passengers_can_change_who_is_squeezed_out() {
    let drivers = vec![driver_at("d", 0.0)];
    let passengers = vec![passenger_at("a", 1.0), passenger_at("b", 2.0)];
    let reversed: Vec<_> = passengers.iter().rev().cloned().collect();

    let forward = run(PoolMode::Base, 1, &passengers, &drivers);
    let backward = run(PoolMode::Base, 1, &reversed, &drivers);

    assert_eq!(forward.assignments[0].passenger, "a");
    assert_eq!(backward.assignments[0].passenger, "b");
}
