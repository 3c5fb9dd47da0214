//! The greedy assignment pass.
//!
//! Passengers are processed strictly in input order. Each one takes a seat with
//! the nearest eligible driver at that moment, or is recorded as unassigned.
//! There is no backtracking: seats consumed by earlier passengers are never
//! handed back, so reordering the input can change the result.

use log::{debug, info, warn};

use crate::config::PoolConfig;
use crate::error::CarpoolError;
use crate::model::Participant;
use crate::registry::PersonRegistry;

use super::algorithm::MatchingAlgorithm;
use super::capacity::CapacityLedger;
use super::grouping::group_by_driver;
use super::nearest::NearestEligibleDriver;
use super::policy::Eligibility;
use super::types::{Assignment, MatchOutcome, Unassigned};

/// Runs one capacity-constrained matching pass.
#[derive(Debug, Clone)]
pub struct AssignmentEngine<A: MatchingAlgorithm = NearestEligibleDriver> {
    config: PoolConfig,
    algorithm: A,
}

impl AssignmentEngine<NearestEligibleDriver> {
    pub fn new(config: PoolConfig) -> Self {
        Self::with_algorithm(config, NearestEligibleDriver)
    }
}

impl<A: MatchingAlgorithm> AssignmentEngine<A> {
    pub fn with_algorithm(config: PoolConfig, algorithm: A) -> Self {
        Self { config, algorithm }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Match the registry's passengers against its drivers.
    pub fn run_registry(&self, registry: &PersonRegistry) -> Result<MatchOutcome, CarpoolError> {
        self.run(registry.passengers(), registry.drivers())
    }

    /// Match `passengers` to `drivers`, both taken in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CarpoolError::NoDrivers`] before any scanning if `drivers` is
    /// empty, and [`CarpoolError::InvalidCapacity`] for a zero seat capacity.
    /// Running out of seats is not an error: those passengers land in
    /// [`MatchOutcome::unassigned`].
    pub fn run(
        &self,
        passengers: &[Participant],
        drivers: &[Participant],
    ) -> Result<MatchOutcome, CarpoolError> {
        if drivers.is_empty() {
            return Err(CarpoolError::NoDrivers);
        }
        self.config.validate()?;

        let policy = self.config.mode.category_policy();
        let mut ledger = CapacityLedger::new(drivers.len(), self.config.max_capacity);
        let mut assignments = Vec::with_capacity(passengers.len());
        let mut unassigned = Vec::new();

        for passenger in passengers {
            let choice = {
                let eligibility = Eligibility::new(&ledger, policy);
                self.algorithm.select_driver(passenger, drivers, &eligibility)
            };

            let choice = match choice {
                Some(choice) if ledger.take_seat(choice.driver_index) => Some(choice),
                Some(choice) => {
                    warn!(
                        "matching picked driver #{} with no free seat for {}; leaving them unassigned",
                        choice.driver_index, passenger.name
                    );
                    None
                }
                None => None,
            };

            match choice {
                Some(choice) => {
                    let driver = &drivers[choice.driver_index];
                    debug!(
                        "{} -> {} ({:.1} km, {} seats left)",
                        passenger.name,
                        driver.name,
                        choice.distance_km,
                        ledger.remaining(choice.driver_index)
                    );
                    assignments.push(Assignment {
                        passenger: passenger.name.clone(),
                        driver: driver.name.clone(),
                        category: passenger.category,
                        distance_km: choice.distance_km,
                    });
                }
                None => {
                    debug!("{} left unassigned", passenger.name);
                    unassigned.push(Unassigned {
                        passenger: passenger.name.clone(),
                        category: passenger.category,
                    });
                }
            }
        }

        info!(
            "assigned {} of {} passengers to {} drivers ({} unassigned)",
            assignments.len(),
            passengers.len(),
            drivers.len(),
            unassigned.len()
        );

        let groups = group_by_driver(drivers, &assignments);
        Ok(MatchOutcome {
            assignments,
            unassigned,
            groups,
        })
    }
}
