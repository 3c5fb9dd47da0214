use crate::model::Participant;

use super::capacity::CapacityLedger;

/// Whether departure categories constrain who may ride with whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryPolicy {
    #[default]
    Ignore,
    MustMatch,
}

impl CategoryPolicy {
    pub fn admits(self, passenger: &Participant, driver: &Participant) -> bool {
        match self {
            Self::Ignore => true,
            Self::MustMatch => passenger.category == driver.category,
        }
    }
}

/// Eligibility test for a driver at the moment one passenger is processed:
/// a free seat and, under `MustMatch`, the same category.
#[derive(Debug, Clone, Copy)]
pub struct Eligibility<'a> {
    ledger: &'a CapacityLedger,
    policy: CategoryPolicy,
}

impl<'a> Eligibility<'a> {
    pub fn new(ledger: &'a CapacityLedger, policy: CategoryPolicy) -> Self {
        Self { ledger, policy }
    }

    pub fn admits(&self, passenger: &Participant, driver_index: usize, driver: &Participant) -> bool {
        self.ledger.has_seat(driver_index) && self.policy.admits(passenger, driver)
    }
}
