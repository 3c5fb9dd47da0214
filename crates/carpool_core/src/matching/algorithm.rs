use crate::model::Participant;

use super::policy::Eligibility;
use super::types::DriverChoice;

/// Trait for strategies that pick a driver for one passenger.
pub trait MatchingAlgorithm: Send + Sync {
    /// Choose a driver for `passenger` among `drivers`, considering only those
    /// `eligibility` admits. Returns the driver's index and distance, or `None`
    /// if no driver is eligible.
    fn select_driver(
        &self,
        passenger: &Participant,
        drivers: &[Participant],
        eligibility: &Eligibility<'_>,
    ) -> Option<DriverChoice>;
}
