pub mod algorithm;
pub mod capacity;
pub mod engine;
pub mod grouping;
pub mod nearest;
pub mod policy;
pub mod types;

pub use algorithm::MatchingAlgorithm;
pub use capacity::CapacityLedger;
pub use engine::AssignmentEngine;
pub use grouping::group_by_driver;
pub use nearest::NearestEligibleDriver;
pub use policy::{CategoryPolicy, Eligibility};
pub use types::{Assignment, DriverChoice, GroupedResult, MatchOutcome, Unassigned};
