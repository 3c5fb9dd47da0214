//! Core of the carpool pooling tool: assigns survey passengers to drivers.
//!
//! The crate owns the data model and the matching pass. Reading surveys,
//! resolving postcodes and writing reports live in `carpool_io`.
//!
//! # Architecture
//!
//! - [`model`]: people, coordinates and departure categories
//! - [`registry`]: resolved people split into drivers and passengers
//! - [`spatial`]: great-circle distance between coordinates
//! - [`matching`]: the `MatchingAlgorithm` seam, capacity ledger and [`AssignmentEngine`]
//! - [`config`]: run configuration (seat capacity, category-aware mode)
//! - [`error`]: the error type shared by the crate
//!
//! # Quick Start
//!
//! ```
//! use carpool_core::{AssignmentEngine, Coordinates, Participant, PoolConfig};
//!
//! let drivers = vec![Participant::new("Dana", Coordinates::new(-37.81, 144.96))];
//! let passengers = vec![Participant::new("Pat", Coordinates::new(-37.85, 144.99))];
//!
//! let engine = AssignmentEngine::new(PoolConfig::default());
//! let outcome = engine.run(&passengers, &drivers).unwrap();
//! assert_eq!(outcome.assignments[0].driver, "Dana");
//! ```

pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod registry;
pub mod spatial;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use config::{PoolConfig, PoolMode, DEFAULT_MAX_CAPACITY};
pub use error::CarpoolError;
pub use matching::{
    AssignmentEngine, Assignment, CapacityLedger, CategoryPolicy, DriverChoice, GroupedResult,
    MatchOutcome, MatchingAlgorithm, NearestEligibleDriver, Unassigned,
};
pub use model::{Category, Coordinates, Participant, Person};
pub use registry::PersonRegistry;
