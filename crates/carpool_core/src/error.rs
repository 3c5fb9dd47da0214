/// Errors raised by the matching core.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CarpoolError {
    /// The driver set was empty after ingestion; nothing can be assigned.
    #[error("no drivers available")]
    NoDrivers,

    /// Seat capacity must allow at least one passenger per driver.
    #[error("invalid max capacity {0}: every driver needs at least one seat")]
    InvalidCapacity(u32),
}
