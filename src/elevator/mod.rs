//! Elevator dispatch
//!
//! - **Elevator**: position, direction and occupants; the SCAN sweep
//! - **BoardingOutcome** / **CapacityExceeded**: a full car is a status, not a failure
//! - **BoardingReport** / **StepReport**: what each stop did, for the driver and tests

pub mod boarding;
pub mod car;

// Re-export all public types for convenience
pub use boarding::{BoardingOutcome, BoardingReport, CapacityExceeded, StepReport};
pub use car::Elevator;
