//! Passenger modeling and lifecycle management
//!
//! # Overview
//!
//! - **Passenger**: lifecycle state machine (Resident → Waiting → InTransit → Resident)
//! - **PassengerRegistry**: arena owning every passenger record
//! - **NameSource** / **PassengerGenerator**: opaque name labels for new arrivals
//!
//! # Usage Example
//!
//! ```rust
//! use scan_elevator_sim::passenger::*;
//! use scan_elevator_sim::types::Direction;
//!
//! let mut registry = PassengerRegistry::new();
//! let id = registry.register("Ada");
//!
//! let ada = registry.get_mut(id).unwrap();
//! assert_eq!(ada.assign_destination(3).unwrap(), Direction::Up);
//! ada.board().unwrap();
//! assert_eq!(ada.arrive().unwrap(), 3);
//! ```

pub mod generator;
#[allow(clippy::module_inception)]
pub mod passenger;
pub mod registry;

// Re-export all public types for convenience
pub use generator::{NameSource, PassengerGenerator};
pub use passenger::{Passenger, PassengerState};
pub use registry::PassengerRegistry;
