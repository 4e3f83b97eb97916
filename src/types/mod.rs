//! Core types and identifiers for the elevator simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: arena indices for passengers, UUIDs for runs
//! - **Enums**: direction, floor collections, and passenger status
//! - **Layout**: the building's floor range, passed explicitly to the elevator
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use scan_elevator_sim::types::*;
//!
//! let range = FloorRange::new(5).unwrap();
//! assert_eq!(range.top(), 5);
//! assert_eq!(Direction::Up.queue(), FloorCollection::UpQueue);
//!
//! let config = SimulationConfig {
//!     floor_count: 8,
//!     elevator_capacity: 2,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;
pub mod layout;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
pub use layout::*;
