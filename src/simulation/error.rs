//! Error types and handling
//!
//! This module contains the error type shared by the dispatch core. A full
//! elevator is not an error here; boarding reports it through
//! [`crate::elevator::BoardingOutcome`].

use thiserror::Error;

use crate::types::{FloorCollection, FloorNumber, PassengerId, PassengerStatus};

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Floor number outside `1..=floor_count`
    #[error("Invalid floor reference: floor {floor} is outside 1..={floor_count}")]
    InvalidFloorReference {
        /// The requested floor
        floor: FloorNumber,
        /// Number of floors in the building
        floor_count: u32,
    },

    /// Destination equal to the passenger's current floor
    #[error("Invalid destination for {passenger}: already on floor {floor}")]
    SameFloorDestination {
        /// The passenger being assigned
        passenger: PassengerId,
        /// The floor the passenger stands on
        floor: FloorNumber,
    },

    /// Lifecycle transition not permitted from the current status
    #[error("Illegal transition '{transition}' for {passenger} in status {status}")]
    IllegalStateTransition {
        /// The passenger being transitioned
        passenger: PassengerId,
        /// Status the passenger was in
        status: PassengerStatus,
        /// Name of the attempted transition
        transition: &'static str,
    },

    /// Identifier with no record in the registry
    #[error("Unknown passenger: {0}")]
    UnknownPassenger(PassengerId),

    /// Passenger expected in a floor collection but not found there
    #[error("{passenger} is not in the {collection} of floor {floor}")]
    NotInCollection {
        /// The passenger looked up
        passenger: PassengerId,
        /// The floor searched
        floor: FloorNumber,
        /// The collection searched
        collection: FloorCollection,
    },

    /// Cross-collection consistency check failed
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Passenger names could not be loaded
    #[error("Name source error: {0}")]
    NameSource(String),

    /// Configuration rejected at construction time
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SimulationError {
    /// Create an invariant violation error
    pub fn invariant_violation(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Create a name source error
    pub fn name_source(msg: impl Into<String>) -> Self {
        Self::NameSource(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Check if this is a recoverable error
    ///
    /// Precondition and lifecycle violations are programming errors: the
    /// offending operation is refused and the run should stop.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::InvalidFloorReference { .. } => false,
            SimulationError::SameFloorDestination { .. } => false,
            SimulationError::IllegalStateTransition { .. } => false,
            SimulationError::UnknownPassenger(_) => false,
            SimulationError::NotInCollection { .. } => false,
            SimulationError::InvariantViolation(_) => false,
            SimulationError::NameSource(_) => false,
            SimulationError::Configuration(_) => false,
            SimulationError::IoError(_) => true,
            SimulationError::SerializationError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::InvalidFloorReference { .. } => "Invalid Floor Reference",
            SimulationError::SameFloorDestination { .. } => "Invalid Floor Reference",
            SimulationError::IllegalStateTransition { .. } => "Illegal State Transition",
            SimulationError::UnknownPassenger(_) => "Registry",
            SimulationError::NotInCollection { .. } => "Registry",
            SimulationError::InvariantViolation(_) => "Invariant",
            SimulationError::NameSource(_) => "Name Source",
            SimulationError::Configuration(_) => "Configuration",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
