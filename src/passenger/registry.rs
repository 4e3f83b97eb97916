//! Passenger registry
//!
//! The registry is the arena that owns every canonical passenger record.
//! Floors and the elevator store [`PassengerId`]s into it.

use serde::{Deserialize, Serialize};

use crate::passenger::Passenger;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{PassengerId, PassengerStatus};

/// Arena of passenger records indexed by [`PassengerId`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassengerRegistry {
    passengers: Vec<Passenger>,
}

impl PassengerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ground-floor resident record and return its identifier
    pub fn register(&mut self, name: impl Into<String>) -> PassengerId {
        let id = PassengerId(self.passengers.len());
        self.passengers.push(Passenger::new(id, name));
        id
    }

    /// Get a passenger by ID
    pub fn get(&self, id: PassengerId) -> SimulationResult<&Passenger> {
        self.passengers.get(id.index()).ok_or(SimulationError::UnknownPassenger(id))
    }

    /// Get a mutable reference to a passenger by ID
    pub fn get_mut(&mut self, id: PassengerId) -> SimulationResult<&mut Passenger> {
        self.passengers.get_mut(id.index()).ok_or(SimulationError::UnknownPassenger(id))
    }

    /// Whether the registry holds a record for `id`
    pub fn contains(&self, id: PassengerId) -> bool {
        id.index() < self.passengers.len()
    }

    /// Number of registered passengers
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    /// Whether no passenger has been registered
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Iterate all passengers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter()
    }

    /// Count passengers currently in `status`
    pub fn count_by_status(&self, status: PassengerStatus) -> usize {
        self.passengers.iter().filter(|p| p.status() == status).count()
    }

    /// Labels for a list of passengers, in list order
    pub fn labels(&self, ids: &[PassengerId]) -> SimulationResult<Vec<String>> {
        ids.iter().map(|&id| self.get(id).map(Passenger::label)).collect()
    }
}
