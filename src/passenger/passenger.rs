//! Core passenger struct and lifecycle transitions
//!
//! A passenger cycles Resident → Waiting → InTransit → Resident. Each state
//! carries exactly the floor data that is defined in it, so an undefined floor
//! is `None` rather than a sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{Direction, FloorNumber, PassengerId, PassengerStatus, GROUND_FLOOR};

/// Where a passenger is in its lifecycle, with the floors defined in that state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassengerState {
    /// Stationed on `floor`
    Resident {
        /// Floor the passenger stands on
        floor: FloorNumber,
    },
    /// Queued on `floor` for a trip to `destination`
    Waiting {
        /// Floor the passenger is queued on
        floor: FloorNumber,
        /// Committed destination
        destination: FloorNumber,
    },
    /// Riding the elevator towards `destination`
    InTransit {
        /// Floor where the passenger will alight
        destination: FloorNumber,
    },
}

/// Represents a person riding the elevator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    /// Registry identifier
    pub id: PassengerId,
    /// Opaque display label
    pub name: String,
    state: PassengerState,
}

impl Passenger {
    /// Create a passenger entering the building at the ground floor
    pub fn new(id: PassengerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), state: PassengerState::Resident { floor: GROUND_FLOOR } }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PassengerState {
        self.state
    }

    /// Current lifecycle status
    pub fn status(&self) -> PassengerStatus {
        match self.state {
            PassengerState::Resident { .. } => PassengerStatus::Resident,
            PassengerState::Waiting { .. } => PassengerStatus::Waiting,
            PassengerState::InTransit { .. } => PassengerStatus::InTransit,
        }
    }

    /// Floor the passenger is on, `None` while riding
    pub fn current_floor(&self) -> Option<FloorNumber> {
        match self.state {
            PassengerState::Resident { floor } | PassengerState::Waiting { floor, .. } => {
                Some(floor)
            }
            PassengerState::InTransit { .. } => None,
        }
    }

    /// Committed destination, `None` while resident
    pub fn destination_floor(&self) -> Option<FloorNumber> {
        match self.state {
            PassengerState::Resident { .. } => None,
            PassengerState::Waiting { destination, .. }
            | PassengerState::InTransit { destination } => Some(destination),
        }
    }

    /// Resident → Waiting. Returns the direction of the requested trip.
    pub fn assign_destination(&mut self, destination: FloorNumber) -> SimulationResult<Direction> {
        let PassengerState::Resident { floor } = self.state else {
            return Err(self.illegal("assign_destination"));
        };

        if destination == floor {
            return Err(SimulationError::SameFloorDestination { passenger: self.id, floor });
        }

        self.state = PassengerState::Waiting { floor, destination };
        Ok(Direction::towards(floor, destination))
    }

    /// Waiting → InTransit
    pub fn board(&mut self) -> SimulationResult<()> {
        let PassengerState::Waiting { destination, .. } = self.state else {
            return Err(self.illegal("board"));
        };

        self.state = PassengerState::InTransit { destination };
        Ok(())
    }

    /// InTransit → Resident at the destination. Returns the arrival floor.
    pub fn arrive(&mut self) -> SimulationResult<FloorNumber> {
        let PassengerState::InTransit { destination } = self.state else {
            return Err(self.illegal("arrive"));
        };

        self.state = PassengerState::Resident { floor: destination };
        Ok(destination)
    }

    /// Compact label used by the floor renderer, `0` marking an undefined floor
    pub fn label(&self) -> String {
        format!(
            "{}[c:{}, d:{}]",
            self.name,
            self.current_floor().unwrap_or(0),
            self.destination_floor().unwrap_or(0)
        )
    }

    fn illegal(&self, transition: &'static str) -> SimulationError {
        SimulationError::IllegalStateTransition {
            passenger: self.id,
            status: self.status(),
            transition,
        }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.id, self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Passenger {
        Passenger::new(PassengerId(0), "Ada")
    }

    #[test]
    fn test_new_passenger_is_ground_floor_resident() {
        let p = fresh();
        assert_eq!(p.status(), PassengerStatus::Resident);
        assert_eq!(p.current_floor(), Some(1));
        assert_eq!(p.destination_floor(), None);
        assert_eq!(p.label(), "Ada[c:1, d:0]");
    }

    #[test]
    fn test_full_cycle() {
        let mut p = fresh();

        assert_eq!(p.assign_destination(4).unwrap(), Direction::Up);
        assert_eq!(p.state(), PassengerState::Waiting { floor: 1, destination: 4 });

        p.board().unwrap();
        assert_eq!(p.current_floor(), None);
        assert_eq!(p.destination_floor(), Some(4));
        assert_eq!(p.label(), "Ada[c:0, d:4]");

        assert_eq!(p.arrive().unwrap(), 4);
        assert_eq!(p.state(), PassengerState::Resident { floor: 4 });
        assert_eq!(p.destination_floor(), None);

        assert_eq!(p.assign_destination(2).unwrap(), Direction::Down);
    }

    #[test]
    fn test_same_floor_destination_refused() {
        let mut p = fresh();
        match p.assign_destination(1) {
            Err(SimulationError::SameFloorDestination { floor, .. }) => assert_eq!(floor, 1),
            other => panic!("Expected SameFloorDestination, got {:?}", other),
        }
        assert_eq!(p.status(), PassengerStatus::Resident);
    }

    #[test]
    fn test_illegal_transitions() {
        let mut p = fresh();
        assert!(matches!(
            p.board(),
            Err(SimulationError::IllegalStateTransition { transition: "board", .. })
        ));
        assert!(matches!(
            p.arrive(),
            Err(SimulationError::IllegalStateTransition { transition: "arrive", .. })
        ));

        p.assign_destination(3).unwrap();
        assert!(matches!(
            p.assign_destination(2),
            Err(SimulationError::IllegalStateTransition {
                status: PassengerStatus::Waiting,
                ..
            })
        ));

        p.board().unwrap();
        assert!(p.board().is_err());
        assert!(p.assign_destination(2).is_err());
    }
}
