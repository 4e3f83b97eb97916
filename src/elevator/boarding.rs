//! Boarding outcomes and per-step reports

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Direction, FloorNumber, PassengerId};

/// Boarding refused because every seat is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Elevator is full! ({capacity} of {capacity} places taken)")]
pub struct CapacityExceeded {
    /// Capacity of the elevator
    pub capacity: usize,
}

/// Result of one boarding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardingOutcome {
    /// The passenger entered the elevator
    Boarded(PassengerId),
    /// The passenger stays queued
    Rejected(CapacityExceeded),
}

/// What happened during one boarding stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardingReport {
    /// Floor where boarding took place
    pub floor: FloorNumber,
    /// Queue direction that was served
    pub direction: Direction,
    /// Passengers admitted, in boarding order
    pub boarded: Vec<PassengerId>,
    /// Set when boarding ended because the elevator was full
    pub rejection: Option<CapacityExceeded>,
    /// Passengers still queued in the served direction afterwards
    pub left_waiting: usize,
}

impl BoardingReport {
    /// Whether this stop hit the capacity limit
    pub fn capacity_exceeded(&self) -> bool {
        self.rejection.is_some()
    }
}

/// What happened during one `move` step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Floor the elevator left
    pub from_floor: FloorNumber,
    /// Floor the elevator arrived at
    pub to_floor: FloorNumber,
    /// Direction after servicing the new floor
    pub direction: Direction,
    /// Passengers who stepped out here
    pub alighted: Vec<PassengerId>,
    /// Boarding at the new floor
    pub boarding: BoardingReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message() {
        let err = CapacityExceeded { capacity: 2 };
        assert_eq!(err.to_string(), "Elevator is full! (2 of 2 places taken)");
    }

    #[test]
    fn test_report_flags() {
        let mut report = BoardingReport {
            floor: 1,
            direction: Direction::Up,
            boarded: vec![PassengerId(0)],
            rejection: None,
            left_waiting: 0,
        };
        assert!(!report.capacity_exceeded());

        report.rejection = Some(CapacityExceeded { capacity: 1 });
        assert!(report.capacity_exceeded());
    }
}
