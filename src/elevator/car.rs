//! Elevator car and its SCAN state machine
//!
//! The car sweeps one floor per step, reversing only at the bottom and top
//! floors. At each stop it first lets out passengers whose destination is the
//! new floor, then boards the queue matching its direction until the queue is
//! empty or the car is full.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::elevator::{BoardingOutcome, BoardingReport, CapacityExceeded, StepReport};
use crate::facility::floor::{floor_mut, Floor};
use crate::passenger::PassengerRegistry;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{Direction, FloorNumber, FloorRange, PassengerId, GROUND_FLOOR};

/// The single elevator of a building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elevator {
    layout: FloorRange,
    capacity: usize,
    current_floor: FloorNumber,
    direction: Direction,
    occupants: Vec<PassengerId>,
}

impl Elevator {
    /// Create an empty elevator parked at the ground floor, facing up
    pub fn new(layout: FloorRange, capacity: usize) -> Self {
        Self {
            layout,
            capacity,
            current_floor: GROUND_FLOOR,
            direction: Direction::Up,
            occupants: Vec::new(),
        }
    }

    /// Floor the car is at
    pub fn current_floor(&self) -> FloorNumber {
        self.current_floor
    }

    /// Direction of travel
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Maximum number of occupants
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Passengers on board, in boarding order
    pub fn occupants(&self) -> &[PassengerId] {
        &self.occupants
    }

    /// Number of passengers on board
    pub fn occupancy(&self) -> usize {
        self.occupants.len()
    }

    /// Whether no further passenger can board
    pub fn is_full(&self) -> bool {
        self.occupants.len() >= self.capacity
    }

    /// Whether `id` is on board
    pub fn carries(&self, id: PassengerId) -> bool {
        self.occupants.contains(&id)
    }

    /// Direction after applying the boundary rule at the current floor
    pub fn adjusted_direction(&self) -> Direction {
        if self.current_floor == self.layout.top() {
            Direction::Down
        } else if self.current_floor == self.layout.bottom() {
            Direction::Up
        } else {
            self.direction
        }
    }

    /// Travel one floor and service it
    ///
    /// Fails with [`SimulationError::InvalidFloorReference`] when the building
    /// has a single floor and the car has nowhere to go.
    pub fn advance(
        &mut self,
        floors: &mut [Floor],
        passengers: &mut PassengerRegistry,
    ) -> SimulationResult<StepReport> {
        self.direction = self.adjusted_direction();

        let from_floor = self.current_floor;
        let next = match self.direction {
            Direction::Up => from_floor + 1,
            Direction::Down => from_floor - 1,
        };
        if !self.layout.contains(next) {
            return Err(SimulationError::InvalidFloorReference {
                floor: next,
                floor_count: self.layout.floor_count(),
            });
        }
        self.current_floor = next;
        debug!(from = from_floor, to = next, direction = %self.direction, "Elevator moved");

        let alighted = self.release_arrivals(floors, passengers)?;
        let boarding = self.board_waiting(floors, passengers)?;

        Ok(StepReport {
            from_floor,
            to_floor: next,
            direction: self.direction,
            alighted,
            boarding,
        })
    }

    /// Board the current floor's queue for the direction of travel
    ///
    /// Boarding stops at the first passenger who does not fit. Later queue
    /// members and the opposite queue are left for a future visit.
    pub fn board_waiting(
        &mut self,
        floors: &mut [Floor],
        passengers: &mut PassengerRegistry,
    ) -> SimulationResult<BoardingReport> {
        self.direction = self.adjusted_direction();
        let direction = self.direction;
        let floor = floor_mut(floors, self.layout, self.current_floor)?;

        let mut boarded = Vec::new();
        let mut rejection = None;

        while let Some(id) = floor.peek_first(direction) {
            match self.try_board(id, passengers)? {
                BoardingOutcome::Boarded(id) => {
                    floor.pop_first(direction);
                    crate::sim_event!(
                        debug,
                        "Passenger boarded",
                        passenger = id.index(),
                        floor = self.current_floor,
                        occupancy = self.occupants.len(),
                    );
                    boarded.push(id);
                }
                BoardingOutcome::Rejected(full) => {
                    warn!(
                        floor = self.current_floor,
                        waiting = floor.queue_len(direction),
                        "{}",
                        full
                    );
                    rejection = Some(full);
                    break;
                }
            }
        }

        Ok(BoardingReport {
            floor: self.current_floor,
            direction,
            boarded,
            rejection,
            left_waiting: floor.queue_len(direction),
        })
    }

    /// Admit one waiting passenger if a place is free
    fn try_board(
        &mut self,
        id: PassengerId,
        passengers: &mut PassengerRegistry,
    ) -> SimulationResult<BoardingOutcome> {
        if self.is_full() {
            return Ok(BoardingOutcome::Rejected(CapacityExceeded { capacity: self.capacity }));
        }

        passengers.get_mut(id)?.board()?;
        self.occupants.push(id);
        Ok(BoardingOutcome::Boarded(id))
    }

    /// Let out everyone whose destination is the current floor
    fn release_arrivals(
        &mut self,
        floors: &mut [Floor],
        passengers: &mut PassengerRegistry,
    ) -> SimulationResult<Vec<PassengerId>> {
        let mut arriving = Vec::new();
        for &id in &self.occupants {
            if passengers.get(id)?.destination_floor() == Some(self.current_floor) {
                arriving.push(id);
            }
        }

        let floor = floor_mut(floors, self.layout, self.current_floor)?;
        for &id in &arriving {
            passengers.get_mut(id)?.arrive()?;
            floor.admit_as_resident(id, passengers)?;
            self.occupants.retain(|&o| o != id);
            crate::sim_event!(debug, "Passenger alighted", passenger = id.index(), floor = self.current_floor);
        }

        Ok(arriving)
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.occupants.len();
        write!(
            f,
            "Floor {}: {} {}",
            self.current_floor,
            count,
            if count == 1 { "passenger" } else { "passengers" }
        )
    }
}
