//! Building management
//!
//! The building owns the floors, the elevator and the passenger registry. It
//! splits borrows between them so the elevator can reach floor queues without
//! holding a reference back to the building.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::elevator::{BoardingReport, Elevator, StepReport};
use crate::facility::floor::{floor_mut, Floor};
use crate::passenger::{Passenger, PassengerRegistry, PassengerState};
use crate::simulation::{RandomSource, SimulationError, SimulationResult};
use crate::types::{
    Direction, FloorCollection, FloorNumber, FloorRange, PassengerId, DEFAULT_REROLL_THRESHOLD,
    FORCED_REROLL_DRAW,
};

/// Where a passenger currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassengerLocation {
    /// In one of a floor's collections
    Floor {
        /// Floor number
        floor: FloorNumber,
        /// Collection on that floor
        collection: FloorCollection,
    },
    /// Riding the elevator
    Elevator,
}

/// Outcome of one building-wide destination reroll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerollReport {
    /// The coin-flip value compared against the threshold
    pub draw: f64,
    /// Whether the draw was forced
    pub forced: bool,
    /// Whether every floor rerolled
    pub triggered: bool,
    /// Residents that started waiting, with their destinations
    pub enqueued: Vec<(PassengerId, FloorNumber)>,
}

/// A building with a fixed set of floors served by one elevator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    layout: FloorRange,
    floors: Vec<Floor>,
    elevator: Elevator,
    passengers: PassengerRegistry,
    reroll_threshold: f64,
}

impl Building {
    /// Create a building with `floor_count` floors and an elevator of `capacity`
    pub fn new(floor_count: u32, capacity: usize) -> SimulationResult<Self> {
        let layout = FloorRange::new(floor_count).ok_or_else(|| {
            SimulationError::configuration("a building needs at least one floor")
        })?;
        if capacity == 0 {
            return Err(SimulationError::configuration("elevator capacity must be positive"));
        }

        debug!(floor_count, capacity, "Building constructed");
        Ok(Self {
            layout,
            floors: layout.floors().map(Floor::new).collect(),
            elevator: Elevator::new(layout, capacity),
            passengers: PassengerRegistry::new(),
            reroll_threshold: DEFAULT_REROLL_THRESHOLD,
        })
    }

    /// Set the coin-flip threshold used by [`Building::randomize_queues`]
    pub fn with_reroll_threshold(mut self, threshold: f64) -> Self {
        self.reroll_threshold = threshold;
        self
    }

    /// Floor range of this building
    pub fn layout(&self) -> FloorRange {
        self.layout
    }

    /// Coin-flip threshold for rerolls
    pub fn reroll_threshold(&self) -> f64 {
        self.reroll_threshold
    }

    /// Register a new arrival and admit it as a resident of the ground floor
    pub fn enter(&mut self, name: impl Into<String>) -> PassengerId {
        let id = self.passengers.register(name);
        if let Some(ground) = self.floors.first_mut() {
            ground.receive_newcomer(id);
        }
        id
    }

    /// Look up a floor
    pub fn floor(&self, number: FloorNumber) -> SimulationResult<&Floor> {
        self.layout
            .index_of(number)
            .and_then(|index| self.floors.get(index))
            .ok_or(SimulationError::InvalidFloorReference {
                floor: number,
                floor_count: self.layout.floor_count(),
            })
    }

    /// All floors, bottom to top
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// The elevator
    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    /// The passenger registry
    pub fn passengers(&self) -> &PassengerRegistry {
        &self.passengers
    }

    /// Look up a passenger record
    pub fn passenger(&self, id: PassengerId) -> SimulationResult<&Passenger> {
        self.passengers.get(id)
    }

    /// Advance the elevator one floor and service it
    pub fn move_elevator(&mut self) -> SimulationResult<StepReport> {
        let Self { floors, elevator, passengers, .. } = self;
        elevator.advance(floors, passengers)
    }

    /// Run only the boarding phase at the elevator's current floor
    pub fn board_elevator(&mut self) -> SimulationResult<BoardingReport> {
        let Self { floors, elevator, passengers, .. } = self;
        elevator.board_waiting(floors, passengers)
    }

    /// Send a resident to the queue for `destination`
    pub fn request_trip(
        &mut self,
        id: PassengerId,
        destination: FloorNumber,
    ) -> SimulationResult<()> {
        let PassengerState::Resident { floor } = self.passengers.get(id)?.state() else {
            return Err(SimulationError::NotInCollection {
                passenger: id,
                floor: self.passengers.get(id)?.current_floor().unwrap_or(0),
                collection: FloorCollection::Residents,
            });
        };

        let Self { floors, passengers, layout, .. } = self;
        floor_mut(floors, *layout, floor)?.enqueue_for_elevator(id, destination, *layout, passengers)?;
        Ok(())
    }

    /// Building-wide destination reroll
    ///
    /// Draws once in `[0, 1)`. A forced reroll skips the draw, reports `0.99`
    /// and always triggers, whatever the threshold. When triggered every floor
    /// rerolls its residents; otherwise no floor is touched.
    pub fn randomize_queues<R: RandomSource + ?Sized>(
        &mut self,
        forced: bool,
        rng: &mut R,
    ) -> SimulationResult<RerollReport> {
        let draw = if forced { FORCED_REROLL_DRAW } else { rng.next_unit() };
        let triggered = forced || draw > self.reroll_threshold;

        let mut enqueued = Vec::new();
        if triggered {
            let Self { floors, passengers, layout, .. } = self;
            for floor in floors.iter_mut() {
                enqueued.extend(floor.randomize_destinations(*layout, passengers, rng)?);
            }
        }

        info!(
            draw,
            forced,
            triggered,
            newly_waiting = enqueued.len(),
            "Destination reroll"
        );
        Ok(RerollReport { draw, forced, triggered, enqueued })
    }

    /// Where `id` currently is, if anywhere
    pub fn locate(&self, id: PassengerId) -> Option<PassengerLocation> {
        if self.elevator.carries(id) {
            return Some(PassengerLocation::Elevator);
        }
        self.floors.iter().find_map(|floor| {
            floor
                .collection_of(id)
                .map(|collection| PassengerLocation::Floor { floor: floor.number(), collection })
        })
    }

    /// Verify that every passenger is held by exactly one collection and that
    /// its lifecycle state agrees with that collection
    pub fn check_invariants(&self) -> SimulationResult<()> {
        let mut seen = vec![0usize; self.passengers.len()];
        let mut note = |id: PassengerId| -> SimulationResult<()> {
            let slot = seen.get_mut(id.index()).ok_or(SimulationError::UnknownPassenger(id))?;
            *slot += 1;
            Ok(())
        };

        for floor in &self.floors {
            for collection in FloorCollection::ALL {
                for id in floor.list_of(collection) {
                    note(id)?;
                    self.check_floor_state(id, floor.number(), collection)?;
                }
            }
        }

        if self.elevator.occupancy() > self.elevator.capacity() {
            return Err(SimulationError::invariant_violation(format!(
                "elevator holds {} passengers with capacity {}",
                self.elevator.occupancy(),
                self.elevator.capacity()
            )));
        }
        for &id in self.elevator.occupants() {
            note(id)?;
            if !matches!(self.passengers.get(id)?.state(), PassengerState::InTransit { .. }) {
                return Err(SimulationError::invariant_violation(format!(
                    "{} rides the elevator but is {}",
                    id,
                    self.passengers.get(id)?.status()
                )));
            }
        }

        if let Some((index, count)) = seen.iter().enumerate().find(|&(_, &count)| count != 1) {
            return Err(SimulationError::invariant_violation(format!(
                "{} is held by {} collections",
                PassengerId(index),
                count
            )));
        }
        Ok(())
    }

    fn check_floor_state(
        &self,
        id: PassengerId,
        number: FloorNumber,
        collection: FloorCollection,
    ) -> SimulationResult<()> {
        let state = self.passengers.get(id)?.state();
        let consistent = match (collection.direction(), state) {
            (None, PassengerState::Resident { floor }) => floor == number,
            (Some(queue), PassengerState::Waiting { floor, destination }) => {
                floor == number
                    && destination != number
                    && self.layout.contains(destination)
                    && Direction::towards(number, destination) == queue
            }
            _ => false,
        };

        if consistent {
            Ok(())
        } else {
            Err(SimulationError::invariant_violation(format!(
                "{} in {} of floor {} has state {:?}",
                id, collection, number, state
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ScriptedRandom;

    #[test]
    fn test_construction_guards() {
        assert!(matches!(Building::new(0, 2), Err(SimulationError::Configuration(_))));
        assert!(matches!(Building::new(3, 0), Err(SimulationError::Configuration(_))));

        let building = Building::new(3, 2).unwrap();
        assert_eq!(building.floors().len(), 3);
        assert_eq!(building.elevator().current_floor(), 1);
        assert_eq!(building.reroll_threshold(), 0.5);
    }

    #[test]
    fn test_enter_admits_to_ground_floor() {
        let mut building = Building::new(3, 2).unwrap();
        let id = building.enter("Ada");

        assert_eq!(building.floor(1).unwrap().residents(), &[id]);
        assert_eq!(
            building.locate(id),
            Some(PassengerLocation::Floor { floor: 1, collection: FloorCollection::Residents })
        );
        building.check_invariants().unwrap();
    }

    #[test]
    fn test_floor_lookup_bounds() {
        let building = Building::new(3, 2).unwrap();
        assert!(building.floor(0).is_err());
        assert!(building.floor(4).is_err());
        assert_eq!(building.floor(3).unwrap().number(), 3);
    }

    #[test]
    fn test_coin_flip_gates_all_floors() {
        let mut building = Building::new(4, 2).unwrap();
        building.enter("A");
        building.enter("B");

        // 0.4 does not exceed 0.5: no floor draws
        let mut rng = ScriptedRandom::new().with_units([0.4]).with_integers([2, 3]);
        let report = building.randomize_queues(false, &mut rng).unwrap();
        assert!(!report.triggered);
        assert!(report.enqueued.is_empty());
        assert_eq!(rng.integers_drawn(), 0);

        // exactly 0.5 does not exceed the threshold either
        let mut rng = ScriptedRandom::new().with_units([0.5]);
        assert!(!building.randomize_queues(false, &mut rng).unwrap().triggered);

        let mut rng = ScriptedRandom::new().with_units([0.8]).with_integers([2, 3]);
        let report = building.randomize_queues(false, &mut rng).unwrap();
        assert!(report.triggered);
        assert_eq!(report.enqueued.len(), 2);
        assert_eq!(building.floor(1).unwrap().queue_len(Direction::Up), 2);
    }

    #[test]
    fn test_forced_reroll_does_not_draw_unit() {
        let mut building = Building::new(4, 2).unwrap();
        let id = building.enter("A");

        let mut rng = ScriptedRandom::new().with_integers([3]);
        let report = building.randomize_queues(true, &mut rng).unwrap();

        assert!(report.forced);
        assert!(report.triggered);
        assert_eq!(report.draw, 0.99);
        assert_eq!(rng.units_drawn(), 0);
        assert_eq!(report.enqueued, vec![(id, 3)]);
    }

    #[test]
    fn test_request_trip_and_locate() {
        let mut building = Building::new(5, 1).unwrap();
        let a = building.enter("A");
        building.request_trip(a, 4).unwrap();
        assert_eq!(
            building.locate(a),
            Some(PassengerLocation::Floor { floor: 1, collection: FloorCollection::UpQueue })
        );

        // already waiting
        assert!(building.request_trip(a, 3).is_err());

        building.board_elevator().unwrap();
        assert_eq!(building.locate(a), Some(PassengerLocation::Elevator));
        assert!(building.request_trip(a, 2).is_err());
        building.check_invariants().unwrap();
    }

    #[test]
    fn test_full_trip_through_building() {
        let mut building = Building::new(3, 2).unwrap();
        let a = building.enter("A");
        building.request_trip(a, 3).unwrap();
        building.board_elevator().unwrap();

        building.move_elevator().unwrap();
        let report = building.move_elevator().unwrap();

        assert_eq!(report.alighted, vec![a]);
        assert_eq!(building.passenger(a).unwrap().state(), PassengerState::Resident { floor: 3 });
        assert_eq!(building.floor(3).unwrap().residents(), &[a]);
        building.check_invariants().unwrap();
    }

    #[test]
    fn test_queue_entry_in_wrong_direction_is_reported() {
        let mut building = Building::new(5, 2).unwrap();
        let a = building.enter("A");
        building.request_trip(a, 4).unwrap();
        building.check_invariants().unwrap();

        // file the up-bound passenger under the down queue
        let mut json = serde_json::to_value(&building).unwrap();
        let ground = &mut json["floors"][0];
        let id = ground["up_queue"][0].take();
        ground["up_queue"] = serde_json::json!([]);
        ground["down_queue"] = serde_json::json!([id]);
        let corrupted: Building = serde_json::from_value(json).unwrap();

        assert!(matches!(
            corrupted.check_invariants(),
            Err(SimulationError::InvariantViolation(_))
        ));
    }
}
