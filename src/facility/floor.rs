//! Floor state and directional queues
//!
//! Each floor holds three disjoint collections of passenger identifiers:
//! residents, the up queue and the down queue. Queues are FIFO, so boarding
//! order matches the order passengers started waiting.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

use crate::passenger::PassengerRegistry;
use crate::simulation::{RandomSource, SimulationError, SimulationResult};
use crate::types::{Direction, FloorCollection, FloorNumber, FloorRange, PassengerId};

/// One level of the building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    number: FloorNumber,
    residents: Vec<PassengerId>,
    up_queue: VecDeque<PassengerId>,
    down_queue: VecDeque<PassengerId>,
}

impl Floor {
    /// Create an empty floor
    pub fn new(number: FloorNumber) -> Self {
        Self {
            number,
            residents: Vec::new(),
            up_queue: VecDeque::new(),
            down_queue: VecDeque::new(),
        }
    }

    /// Floor number within the building
    pub fn number(&self) -> FloorNumber {
        self.number
    }

    /// Add a resident, either a new arrival at the building or someone who
    /// just stepped out of the elevator
    ///
    /// The passenger must already be a resident of this floor.
    pub fn admit_as_resident(
        &mut self,
        id: PassengerId,
        passengers: &PassengerRegistry,
    ) -> SimulationResult<()> {
        let passenger = passengers.get(id)?;
        if passenger.destination_floor().is_some() || passenger.current_floor() != Some(self.number)
        {
            return Err(SimulationError::invariant_violation(format!(
                "{} cannot become a resident of floor {} from state {:?}",
                id,
                self.number,
                passenger.state()
            )));
        }
        if self.residents.contains(&id) {
            return Err(SimulationError::invariant_violation(format!(
                "{} is already a resident of floor {}",
                id, self.number
            )));
        }

        self.residents.push(id);
        Ok(())
    }

    /// Add a passenger registered a moment ago as a ground floor resident
    pub(crate) fn receive_newcomer(&mut self, id: PassengerId) {
        self.residents.push(id);
    }

    /// Move a resident into the queue matching its destination
    ///
    /// The destination must lie in the building and differ from this floor.
    /// On error nothing changes.
    pub fn enqueue_for_elevator(
        &mut self,
        id: PassengerId,
        destination: FloorNumber,
        layout: FloorRange,
        passengers: &mut PassengerRegistry,
    ) -> SimulationResult<Direction> {
        if !layout.contains(destination) {
            return Err(SimulationError::InvalidFloorReference {
                floor: destination,
                floor_count: layout.floor_count(),
            });
        }

        let position = self.residents.iter().position(|&r| r == id).ok_or(
            SimulationError::NotInCollection {
                passenger: id,
                floor: self.number,
                collection: FloorCollection::Residents,
            },
        )?;

        let direction = passengers.get_mut(id)?.assign_destination(destination)?;

        self.residents.remove(position);
        self.queue_mut(direction).push_back(id);

        debug!(
            passenger = %id,
            floor = self.number,
            destination,
            direction = %direction,
            "Passenger queued for elevator"
        );
        Ok(direction)
    }

    /// Head of the queue for `direction`, without removing it
    pub fn peek_first(&self, direction: Direction) -> Option<PassengerId> {
        self.queue(direction).front().copied()
    }

    /// Remove and return the head of the queue for `direction`
    pub fn pop_first(&mut self, direction: Direction) -> Option<PassengerId> {
        self.queue_mut(direction).pop_front()
    }

    /// Whether nobody waits to travel in `direction`
    pub fn is_queue_empty(&self, direction: Direction) -> bool {
        self.queue(direction).is_empty()
    }

    /// Number of people waiting to travel in `direction`
    pub fn queue_len(&self, direction: Direction) -> usize {
        self.queue(direction).len()
    }

    /// The FIFO queue for `direction`
    pub fn queue(&self, direction: Direction) -> &VecDeque<PassengerId> {
        match direction {
            Direction::Up => &self.up_queue,
            Direction::Down => &self.down_queue,
        }
    }

    fn queue_mut(&mut self, direction: Direction) -> &mut VecDeque<PassengerId> {
        match direction {
            Direction::Up => &mut self.up_queue,
            Direction::Down => &mut self.down_queue,
        }
    }

    /// Residents in arrival order
    pub fn residents(&self) -> &[PassengerId] {
        &self.residents
    }

    /// Snapshot of one collection, queues in boarding order
    pub fn list_of(&self, collection: FloorCollection) -> Vec<PassengerId> {
        match collection {
            FloorCollection::Residents => self.residents.clone(),
            FloorCollection::UpQueue => self.up_queue.iter().copied().collect(),
            FloorCollection::DownQueue => self.down_queue.iter().copied().collect(),
        }
    }

    /// Size of one collection
    pub fn len_of(&self, collection: FloorCollection) -> usize {
        match collection {
            FloorCollection::Residents => self.residents.len(),
            FloorCollection::UpQueue => self.up_queue.len(),
            FloorCollection::DownQueue => self.down_queue.len(),
        }
    }

    /// Total number of people on this floor
    pub fn population(&self) -> usize {
        self.residents.len() + self.up_queue.len() + self.down_queue.len()
    }

    /// Which collection holds `id`, if any
    pub fn collection_of(&self, id: PassengerId) -> Option<FloorCollection> {
        FloorCollection::ALL.into_iter().find(|&collection| match collection {
            FloorCollection::Residents => self.residents.contains(&id),
            FloorCollection::UpQueue => self.up_queue.contains(&id),
            FloorCollection::DownQueue => self.down_queue.contains(&id),
        })
    }

    /// Give every resident a chance to start waiting
    ///
    /// One draw in `[0, floor_count)` per resident, in resident order. A draw
    /// of `0` or of this floor's number leaves that resident in place; any
    /// other draw becomes the resident's destination. Returns the passengers
    /// that started waiting together with their destinations.
    pub fn randomize_destinations<R: RandomSource + ?Sized>(
        &mut self,
        layout: FloorRange,
        passengers: &mut PassengerRegistry,
        rng: &mut R,
    ) -> SimulationResult<Vec<(PassengerId, FloorNumber)>> {
        let ready: Vec<(PassengerId, FloorNumber)> = self
            .residents
            .iter()
            .filter_map(|&id| {
                let draw = rng.next_below(layout.floor_count());
                (draw != 0 && draw != self.number).then_some((id, draw))
            })
            .collect();

        for &(id, destination) in &ready {
            self.enqueue_for_elevator(id, destination, layout, passengers)?;
        }

        Ok(ready)
    }
}

/// Mutable lookup of floor `number` in a bottom-to-top floor slice
pub(crate) fn floor_mut(
    floors: &mut [Floor],
    layout: FloorRange,
    number: FloorNumber,
) -> SimulationResult<&mut Floor> {
    layout
        .index_of(number)
        .and_then(move |index| floors.get_mut(index))
        .ok_or(SimulationError::InvalidFloorReference {
            floor: number,
            floor_count: layout.floor_count(),
        })
}
