//! Enumeration types for the elevator simulator
//!
//! This module contains the closed enumerations used throughout the simulation:
//! travel direction, the per-floor passenger collections, and the passenger
//! lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Travel direction of the elevator, also used to select a floor's queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Travelling towards the top floor
    Up,
    /// Travelling towards the bottom floor
    Down,
}

impl Direction {
    /// Direction needed to travel from `from` to `to`. Equal floors map to Down.
    pub fn towards(from: u32, to: u32) -> Self {
        if to > from {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// The floor queue that feeds boarding in this direction
    pub fn queue(self) -> FloorCollection {
        match self {
            Direction::Up => FloorCollection::UpQueue,
            Direction::Down => FloorCollection::DownQueue,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

/// The three disjoint passenger collections held by a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorCollection {
    /// People stationed on the floor, not waiting for the elevator
    Residents,
    /// People waiting to travel up
    UpQueue,
    /// People waiting to travel down
    DownQueue,
}

impl FloorCollection {
    /// Every collection, in rendering order
    pub const ALL: [FloorCollection; 3] =
        [FloorCollection::Residents, FloorCollection::UpQueue, FloorCollection::DownQueue];

    /// Direction served by this collection, if it is a queue
    pub fn direction(self) -> Option<Direction> {
        match self {
            FloorCollection::Residents => None,
            FloorCollection::UpQueue => Some(Direction::Up),
            FloorCollection::DownQueue => Some(Direction::Down),
        }
    }
}

impl fmt::Display for FloorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorCollection::Residents => write!(f, "Residents"),
            FloorCollection::UpQueue => write!(f, "Up Queue"),
            FloorCollection::DownQueue => write!(f, "Down Queue"),
        }
    }
}

impl FromStr for FloorCollection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "residents" | "resident" => Ok(FloorCollection::Residents),
            "up" | "up queue" | "upqueue" => Ok(FloorCollection::UpQueue),
            "down" | "down queue" | "downqueue" => Ok(FloorCollection::DownQueue),
            _ => Err(format!("Unknown floor collection: {}", s)),
        }
    }
}

/// Lifecycle status of a passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassengerStatus {
    /// Stationed on a floor with no destination
    Resident,
    /// Queued on a floor with a committed destination
    Waiting,
    /// Riding the elevator
    InTransit,
}

impl fmt::Display for PassengerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassengerStatus::Resident => write!(f, "Resident"),
            PassengerStatus::Waiting => write!(f, "Waiting"),
            PassengerStatus::InTransit => write!(f, "In Transit"),
        }
    }
}

impl FromStr for PassengerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resident" => Ok(PassengerStatus::Resident),
            "waiting" => Ok(PassengerStatus::Waiting),
            "in transit" | "intransit" | "riding" => Ok(PassengerStatus::InTransit),
            _ => Err(format!("Unknown passenger status: {}", s)),
        }
    }
}
