//! SCAN Elevator Simulator
//!
//! A discrete-step simulation of one elevator serving a building with a
//! fixed number of floors. The elevator sweeps from the ground floor to the
//! top floor and back (the SCAN policy), stopping at every floor on the way.
//!
//! # Overview
//!
//! Passengers enter at the ground floor as residents. A building-wide coin
//! flip periodically gives residents random destinations, moving them into
//! the up or down queue of their floor. At each stop the elevator lets out
//! everyone bound for that floor, then boards the queue matching its
//! direction until the queue empties or the car is full.
//!
//! ## Key Features
//!
//! - **Passenger lifecycle**: resident, waiting, in transit, resident again
//! - **Directional FIFO queues** on every floor
//! - **Capacity handling**: a full car is reported, never an error
//! - **Injectable randomness** for reproducible runs and scripted tests
//! - **Console rendering** of each stop, with optional pacing
//!
//! ## Quick Start
//!
//! ```rust
//! use scan_elevator_sim::*;
//!
//! let mut building = Building::new(5, 2)?;
//! let ada = building.enter("Ada");
//! building.request_trip(ada, 3)?;
//! building.board_elevator()?;
//!
//! building.move_elevator()?;
//! let report = building.move_elevator()?;
//! assert_eq!(report.alighted, vec![ada]);
//! # Ok::<(), SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums, floor layout and configuration
//! - [`passenger`]: Passenger lifecycle, registry and name generation
//! - [`facility`]: Building and floors
//! - [`elevator`]: The SCAN state machine and boarding reports
//! - [`simulation`]: Orchestration, rendering, statistics, errors and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Passenger  │    │  Elevator   │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Lifecycle   │◄───┤ SCAN sweep  │
//! │ Layout      │    │ Registry    │    │ Boarding    │
//! │ Config      │    │ Names       │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//!        │           ┌─────────────┐    ┌─────────────┐
//!        │           │  Facility   │    │ Simulation  │
//!        └───────────┤             │◄───┤             │
//!                    │ Building    │    │ Orchestrator│
//!                    │ Floors      │    │ Renderer    │
//!                    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod elevator;
pub mod facility;
pub mod passenger;
pub mod simulation;

pub mod types;

// Core types and identifiers
pub use types::{
    ConfigValidationError,
    // Enums
    Direction,
    FloorCollection,
    // Layout
    FloorNumber,
    FloorRange,
    // Identifiers
    PassengerId,
    PassengerStatus,
    RunId,
    // Configuration
    SimulationConfig,
    GROUND_FLOOR,
};

// Passenger types and functionality
pub use passenger::{NameSource, Passenger, PassengerGenerator, PassengerRegistry, PassengerState};

// Facility types and functionality
pub use facility::{Building, Floor, PassengerLocation, RerollReport};

// Elevator types and functionality
pub use elevator::{BoardingOutcome, BoardingReport, CapacityExceeded, Elevator, StepReport};

// Simulation types and functionality
pub use simulation::{
    ConsoleRenderer, FrameObserver, LoggingConfig, RandomSource, ScriptedRandom, SimulationError,
    SimulationOrchestrator, SimulationResult, SimulationStatistics,
};
