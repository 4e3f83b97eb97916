//! Simulation orchestration and control
//!
//! - **SimulationOrchestrator**: population, the step loop and statistics
//! - **ConsoleRenderer**: per-stop floor frames with pacing marks
//! - **RandomSource**: the randomness seam (seeded `StdRng` or scripted draws)
//! - **SimulationStatistics**: counters and the JSON run report
//! - **SimulationError**: error type shared by every module
//!
//! # Usage Example
//!
//! ```rust
//! use scan_elevator_sim::simulation::SimulationOrchestrator;
//! use scan_elevator_sim::types::SimulationConfig;
//!
//! let config = SimulationConfig {
//!     passenger_count: 6,
//!     floor_count: 4,
//!     steps: 10,
//!     moving_time_secs: 0,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
//! let statistics = orchestrator.run(&mut ()).unwrap();
//! assert_eq!(statistics.steps_completed, 10);
//! ```

pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod random;
pub mod renderer;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use random::*;
pub use renderer::*;
pub use statistics::*;
