//! Building and floors
//!
//! - **Building**: owns floors, the elevator and the passenger registry
//! - **Floor**: residents plus FIFO up and down queues
//!
//! # Usage Example
//!
//! ```rust
//! use scan_elevator_sim::facility::Building;
//! use scan_elevator_sim::types::Direction;
//!
//! let mut building = Building::new(4, 2).unwrap();
//! let ada = building.enter("Ada");
//! building.request_trip(ada, 3).unwrap();
//!
//! assert_eq!(building.floor(1).unwrap().peek_first(Direction::Up), Some(ada));
//! ```

pub mod building;
pub mod floor;

pub use building::{Building, PassengerLocation, RerollReport};
pub use floor::Floor;
