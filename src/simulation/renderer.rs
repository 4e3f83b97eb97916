//! Console rendering of the elevator's current floor
//!
//! Each frame shows who rides the elevator and who is on the floor it stopped
//! at. Between stops the renderer prints one `#` per second of travel and
//! boarding time; this is the only place the simulation touches a clock.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::facility::Building;
use crate::simulation::SimulationResult;
use crate::types::{FloorCollection, PassengerId};

const SEPARATOR: &str = "----------------------------------------------";
const PACING_TICK: Duration = Duration::from_secs(1);

/// Writes building frames to any [`Write`] sink
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write> {
    out: W,
    moving_time_secs: u64,
    sleep: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Create a renderer that pauses `moving_time_secs` seconds per phase
    pub fn new(out: W, moving_time_secs: u64) -> Self {
        Self { out, moving_time_secs, sleep: true }
    }

    /// Keep printing pacing marks but skip the pauses
    pub fn without_delay(mut self) -> Self {
        self.sleep = false;
        self
    }

    /// Consume the renderer and return its sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Frame shown once after the initial boarding, without travel messages
    pub fn render_start(&mut self, building: &Building) -> SimulationResult<()> {
        writeln!(self.out)?;
        self.render_floor(building)
    }

    /// Frame shown after each `move`
    pub fn render_step(&mut self, building: &Building) -> SimulationResult<()> {
        let floor = building.elevator().current_floor();

        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out, "\nElevator is moving to FLOOR {}...", floor)?;
        self.pace()?;
        writeln!(self.out, "\nUnloading/boarding passengers in FLOOR {}...", floor)?;
        self.pace()?;
        writeln!(self.out)?;

        self.render_floor(building)
    }

    fn render_floor(&mut self, building: &Building) -> SimulationResult<()> {
        let floor = building.floor(building.elevator().current_floor())?;

        self.render_group(building, "PASSENGERS IN ELEVATOR", building.elevator().occupants())?;
        self.render_group(building, "RESIDENTS", &floor.list_of(FloorCollection::Residents))?;
        self.render_group(building, "IN QUEUE TO GO UP", &floor.list_of(FloorCollection::UpQueue))?;
        self.render_group(
            building,
            "IN QUEUE TO GO DOWN",
            &floor.list_of(FloorCollection::DownQueue),
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn render_group(
        &mut self,
        building: &Building,
        title: &str,
        ids: &[PassengerId],
    ) -> SimulationResult<()> {
        writeln!(self.out, " - {}: {}", title, ids.len())?;
        for label in building.passengers().labels(ids)? {
            write!(self.out, "{} ", label)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn pace(&mut self) -> SimulationResult<()> {
        for _ in 0..self.moving_time_secs {
            write!(self.out, "#")?;
            self.out.flush()?;
            if self.sleep {
                thread::sleep(PACING_TICK);
            }
        }
        Ok(())
    }
}
