//! Statistics collection and reporting
//!
//! Counters are updated from the reports each building operation returns, so
//! the statistics never need to inspect the building directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::elevator::{BoardingReport, StepReport};
use crate::facility::RerollReport;
use crate::simulation::SimulationResult;
use crate::types::RunId;

/// Counters for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStatistics {
    /// Identifier of the run
    pub run_id: RunId,
    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,
    /// Wall-clock end of the run, once finished
    pub finished_at: Option<DateTime<Utc>>,

    /// Passengers entered at the ground floor
    pub total_passengers: usize,
    /// Floors in the building
    pub floor_count: u32,
    /// Elevator capacity
    pub elevator_capacity: usize,

    /// Completed `move` steps
    pub steps_completed: usize,
    /// Passengers that entered the elevator
    pub boardings: usize,
    /// Passengers that stepped out at their destination
    pub alightings: usize,
    /// Boarding stops cut short by a full elevator
    pub capacity_rejections: usize,
    /// Rerolls whose coin flip passed the threshold
    pub rerolls_triggered: usize,
    /// Rerolls whose coin flip did not pass
    pub rerolls_skipped: usize,
    /// Residents that started waiting over all rerolls
    pub newly_waiting: usize,
    /// Highest elevator occupancy seen after any stop
    pub peak_occupancy: usize,
}

impl SimulationStatistics {
    /// Start counting for a new run
    pub fn new(total_passengers: usize, floor_count: u32, elevator_capacity: usize) -> Self {
        Self {
            run_id: RunId::new(),
            started_at: Utc::now(),
            finished_at: None,
            total_passengers,
            floor_count,
            elevator_capacity,
            steps_completed: 0,
            boardings: 0,
            alightings: 0,
            capacity_rejections: 0,
            rerolls_triggered: 0,
            rerolls_skipped: 0,
            newly_waiting: 0,
            peak_occupancy: 0,
        }
    }

    /// Record a boarding stop and the occupancy it left behind
    pub fn record_boarding(&mut self, report: &BoardingReport, occupancy: usize) {
        self.boardings += report.boarded.len();
        if report.capacity_exceeded() {
            self.capacity_rejections += 1;
        }
        self.peak_occupancy = self.peak_occupancy.max(occupancy);
    }

    /// Record one `move` step
    pub fn record_step(&mut self, report: &StepReport, occupancy: usize) {
        self.steps_completed += 1;
        self.alightings += report.alighted.len();
        self.record_boarding(&report.boarding, occupancy);
    }

    /// Record one destination reroll
    pub fn record_reroll(&mut self, report: &RerollReport) {
        if report.triggered {
            self.rerolls_triggered += 1;
        } else {
            self.rerolls_skipped += 1;
        }
        self.newly_waiting += report.enqueued.len();
    }

    /// Stamp the end of the run
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock time between start and finish, if finished
    pub fn elapsed(&self) -> Option<Duration> {
        self.finished_at
            .and_then(|end| (end - self.started_at).to_std().ok())
    }

    /// Share of rerolls that triggered, as a percentage
    pub fn reroll_trigger_percentage(&self) -> f64 {
        let total = self.rerolls_triggered + self.rerolls_skipped;
        if total == 0 {
            0.0
        } else {
            (self.rerolls_triggered as f64 / total as f64) * 100.0
        }
    }

    /// Mean number of boardings per step
    pub fn average_boardings_per_step(&self) -> f64 {
        if self.steps_completed == 0 {
            0.0
        } else {
            self.boardings as f64 / self.steps_completed as f64
        }
    }

    /// One-line summary suitable for logging
    pub fn compact_summary(&self) -> String {
        format!(
            "Run {}: {} steps, {} boardings, {} alightings, {} capacity rejections, {}/{} rerolls triggered",
            self.run_id,
            self.steps_completed,
            self.boardings,
            self.alightings,
            self.capacity_rejections,
            self.rerolls_triggered,
            self.rerolls_triggered + self.rerolls_skipped
        )
    }

    /// Multi-line report for the terminal
    pub fn generate_summary_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Elevator Simulation Summary ===\n");
        report.push_str(&format!("Run: {}\n", self.run_id));
        report.push_str(&format!("Started: {}\n", self.started_at.to_rfc3339()));
        if let Some(elapsed) = self.elapsed() {
            report.push_str(&format!("Duration: {:.2} seconds\n", elapsed.as_secs_f64()));
        }
        report.push('\n');

        report.push_str(&format!(
            "Building: {} floors, elevator capacity {}, {} passengers\n",
            self.floor_count, self.elevator_capacity, self.total_passengers
        ));
        report.push_str(&format!("Steps: {}\n", self.steps_completed));
        report.push_str(&format!(
            "Boardings: {} (avg {:.2}/step)\n",
            self.boardings,
            self.average_boardings_per_step()
        ));
        report.push_str(&format!("Alightings: {}\n", self.alightings));
        report.push_str(&format!("Capacity rejections: {}\n", self.capacity_rejections));
        report.push_str(&format!("Peak occupancy: {}\n", self.peak_occupancy));
        report.push_str(&format!(
            "Rerolls: {} triggered, {} skipped ({:.1}%), {} passengers started waiting\n",
            self.rerolls_triggered,
            self.rerolls_skipped,
            self.reroll_trigger_percentage(),
            self.newly_waiting
        ));

        report
    }

    /// Write the statistics as pretty JSON
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> SimulationResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_summary_report())
    }
}
