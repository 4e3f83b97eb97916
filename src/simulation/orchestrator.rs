//! Main simulation orchestrator
//!
//! Builds the building from a [`SimulationConfig`], fills the ground floor,
//! and drives the elevator for the configured number of steps. Rendering is
//! delegated to a [`FrameObserver`] so the loop itself stays clock-free.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use tracing::{debug, info, instrument};

use crate::elevator::StepReport;
use crate::facility::{Building, RerollReport};
use crate::passenger::{NameSource, PassengerGenerator};
use crate::simulation::{
    ConsoleRenderer, RandomSource, SimulationError, SimulationResult, SimulationStatistics,
};
use crate::types::SimulationConfig;

/// Receives a view of the building after the initial boarding and after
/// every step
pub trait FrameObserver {
    /// Called once, after the ground floor has boarded
    fn on_start(&mut self, building: &Building) -> SimulationResult<()>;

    /// Called after each `move`, before the next reroll
    fn on_step(&mut self, building: &Building, report: &StepReport) -> SimulationResult<()>;
}

/// Observer that ignores every frame
impl FrameObserver for () {
    fn on_start(&mut self, _building: &Building) -> SimulationResult<()> {
        Ok(())
    }

    fn on_step(&mut self, _building: &Building, _report: &StepReport) -> SimulationResult<()> {
        Ok(())
    }
}

impl<W: Write> FrameObserver for ConsoleRenderer<W> {
    fn on_start(&mut self, building: &Building) -> SimulationResult<()> {
        self.render_start(building)
    }

    fn on_step(&mut self, building: &Building, _report: &StepReport) -> SimulationResult<()> {
        self.render_step(building)
    }
}

/// Coordinates the building, randomness and statistics for one run
#[derive(Debug)]
pub struct SimulationOrchestrator<R: RandomSource = StdRng> {
    config: SimulationConfig,
    building: Building,
    rng: R,
    generator: PassengerGenerator,
    statistics: SimulationStatistics,
    populated: bool,
}

impl SimulationOrchestrator<StdRng> {
    /// Create an orchestrator whose randomness comes from `config.seed`, or
    /// from entropy when no seed is set
    #[instrument(skip(config), fields(floors = config.floor_count, passengers = config.passenger_count))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        let rng = if let Some(seed) = config.seed {
            info!("Using deterministic seed: {}", seed);
            StdRng::seed_from_u64(seed)
        } else {
            debug!("Using entropy-based random seed");
            StdRng::from_entropy()
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> SimulationOrchestrator<R> {
    /// Create an orchestrator drawing destinations and coin flips from `rng`
    ///
    /// Names are read from `config.names_file`, or the built-in list.
    pub fn with_rng(config: SimulationConfig, rng: R) -> SimulationResult<Self> {
        let names = NameSource::from_optional_file(config.names_file.as_deref())?;
        Self::with_names(config, names, rng)
    }

    /// Create an orchestrator with an explicit name list
    pub fn with_names(config: SimulationConfig, names: NameSource, rng: R) -> SimulationResult<Self> {
        config
            .validate()
            .map_err(|e| SimulationError::configuration(e.to_string()))?;

        let building = Building::new(config.floor_count, config.elevator_capacity)?
            .with_reroll_threshold(config.reroll_threshold);
        let generator = match config.seed {
            Some(seed) => PassengerGenerator::with_seed(names, seed.wrapping_add(1)),
            None => PassengerGenerator::new(names),
        };
        let statistics = SimulationStatistics::new(
            config.passenger_count,
            config.floor_count,
            config.elevator_capacity,
        );

        Ok(Self { config, building, rng, generator, statistics, populated: false })
    }

    /// The building being simulated
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Configuration of this run
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Statistics gathered so far
    pub fn statistics(&self) -> &SimulationStatistics {
        &self.statistics
    }

    /// Whether the ground floor has been filled
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Enter all passengers at the ground floor, force a reroll and board
    /// the ground floor's up queue
    ///
    /// Calling this twice is an error.
    #[instrument(skip(self), fields(passengers = self.config.passenger_count))]
    pub fn populate(&mut self) -> SimulationResult<RerollReport> {
        if self.populated {
            return Err(SimulationError::invariant_violation("building already populated"));
        }

        let ids = self.generator.populate(&mut self.building, self.config.passenger_count);
        self.populated = true;

        let reroll = self.building.randomize_queues(true, &mut self.rng)?;
        self.statistics.record_reroll(&reroll);

        let boarding = self.building.board_elevator()?;
        self.statistics.record_boarding(&boarding, self.building.elevator().occupancy());

        info!(
            entered = ids.len(),
            waiting = reroll.enqueued.len(),
            boarded = boarding.boarded.len(),
            "Ground floor populated"
        );
        Ok(reroll)
    }

    /// Move the elevator one floor and record the stop
    pub fn step(&mut self) -> SimulationResult<StepReport> {
        let report = self.building.move_elevator()?;
        self.statistics.record_step(&report, self.building.elevator().occupancy());
        debug!(elevator = %self.building.elevator(), "Step complete");
        Ok(report)
    }

    /// Unforced building-wide reroll
    pub fn reroll(&mut self) -> SimulationResult<RerollReport> {
        let report = self.building.randomize_queues(false, &mut self.rng)?;
        self.statistics.record_reroll(&report);
        Ok(report)
    }

    /// Populate if needed, then run `config.steps` iterations of
    /// move, observe and reroll
    pub fn run<O: FrameObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> SimulationResult<&SimulationStatistics> {
        let _span = crate::perf_span!("simulation_run", steps = self.config.steps).entered();

        if !self.populated {
            self.populate()?;
        }
        observer.on_start(&self.building)?;

        for _ in 0..self.config.steps {
            let report = self.step()?;
            observer.on_step(&self.building, &report)?;
            self.reroll()?;
        }

        self.building.check_invariants()?;
        self.statistics.finish();
        info!("{}", self.statistics.compact_summary());
        Ok(&self.statistics)
    }
}
