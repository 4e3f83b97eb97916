//! Tests for the simulation driver: population, the step loop, rendering
//! and the run report

use scan_elevator_sim::{
    ConsoleRenderer, FrameObserver, NameSource, ScriptedRandom, SimulationConfig,
    SimulationError, SimulationOrchestrator, SimulationStatistics, StepReport,
};
use std::io::Write;

fn quick_config(steps: usize) -> SimulationConfig {
    SimulationConfig {
        passenger_count: 8,
        floor_count: 5,
        elevator_capacity: 3,
        steps,
        moving_time_secs: 0,
        seed: Some(2024),
        ..Default::default()
    }
}

/// Records the floor of every frame it sees
#[derive(Default)]
struct FloorTrace {
    start: Option<u32>,
    steps: Vec<u32>,
}

impl FrameObserver for FloorTrace {
    fn on_start(&mut self, building: &scan_elevator_sim::Building) -> Result<(), SimulationError> {
        self.start = Some(building.elevator().current_floor());
        Ok(())
    }

    fn on_step(
        &mut self,
        building: &scan_elevator_sim::Building,
        report: &StepReport,
    ) -> Result<(), SimulationError> {
        assert_eq!(building.elevator().current_floor(), report.to_floor);
        self.steps.push(report.to_floor);
        Ok(())
    }
}

#[test]
fn test_run_sweeps_for_configured_steps() {
    let mut orchestrator = SimulationOrchestrator::new(quick_config(10)).unwrap();
    let mut trace = FloorTrace::default();

    orchestrator.run(&mut trace).unwrap();

    assert_eq!(trace.start, Some(1));
    assert_eq!(trace.steps, vec![2, 3, 4, 5, 4, 3, 2, 1, 2, 3]);
    assert_eq!(orchestrator.statistics().steps_completed, 10);
    assert_eq!(orchestrator.building().passengers().len(), 8);
}

#[test]
fn test_rendered_run_prints_every_frame() {
    let mut orchestrator = SimulationOrchestrator::new(quick_config(4)).unwrap();
    let mut renderer = ConsoleRenderer::new(Vec::new(), 1).without_delay();

    orchestrator.run(&mut renderer).unwrap();

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(text.matches(" - PASSENGERS IN ELEVATOR:").count(), 5);
    assert_eq!(text.matches("Elevator is moving to FLOOR").count(), 4);
    assert!(text.contains("Elevator is moving to FLOOR 2..."));
    assert!(text.contains("Unloading/boarding passengers in FLOOR 5..."));
    assert_eq!(text.matches('#').count(), 8);
}

#[test]
fn test_scripted_population_and_first_boarding() {
    let names = NameSource::from_names(["Ada", "Grace", "Linus"]).unwrap();
    let config = SimulationConfig {
        passenger_count: 3,
        floor_count: 3,
        elevator_capacity: 1,
        steps: 2,
        moving_time_secs: 0,
        seed: Some(1),
        ..Default::default()
    };
    // forced reroll sends two to floor 2 and skips the third; later coin flips are low
    let rng = ScriptedRandom::new().with_integers([2, 2, 0]).with_units([0.1, 0.1]);
    let mut orchestrator = SimulationOrchestrator::with_names(config, names, rng).unwrap();

    let stats = orchestrator.run(&mut ()).unwrap().clone();

    assert_eq!(stats.boardings, 1);
    assert_eq!(stats.alightings, 1);
    assert_eq!(stats.capacity_rejections, 1);
    assert_eq!(stats.rerolls_triggered, 1);
    assert_eq!(stats.rerolls_skipped, 2);
    assert_eq!(stats.newly_waiting, 2);
}

#[test]
fn test_names_file_is_used() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "Hedy").unwrap();
    file.flush().unwrap();

    let config = SimulationConfig {
        names_file: Some(file.path().display().to_string()),
        ..quick_config(1)
    };
    let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
    orchestrator.populate().unwrap();

    assert!(orchestrator.building().passengers().iter().all(|p| p.name == "Hedy"));
}

#[test]
fn test_missing_names_file_fails() {
    let config = SimulationConfig {
        names_file: Some("/definitely/not/here/names.txt".to_string()),
        ..quick_config(1)
    };
    assert!(matches!(
        SimulationOrchestrator::new(config),
        Err(SimulationError::NameSource(_))
    ));
}

#[test]
fn test_report_written_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");

    let mut orchestrator = SimulationOrchestrator::new(quick_config(6)).unwrap();
    let stats = orchestrator.run(&mut ()).unwrap();
    stats.write_json(&path).unwrap();

    let parsed: SimulationStatistics =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.steps_completed, 6);
    assert_eq!(parsed.total_passengers, 8);
    assert!(parsed.finished_at.is_some());
}
