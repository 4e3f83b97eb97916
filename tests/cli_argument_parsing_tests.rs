//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are parsed, merged over a
//! configuration file and validated before a run starts.

use clap::Parser;
use scan_elevator_sim::types::config::{CliArgs, ConfigError, SimulationConfig};
use scan_elevator_sim::ConfigValidationError;
use std::io::Write;

fn parse(args: &[&str]) -> CliArgs {
    let mut full = vec!["scan-elevator-sim"];
    full.extend_from_slice(args);
    CliArgs::try_parse_from(full).unwrap()
}

/// The classic five positional settings map to named flags
#[test]
fn test_core_arguments_parsing() {
    let args = parse(&[
        "--passengers", "20", "--moving-time", "2", "--floors", "6", "--capacity", "4", "--steps",
        "30",
    ]);
    assert_eq!(args.passengers, Some(20));
    assert_eq!(args.moving_time, Some(2));
    assert_eq!(args.floors, Some(6));
    assert_eq!(args.capacity, Some(4));
    assert_eq!(args.steps, Some(30));

    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config.passenger_count, 20);
    assert_eq!(config.moving_time_secs, 2);
    assert_eq!(config.floor_count, 6);
    assert_eq!(config.elevator_capacity, 4);
    assert_eq!(config.steps, 30);
    config.validate().unwrap();
}

#[test]
fn test_defaults_without_arguments() {
    let config = SimulationConfig::from_cli_args(parse(&[])).unwrap();
    assert_eq!(config, SimulationConfig::default());
    assert_eq!(config.passenger_count, 10);
    assert_eq!(config.floor_count, 5);
    assert_eq!(config.elevator_capacity, 4);
    assert_eq!(config.steps, 20);
    assert_eq!(config.reroll_threshold, 0.5);
}

#[test]
fn test_seed_and_threshold_parsing() {
    let args = parse(&["--seed", "12345", "--reroll-threshold", "0.75"]);
    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config.seed, Some(12345));
    assert_eq!(config.reroll_threshold, 0.75);
}

#[test]
fn test_logging_flags() {
    let args = parse(&["--verbose"]);
    assert!(args.verbose);
    assert!(!args.debug);

    let args = parse(&["-d", "-q"]);
    assert!(args.debug);
    assert!(args.quiet);

    let args = parse(&["--json-logs", "--log-dir", "logs"]);
    assert!(args.json_logs);
    assert_eq!(args.log_dir.as_deref(), Some("logs"));
}

#[test]
fn test_dry_run_and_print_config_flags() {
    assert!(parse(&["--dry-run"]).dry_run);
    assert!(parse(&["--print-config"]).print_config);
    assert!(!parse(&[]).dry_run);
}

#[test]
fn test_output_paths() {
    let args = parse(&["--names-file", "names.txt", "--report-output", "run.json"]);
    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config.names_file.as_deref(), Some("names.txt"));
    assert_eq!(config.report_output.as_deref(), Some("run.json"));
}

#[test]
fn test_invalid_values_rejected_by_parser() {
    assert!(CliArgs::try_parse_from(["scan-elevator-sim", "--floors", "-3"]).is_err());
    assert!(CliArgs::try_parse_from(["scan-elevator-sim", "--capacity", "many"]).is_err());
    assert!(CliArgs::try_parse_from(["scan-elevator-sim", "--unknown"]).is_err());
}

#[test]
fn test_configuration_validation_with_cli() {
    let config = SimulationConfig::from_cli_args(parse(&["--floors", "1"])).unwrap();
    assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidFloorCount(1))));

    let config = SimulationConfig::from_cli_args(parse(&["--capacity", "0"])).unwrap();
    assert!(config.validate().is_err());

    let config = SimulationConfig::from_cli_args(parse(&["--steps", "0"])).unwrap();
    assert!(config.validate().is_err());

    let config = SimulationConfig::from_cli_args(parse(&["--reroll-threshold", "1.5"])).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigValidationError::InvalidProbability { .. })
    ));
}

#[test]
fn test_cli_overrides_config_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"passenger_count": 3, "floor_count": 9, "seed": 5}}"#).unwrap();
    file.flush().unwrap();
    let path = file.path().display().to_string();

    let config =
        SimulationConfig::from_cli_args(parse(&["--config", &path, "--floors", "4"])).unwrap();

    assert_eq!(config.passenger_count, 3);
    assert_eq!(config.floor_count, 4);
    assert_eq!(config.seed, Some(5));
    assert_eq!(config.elevator_capacity, 4);
}

#[test]
fn test_missing_config_file() {
    let result = SimulationConfig::from_cli_args(parse(&["--config", "/no/such/config.json"]));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn test_help_message() {
    let err = CliArgs::try_parse_from(["scan-elevator-sim", "--help"]).unwrap_err();
    let help = err.to_string();
    assert!(help.contains("--passengers"));
    assert!(help.contains("--reroll-threshold"));
}
