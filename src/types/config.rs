//! Configuration structures for the elevator simulator
//!
//! This module contains the simulation configuration structure, the command line
//! surface, and the validation logic that guards the driver.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Probability threshold above which a building-wide reroll happens
pub const DEFAULT_REROLL_THRESHOLD: f64 = 0.5;

/// Unit draw used when a reroll is forced
pub const FORCED_REROLL_DRAW: f64 = 0.99;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scan-elevator-sim",
    version = "0.1.0",
    about = "SCAN Elevator Simulator - Sweeps a single elevator through a building",
    long_about = "Simulates one elevator sweeping a multi-floor building, reversing only at the top and bottom floors, boarding waiting passengers up to capacity and dropping them off at their destinations.

EXAMPLES:
    # Run with default settings
    scan-elevator-sim

    # Recreate the classic five-argument run
    scan-elevator-sim --passengers 20 --moving-time 1 --floors 6 --capacity 4 --steps 30

    # Use a configuration file
    scan-elevator-sim --config config.json

    # Reproducible run without pacing or per-floor output
    scan-elevator-sim --seed 7 --moving-time 0 --quiet

    # Generate configuration template
    scan-elevator-sim --print-config > my-config.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of people entering the building
    #[arg(long, help = "Number of people to enter the building")]
    pub passengers: Option<usize>,

    /// Seconds of pacing per elevator phase
    #[arg(
        long,
        help = "Seconds to wait while the elevator moves between floors",
        long_help = "Display pacing in seconds. Applied twice per stop (moving, then unloading/boarding). 0 disables pacing."
    )]
    pub moving_time: Option<u64>,

    /// Number of floors in the building
    #[arg(long, help = "Number of floors in the building (at least 2)")]
    pub floors: Option<u32>,

    /// Elevator loading capacity
    #[arg(long, help = "Elevator loading capacity")]
    pub capacity: Option<usize>,

    /// Number of floors the elevator will travel
    #[arg(long, help = "Number of floors the elevator will travel")]
    pub steps: Option<usize>,

    /// Coin-flip threshold for rerolling destinations each step
    #[arg(
        long,
        help = "Reroll threshold (0.0-1.0)",
        long_help = "After every step the building draws a value in [0,1); residents reroll destinations only when the draw exceeds this threshold. Default: 0.5"
    )]
    pub reroll_threshold: Option<f64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Names file, one name per line
    #[arg(long, help = "File with one passenger name per line")]
    pub names_file: Option<String>,

    /// Output path for the JSON run report
    #[arg(long, help = "Output path for the JSON run report")]
    pub report_output: Option<String>,

    /// Directory for rolling log files
    #[arg(long, help = "Write logs to daily rolling files in this directory")]
    pub log_dir: Option<String>,

    /// Emit logs as JSON
    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Suppress per-floor rendering
    #[arg(short, long, help = "Do not render the building after each step")]
    pub quiet: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of people entering the building
    pub passenger_count: Option<usize>,

    /// Seconds of pacing per elevator phase
    pub moving_time_secs: Option<u64>,

    /// Number of floors in the building
    pub floor_count: Option<u32>,

    /// Elevator loading capacity
    pub elevator_capacity: Option<usize>,

    /// Number of floors the elevator will travel
    pub steps: Option<usize>,

    /// Coin-flip threshold for rerolling destinations
    pub reroll_threshold: Option<f64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Names file, one name per line
    pub names_file: Option<String>,

    /// Output path for the JSON run report
    pub report_output: Option<String>,
}

/// Configuration for the elevator simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// Number of people entering the building
    pub passenger_count: usize,

    /// Seconds of pacing per elevator phase
    pub moving_time_secs: u64,

    /// Number of floors in the building
    pub floor_count: u32,

    /// Elevator loading capacity
    pub elevator_capacity: usize,

    /// Number of floors the elevator will travel
    pub steps: usize,

    /// Coin-flip threshold for rerolling destinations
    pub reroll_threshold: f64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Names file, one name per line (built-in list when absent)
    pub names_file: Option<String>,

    /// Output path for the JSON run report
    pub report_output: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Passenger count is invalid
    #[error("Passenger count must be greater than 0, got {0}")]
    InvalidPassengerCount(usize),

    /// Floor count is invalid
    #[error("Floor count must be at least 2, got {0}")]
    InvalidFloorCount(u32),

    /// Elevator capacity is invalid
    #[error("Elevator capacity must be greater than 0, got {0}")]
    InvalidCapacity(usize),

    /// Step count is invalid
    #[error("Step count must be greater than 0, got {0}")]
    InvalidStepCount(usize),

    /// Probability value is out of range
    #[error("Invalid probability for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability {
        /// Name of the field with the invalid value
        field: String,
        /// The invalid value
        value: f64,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            passenger_count: 10,
            moving_time_secs: 1,
            floor_count: 5,
            elevator_capacity: 4,
            steps: 20,
            reroll_threshold: DEFAULT_REROLL_THRESHOLD,
            seed: None,
            names_file: None,
            report_output: None,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            passenger_count: config_file.passenger_count.unwrap_or(defaults.passenger_count),
            moving_time_secs: config_file.moving_time_secs.unwrap_or(defaults.moving_time_secs),
            floor_count: config_file.floor_count.unwrap_or(defaults.floor_count),
            elevator_capacity: config_file
                .elevator_capacity
                .unwrap_or(defaults.elevator_capacity),
            steps: config_file.steps.unwrap_or(defaults.steps),
            reroll_threshold: config_file.reroll_threshold.unwrap_or(defaults.reroll_threshold),
            seed: config_file.seed.or(defaults.seed),
            names_file: config_file.names_file.or(defaults.names_file),
            report_output: config_file.report_output.or(defaults.report_output),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.passengers {
            config.passenger_count = value;
        }
        if let Some(value) = args.moving_time {
            config.moving_time_secs = value;
        }
        if let Some(value) = args.floors {
            config.floor_count = value;
        }
        if let Some(value) = args.capacity {
            config.elevator_capacity = value;
        }
        if let Some(value) = args.steps {
            config.steps = value;
        }
        if let Some(value) = args.reroll_threshold {
            config.reroll_threshold = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.names_file {
            config.names_file = Some(value);
        }
        if let Some(value) = args.report_output {
            config.report_output = Some(value);
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.passenger_count == 0 {
            return Err(ConfigValidationError::InvalidPassengerCount(self.passenger_count));
        }

        // A single floor leaves the elevator nowhere to go
        if self.floor_count < 2 {
            return Err(ConfigValidationError::InvalidFloorCount(self.floor_count));
        }

        if self.elevator_capacity == 0 {
            return Err(ConfigValidationError::InvalidCapacity(self.elevator_capacity));
        }

        if self.steps == 0 {
            return Err(ConfigValidationError::InvalidStepCount(self.steps));
        }

        self.validate_probability("reroll_threshold", self.reroll_threshold)?;

        Ok(())
    }

    fn validate_probability(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidProbability {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }
}
