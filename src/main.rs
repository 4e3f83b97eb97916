// SCAN Elevator Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/scan-elevator-sim
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/scan-elevator-sim --passengers 20 --floors 6 --capacity 4 --steps 30 --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use scan_elevator_sim::simulation::{
    ConsoleRenderer, LoggingConfig, SimulationOrchestrator, SimulationStatistics,
};
use scan_elevator_sim::types::config::CliArgs;
use scan_elevator_sim::types::SimulationConfig;
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let mut logging = LoggingConfig::from_flags(args.verbose, args.debug, args.quiet);
    if args.json_logs {
        logging = logging.with_json_format();
    }
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir.clone());
    }
    let logging_guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting SCAN Elevator Simulator");

    if let Err(e) = run(args) {
        error!("Simulation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        // exit skips destructors; flush the log file first
        drop(logging_guard);
        process::exit(1);
    }

    info!("SCAN Elevator Simulator completed successfully");
    drop(logging_guard);
}

fn run(args: CliArgs) -> Result<()> {
    let quiet = args.quiet;
    let dry_run = args.dry_run;

    let config =
        SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_configuration_summary(&config);

    let mut orchestrator = SimulationOrchestrator::new(config.clone())
        .context("Failed to initialize simulation")?;

    let statistics = if quiet {
        orchestrator.run(&mut ())?.clone()
    } else {
        let mut renderer = ConsoleRenderer::new(io::stdout().lock(), config.moving_time_secs);
        orchestrator.run(&mut renderer)?.clone()
    };

    eprintln!();
    eprintln!("{}", statistics);

    if let Some(path) = &config.report_output {
        write_report(&statistics, path)?;
    }

    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Passengers: {}", config.passenger_count);
    eprintln!("  Floors: {}", config.floor_count);
    eprintln!("  Elevator Capacity: {}", config.elevator_capacity);
    eprintln!("  Steps: {}", config.steps);
    eprintln!("  Moving Time: {}s", config.moving_time_secs);
    eprintln!("  Reroll Threshold: {:.2}", config.reroll_threshold);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    if let Some(names) = &config.names_file {
        eprintln!("  Names File: {}", names);
    }
    eprintln!();
}

/// Write the JSON run report
fn write_report(statistics: &SimulationStatistics, path: &str) -> Result<()> {
    statistics
        .write_json(path)
        .with_context(|| format!("Failed to write run report to '{}'", path))?;
    info!("Run report written to: {}", path);
    eprintln!("Run report written to: {}", path);
    Ok(())
}
