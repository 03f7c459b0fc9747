//! CLI entry point for the GPIO simulator: runs `ACTION=PIN` steps against a
//! fresh Orange Pi One board and prints the resulting pin table.

use clap::Parser;
use orangepi_gpio::config::{self, SimConfig};
use orangepi_gpio::gpio::{Level, Mode, Pull};
use orangepi_gpio::script::{self, Step};
use std::path::PathBuf;
use std::process::ExitCode;

/// Orange Pi One GPIO simulator
#[derive(Parser, Debug)]
#[command(name = "opi-gpio-sim", about = "Run GPIO operations against a simulated Orange Pi One.")]
struct Cli {
    /// Path to a TOML config file (overrides defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level, takes precedence over the config file
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print the final pin table as JSON
    #[arg(long)]
    json: bool,

    /// Steps to run in order (e.g. on=PA13 toggle=gpio1p8 peek=PA13)
    #[arg(value_parser = parse_step)]
    steps: Vec<Step>,
}

fn parse_step(s: &str) -> Result<Step, String> {
    s.parse().map_err(|e: orangepi_gpio::GpioError| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut sim_config = match cli.config {
        Some(ref path) => match config::load_config(&path.to_string_lossy()) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    if let Some(level) = cli.log_level {
        sim_config.logging.level = level;
    }

    let level = match sim_config.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut board = match sim_config.build_board() {
        Ok(board) => board,
        Err(e) => {
            tracing::error!("Failed to set up board: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Simulating {} with {} steps", board, cli.steps.len());

    let outcomes = match script::run_steps(&mut board, &cli.steps) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            tracing::error!("Step failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let snapshot = board.store().snapshot();
    if cli.json {
        let report = serde_json::json!({
            "board": board.to_string(),
            "steps": outcomes,
            "pins": snapshot,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                tracing::error!("Failed to encode report: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    for outcome in &outcomes {
        println!("{:<24} {}", outcome.step.to_string(), outcome.outcome);
    }
    println!();
    println!("{:>4}  {:<7} {:<5} {:<5}", "pin", "mode", "pull", "value");
    for (pin, record) in &snapshot {
        println!(
            "{:>4}  {:<7} {:<5} {:<5}",
            pin.to_string(),
            record.mode.map(mode_label).unwrap_or("-"),
            record.pull.map(pull_label).unwrap_or("-"),
            record.value.map(level_label).unwrap_or("-"),
        );
    }
    ExitCode::SUCCESS
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Input => "input",
        Mode::Output => "output",
    }
}

fn pull_label(pull: Pull) -> &'static str {
    match pull {
        Pull::None => "none",
        Pull::Up => "up",
        Pull::Down => "down",
    }
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Low => "low",
        Level::High => "high",
    }
}
