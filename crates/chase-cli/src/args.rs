//! Command line arguments.

use crate::settings::IniSettings;
use chase_core::{Error, OutputConfig, Result, SimulationConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "chase",
    author,
    version,
    about = "Simulator of a wolf chasing a herd of sheep",
    long_about = None
)]
pub struct Args {
    /// Load position limit and step sizes from an .ini file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a log file at this level
    #[arg(short, long, value_enum, ignore_case = true)]
    pub log: Option<LogLevel>,

    /// Maximum number of rounds
    #[arg(short, long, default_value_t = 50)]
    pub rounds: u32,

    /// Number of sheep
    #[arg(short, long, default_value_t = 15)]
    pub sheep: usize,

    /// Wait for Enter after every round
    #[arg(short, long)]
    pub wait: bool,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for pos.json, alive.csv and chase.log
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            // tracing has nothing above error
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

impl Args {
    /// Resolve command line values and the optional .ini file into a
    /// validated configuration.
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        if self.rounds == 0 {
            return Err(Error::InvalidConfiguration(
                "number of rounds must be positive".to_string(),
            ));
        }
        if self.sheep == 0 {
            return Err(Error::InvalidConfiguration(
                "number of sheep must be positive".to_string(),
            ));
        }

        let mut config = SimulationConfig {
            max_rounds: self.rounds,
            sheep_number: self.sheep,
            wait_each_round: self.wait,
            seed: self.seed,
            ..Default::default()
        };

        if let Some(path) = &self.config {
            IniSettings::load(path)?.apply(&mut config);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn output_config(&self) -> OutputConfig {
        match &self.output_dir {
            Some(dir) => OutputConfig::in_dir(dir),
            None => OutputConfig::default(),
        }
    }
}
