//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum number of rounds to play
    pub max_rounds: u32,
    /// Number of sheep in the herd
    pub sheep_number: usize,
    /// Sheep spawn within [-position_limit, position_limit] on each axis
    pub position_limit: f64,
    /// Distance a sheep covers in one move
    pub sheep_step: f64,
    /// Distance the wolf covers in one move
    pub wolf_step: f64,
    /// Block for confirmation between rounds
    pub wait_each_round: bool,
    /// Random seed for reproducibility; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_rounds: 50,
            sheep_number: 15,
            position_limit: 10.0,
            sheep_step: 0.5,
            wolf_step: 1.0,
            wait_each_round: false,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Reject any non-positive round count, herd size, bound or step.
    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == 0 {
            return Err(Error::InvalidConfiguration(
                "max_rounds must be positive".to_string(),
            ));
        }
        if self.sheep_number == 0 {
            return Err(Error::InvalidConfiguration(
                "sheep_number must be positive".to_string(),
            ));
        }

        for (name, value) in [
            ("position_limit", self.position_limit),
            ("sheep_step", self.sheep_step),
            ("wolf_step", self.wolf_step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Where reports and logs are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Round-by-round positions (JSON)
    pub positions_path: PathBuf,
    /// Survivor counts per round (tab separated)
    pub survivors_path: PathBuf,
    /// Log file, used only when logging is enabled
    pub log_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            positions_path: PathBuf::from("pos.json"),
            survivors_path: PathBuf::from("alive.csv"),
            log_path: PathBuf::from("chase.log"),
        }
    }
}

impl OutputConfig {
    /// Default file names placed under `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let defaults = Self::default();
        Self {
            positions_path: dir.join(defaults.positions_path),
            survivors_path: dir.join(defaults.survivors_path),
            log_path: dir.join(defaults.log_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = SimulationConfig::default();
        assert_eq!(config.max_rounds, 50);
        assert_eq!(config.sheep_number, 15);
        assert_eq!(config.position_limit, 10.0);
        assert_eq!(config.sheep_step, 0.5);
        assert_eq!(config.wolf_step, 1.0);
        assert!(!config.wait_each_round);
        assert!(config.validate().is_ok());

        let output = OutputConfig::default();
        assert_eq!(output.positions_path, PathBuf::from("pos.json"));
        assert_eq!(output.survivors_path, PathBuf::from("alive.csv"));
    }

    #[test]
    fn test_validate_rejects_non_positive_values() {
        let cases = [
            SimulationConfig { max_rounds: 0, ..Default::default() },
            SimulationConfig { sheep_number: 0, ..Default::default() },
            SimulationConfig { position_limit: 0.0, ..Default::default() },
            SimulationConfig { sheep_step: -0.5, ..Default::default() },
            SimulationConfig { wolf_step: f64::NAN, ..Default::default() },
        ];

        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_validate_names_offending_field() {
        let config = SimulationConfig {
            wolf_step: -1.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("wolf_step"));
    }

    #[test]
    fn test_output_in_dir() {
        let output = OutputConfig::in_dir("out");
        assert_eq!(output.positions_path, Path::new("out").join("pos.json"));
        assert_eq!(output.survivors_path, Path::new("out").join("alive.csv"));
        assert_eq!(output.log_path, Path::new("out").join("chase.log"));
    }

    #[test]
    fn test_config_serialization() {
        let config = SimulationConfig {
            seed: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
