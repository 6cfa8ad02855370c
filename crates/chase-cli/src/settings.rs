//! `.ini` overrides for the spawn bound and step sizes.
//!
//! ```ini
//! [Sheep]
//! InitPosLimit = 10.0
//! MoveDist = 0.5
//!
//! [Wolf]
//! MoveDist = 1.0
//! ```

use chase_core::{Error, Result, SimulationConfig};
use config::{Config, File, FileFormat, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IniSettings {
    pub position_limit: f64,
    pub sheep_step: f64,
    pub wolf_step: f64,
}

impl IniSettings {
    /// Read all three values from `path`. Sections and keys match
    /// case-insensitively.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFound(format!(
                "configuration file {}",
                path.display()
            )));
        }

        let name = path.to_str().ok_or_else(|| {
            Error::InvalidConfiguration(format!("non UTF-8 path {}", path.display()))
        })?;

        let sections: HashMap<String, Value> = Config::builder()
            .add_source(File::new(name, FileFormat::Ini))
            .build()
            .and_then(|raw| raw.try_deserialize())
            .map_err(|e| Error::InvalidConfiguration(format!("{}: {}", path.display(), e)))?;

        let settings = Self {
            position_limit: lookup(&sections, "Sheep", "InitPosLimit")?,
            sheep_step: lookup(&sections, "Sheep", "MoveDist")?,
            wolf_step: lookup(&sections, "Wolf", "MoveDist")?,
        };

        for (name, value) in [
            ("Sheep.InitPosLimit", settings.position_limit),
            ("Sheep.MoveDist", settings.sheep_step),
            ("Wolf.MoveDist", settings.wolf_step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        debug!(
            position_limit = settings.position_limit,
            sheep_step = settings.sheep_step,
            wolf_step = settings.wolf_step,
            ".ini configuration file loaded"
        );
        Ok(settings)
    }

    pub fn apply(&self, config: &mut SimulationConfig) {
        config.position_limit = self.position_limit;
        config.sheep_step = self.sheep_step;
        config.wolf_step = self.wolf_step;
    }
}

fn lookup(sections: &HashMap<String, Value>, section: &str, key: &str) -> Result<f64> {
    let missing = || Error::InvalidConfiguration(format!("missing [{}] {}", section, key));

    let table = sections
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(section))
        .map(|(_, value)| value.clone())
        .ok_or_else(missing)?
        .into_table()
        .map_err(|_| missing())?;

    table
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
        .ok_or_else(missing)?
        .into_float()
        .map_err(|e| Error::InvalidConfiguration(format!("[{}] {}: {}", section, key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_ini(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chase.ini");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_settings() {
        let (_dir, path) = write_ini("[Sheep]\nInitPosLimit = 12\nMoveDist = 0.75\n\n[Wolf]\nMoveDist = 1.5\n");

        let settings = IniSettings::load(&path).unwrap();
        assert_eq!(
            settings,
            IniSettings {
                position_limit: 12.0,
                sheep_step: 0.75,
                wolf_step: 1.5,
            }
        );

        let mut config = SimulationConfig::default();
        settings.apply(&mut config);
        assert_eq!(config.position_limit, 12.0);
        assert_eq!(config.sheep_step, 0.75);
        assert_eq!(config.wolf_step, 1.5);
    }

    #[test]
    fn test_missing_key() {
        let (_dir, path) = write_ini("[Sheep]\nInitPosLimit = 12\n\n[Wolf]\nMoveDist = 1.5\n");
        let err = IniSettings::load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(err.to_string().contains("MoveDist"));
    }

    #[test]
    fn test_non_positive_value() {
        let (_dir, path) = write_ini("[Sheep]\nInitPosLimit = 12\nMoveDist = 0.5\n\n[Wolf]\nMoveDist = -1\n");
        let err = IniSettings::load(&path).unwrap_err();
        assert!(err.to_string().contains("Wolf.MoveDist"));
    }

    #[test]
    fn test_unparsable_value() {
        let (_dir, path) = write_ini("[Sheep]\nInitPosLimit = far\nMoveDist = 0.5\n\n[Wolf]\nMoveDist = 1\n");
        assert!(matches!(
            IniSettings::load(&path),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = IniSettings::load(dir.path().join("absent.ini"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
