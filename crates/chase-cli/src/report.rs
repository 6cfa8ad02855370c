//! Writes the round history and survivor counts to disk.

use chase_core::{OutputConfig, Result, RoundRecord, SurvivorCount};
use chase_world::SimulationResult;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub const SURVIVORS_HEADER: [&str; 2] = ["Round Number", "Number of alive sheep"];

pub struct ReportEmitter;

impl ReportEmitter {
    /// Write both reports to the locations in `output`
    pub fn write_all(result: &SimulationResult, output: &OutputConfig) -> Result<()> {
        Self::write_positions(&result.rounds, &output.positions_path)?;
        Self::write_survivors(&result.survivors, &output.survivors_path)?;
        Ok(())
    }

    /// JSON array of round records, indented by four spaces
    pub fn write_positions<P: AsRef<Path>>(rounds: &[RoundRecord], path: P) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);

        let mut serializer =
            serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
        rounds.serialize(&mut serializer)?;
        serializer.into_inner().flush()?;

        log_saved(path);
        Ok(())
    }

    /// Tab separated survivor counts with a header row
    pub fn write_survivors<P: AsRef<Path>>(survivors: &[SurvivorCount], path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);

        writeln!(writer, "{}", SURVIVORS_HEADER.join("\t"))?;
        for count in survivors {
            writeln!(writer, "{}\t{}", count.round_number, count.alive)?;
        }
        writer.flush()?;

        log_saved(path);
        Ok(())
    }
}

fn log_saved(path: &Path) {
    let shown = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    debug!(path = %shown.display(), "Information was saved");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chase_core::Position;
    use chase_world::SimulationState;
    use tempfile::tempdir;

    fn sample_result() -> SimulationResult {
        SimulationResult {
            rounds: vec![
                RoundRecord {
                    round_number: 1,
                    wolf_position: Position::new(0.5, 0.0),
                    sheep_positions: vec![Some(Position::new(1.0, -2.0)), Some(Position::new(3.0, 0.5))],
                },
                RoundRecord {
                    round_number: 2,
                    wolf_position: Position::new(1.0, -2.0),
                    sheep_positions: vec![None, Some(Position::new(3.5, 0.5))],
                },
            ],
            survivors: vec![
                SurvivorCount { round_number: 1, alive: 2 },
                SurvivorCount { round_number: 2, alive: 1 },
            ],
            termination: SimulationState::RoundLimitReached,
            seed: 1,
        }
    }

    #[test]
    fn test_write_positions_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pos.json");

        ReportEmitter::write_positions(&sample_result().rounds, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n    {\n        \"round_number\": 1,"));

        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[1]["wolf_position"], serde_json::json!([1.0, -2.0]));
        assert_eq!(parsed[1]["sheep_positions"][0], serde_json::Value::Null);
        assert_eq!(parsed[1]["sheep_positions"][1], serde_json::json!([3.5, 0.5]));
    }

    #[test]
    fn test_write_survivors_tsv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alive.csv");

        ReportEmitter::write_survivors(&sample_result().survivors, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Round Number\tNumber of alive sheep\n1\t2\n2\t1\n");
    }

    #[test]
    fn test_write_all() {
        let dir = tempdir().unwrap();
        let output = OutputConfig::in_dir(dir.path());

        ReportEmitter::write_all(&sample_result(), &output).unwrap();

        assert!(output.positions_path.is_file());
        assert!(output.survivors_path.is_file());
        assert!(!output.log_path.exists());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("pos.json");
        assert!(ReportEmitter::write_positions(&[], path).is_err());
    }
}
