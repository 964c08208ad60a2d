//! Run Record
//!
//! The single artifact a run hands to plotting and analysis: the static
//! configuration and the ordered per-period statistics, written as JSON.

use money_events::PeriodStatistics;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::EconomyConfig;

/// Default record output path
pub const RECORD_OUTPUT_PATH: &str = "output/run.json";

/// A complete run: parameters in, statistics out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub seed: u64,
    pub parameters: EconomyConfig,
    pub periods: Vec<PeriodStatistics>,
}

impl RunRecord {
    pub fn to_json(&self) -> Result<String, OutputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the record, creating parent directories as needed.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Errors that can occur while writing or reading a run record.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::launch;

    fn record() -> RunRecord {
        let config = EconomyConfig {
            t_max: 3,
            repartition_of_roles: vec![2, 2, 2],
            storing_costs: vec![0.01, 0.04, 0.09],
            ..EconomyConfig::default()
        };
        launch(config, 11).unwrap()
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("run.json");

        let record = record();
        record.write_to(&path).unwrap();

        let loaded = RunRecord::read_from(&path).unwrap();
        assert_eq!(loaded.seed, 11);
        assert_eq!(loaded.parameters, record.parameters);
        assert_eq!(loaded.periods.len(), 3);
    }

    #[test]
    fn test_json_layout() {
        let json: serde_json::Value = serde_json::from_str(&record().to_json().unwrap()).unwrap();
        assert_eq!(json["parameters"]["agent_model"], "frequentist");
        assert_eq!(json["periods"].as_array().unwrap().len(), 3);
        assert!(json["periods"][0]["proportions"].is_array());
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            RunRecord::read_from("no/such/run.json"),
            Err(OutputError::Io(_))
        ));
    }
}
