//! Configuration System
//!
//! Economy parameters, loadable from TOML so experiments can be adjusted
//! without recompiling. Everything is checked by [`EconomyConfig::validate`]
//! before a single period runs.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "economy.toml";

/// Which decision rule the agents of an economy follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgentModel {
    /// Bounded-memory frequentist learner with softmax choice
    #[default]
    Frequentist,
    /// Accepts its consumption good, flips a fair coin otherwise
    Random,
}

impl AgentModel {
    pub fn name(self) -> &'static str {
        match self {
            AgentModel::Frequentist => "Frequentist Agent",
            AgentModel::Random => "Random Agent",
        }
    }
}

/// Learning and choice parameters of the frequentist agents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CognitiveParameters {
    /// Number of observations kept per estimate
    pub memory_span: usize,
    /// Softmax temperature
    pub temp: f64,
    /// Utility of consuming
    pub u: f64,
}

impl Default for CognitiveParameters {
    fn default() -> Self {
        Self {
            memory_span: 250,
            temp: 0.01,
            u: 1.0,
        }
    }
}

/// Complete economy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Number of periods to simulate
    pub t_max: u64,
    /// Number of agents of each role; role `i` consumes good `i`
    pub repartition_of_roles: Vec<usize>,
    /// Cost of holding each good for a period
    pub storing_costs: Vec<f64>,
    pub agent_model: AgentModel,
    pub cognitive_parameters: CognitiveParameters,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            t_max: 100,
            repartition_of_roles: vec![100, 100, 100, 100],
            storing_costs: vec![0.01, 0.04, 0.09, 0.12],
            agent_model: AgentModel::Frequentist,
            cognitive_parameters: CognitiveParameters::default(),
        }
    }
}

impl EconomyConfig {
    /// Three-good economy of random agents, the usual control experiment.
    pub fn random_baseline() -> Self {
        Self {
            t_max: 500,
            repartition_of_roles: vec![500, 500, 500],
            storing_costs: vec![0.01, 0.04, 0.09],
            agent_model: AgentModel::Random,
            cognitive_parameters: CognitiveParameters::default(),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn n_goods(&self) -> usize {
        self.storing_costs.len()
    }

    pub fn n_agents(&self) -> usize {
        self.repartition_of_roles.iter().sum()
    }

    /// Rejects any configuration the simulation cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storing_costs.len() != self.repartition_of_roles.len() {
            return Err(ConfigError::LengthMismatch {
                storing_costs: self.storing_costs.len(),
                roles: self.repartition_of_roles.len(),
            });
        }
        if self.n_goods() < 2 {
            return Err(ConfigError::TooFewGoods(self.n_goods()));
        }
        if let Some((good, &cost)) = self
            .storing_costs
            .iter()
            .enumerate()
            .find(|(_, cost)| !cost.is_finite() || **cost < 0.0)
        {
            return Err(ConfigError::InvalidStoringCost { good, cost });
        }
        if self.t_max == 0 {
            return Err(ConfigError::NoPeriods);
        }
        if self.n_agents() < 2 {
            return Err(ConfigError::TooFewAgents(self.n_agents()));
        }

        let params = &self.cognitive_parameters;
        if params.memory_span == 0 {
            return Err(ConfigError::EmptyMemory);
        }
        if !params.temp.is_finite() || params.temp <= 0.0 {
            return Err(ConfigError::InvalidTemperature(params.temp));
        }
        if !params.u.is_finite() {
            return Err(ConfigError::InvalidUtility(params.u));
        }
        Ok(())
    }
}

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{storing_costs} storing costs given for {roles} roles")]
    LengthMismatch { storing_costs: usize, roles: usize },

    #[error("an economy needs at least two goods, got {0}")]
    TooFewGoods(usize),

    #[error("storing cost of good {good} must be finite and non-negative, got {cost}")]
    InvalidStoringCost { good: usize, cost: f64 },

    #[error("t_max must be positive")]
    NoPeriods,

    #[error("matching needs at least two agents, got {0}")]
    TooFewAgents(usize),

    #[error("memory_span must be positive")]
    EmptyMemory,

    #[error("softmax temperature must be finite and positive, got {0}")]
    InvalidTemperature(f64),

    #[error("consumption utility must be finite, got {0}")]
    InvalidUtility(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EconomyConfig::default();
        assert_eq!(config.t_max, 100);
        assert_eq!(config.n_goods(), 4);
        assert_eq!(config.n_agents(), 400);
        assert_eq!(config.cognitive_parameters.memory_span, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_random_baseline_is_valid() {
        let config = EconomyConfig::random_baseline();
        assert_eq!(config.agent_model, AgentModel::Random);
        assert_eq!(config.n_agents(), 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config = EconomyConfig::from_str(
            r#"
            t_max = 20
            repartition_of_roles = [10, 10, 10]
            storing_costs = [0.01, 0.04, 0.09]
            agent_model = "random"

            [cognitive_parameters]
            memory_span = 50
            temp = 0.1
            "#,
        )
        .unwrap();

        assert_eq!(config.t_max, 20);
        assert_eq!(config.agent_model, AgentModel::Random);
        assert_eq!(config.cognitive_parameters.memory_span, 50);
        // Missing fields fall back to defaults
        assert_eq!(config.cognitive_parameters.u, 1.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EconomyConfig::random_baseline();
        let text = config.to_toml().unwrap();
        assert_eq!(EconomyConfig::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "t_max = 7").unwrap();

        let config = EconomyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.t_max, 7);
        assert_eq!(config.storing_costs, EconomyConfig::default().storing_costs);
    }

    #[test]
    fn test_missing_file() {
        let result = EconomyConfig::from_file("definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = EconomyConfig::from_str("t_max = \"many\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let config = EconomyConfig {
            repartition_of_roles: vec![10, 10],
            ..EconomyConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LengthMismatch { storing_costs: 4, roles: 2 })
        ));
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let base = EconomyConfig::default();

        let config = EconomyConfig { t_max: 0, ..base.clone() };
        assert!(matches!(config.validate(), Err(ConfigError::NoPeriods)));

        let config = EconomyConfig {
            storing_costs: vec![0.01],
            repartition_of_roles: vec![10],
            ..base.clone()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TooFewGoods(1))));

        let config = EconomyConfig {
            storing_costs: vec![0.01, -0.5, 0.09, 0.12],
            ..base.clone()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStoringCost { good: 1, .. })
        ));

        let config = EconomyConfig {
            repartition_of_roles: vec![1, 0, 0, 0],
            ..base.clone()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TooFewAgents(1))));

        let mut config = base.clone();
        config.cognitive_parameters.memory_span = 0;
        assert!(matches!(config.validate(), Err(ConfigError::EmptyMemory)));

        let mut config = base.clone();
        config.cognitive_parameters.temp = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTemperature(_))));

        let mut config = base;
        config.cognitive_parameters.u = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUtility(_))));
    }

    #[test]
    fn test_odd_population_is_allowed() {
        let config = EconomyConfig {
            repartition_of_roles: vec![1, 1, 1],
            storing_costs: vec![0.0, 0.0, 0.0],
            ..EconomyConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
