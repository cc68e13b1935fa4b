pub mod cli;
pub mod toml_config;

use crate::domain::model::DEFAULT_CITIES;
use crate::utils::error::{LoadTestError, Result};
use crate::utils::validation::{self, Validate};
use cli::CliConfig;
use serde::Serialize;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_PRIMARY_WEIGHT: usize = 3;
pub const DEFAULT_HEALTH_WEIGHT: usize = 1;
pub const DEFAULT_HISTORY_PROBABILITY: f64 = 0.1;
pub const DEFAULT_WAIT_MIN_SECONDS: u64 = 1;
pub const DEFAULT_WAIT_MAX_SECONDS: u64 = 3;

/// What every simulated user shares. Immutable once the attack starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSettings {
    pub cities: Vec<String>,
    pub primary_weight: usize,
    pub health_weight: usize,
    pub history_probability: f64,
    pub wait_min: Duration,
    pub wait_max: Duration,
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
            primary_weight: DEFAULT_PRIMARY_WEIGHT,
            health_weight: DEFAULT_HEALTH_WEIGHT,
            history_probability: DEFAULT_HISTORY_PROBABILITY,
            wait_min: Duration::from_secs(DEFAULT_WAIT_MIN_SECONDS),
            wait_max: Duration::from_secs(DEFAULT_WAIT_MAX_SECONDS),
        }
    }
}

impl ScenarioSettings {
    /// Expected share of task selections going to (weather journey, health check).
    pub fn task_shares(&self) -> (f64, f64) {
        let total = (self.primary_weight + self.health_weight) as f64;
        (
            self.primary_weight as f64 / total,
            self.health_weight as f64 / total,
        )
    }
}

impl Validate for ScenarioSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_cities("scenario.cities", &self.cities)?;
        validation::validate_positive_number("scenario.primary_weight", self.primary_weight, 1)?;
        validation::validate_positive_number("scenario.health_weight", self.health_weight, 1)?;
        validation::validate_range(
            "scenario.history_probability",
            self.history_probability,
            0.0,
            1.0,
        )?;
        validation::validate_range(
            "scenario.wait_time.min_seconds",
            self.wait_min.as_secs(),
            0,
            self.wait_max.as_secs(),
        )?;
        Ok(())
    }
}

/// Ramp-up and stop conditions, handed to the harness as defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadProfile {
    pub host: String,
    pub users: Option<usize>,
    pub hatch_rate: Option<String>,
    pub run_time_seconds: Option<usize>,
    pub iterations: Option<usize>,
    pub report_file: Option<String>,
    /// Keep goose's telnet and WebSocket controllers running.
    pub controllers: bool,
}

impl Validate for LoadProfile {
    fn validate(&self) -> Result<()> {
        validation::validate_url("target.host", &self.host)?;
        if let Some(users) = self.users {
            validation::validate_positive_number("load.users", users, 1)?;
        }
        if let Some(hatch_rate) = &self.hatch_rate {
            match hatch_rate.parse::<f64>() {
                Ok(rate) if rate > 0.0 => {}
                _ => {
                    return Err(LoadTestError::InvalidConfigValueError {
                        field: "load.hatch_rate".to_string(),
                        value: hatch_rate.clone(),
                        reason: "Hatch rate must be a positive number".to_string(),
                    })
                }
            }
        }
        if let Some(iterations) = self.iterations {
            validation::validate_positive_number("load.iterations", iterations, 1)?;
            if self.run_time_seconds.is_some() {
                return Err(LoadTestError::ConfigError {
                    message: "load.iterations and load.run_time_seconds cannot be combined"
                        .to_string(),
                });
            }
        }
        if let Some(report_file) = &self.report_file {
            validation::validate_path("load.report_file", report_file)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunConfig {
    pub scenario: ScenarioSettings,
    pub load: LoadProfile,
}

impl RunConfig {
    /// Command line beats the scenario file, which beats the defaults.
    pub fn resolve(cli: &CliConfig, file: Option<TomlConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = ScenarioSettings::default();

        let cities = if !cli.cities.is_empty() {
            cli.cities.clone()
        } else {
            file.scenario.cities.unwrap_or(defaults.cities)
        };

        let wait = file.scenario.wait_time.unwrap_or_default();
        let scenario = ScenarioSettings {
            cities,
            primary_weight: file
                .scenario
                .primary_weight
                .unwrap_or(defaults.primary_weight),
            health_weight: file
                .scenario
                .health_weight
                .unwrap_or(defaults.health_weight),
            history_probability: cli
                .history_probability
                .or(file.scenario.history_probability)
                .unwrap_or(defaults.history_probability),
            wait_min: wait
                .min_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.wait_min),
            wait_max: wait
                .max_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.wait_max),
        };

        let host = cli.host.clone().or(file.target.host);
        let host = validation::validate_required_field("target.host", &host)?.clone();

        let load = LoadProfile {
            host,
            users: cli.users.or(file.load.users),
            hatch_rate: cli.hatch_rate.clone().or(file.load.hatch_rate),
            run_time_seconds: cli.run_time.or(file.load.run_time_seconds),
            iterations: cli.iterations.or(file.load.iterations),
            report_file: cli.report_file.clone().or(file.load.report_file),
            controllers: cli.controllers,
        };

        Ok(Self { scenario, load })
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        self.scenario.validate()?;
        self.load.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> CliConfig {
        let mut argv = vec!["weather-loadtest"];
        argv.extend_from_slice(args);
        CliConfig::parse_from(argv)
    }

    #[test]
    fn test_defaults_match_the_published_scenario() {
        let settings = ScenarioSettings::default();
        assert_eq!(settings.cities.len(), 22);
        assert!(settings.cities.iter().any(|c| c == "Tokyo"));
        assert_eq!(settings.history_probability, 0.1);
        assert_eq!(settings.wait_min, Duration::from_secs(1));
        assert_eq!(settings.wait_max, Duration::from_secs(3));
        assert!(settings.primary_weight > settings.health_weight);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_task_shares() {
        let settings = ScenarioSettings::default();
        let (journey, health) = settings.task_shares();
        assert!((journey - 0.75).abs() < 1e-9);
        assert!((health - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[target]
host = "http://from-file:3000"

[scenario]
cities = ["Cairo", "Lagos"]
history_probability = 0.5

[load]
users = 5
"#,
        )
        .unwrap();

        let resolved = RunConfig::resolve(
            &cli(&["-H", "http://from-cli:3000", "-u", "50", "--cities", "Rome"]),
            Some(file),
        )
        .unwrap();

        assert_eq!(resolved.load.host, "http://from-cli:3000");
        assert_eq!(resolved.load.users, Some(50));
        assert_eq!(resolved.scenario.cities, vec!["Rome".to_string()]);
        assert_eq!(resolved.scenario.history_probability, 0.5);
        assert!(resolved.validate().is_ok());
    }

    #[test]
    fn test_missing_host_is_reported() {
        let result = RunConfig::resolve(&cli(&[]), None);
        assert!(matches!(
            result,
            Err(LoadTestError::MissingConfigError { ref field }) if field == "target.host"
        ));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut resolved = RunConfig::resolve(&cli(&["-H", "http://localhost:3000"]), None).unwrap();
        assert!(resolved.validate().is_ok());

        resolved.scenario.history_probability = 1.2;
        assert!(resolved.validate().is_err());

        resolved.scenario.history_probability = 0.1;
        resolved.scenario.health_weight = 0;
        assert!(resolved.validate().is_err());

        resolved.scenario.health_weight = 1;
        resolved.scenario.wait_min = Duration::from_secs(5);
        assert!(resolved.validate().is_err());

        resolved.scenario.wait_min = Duration::from_secs(1);
        resolved.load.hatch_rate = Some("fast".to_string());
        assert!(resolved.validate().is_err());

        resolved.load.hatch_rate = Some("2".to_string());
        resolved.load.iterations = Some(10);
        resolved.load.run_time_seconds = Some(60);
        assert!(matches!(
            resolved.validate(),
            Err(LoadTestError::ConfigError { .. })
        ));
    }
}
