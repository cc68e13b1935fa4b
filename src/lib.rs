pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::CliConfig, LoadProfile, RunConfig, ScenarioSettings};
pub use core::attack::{build_attack, run_attack, weather_user_scenario};
pub use core::summary::RunSummary;
pub use utils::error::{LoadTestError, Result};
