use crate::adapters::goose_client::GooseWeatherClient;
use crate::config::{RunConfig, ScenarioSettings};
use crate::core::journey::{run_health_check, run_weather_journey};
use crate::domain::model::JourneyPlan;
use crate::utils::error::Result;
use goose::config::GooseConfiguration;
use goose::goose::TransactionFunction;
use goose::metrics::GooseMetrics;
use goose::prelude::*;
use std::sync::Arc;

pub const SCENARIO_NAME: &str = "WeatherUser";

async fn announce_user(user: &mut GooseUser) -> TransactionResult {
    tracing::info!(
        "Simulated user {} is starting its journey",
        user.weighted_users_index
    );
    Ok(())
}

async fn weather_journey(user: &mut GooseUser, settings: &ScenarioSettings) -> TransactionResult {
    let plan = {
        let mut rng = rand::thread_rng();
        JourneyPlan::draw(&settings.cities, settings.history_probability, &mut rng)
    };
    let Some(plan) = plan else {
        tracing::warn!("No city configured, skipping weather journey");
        return Ok(());
    };

    let mut client = GooseWeatherClient::new(user);
    let report = run_weather_journey(&mut client, &plan).await?;
    if report.aborted {
        tracing::debug!("Journey for {} stopped after current weather", plan.city);
    }
    Ok(())
}

async fn health_check(user: &mut GooseUser) -> TransactionResult {
    let mut client = GooseWeatherClient::new(user);
    run_health_check(&mut client).await?;
    Ok(())
}

/// One goose scenario: the weather journey and the health check as weighted
/// transactions, a startup log line, and the idle pause between tasks.
pub fn weather_user_scenario(settings: Arc<ScenarioSettings>) -> Result<Scenario> {
    let journey_settings = Arc::clone(&settings);
    let journey: TransactionFunction = Arc::new(move |user| {
        let settings = Arc::clone(&journey_settings);
        Box::pin(async move { weather_journey(user, &settings).await })
    });

    let mut scenario = scenario!(SCENARIO_NAME)
        .register_transaction(
            transaction!(announce_user)
                .set_name("announce_user")
                .set_on_start(),
        )
        .register_transaction(
            Transaction::new(journey)
                .set_name("weather_journey")
                .set_weight(settings.primary_weight)?,
        )
        .register_transaction(
            transaction!(health_check)
                .set_name("health_check")
                .set_weight(settings.health_weight)?,
        );

    // goose treats a zero maximum as "no pause"
    if !settings.wait_max.is_zero() {
        scenario = scenario.set_wait_time(settings.wait_min, settings.wait_max)?;
    }

    Ok(scenario)
}

/// Registers the scenario and hands the load profile to goose as defaults.
///
/// goose resolves `iterations` from its configuration before consulting
/// defaults, so the stop condition is written into the configuration itself.
pub fn build_attack(config: &RunConfig) -> Result<GooseAttack> {
    let load = &config.load;
    let settings = Arc::new(config.scenario.clone());

    let mut configuration = GooseConfiguration::default();
    configuration.iterations = load.iterations.unwrap_or(0);

    let mut attack = GooseAttack::initialize_with_config(configuration)?
        .register_scenario(weather_user_scenario(settings)?)
        .set_scheduler(GooseScheduler::Random)
        .set_default(GooseDefault::Host, load.host.as_str())?;

    if !load.controllers {
        attack = attack
            .set_default(GooseDefault::NoTelnet, true)?
            .set_default(GooseDefault::NoWebSocket, true)?;
    }
    if let Some(users) = load.users {
        attack = attack.set_default(GooseDefault::Users, users)?;
    }
    if let Some(hatch_rate) = &load.hatch_rate {
        attack = attack.set_default(GooseDefault::HatchRate, hatch_rate.as_str())?;
    }
    if let Some(run_time) = load.run_time_seconds {
        attack = attack.set_default(GooseDefault::RunTime, run_time)?;
    }
    if let Some(report_file) = &load.report_file {
        attack = attack.set_default(GooseDefault::ReportFile, report_file.as_str())?;
    }

    Ok(*attack)
}

pub async fn run_attack(config: &RunConfig) -> Result<GooseMetrics> {
    tracing::info!(
        "Attacking {} with {} cities, weights {}:{}",
        config.load.host,
        config.scenario.cities.len(),
        config.scenario.primary_weight,
        config.scenario.health_weight
    );
    let metrics = build_attack(config)?.execute().await?;
    Ok(metrics)
}
