//! Behaviour of one simulated user, independent of the harness driving it.

use crate::domain::model::{ApiCall, CallOutcome, Endpoint, JourneyPlan, JourneyReport};
use crate::domain::ports::WeatherApi;

/// Current weather, then forecast, then history when the plan includes it.
///
/// A failed current-weather call ends the journey. Forecast and history
/// failures are flagged but the journey carries on.
pub async fn run_weather_journey<A: WeatherApi>(
    api: &mut A,
    plan: &JourneyPlan,
) -> Result<JourneyReport, A::Error> {
    let mut report = JourneyReport::default();
    let city = plan.city.as_str();

    let current = ApiCall::for_city(
        Endpoint::CurrentWeather,
        city,
        format!("Could not get current weather for {}", city),
    );
    let outcome = api.send(&current).await?;
    let current_ok = outcome.is_success();
    report.calls.push((Endpoint::CurrentWeather, outcome));

    if !current_ok {
        tracing::debug!("current weather failed for {}, skipping the rest of the journey", city);
        report.aborted = true;
        return Ok(report);
    }

    let forecast = ApiCall::for_city(
        Endpoint::Forecast,
        city,
        format!("Could not get forecast for {}", city),
    );
    let outcome = api.send(&forecast).await?;
    report.calls.push((Endpoint::Forecast, outcome));

    if plan.include_history {
        let history = ApiCall::for_city(
            Endpoint::History,
            city,
            format!("Could not get history for {}", city),
        );
        let outcome = api.send(&history).await?;
        report.calls.push((Endpoint::History, outcome));
    }

    Ok(report)
}

/// Liveness probe. The outcome is left to the harness to classify.
pub async fn run_health_check<A: WeatherApi>(api: &mut A) -> Result<CallOutcome, A::Error> {
    api.send(&ApiCall::health()).await
}
