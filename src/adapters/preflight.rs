use crate::domain::model::Endpoint;
use crate::utils::error::{LoadTestError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const PREFLIGHT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreflightReport {
    pub status: u16,
    /// `status` field of the JSON body, when the target sends one.
    pub reported_status: Option<String>,
}

/// One `GET /health` against the target before any simulated user starts.
pub async fn probe_health(host: &str) -> Result<PreflightReport> {
    let url = Url::parse(host)
        .and_then(|base| base.join(&Endpoint::Health.path("")))
        .map_err(|e| LoadTestError::InvalidConfigValueError {
            field: "target.host".to_string(),
            value: host.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

    let client = Client::builder().timeout(PREFLIGHT_TIMEOUT).build()?;

    tracing::debug!("Preflight request to: {}", url);
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| LoadTestError::TargetUnavailable {
            host: host.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    tracing::debug!("Preflight response status: {}", status);

    if !status.is_success() {
        return Err(LoadTestError::TargetUnavailable {
            host: host.to_string(),
            reason: format!("{} answered with status {}", url.path(), status.as_u16()),
        });
    }

    let reported_status = match response.json::<HealthBody>().await {
        Ok(body) => {
            if let Some(message) = &body.message {
                tracing::info!("Target says: {}", message);
            }
            body.status
        }
        Err(_) => None,
    };

    Ok(PreflightReport {
        status: status.as_u16(),
        reported_status,
    })
}
