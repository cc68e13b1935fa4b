use crate::domain::model::{ApiCall, CallOutcome};
use crate::domain::ports::WeatherApi;
use async_trait::async_trait;
use goose::goose::TransactionError;
use goose::prelude::*;

/// [`WeatherApi`] on top of one goose simulated user.
pub struct GooseWeatherClient<'a> {
    user: &'a mut GooseUser,
}

impl<'a> GooseWeatherClient<'a> {
    pub fn new(user: &'a mut GooseUser) -> Self {
        Self { user }
    }
}

#[async_trait]
impl<'a> WeatherApi for GooseWeatherClient<'a> {
    type Error = Box<TransactionError>;

    async fn send(&mut self, call: &ApiCall) -> Result<CallOutcome, Self::Error> {
        let request = GooseRequest::builder()
            .path(call.path.as_str())
            .name(call.label())
            .build();
        let mut goose = self.user.request(request).await?;

        let outcome = match &goose.response {
            Ok(response) => CallOutcome::Status(response.status().as_u16()),
            Err(error) => CallOutcome::Transport(error.to_string()),
        };

        if !outcome.is_success() {
            if let Some(reason) = &call.failure_reason {
                tracing::debug!("{} failed: {}", call.path, reason);
                // set_failure reports RequestFailed once the metric is flagged
                if let Err(error) = self.user.set_failure(reason, &mut goose.request, None, None) {
                    if !matches!(*error, TransactionError::RequestFailed { .. }) {
                        return Err(error);
                    }
                }
            }
        }

        Ok(outcome)
    }
}
