use crate::domain::model::{ApiCall, CallOutcome};
use async_trait::async_trait;

/// What a scenario needs from the HTTP harness for one simulated user.
#[async_trait]
pub trait WeatherApi: Send {
    type Error: Send;

    /// Issues the call under its grouped label. When the outcome is not a
    /// success and the call carries a failure reason, the measurement is
    /// flagged with that reason before the harness records it.
    async fn send(&mut self, call: &ApiCall) -> Result<CallOutcome, Self::Error>;
}
