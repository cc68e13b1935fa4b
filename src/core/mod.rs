pub mod attack;
pub mod journey;
pub mod summary;

pub use crate::domain::model::{ApiCall, CallOutcome, Endpoint, JourneyPlan, JourneyReport};
pub use crate::domain::ports::WeatherApi;
pub use crate::utils::error::Result;
