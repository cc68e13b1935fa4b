use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CITIES: [&str; 22] = [
    "Paris",
    "London",
    "Berlin",
    "Madrid",
    "Rome",
    "Moscow",
    "Istanbul",
    "Tokyo",
    "Sydney",
    "New York",
    "Los Angeles",
    "Chicago",
    "Toronto",
    "Buenos Aires",
    "Sao Paulo",
    "Cairo",
    "Lagos",
    "Beijing",
    "Shanghai",
    "Mumbai",
    "Delhi",
    "Jakarta",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    CurrentWeather,
    Forecast,
    History,
    Health,
}

impl Endpoint {
    /// Name the harness aggregates under, identical for every city.
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::CurrentWeather => "/weather/current/[city]",
            Endpoint::Forecast => "/weather/forecast/[city]",
            Endpoint::History => "/weather/history/[city]",
            Endpoint::Health => "/health",
        }
    }

    /// Literal request path. The city is encoded as one path segment.
    pub fn path(self, city: &str) -> String {
        let prefix = match self {
            Endpoint::CurrentWeather => "/weather/current/",
            Endpoint::Forecast => "/weather/forecast/",
            Endpoint::History => "/weather/history/",
            Endpoint::Health => return "/health".to_string(),
        };
        format!("{}{}", prefix, encode_segment(city))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn encode_segment(segment: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so any '+' left came from a space
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCall {
    pub endpoint: Endpoint,
    pub path: String,
    /// Flagged on the measurement when the response is not a success.
    pub failure_reason: Option<String>,
}

impl ApiCall {
    pub fn for_city(endpoint: Endpoint, city: &str, failure_reason: String) -> Self {
        Self {
            endpoint,
            path: endpoint.path(city),
            failure_reason: Some(failure_reason),
        }
    }

    pub fn health() -> Self {
        Self {
            endpoint: Endpoint::Health,
            path: Endpoint::Health.path(""),
            failure_reason: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.endpoint.label()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    Status(u16),
    /// No response was received at all.
    Transport(String),
}

impl CallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Status(code) if (200..300).contains(code))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JourneyPlan {
    pub city: String,
    pub include_history: bool,
}

impl JourneyPlan {
    /// Draws the city and the history decision before any request goes out.
    pub fn draw<R: Rng>(cities: &[String], history_probability: f64, rng: &mut R) -> Option<Self> {
        let city = cities.choose(rng)?;
        let draw: f64 = rng.gen();
        Some(Self::from_draw(city, draw, history_probability))
    }

    /// History is included when `draw < history_probability`.
    pub fn from_draw(city: &str, draw: f64, history_probability: f64) -> Self {
        Self {
            city: city.to_string(),
            include_history: draw < history_probability,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JourneyReport {
    pub calls: Vec<(Endpoint, CallOutcome)>,
    pub aborted: bool,
}

impl JourneyReport {
    pub fn count(&self, endpoint: Endpoint) -> usize {
        self.calls.iter().filter(|(e, _)| *e == endpoint).count()
    }

    pub fn failures(&self) -> usize {
        self.calls.iter().filter(|(_, o)| !o.is_success()).count()
    }
}
