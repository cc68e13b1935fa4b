use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadTestError {
    #[error("Load test harness error: {0}")]
    HarnessError(#[from] goose::GooseError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Target {host} is not ready: {reason}")]
    TargetUnavailable { host: String, reason: String },
}

impl LoadTestError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LoadTestError::HarnessError(_) => {
                "Check the load profile (users, hatch rate, run time) and that the controller ports are free"
            }
            LoadTestError::HttpError(_) | LoadTestError::TargetUnavailable { .. } => {
                "Make sure the weather API is running and reachable from this machine"
            }
            LoadTestError::IoError(_) => "Check that the file exists and the path is writable",
            LoadTestError::SerializationError(_) | LoadTestError::TomlError(_) => {
                "Check the scenario file syntax"
            }
            LoadTestError::ConfigError { .. }
            | LoadTestError::MissingConfigError { .. }
            | LoadTestError::InvalidConfigValueError { .. } => {
                "Fix the command line flags or the scenario file and try again"
            }
        }
    }

    /// Process exit code: 1 for configuration, 2 for the target, 3 for the harness or system.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadTestError::ConfigError { .. }
            | LoadTestError::MissingConfigError { .. }
            | LoadTestError::InvalidConfigValueError { .. }
            | LoadTestError::TomlError(_) => 1,
            LoadTestError::HttpError(_) | LoadTestError::TargetUnavailable { .. } => 2,
            LoadTestError::HarnessError(_)
            | LoadTestError::IoError(_)
            | LoadTestError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadTestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_error_class() {
        let invalid = LoadTestError::InvalidConfigValueError {
            field: "scenario.cities".to_string(),
            value: "[]".to_string(),
            reason: "at least one city is required".to_string(),
        };
        assert_eq!(invalid.exit_code(), 1);

        let unavailable = LoadTestError::TargetUnavailable {
            host: "http://localhost:3000".to_string(),
            reason: "status 503".to_string(),
        };
        assert_eq!(unavailable.exit_code(), 2);
        assert!(unavailable.to_string().contains("http://localhost:3000"));

        let io = LoadTestError::IoError(std::io::Error::other("disk full"));
        assert_eq!(io.exit_code(), 3);
    }
}
