use crate::utils::error::{LoadTestError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LoadTestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LoadTestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LoadTestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LoadTestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LoadTestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(LoadTestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| LoadTestError::MissingConfigError {
            field: field_name.to_string(),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LoadTestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // written so that NaN is rejected as well
    if !(value >= min && value <= max) {
        return Err(LoadTestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// The city list must be non-empty, without blank or repeated names.
pub fn validate_cities(field_name: &str, cities: &[String]) -> Result<()> {
    if cities.is_empty() {
        return Err(LoadTestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one city is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for city in cities {
        validate_non_empty_string(field_name, city)?;
        if !seen.insert(city.as_str()) {
            return Err(LoadTestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: city.clone(),
                reason: "City is listed more than once".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("host", "https://example.com").is_ok());
        assert!(validate_url("host", "http://localhost:3000").is_ok());
        assert!(validate_url("host", "").is_err());
        assert!(validate_url("host", "invalid-url").is_err());
        assert!(validate_url("host", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("scenario.primary_weight", 3, 1).is_ok());
        assert!(validate_positive_number("scenario.health_weight", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range_rejects_nan() {
        assert!(validate_range("scenario.history_probability", 0.1, 0.0, 1.0).is_ok());
        assert!(validate_range("scenario.history_probability", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range("scenario.history_probability", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_validate_cities() {
        let cities = vec!["Paris".to_string(), "New York".to_string()];
        assert!(validate_cities("scenario.cities", &cities).is_ok());

        assert!(validate_cities("scenario.cities", &[]).is_err());
        assert!(validate_cities("scenario.cities", &["  ".to_string()]).is_err());

        let repeated = vec!["Rome".to_string(), "Rome".to_string()];
        assert!(validate_cities("scenario.cities", &repeated).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("target.host", &missing),
            Err(LoadTestError::MissingConfigError { .. })
        ));
    }
}
