use crate::utils::error::{PlannerError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PlannerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PlannerError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PlannerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PlannerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_latitude(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PlannerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Latitude must be finite".to_string(),
        });
    }
    validate_range(field_name, value, -90.0, 90.0)
}

pub fn validate_longitude(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PlannerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Longitude must be finite".to_string(),
        });
    }
    validate_range(field_name, value, -180.0, 180.0)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(validate_url("url", "https://example.com/feed").is_ok());
        assert!(validate_url("url", "http://localhost:8080").is_ok());
    }

    #[test]
    fn rejects_bad_urls() {
        assert!(validate_url("url", "").is_err());
        assert!(validate_url("url", "ftp://example.com").is_err());
        assert!(validate_url("url", "not a url").is_err());
    }

    #[test]
    fn latitude_bounds() {
        assert!(validate_latitude("lat", 43.65).is_ok());
        assert!(validate_latitude("lat", 90.0).is_ok());
        assert!(validate_latitude("lat", 90.1).is_err());
        assert!(validate_latitude("lat", f64::NAN).is_err());
    }

    #[test]
    fn longitude_bounds() {
        assert!(validate_longitude("lon", -79.38).is_ok());
        assert!(validate_longitude("lon", -180.0).is_ok());
        assert!(validate_longitude("lon", 180.5).is_err());
    }
}
