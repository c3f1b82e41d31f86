use crate::utils::error::{Result, UtilError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str, allowed_schemes: &[&str]) -> Result<()> {
    if url_str.is_empty() {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => {
            if allowed_schemes.contains(&url.scheme()) {
                Ok(())
            } else {
                Err(UtilError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: format!(
                        "Unsupported URL scheme: {}. Allowed schemes: {}",
                        url.scheme(),
                        allowed_schemes.join(", ")
                    ),
                })
            }
        }
        Err(e) => Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_min(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UtilError::InvalidConfigValueError {
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
    fn test_validate_url() {
        let http = ["http", "https"];
        assert!(validate_url("http_proxy", "https://proxy.example.com:8080", &http).is_ok());
        assert!(validate_url("http_proxy", "http://127.0.0.1:3128", &http).is_ok());
        assert!(validate_url("http_proxy", "", &http).is_err());
        assert!(validate_url("http_proxy", "invalid-url", &http).is_err());
        assert!(validate_url("http_proxy", "socks5://127.0.0.1:1080", &http).is_err());
        assert!(validate_url("socks5_proxy", "socks5://127.0.0.1:1080", &["socks5"]).is_ok());
    }

    #[test]
    fn test_validate_min() {
        assert!(validate_min("max_attempts", 3, 1).is_ok());
        assert!(validate_min("max_attempts", 1, 1).is_ok());

        let err = validate_min("max_attempts", 0, 1).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("max_attempts"));
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("socks5_network", "tcp", &["tcp", "udp"]).is_ok());
        assert!(validate_one_of("socks5_network", "TCP", &["tcp", "udp"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("local_addr", "0.0.0.0").is_ok());
        assert!(validate_non_empty_string("local_addr", "   ").is_err());
    }
}
