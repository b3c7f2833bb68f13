//! Build-time configuration.
//!
//! The app is a static bundle, so settings are baked in from the
//! environment at compile time (`CLINIC_API_URL=... trunk build`) and fall
//! back to development defaults.

/// Settings shared by every screen
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without trailing slash
    pub api_base_url: String,
    pub log_level: log::Level,
    /// How many notifications to request at once
    pub notification_limit: u32,
    /// Page size for list endpoints
    pub page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            log_level: log::Level::Info,
            notification_limit: 20,
            page_size: 100,
        }
    }
}

impl AppConfig {
    /// Configuration from the compile-time environment
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CLINIC_API_URL"),
            option_env!("CLINIC_LOG_LEVEL"),
            option_env!("CLINIC_NOTIFICATION_LIMIT"),
            option_env!("CLINIC_PAGE_SIZE"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        log_level: Option<&str>,
        notification_limit: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            log_level: log_level.map(parse_log_level).unwrap_or(defaults.log_level),
            notification_limit: parse_positive(notification_limit)
                .map(|limit| limit.min(100))
                .unwrap_or(defaults.notification_limit),
            page_size: parse_positive(page_size).unwrap_or(defaults.page_size),
        }
    }
}

/// Parse a level name, defaulting to `Info` for anything unrecognised
pub fn parse_log_level(raw: &str) -> log::Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => log::Level::Error,
        "warn" | "warning" => log::Level::Warn,
        "debug" => log::Level::Debug,
        "trace" => log::Level::Trace,
        _ => log::Level::Info,
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_values_are_normalised() {
        let config = AppConfig::from_values(
            Some(" https://api.clinicabak.cl/ "),
            Some("DEBUG"),
            Some("500"),
            Some("50"),
        );
        assert_eq!(config.api_base_url, "https://api.clinicabak.cl");
        assert_eq!(config.log_level, log::Level::Debug);
        // backend caps the notification limit at 100
        assert_eq!(config.notification_limit, 100);
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("verbose"), Some("0"), Some("many"));
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.notification_limit, 20);
        assert_eq!(config.page_size, 100);
    }
}
