use std::env;

use url::Url;

use super::env::{
    ApiConfig, AppConfig, ConfigError, DirectoryConfig, LoggingConfig, OverlapPolicy,
    SessionConfig,
};

pub const DEFAULT_API_URL: &str = "https://ai-email-response.onrender.com";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api = ApiConfig {
            base_url: parse_base_url(
                &env::var("CLASSIFIER_API_URL")
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            )?,
        };

        let session = SessionConfig {
            overlap: match env::var("SESSION_OVERLAP_POLICY") {
                Ok(value) if !value.trim().is_empty() => parse_overlap_policy(&value)?,
                _ => OverlapPolicy::default(),
            },
        };

        let directories = DirectoryConfig {
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        };

        Ok(Self {
            api,
            session,
            directories,
            logging,
        })
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_string()));
    }
    Ok(url)
}

pub fn parse_overlap_policy(raw: &str) -> Result<OverlapPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "last-resolved" | "last_resolved" => Ok(OverlapPolicy::LastResolved),
        "latest-submitted" | "latest_submitted" => Ok(OverlapPolicy::LatestSubmitted),
        _ => Err(ConfigError::Invalid {
            key: "SESSION_OVERLAP_POLICY",
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_accepts_http_and_https() {
        assert!(parse_base_url("http://localhost:8000").is_ok());
        let url = parse_base_url(" https://ai-email-response.onrender.com/ ").unwrap();
        assert_eq!(url.host_str(), Some("ai-email-response.onrender.com"));
    }

    #[test]
    fn base_url_rejects_other_schemes_and_garbage() {
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("/classify").is_err());
    }

    #[test]
    fn overlap_policy_names() {
        assert_eq!(
            parse_overlap_policy("last-resolved").unwrap(),
            OverlapPolicy::LastResolved
        );
        assert_eq!(
            parse_overlap_policy(" Latest-Submitted ").unwrap(),
            OverlapPolicy::LatestSubmitted
        );
        assert!(matches!(
            parse_overlap_policy("queue"),
            Err(ConfigError::Invalid { key: "SESSION_OVERLAP_POLICY", .. })
        ));
    }
}
