use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    #[default]
    LastResolved,
    LatestSubmitted,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub overlap: OverlapPolicy,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid classifier base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
