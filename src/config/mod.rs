//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `KINDRED_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_CACHE_CAPACITY;
use crate::llm::{GenerationConfig, client::DEFAULT_BASE_URL};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `KINDRED_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding the sentence-encoder model files. Optional:
    /// without it the semantic metric falls back to vector-space.
    pub model_dir: Option<PathBuf>,

    /// Max entries in the in-memory score cache. Default: `10_000`.
    pub cache_capacity: u64,

    /// Base URL of the generation API. Default: `http://localhost:11434`.
    pub llm_base_url: String,

    /// Model name passed to the generation API. Default: `llama2`.
    pub llm_model: String,

    /// Timeout for generation requests, in seconds. Default: `30`.
    pub llm_timeout_secs: u64,

    /// Total generation attempts before the placeholder. Default: `3`.
    pub llm_max_retries: u32,

    /// Sampling temperature for generation. Default: `0.7`.
    pub llm_temperature: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_dir: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            llm_base_url: DEFAULT_BASE_URL.to_string(),
            llm_model: "llama2".to_string(),
            llm_timeout_secs: 30,
            llm_max_retries: 3,
            llm_temperature: 0.7,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "KINDRED_PORT";
    const ENV_BIND_ADDR: &'static str = "KINDRED_BIND_ADDR";
    const ENV_MODEL_DIR: &'static str = "KINDRED_MODEL_DIR";
    const ENV_CACHE_CAPACITY: &'static str = "KINDRED_CACHE_CAPACITY";
    const ENV_LLM_URL: &'static str = "KINDRED_LLM_URL";
    const ENV_LLM_MODEL: &'static str = "KINDRED_LLM_MODEL";
    const ENV_LLM_TIMEOUT_SECS: &'static str = "KINDRED_LLM_TIMEOUT_SECS";
    const ENV_LLM_MAX_RETRIES: &'static str = "KINDRED_LLM_MAX_RETRIES";
    const ENV_LLM_TEMPERATURE: &'static str = "KINDRED_LLM_TEMPERATURE";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_dir = Self::parse_optional_path_from_env(Self::ENV_MODEL_DIR);
        let cache_capacity =
            Self::parse_u64_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity);
        let llm_base_url = Self::parse_string_from_env(Self::ENV_LLM_URL, defaults.llm_base_url);
        let llm_model = Self::parse_string_from_env(Self::ENV_LLM_MODEL, defaults.llm_model);
        let llm_timeout_secs =
            Self::parse_u64_from_env(Self::ENV_LLM_TIMEOUT_SECS, defaults.llm_timeout_secs);
        let llm_max_retries = Self::parse_u64_from_env(
            Self::ENV_LLM_MAX_RETRIES,
            defaults.llm_max_retries as u64,
        ) as u32;
        let llm_temperature =
            Self::parse_f32_from_env(Self::ENV_LLM_TEMPERATURE, defaults.llm_temperature);

        Ok(Self {
            port,
            bind_addr,
            model_dir,
            cache_capacity,
            llm_base_url,
            llm_model,
            llm_timeout_secs,
            llm_max_retries,
            llm_temperature,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Generation client settings derived from this config.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            base_url: self.llm_base_url.clone(),
            model: self.llm_model.clone(),
            timeout: Duration::from_secs(self.llm_timeout_secs),
            max_retries: self.llm_max_retries,
            temperature: self.llm_temperature,
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn parse_f32_from_env(var_name: &str, default: f32) -> f32 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
