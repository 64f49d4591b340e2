use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const ENV_ENDPOINT: &str = "REGFORM_ENDPOINT";
pub const ENV_PATH: &str = "REGFORM_PATH";
pub const ENV_TIMEOUT: &str = "REGFORM_TIMEOUT";
pub const ENV_SERVER_ERRORS: &str = "REGFORM_SERVER_ERRORS";

pub const DEFAULT_PATH: &str = "/api/form";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// in the browser requests go to the page origin
#[cfg(target_arch = "wasm32")]
const DEFAULT_ENDPOINT: &str = "";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

/// `REGFORM_*` variables present in the process environment.
pub(crate) fn env_config() -> HashMap<String, String> {
    let mut config = HashMap::new();
    for key in [ENV_ENDPOINT, ENV_PATH, ENV_TIMEOUT, ENV_SERVER_ERRORS] {
        if let Ok(value) = env::var(key) {
            config.insert(key.to_string(), value);
        }
    }
    config
}

/// How many server-reported field errors are applied per response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerErrorPolicy {
    /// Only the first field, in declaration order, with an error.
    #[default]
    FirstMatch,
    /// Every known field with an error.
    AllFields,
}

impl FromStr for ServerErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(ServerErrorPolicy::FirstMatch),
            "all" => Ok(ServerErrorPolicy::AllFields),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_SERVER_ERRORS.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    endpoint: String,
    path: String,
    timeout: Duration,
    error_policy: ServerErrorPolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            path: DEFAULT_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            error_policy: ServerErrorPolicy::default(),
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_map(&env_config())
    }

    /// Build from `REGFORM_*` keys; missing keys keep their default.
    pub fn from_map(
        config: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut form_config = Self::new();

        if let Some(endpoint) = config.get(ENV_ENDPOINT) {
            form_config = form_config.with_endpoint(endpoint)?;
        }

        if let Some(path) = config.get(ENV_PATH) {
            form_config = form_config.with_path(path)?;
        }

        if let Some(timeout) = config.get(ENV_TIMEOUT) {
            let secs = timeout.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue {
                    key: ENV_TIMEOUT.to_string(),
                    value: timeout.to_string(),
                }
            })?;
            form_config = form_config.with_timeout(Duration::from_secs(secs));
        }

        if let Some(policy) = config.get(ENV_SERVER_ERRORS) {
            form_config = form_config.with_error_policy(policy.parse()?);
        }

        Ok(form_config)
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        let endpoint = endpoint.trim().trim_end_matches('/');
        if !endpoint.is_empty() && Url::parse(endpoint).is_err() {
            return Err(ConfigError::InvalidEndpoint(endpoint.to_string()));
        }
        self.endpoint = endpoint.to_string();
        Ok(self)
    }

    pub fn with_path(mut self, path: &str) -> Result<Self, ConfigError> {
        if !path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                key: ENV_PATH.to_string(),
                value: path.to_string(),
            });
        }
        self.path = path.to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_error_policy(mut self, error_policy: ServerErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn error_policy(&self) -> ServerErrorPolicy {
        self.error_policy
    }
}
