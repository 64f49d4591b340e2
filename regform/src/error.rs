use std::fmt;

use crate::http::HttpClientError;

/// Anything that prevents a submission from producing a usable response.
/// All variants surface to the user as the same generic alert.
#[derive(Debug, Clone)]
pub enum SubmitError {
    Serialize(String),
    Transport(HttpClientError),
    MalformedResponse(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Serialize(e) => write!(f, "SerializeError: {}", e),
            SubmitError::Transport(e) => write!(f, "{}", e),
            SubmitError::MalformedResponse(e) => {
                write!(f, "MalformedResponse: {}", e)
            }
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<HttpClientError> for SubmitError {
    fn from(err: HttpClientError) -> Self {
        SubmitError::Transport(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: String, value: String },
    InvalidEndpoint(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
            ConfigError::InvalidEndpoint(s) => {
                write!(f, "Invalid endpoint: {}", s)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
