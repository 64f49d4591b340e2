use std::fmt;
use std::string::FromUtf8Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    ConnectionError(String),
    Timeout,
    HttpError(u16, String), // Status code, status text
    Utf8Error(String),
    Other(String),
}

impl fmt::Display for HttpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpClientError::ConnectionError(e) => {
                write!(f, "ConnectionError: {}", e)
            }
            HttpClientError::Timeout => write!(f, "Timeout"),
            HttpClientError::HttpError(code, message) => {
                write!(f, "HTTPError: {} {}", code, message)
            }
            HttpClientError::Utf8Error(e) => write!(f, "Utf8Error: {}", e),
            HttpClientError::Other(e) => write!(f, "Other: {}", e),
        }
    }
}

impl std::error::Error for HttpClientError {}

impl From<anyhow::Error> for HttpClientError {
    fn from(err: anyhow::Error) -> Self {
        HttpClientError::Other(err.to_string())
    }
}

impl From<FromUtf8Error> for HttpClientError {
    fn from(err: FromUtf8Error) -> Self {
        HttpClientError::Utf8Error(err.to_string())
    }
}
