pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod form;
pub(crate) mod http;
pub(crate) mod schema;
pub(crate) mod submit;

#[cfg(feature = "cli")]
mod cli;
#[cfg(feature = "cli")]
pub use cli::run_cli;

pub use config::{FormConfig, ServerErrorPolicy};
pub use error::{ConfigError, SubmitError};
pub use form::{
    FieldError, FieldErrorKind, FieldErrors, FieldName, FieldRegistry,
    FormData, FormInput, MemoryFieldRegistry,
};
pub use http::HttpClientError;
#[cfg(all(feature = "http_client", not(target_arch = "wasm32")))]
pub use http::HttpClient;
#[cfg(feature = "web")]
pub use http::FetchClient;
pub use schema::{Schema, UserSchema};
pub use submit::{
    FormTransport, LifetimeToken, Notifier, ServerResponse, SubmitController,
    SubmitOutcome, SUBMIT_FAILED_MESSAGE,
};
