mod error;
pub use error::HttpClientError;

#[cfg(all(feature = "http_client", not(target_arch = "wasm32")))]
mod client;
#[cfg(all(feature = "http_client", not(target_arch = "wasm32")))]
pub use client::HttpClient;

#[cfg(feature = "web")]
mod fetch;
#[cfg(feature = "web")]
pub use fetch::FetchClient;
