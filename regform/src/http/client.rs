use std::convert::Infallible;
use std::str::FromStr;
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Request, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tokio::time::timeout;

use super::HttpClientError;
use crate::config::FormConfig;
use crate::submit::FormTransport;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Native transport for form submissions.
#[derive(Clone)]
pub struct HttpClient {
    client: Client<HttpsConnector<HttpConnector>, BoxBody<Bytes, Infallible>>,
    endpoint: String,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(endpoint: &str) -> Self {
        let https = HttpsConnector::new();

        let client: Client<
            HttpsConnector<HttpConnector>,
            BoxBody<Bytes, Infallible>,
        > = Client::builder(TokioExecutor::new())
            .build::<_, BoxBody<Bytes, Infallible>>(https);

        HttpClient {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.endpoint()).with_timeout(config.timeout())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    async fn request(
        &self,
        method: &str,
        url: &str,
        body: Bytes,
    ) -> Result<Bytes, HttpClientError> {
        log::debug!("{} {}", method, url);
        let uri = Uri::from_str(url)
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .body(BoxBody::new(Full::new(body)))
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        let response = match timeout(self.timeout, self.client.request(request))
            .await
        {
            Ok(result) => result.map_err(|_| {
                HttpClientError::ConnectionError(url.to_string())
            })?,
            Err(_) => return Err(HttpClientError::Timeout),
        };

        if !response.status().is_success() {
            let canonical_reason = response
                .status()
                .canonical_reason()
                .unwrap_or("")
                .to_string();
            return Err(HttpClientError::HttpError(
                response.status().as_u16(),
                canonical_reason,
            ));
        }

        let collected = match timeout(self.timeout, response.into_body().collect())
            .await
        {
            Ok(result) => result.map_err(|e| anyhow!(e))?,
            Err(_) => return Err(HttpClientError::Timeout),
        };
        Ok(collected.to_bytes())
    }
}

#[async_trait(?Send)]
impl FormTransport for HttpClient {
    async fn post_json(
        &self,
        path: &str,
        body: Bytes,
    ) -> Result<Bytes, HttpClientError> {
        self.request("POST", &self.url(path), body).await
    }
}
