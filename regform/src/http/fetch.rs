use async_trait::async_trait;
use bytes::Bytes;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::HttpClientError;
use crate::config::FormConfig;
use crate::submit::FormTransport;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Browser transport for form submissions, backed by `window.fetch`.
#[derive(Clone, Debug)]
pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.endpoint())
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
        let window = web_sys::window().ok_or_else(|| {
            HttpClientError::Other("No window available".to_string())
        })?;

        let body = String::from_utf8(body.to_vec())?;

        let mut request_init = RequestInit::new();
        request_init.method(method);
        // an empty endpoint means the page origin
        request_init.mode(if self.endpoint.is_empty() {
            RequestMode::SameOrigin
        } else {
            RequestMode::Cors
        });

        let headers = Headers::new().map_err(js_error)?;
        headers
            .set("Content-Type", JSON_CONTENT_TYPE)
            .map_err(js_error)?;
        request_init.headers(&headers);
        request_init.body(Some(&JsValue::from_str(&body)));

        let request = Request::new_with_str_and_init(url, &request_init)
            .map_err(js_error)?;
        let response_js = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| {
                HttpClientError::ConnectionError(format!(
                    "{}: {}",
                    url,
                    js_string(&e)
                ))
            })?;
        let response: Response = response_js.dyn_into().map_err(js_error)?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(HttpClientError::HttpError(status, response.status_text()));
        }

        let body_js = JsFuture::from(response.array_buffer().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let body: js_sys::ArrayBuffer = body_js.dyn_into().map_err(js_error)?;
        let uint8_array = js_sys::Uint8Array::new(&body);
        Ok(Bytes::from(uint8_array.to_vec()))
    }
}

#[async_trait(?Send)]
impl FormTransport for FetchClient {
    async fn post_json(
        &self,
        path: &str,
        body: Bytes,
    ) -> Result<Bytes, HttpClientError> {
        self.request("POST", &self.url(path), body).await
    }
}

fn js_string(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn js_error(value: JsValue) -> HttpClientError {
    HttpClientError::Other(js_string(&value))
}
