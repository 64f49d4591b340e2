use async_trait::async_trait;
use bytes::Bytes;

use crate::http::HttpClientError;

/// Performs the single POST of a submission and returns the response body.
/// Non-2xx responses are errors.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post_json(
        &self,
        path: &str,
        body: Bytes,
    ) -> Result<Bytes, HttpClientError>;
}

/// Blocking, user-facing message for failures not tied to a field.
pub trait Notifier {
    fn alert(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}
