//! Reqwest-backed [`HttpSend`] implementation.
//!
//! Providers in this ecosystem are latency-sensitive callers, so the default
//! client carries a fixed 5-second timeout. Bring your own [`reqwest::Client`]
//! through [`ReqwestHttpSend::new`] to change pooling, TLS or timeout policy.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::{Client, Request};
use std::time::Duration;
use waybill_core::{Error, HttpSend, Result};

/// Network timeout applied by the default client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HttpSend implementation backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("default reqwest client must be constructible");
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::transport("failed to convert request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::transport("request timed out").with_source(e)
                } else {
                    Error::transport("failed to send request").with_source(e)
                }
            })?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let send = ReqwestHttpSend::default();
        let req = http::Request::builder()
            // Reserved TEST-NET-1 address, nothing listens there.
            .uri("http://192.0.2.1:9/")
            .body(Bytes::new())
            .unwrap();

        let err = send.http_send(req).await.unwrap_err();
        assert_eq!(err.kind(), waybill_core::ErrorKind::Transport);
    }
}
