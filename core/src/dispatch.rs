//! Request construction and dispatch.

use crate::{Context, Result};
use bytes::Bytes;
use http::header::{ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use http::Method;
use log::debug;

/// Fixed browser-emulation headers.
///
/// Upstream providers reject requests without a plausible desktop browser
/// fingerprint, so every call carries these.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36";
const BROWSER_ACCEPT: &str = "application/json";
const BROWSER_ACCEPT_ENCODING: &str = "gzip,deflate,sdch";
const BROWSER_ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.8";

/// One provider call about to go on the wire.
///
/// Query and body parameter lists are independent so operations can place the
/// auth block in either: some endpoints want auth in the query with business
/// data form-encoded in the body, others want everything in one place.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// Path relative to the provider endpoint.
    pub path: String,
    /// HTTP method.
    pub method: Method,
    /// Query parameters, may be empty.
    pub query: Vec<(String, String)>,
    /// Body parameters, form-urlencoded when present.
    pub body: Vec<(String, String)>,
}

impl RequestSpec {
    /// Create a GET request spec for the given path.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::GET,
            query: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Create a POST request spec for the given path.
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::POST,
            query: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the query parameters.
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Set the form body parameters.
    pub fn with_body(mut self, body: Vec<(String, String)>) -> Self {
        self.body = body;
        self
    }
}

/// Perform one round trip against the provider endpoint.
///
/// Returns the raw status and body; interpreting them is the envelope
/// parser's job. Network-level failures propagate from the configured
/// [`HttpSend`] as transport errors.
///
/// [`HttpSend`]: crate::HttpSend
pub async fn dispatch(
    ctx: &Context,
    endpoint: &str,
    spec: &RequestSpec,
) -> Result<http::Response<String>> {
    let mut uri = format!("{}{}", endpoint, spec.path);
    if !spec.query.is_empty() {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(spec.query.iter())
            .finish();
        uri.push('?');
        uri.push_str(&query);
    }

    debug!("dispatching {} {}", spec.method, uri);

    let mut builder = http::Request::builder()
        .method(spec.method.clone())
        .uri(uri.as_str())
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .header(ACCEPT, BROWSER_ACCEPT)
        .header(ACCEPT_ENCODING, BROWSER_ACCEPT_ENCODING)
        .header(ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE);

    let body = if spec.body.is_empty() {
        Bytes::new()
    } else {
        builder = builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        Bytes::from(
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(spec.body.iter())
                .finish(),
        )
    };

    let req = builder.body(body)?;
    ctx.http_send_as_string(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticHttpSend;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_get_puts_params_in_query() {
        let http = StaticHttpSend::new();
        http.push_response(200, "{}");
        let ctx = Context::new().with_http_send(http.clone());

        let spec = RequestSpec::get("/shop/info").with_query(pairs(&[
            ("appKey", "k1"),
            ("ownerName", "Shop X"),
        ]));
        let resp = dispatch(&ctx, "http://provider.example", &spec)
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let sent = http.take_requests().pop().unwrap();
        assert_eq!(sent.method(), Method::GET);
        assert_eq!(
            sent.uri().to_string(),
            "http://provider.example/shop/info?appKey=k1&ownerName=Shop+X"
        );
        assert!(sent.body().is_empty());
        assert!(sent.headers().get(CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn test_post_splits_auth_and_business() {
        let http = StaticHttpSend::new();
        http.push_response(200, "{}");
        let ctx = Context::new().with_http_send(http.clone());

        let spec = RequestSpec::post("/waybill")
            .with_query(pairs(&[("sign", "abc")]))
            .with_body(pairs(&[("params", r#"{"sku":1}"#)]));
        dispatch(&ctx, "http://provider.example", &spec)
            .await
            .unwrap();

        let sent = http.take_requests().pop().unwrap();
        assert_eq!(sent.method(), Method::POST);
        assert_eq!(sent.uri().query(), Some("sign=abc"));
        assert_eq!(
            sent.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(sent.body().as_ref(), b"params=%7B%22sku%22%3A1%7D");
    }

    #[tokio::test]
    async fn test_browser_headers_always_sent() {
        let http = StaticHttpSend::new();
        http.push_response(200, "{}");
        let ctx = Context::new().with_http_send(http.clone());

        dispatch(&ctx, "http://provider.example", &RequestSpec::get("/ping"))
            .await
            .unwrap();

        let sent = http.take_requests().pop().unwrap();
        let headers = sent.headers();
        assert_eq!(headers.get(USER_AGENT).unwrap(), BROWSER_USER_AGENT);
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(ACCEPT_ENCODING).unwrap(), "gzip,deflate,sdch");
        assert_eq!(headers.get(ACCEPT_LANGUAGE).unwrap(), "zh-CN,zh;q=0.8");
    }
}
