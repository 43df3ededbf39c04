//! Provider envelope interpretation.
//!
//! Every provider wraps its business payload in an outer JSON envelope with a
//! status code, a human-readable message and a nested payload field. The
//! shapes differ per provider (numeric vs string codes, `result` vs `data`,
//! single vs double JSON encoding), so parsing is driven by an
//! [`EnvelopeSpec`] instead of branching at call sites.

use crate::{Error, Result};
use log::debug;
use serde_json::Value;

/// The sentinel an envelope code must equal for the call to count as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessCode {
    /// Numeric code, e.g. `10000`.
    Number(i64),
    /// String code, e.g. `"2000"`.
    Text(&'static str),
}

impl SuccessCode {
    fn matches(&self, code: &Value) -> bool {
        match self {
            SuccessCode::Number(n) => code.as_i64() == Some(*n),
            SuccessCode::Text(s) => code.as_str() == Some(s),
        }
    }
}

/// EnvelopeSpec describes one provider's success/error envelope.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeSpec {
    /// Field carrying the provider status code.
    pub code_field: &'static str,
    /// Field carrying the human-readable message.
    pub message_field: &'static str,
    /// Field carrying the business payload on success.
    pub payload_field: &'static str,
    /// The success sentinel.
    pub success: SuccessCode,
    /// Number of JSON decode passes the body needs.
    ///
    /// One upstream double-encodes its payload: the outer JSON value is
    /// itself a JSON-encoded string and must be decoded again. That quirk is
    /// correctness-critical, so it is an explicit per-provider constant here
    /// rather than a hidden double call.
    pub decode_depth: u8,
}

/// Validate a raw response against the provider's envelope rules and unwrap
/// the business payload.
///
/// - non-200 status fails with [`ErrorKind::HttpStatus`] before any JSON work;
/// - malformed or null bodies fail with [`ErrorKind::EnvelopeInvalid`];
/// - a well-formed envelope with a non-success code fails with
///   [`ErrorKind::Business`], carrying the code and message verbatim;
/// - on success only the nested payload field is returned, never the outer
///   envelope. An absent payload field yields JSON null.
///
/// [`ErrorKind::HttpStatus`]: crate::ErrorKind::HttpStatus
/// [`ErrorKind::EnvelopeInvalid`]: crate::ErrorKind::EnvelopeInvalid
/// [`ErrorKind::Business`]: crate::ErrorKind::Business
pub fn parse_envelope(spec: &EnvelopeSpec, status: http::StatusCode, body: &str) -> Result<Value> {
    if status != http::StatusCode::OK {
        return Err(
            Error::http_status(format!("request failed with status {status}"))
                .with_status(status)
                .with_raw_body(body),
        );
    }

    let mut value: Value = serde_json::from_str(body).map_err(|e| {
        Error::envelope_invalid("response body is not valid JSON")
            .with_status(status)
            .with_raw_body(body)
            .with_source(e)
    })?;

    // Peel off the extra encoding layers, one string literal per pass.
    for _ in 1..spec.decode_depth {
        let Value::String(inner) = value else {
            return Err(
                Error::envelope_invalid("expected a JSON-encoded string to decode again")
                    .with_status(status)
                    .with_raw_body(body),
            );
        };
        value = serde_json::from_str(&inner).map_err(|e| {
            Error::envelope_invalid("inner response body is not valid JSON")
                .with_status(status)
                .with_raw_body(body)
                .with_source(e)
        })?;
    }

    if value.is_null() {
        return Err(Error::envelope_invalid("response envelope is empty")
            .with_status(status)
            .with_raw_body(body));
    }

    let Some(code) = value.get(spec.code_field) else {
        return Err(Error::envelope_invalid(format!(
            "response envelope has no `{}` field",
            spec.code_field
        ))
        .with_status(status)
        .with_raw_body(body));
    };

    if !spec.success.matches(code) {
        let code = code_to_string(code);
        let message = value
            .get(spec.message_field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        debug!("provider rejected request: {code}: {message}");
        return Err(Error::business(format!("{code}: {message}"))
            .with_status(status)
            .with_code(code)
            .with_raw_body(body));
    }

    Ok(value
        .get_mut(spec.payload_field)
        .map(Value::take)
        .unwrap_or(Value::Null))
}

fn code_to_string(code: &Value) -> String {
    match code {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const NUMERIC: EnvelopeSpec = EnvelopeSpec {
        code_field: "code",
        message_field: "message",
        payload_field: "result",
        success: SuccessCode::Number(10000),
        decode_depth: 2,
    };

    const TEXTUAL: EnvelopeSpec = EnvelopeSpec {
        code_field: "code",
        message_field: "msg",
        payload_field: "data",
        success: SuccessCode::Text("2000"),
        decode_depth: 1,
    };

    #[test]
    fn test_success_returns_nested_payload() {
        let body = r#"{"code":"2000","msg":"ok","data":{"sid":"S1"}}"#;
        let payload = parse_envelope(&TEXTUAL, StatusCode::OK, body).unwrap();
        assert_eq!(payload, json!({"sid": "S1"}));
    }

    #[test]
    fn test_business_error_carries_code_and_message() {
        let body = r#"{"code":"4001","msg":"invalid sign"}"#;
        let err = parse_envelope(&TEXTUAL, StatusCode::OK, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Business);
        assert_eq!(err.business_code(), Some("4001"));
        assert!(err.to_string().contains("invalid sign"));
        assert_eq!(err.raw_body(), Some(body));
    }

    #[test]
    fn test_numeric_business_error() {
        let body = r#""{\"code\":5001,\"message\":\"quota exceeded\"}""#;
        let err = parse_envelope(&NUMERIC, StatusCode::OK, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Business);
        assert_eq!(err.business_code(), Some("5001"));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_http_error_skips_json_parsing() {
        // A perfectly valid success body must still fail on a bad status.
        let body = r#"{"code":"2000","msg":"ok","data":{}}"#;
        for status in [StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR] {
            let err = parse_envelope(&TEXTUAL, status, body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::HttpStatus);
            assert_eq!(err.status(), Some(status));
            assert_eq!(err.raw_body(), Some(body));
        }
    }

    #[test]
    fn test_double_encoded_body_needs_depth_two() {
        let body = r#""{\"code\":10000,\"message\":\"ok\",\"result\":{\"ownerId\":\"42\"}}""#;

        // Depth 2 peels the string literal and reaches the object.
        let payload = parse_envelope(&NUMERIC, StatusCode::OK, body).unwrap();
        assert_eq!(payload, json!({"ownerId": "42"}));

        // Depth 1 stops at the string literal and finds no envelope fields.
        let shallow = EnvelopeSpec {
            decode_depth: 1,
            ..NUMERIC
        };
        let err = parse_envelope(&shallow, StatusCode::OK, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EnvelopeInvalid);
    }

    #[test]
    fn test_depth_two_rejects_plain_object() {
        let body = r#"{"code":10000,"message":"ok","result":{}}"#;
        let err = parse_envelope(&NUMERIC, StatusCode::OK, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EnvelopeInvalid);
    }

    #[test]
    fn test_malformed_body() {
        let err = parse_envelope(&TEXTUAL, StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EnvelopeInvalid);
        assert_eq!(err.raw_body(), Some("<html>oops</html>"));
    }

    #[test]
    fn test_null_body() {
        let err = parse_envelope(&TEXTUAL, StatusCode::OK, "null").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EnvelopeInvalid);
    }

    #[test]
    fn test_missing_code_field() {
        let body = r#"{"data":{"sid":"S1"}}"#;
        let err = parse_envelope(&TEXTUAL, StatusCode::OK, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EnvelopeInvalid);
    }

    #[test]
    fn test_missing_payload_field_is_null() {
        let body = r#"{"code":"2000","msg":"ok"}"#;
        let payload = parse_envelope(&TEXTUAL, StatusCode::OK, body).unwrap();
        assert_eq!(payload, Value::Null);
    }

    #[test]
    fn test_code_type_must_match_sentinel() {
        // A numeric 2000 is not the string "2000".
        let body = r#"{"code":2000,"msg":"ok","data":{}}"#;
        let err = parse_envelope(&TEXTUAL, StatusCode::OK, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Business);
        assert_eq!(err.business_code(), Some("2000"));
    }
}
