//! # The `{statusCode, message, data}` envelope
//!
//! Every response of the REST service wraps its payload. This module decodes an
//! HTTP status plus body into `Result<T, ApiError>` exactly once, at the client
//! boundary, so nothing above [`crate::ResourceClient`] ever inspects the
//! envelope shape.
//!
//! Decoding rules, in order:
//!
//! 1. A non-2xx HTTP status is an [`ApiError::Status`] carrying the envelope's
//!    message when the body has one, otherwise the raw body.
//! 2. The body must parse as an envelope whose `data` has the expected type,
//!    else [`ApiError::Decode`].
//! 3. A `statusCode` present in the body and outside `200..300` is an
//!    [`ApiError::Status`] even when the HTTP status was 2xx.
//! 4. Typed calls need `data`; `null` or absent is [`ApiError::MissingData`].
//!
//! Calls that return no payload (delete) accept an empty body.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status_code: Some(200),
            message: "OK".to_string(),
            data: Some(data),
        }
    }

    /// Reject envelopes that report failure in their own `statusCode`.
    fn check_status(self) -> Result<Self, ApiError> {
        match self.status_code {
            Some(code) if !is_success(code) => Err(ApiError::Status {
                status: code,
                message: non_empty(self.message, code),
            }),
            _ => Ok(self),
        }
    }

    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::MissingData)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn non_empty(message: String, status: u16) -> String {
    if message.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        message
    }
}

fn http_failure(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .map(|envelope| envelope.message)
        .unwrap_or_else(|_| body.trim().to_string());
    ApiError::Status {
        status,
        message: non_empty(message, status),
    }
}

/// Decode a response into the envelope, applying rules 1–3.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Envelope<T>, ApiError> {
    if !is_success(status) {
        return Err(http_failure(status, body));
    }
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    envelope.check_status()
}

/// Decode a response that must carry a typed payload.
pub fn decode_data<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    decode_envelope::<T>(status, body)?.into_data()
}

/// Decode a response whose payload is irrelevant.
pub fn decode_unit(status: u16, body: &str) -> Result<(), ApiError> {
    if body.trim().is_empty() {
        return if is_success(status) {
            Ok(())
        } else {
            Err(http_failure(status, body))
        };
    }
    decode_envelope::<serde_json::Value>(status, body).map(|_| ())
}

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Country;

    const COUNTRY: &str =
        r#"{"id":"1","CountryCode":"US","CountryName":"United States","SortSeq":1,"Active":true}"#;

    #[test]
    fn test_data_is_unwrapped() {
        let body = format!(r#"{{"statusCode":200,"message":"OK","data":{COUNTRY}}}"#);
        let country: Country = decode_data(200, &body).unwrap();
        assert_eq!(country.country_code, "US");
    }

    #[test]
    fn test_envelope_without_status_code() {
        let body = format!(r#"{{"status":"success","data":[{COUNTRY}]}}"#);
        let countries: Vec<Country> = decode_data(200, &body).unwrap();
        assert_eq!(countries.len(), 1);
    }

    #[test]
    fn test_http_error_uses_envelope_message() {
        let body = r#"{"statusCode":404,"message":"Country not found","data":null}"#;
        let err = decode_data::<Country>(404, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: "Country not found".into()
            }
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_http_error_with_plain_body() {
        let err = decode_data::<Country>(502, "Bad Gateway").unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), "request failed (502): Bad Gateway");

        let err = decode_data::<Country>(500, "").unwrap_err();
        assert_eq!(err.to_string(), "request failed (500): HTTP 500");
    }

    #[test]
    fn test_body_status_code_overrides_http_success() {
        let body = r#"{"statusCode":400,"message":"Duplicate code","data":null}"#;
        let err = decode_data::<Country>(200, body).unwrap_err();
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_null_data_is_missing() {
        let body = r#"{"statusCode":200,"message":"OK","data":null}"#;
        assert_eq!(
            decode_data::<Country>(200, body).unwrap_err(),
            ApiError::MissingData
        );
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let body = r#"{"statusCode":200,"message":"OK","data":{"nope":true}}"#;
        assert!(matches!(
            decode_data::<Country>(200, body),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_data::<Country>(200, "<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_unit_accepts_empty_and_untyped_bodies() {
        assert!(decode_unit(200, "").is_ok());
        assert!(decode_unit(204, "  ").is_ok());
        assert!(decode_unit(200, r#"{"status":"success"}"#).is_ok());
        assert!(decode_unit(200, r#"{"statusCode":200,"message":"Deleted","data":null}"#).is_ok());
        assert_eq!(decode_unit(404, "").unwrap_err().status(), Some(404));
    }

    #[test]
    fn test_truthiness() {
        use serde_json::json;
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("token")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }
}
