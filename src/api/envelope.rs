//! Response envelope normalization.
//!
//! Some endpoints wrap their payload as `{ "success", "data", "message" }`,
//! others return it bare. Both shapes are reduced to the payload here, so
//! nothing above the client ever sees an envelope.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{LostFoundError, Result};

/// What a response body turned out to be
#[derive(Debug, PartialEq)]
enum Body {
    /// Successful envelope; `None` when it carried no `data`
    Wrapped(Option<Value>),
    /// `success: false`, with the server's message
    Failed(String),
    Bare(Value),
}

fn classify(value: Value) -> Body {
    let Value::Object(mut map) = value else {
        return Body::Bare(value);
    };
    match map.get("success") {
        Some(Value::Bool(true)) => Body::Wrapped(map.remove("data").filter(|d| !d.is_null())),
        Some(Value::Bool(false)) => Body::Failed(
            map.get("message")
                .and_then(Value::as_str)
                .unwrap_or("request failed")
                .to_string(),
        ),
        _ => Body::Bare(Value::Object(map)),
    }
}

/// Decode the payload of a successful response
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;
    let payload = match classify(value) {
        Body::Bare(value) => value,
        Body::Wrapped(Some(data)) => data,
        Body::Wrapped(None) => return Err(LostFoundError::MissingField("data".into())),
        Body::Failed(message) => return Err(LostFoundError::Rejected(message)),
    };
    Ok(serde_json::from_value(payload)?)
}

/// Check a response whose payload is not needed. Empty bodies are fine.
pub fn check(body: &str) -> Result<()> {
    if body.trim().is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Value>(body).map(classify) {
        Ok(Body::Failed(message)) => Err(LostFoundError::Rejected(message)),
        // Non-JSON acknowledgements ("OK") are accepted as-is
        _ => Ok(()),
    }
}

/// Best-effort message from an error response body
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PageResponse, User};

    const PAGE: &str = r#"{"items":[{"id":1,"name":"Wallet","category":"WALLET","foundDate":"2024-03-01","location":"Seoul"}],"totalCount":1}"#;

    #[test]
    fn test_envelope_and_bare_decode_identically() {
        let bare: PageResponse = decode(PAGE).unwrap();
        let wrapped: PageResponse =
            decode(&format!(r#"{{"success":true,"data":{PAGE},"message":null}}"#)).unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.items[0].name, "Wallet");
    }

    #[test]
    fn test_failed_envelope_carries_message() {
        let err = decode::<User>(r#"{"success":false,"message":"email already used"}"#).unwrap_err();
        assert!(matches!(err, LostFoundError::Rejected(ref m) if m == "email already used"));
    }

    #[test]
    fn test_envelope_without_data_is_missing_field() {
        let err = decode::<User>(r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, LostFoundError::MissingField(ref f) if f == "data"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_missing_payload_field_is_malformed() {
        let err = decode::<PageResponse>(r#"{"items":[]}"#).unwrap_err();
        assert!(matches!(err, LostFoundError::Json(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_check_accepts_empty_and_rejects_failed() {
        assert!(check("").is_ok());
        assert!(check("OK").is_ok());
        assert!(check(r#"{"success":true,"data":null}"#).is_ok());
        assert!(check(r#"{"success":false,"message":"nope"}"#).is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"success":false,"message":"bad token"}"#).as_deref(),
            Some("bad token")
        );
        assert_eq!(error_message(r#"{"error":"Not Found"}"#).as_deref(), Some("Not Found"));
        assert_eq!(error_message("<html>"), None);
    }
}
