// src/routes/extract.rs
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// JSON body extractor that accepts any content type and treats an empty,
/// malformed, non-object or `{}` payload as "no data".
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::NoData)?;
        decode(&bytes).map(JsonBody)
    }
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|_| AppError::NoData)?;
    match &value {
        Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(AppError::NoData),
    }
    serde_json::from_value(value).map_err(|err| {
        tracing::debug!(error = %err, "request body did not match the expected shape");
        AppError::NoData
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::NameRequest;

    #[test]
    fn rejects_payloads_without_data() {
        for body in ["", "not json", "null", "{}", "[]", "[1]", "\"text\"", "0"] {
            assert!(
                matches!(decode::<NameRequest>(body.as_bytes()), Err(AppError::NoData)),
                "body {:?} should be rejected",
                body
            );
        }
    }

    #[test]
    fn rejects_wrong_field_type() {
        assert!(decode::<NameRequest>(br#"{"name": 42}"#).is_err());
    }

    #[test]
    fn accepts_object_with_unrelated_fields() {
        let req: NameRequest = decode(br#"{"foo": "bar"}"#).unwrap();
        assert!(req.name.is_none());
    }
}
