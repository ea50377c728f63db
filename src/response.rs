use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Fixed body emitted when the primary response fails to serialize.
/// Pre-serialized, so the fallback path cannot fail in turn.
pub const FALLBACK_ERROR_BODY: &str = r#"{"error":"something went wrong"}"#;

/// Uniform JSON wrapper around every API response body
///
/// Exactly one variant is ever sent: a success payload under `data`, or a
/// message under `error`. Never both.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Data { data: T },
    Error { error: String },
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Envelope::Data { data }
    }
}

impl Envelope<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            error: message.into(),
        }
    }
}

/// Serialize an envelope and build the HTTP response
///
/// If the envelope fails to serialize, the failure is logged and a fixed
/// error body is sent with a 500 status instead.
pub fn json_response<T: Serialize>(status: StatusCode, envelope: &Envelope<T>) -> Response {
    match serde_json::to_vec(envelope) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            tracing::error!("Failed to serialize response body: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
                FALLBACK_ERROR_BODY,
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde::Serializer;

    /// Payload whose serialization always fails, to exercise the fallback
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("unserializable"))
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn data_envelope_serializes_only_data() {
        let body = serde_json::to_value(Envelope::data(vec![1, 2, 3])).unwrap();
        assert_eq!(body, serde_json::json!({ "data": [1, 2, 3] }));
    }

    #[test]
    fn error_envelope_serializes_only_error() {
        let body = serde_json::to_value(Envelope::error("user not found")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "user not found" }));
    }

    #[tokio::test]
    async fn response_carries_status_and_content_type() {
        let response = json_response(StatusCode::CREATED, &Envelope::data("ok"));

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_string(response).await, r#"{"data":"ok"}"#);
    }

    #[tokio::test]
    async fn serialization_failure_falls_back_to_fixed_body() {
        let response = json_response(StatusCode::OK, &Envelope::data(Unserializable));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, FALLBACK_ERROR_BODY);
    }
}
