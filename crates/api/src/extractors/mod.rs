//! Request extractors.

use std::borrow::Cow;
use std::fmt;

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, de::DeserializeOwned};

/// Body that may arrive as JSON or as an urlencoded form.
///
/// `application/json` bodies are read as JSON; anything else is treated as
/// `application/x-www-form-urlencoded`.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(value))
        }
    }
}

/// A scalar body field that JSON clients may send as a string or a number.
///
/// Forms always send strings. Validation happens later on the text form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Sent as a string.
    Text(String),
    /// Sent as a JSON number.
    Number(serde_json::Number),
}

impl Scalar {
    /// The value as text, exactly as received.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
        amount: Scalar,
    }

    async fn echo(JsonOrForm(payload): JsonOrForm<Payload>) -> String {
        format!("{}={}", payload.name, payload.amount)
    }

    async fn send(content_type: &str, body: &'static str) -> (StatusCode, String) {
        let app = Router::new().route("/", post(echo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_accepts_form_body() {
        let (status, body) = send(
            "application/x-www-form-urlencoded",
            "name=coffee&amount=12.50",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "coffee=12.50");
    }

    #[tokio::test]
    async fn test_accepts_json_body_with_numeric_field() {
        let (status, body) = send("application/json", r#"{"name":"coffee","amount":12.5}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "coffee=12.5");
    }

    #[tokio::test]
    async fn test_accepts_json_body_with_text_field() {
        let (status, body) =
            send("application/json; charset=utf-8", r#"{"name":"tea","amount":"3"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "tea=3");
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        let (status, _) = send("application/json", "{not json").await;
        assert!(status.is_client_error());
    }
}
