use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// An error that knows which HTTP status it answers with.
///
/// Handlers return it through `?`; turning it into a response is the only
/// place a failure is translated for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    NotFound(String),
    BadRequest(String),
    Unexpected,
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::NotFound(description) | Self::BadRequest(description) => description,
            Self::Unexpected => "Sorry an error occurred",
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.description() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(
            HttpError::NotFound("ad not found".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            HttpError::BadRequest("error".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HttpError::Unexpected.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn renders_description_under_error_key() {
        let response = HttpError::NotFound("ad not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body, json!({ "error": "ad not found" }));
    }

    #[tokio::test]
    async fn unexpected_errors_hide_their_cause() {
        let response = HttpError::Unexpected.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body, json!({ "error": "Sorry an error occurred" }));
    }
}
