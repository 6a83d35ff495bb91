pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::utils::error::HttpError;

    pub enum Success {
        AdDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdDeleted => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
            }
        }
    }

    pub type Response = Result<Success, HttpError>;
}
