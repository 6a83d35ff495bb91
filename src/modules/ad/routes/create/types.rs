pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate, Debug)]
    #[serde(deny_unknown_fields)]
    pub struct Payload {
        #[validate(length(
            min = 1,
            max = 100,
            code = "INVALID_AD_TITLE",
            message = "Title must be between 1 and 100 characters"
        ))]
        pub title: String,
        #[validate(length(
            max = 1000,
            code = "INVALID_AD_DESCRIPTION",
            message = "Description must be at most 1000 characters"
        ))]
        pub description: Option<String>,
        #[validate(range(
            min = 0,
            code = "INVALID_AD_PRICE",
            message = "Price must not be negative"
        ))]
        pub price: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{modules::ad::repository::Ad, utils::error::HttpError};

    pub enum Success {
        AdCreated(Ad),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdCreated(ad) => {
                    (StatusCode::CREATED, Json(json!({ "id": ad.id }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, HttpError>;
}
