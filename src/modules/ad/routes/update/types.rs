pub mod request {
    use crate::modules::ad::repository::AdField;
    use axum::body::Bytes;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate, Debug)]
    #[serde(deny_unknown_fields)]
    pub struct Body {
        #[validate(length(
            min = 1,
            max = 100,
            code = "INVALID_AD_TITLE",
            message = "Title must be between 1 and 100 characters"
        ))]
        pub title: Option<String>,
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
        pub price: Option<i64>,
    }

    impl Body {
        /// The fields present in the body, in column order.
        pub fn into_fields(self) -> Vec<AdField> {
            [
                self.title.map(AdField::Title),
                self.description.map(AdField::Description),
                self.price.map(AdField::Price),
            ]
            .into_iter()
            .flatten()
            .collect()
        }
    }

    pub struct Payload {
        pub id: i64,
        pub body: Bytes,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::utils::error::HttpError;

    pub enum Success {
        AdUpdated(i64),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdUpdated(id) => (StatusCode::OK, Json(json!({ "id": id }))).into_response(),
            }
        }
    }

    pub type Response = Result<Success, HttpError>;
}
