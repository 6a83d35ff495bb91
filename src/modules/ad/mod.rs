pub mod repository;
pub mod routes;

use crate::utils::error::HttpError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    RequestPartsExt,
};

pub fn not_found() -> HttpError {
    HttpError::NotFound("ad not found".to_string())
}

impl From<repository::Error> for HttpError {
    fn from(err: repository::Error) -> Self {
        match err {
            repository::Error::IntegrityViolation(_) => HttpError::BadRequest("error".to_string()),
            repository::Error::UnexpectedError => HttpError::Unexpected,
        }
    }
}

/// The `{id}` segment of an item route.
///
/// Only plain non-negative integers address an ad; anything else cannot name
/// a stored record and is answered as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdId(pub i64);

impl AdId {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        raw.parse::<i64>().ok().map(Self)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdId {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Path<String>>().await {
            Ok(Path(raw)) => AdId::parse(&raw).ok_or_else(not_found),
            _ => Err(not_found()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers_only() {
        assert_eq!(AdId::parse("42"), Some(AdId(42)));
        assert_eq!(AdId::parse("007"), Some(AdId(7)));
        assert_eq!(AdId::parse("-1"), None);
        assert_eq!(AdId::parse("+1"), None);
        assert_eq!(AdId::parse("1.5"), None);
        assert_eq!(AdId::parse("bike"), None);
        assert_eq!(AdId::parse(""), None);
        assert_eq!(AdId::parse("99999999999999999999"), None);
    }

    #[test]
    fn integrity_violations_are_bad_requests() {
        let err: HttpError = repository::Error::IntegrityViolation(
            "UNIQUE constraint failed: ads.title".to_string(),
        )
        .into();

        assert_eq!(err, HttpError::BadRequest("error".to_string()));
    }
}
