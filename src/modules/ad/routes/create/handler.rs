use super::service::service;
use crate::utils::database::Session;
use axum::{body::Bytes, response::IntoResponse};

pub async fn handler(mut session: Session, body: Bytes) -> impl IntoResponse {
    service(&mut session, &body).await
}
