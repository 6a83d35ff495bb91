use super::service::service;
use super::types::request;
use crate::{modules::ad::AdId, utils::database::Session};
use axum::{body::Bytes, response::IntoResponse};

pub async fn handler(mut session: Session, AdId(id): AdId, body: Bytes) -> impl IntoResponse {
    service(&mut session, request::Payload { id, body }).await
}
