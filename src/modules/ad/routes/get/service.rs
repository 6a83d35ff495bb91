use super::types::{request, response};
use crate::{
    modules::ad::{not_found, repository},
    utils::database::Session,
};

pub async fn service(session: &mut Session, payload: request::Payload) -> response::Response {
    repository::find_by_id(&mut **session, payload.id)
        .await?
        .ok_or_else(not_found)
        .map(response::Success::Ad)
}
