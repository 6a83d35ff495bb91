use super::types::{request, response};
use crate::{
    modules::ad::{not_found, repository},
    utils::database::Session,
};

pub async fn service(session: &mut Session, payload: request::Payload) -> response::Response {
    let ad = repository::find_by_id(&mut **session, payload.id)
        .await?
        .ok_or_else(not_found)?;

    repository::delete_by_id(&mut **session, ad.id).await?;

    tracing::info!("Ad {} deleted", ad.id);

    Ok(response::Success::AdDeleted)
}
