use super::types::{request, response};
use crate::{
    modules::ad::{not_found, repository},
    utils::{database::Session, validation},
};

pub async fn service(session: &mut Session, payload: request::Payload) -> response::Response {
    let mut ad = repository::find_by_id(&mut **session, payload.id)
        .await?
        .ok_or_else(not_found)?;

    let body = validation::parse::<request::Body>(&payload.body)?;

    // Each field is committed on its own, so a failure part way through
    // leaves the earlier fields updated.
    for field in body.into_fields() {
        repository::update_field(&mut **session, ad.id, &field).await?;
        ad.set(field);
    }

    tracing::info!("Ad {} updated", ad.id);

    Ok(response::Success::AdUpdated(ad.id))
}
