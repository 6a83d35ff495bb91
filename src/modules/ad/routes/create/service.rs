use super::types::{request, response};
use crate::{
    modules::ad::repository,
    utils::{database::Session, validation},
};

pub async fn service(session: &mut Session, body: &[u8]) -> response::Response {
    let payload = validation::parse::<request::Payload>(body)?;

    let ad = repository::create(
        &mut **session,
        repository::CreateAdPayload {
            title: payload.title,
            description: payload.description,
            price: payload.price,
        },
    )
    .await?;

    tracing::info!("Ad {} created", ad.id);

    Ok(response::Success::AdCreated(ad))
}
