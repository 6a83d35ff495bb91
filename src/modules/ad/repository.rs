use serde::{Deserialize, Serialize};
use sqlx::{error::ErrorKind, SqliteExecutor};

#[derive(Serialize, Deserialize, sqlx::FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Ad {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub price: i64,
}

/// A single writable column of an [`Ad`] together with its new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdField {
    Title(String),
    Description(String),
    Price(i64),
}

impl AdField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Description(_) => "description",
            Self::Price(_) => "price",
        }
    }
}

impl Ad {
    pub fn set(&mut self, field: AdField) {
        match field {
            AdField::Title(title) => self.title = title,
            AdField::Description(description) => self.description = Some(description),
            AdField::Price(price) => self.price = price,
        }
    }
}

pub struct CreateAdPayload {
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    IntegrityViolation(String),
    UnexpectedError,
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ) {
                tracing::warn!("Integrity constraint violated: {}", db_err);
                return Self::IntegrityViolation(db_err.message().to_string());
            }
        }

        tracing::error!("{}", err);
        Self::UnexpectedError
    }
}

pub async fn create<'e, E: SqliteExecutor<'e>>(e: E, payload: CreateAdPayload) -> Result<Ad, Error> {
    sqlx::query_as::<_, Ad>(
        "
        INSERT INTO ads
        (title, description, price)
        VALUES (?, ?, ?)
        RETURNING id, title, description, price
        ",
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.price)
    .fetch_one(e)
    .await
    .map_err(Error::from)
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<Option<Ad>, Error> {
    sqlx::query_as::<_, Ad>("SELECT id, title, description, price FROM ads WHERE id = ?")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching ad with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn update_field<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
    field: &AdField,
) -> Result<(), Error> {
    let query = match field {
        AdField::Title(title) => sqlx::query("UPDATE ads SET title = ? WHERE id = ?").bind(title),
        AdField::Description(description) => {
            sqlx::query("UPDATE ads SET description = ? WHERE id = ?").bind(description)
        }
        AdField::Price(price) => sqlx::query("UPDATE ads SET price = ? WHERE id = ?").bind(price),
    };

    query.bind(id).execute(e).await.map(|_| ()).map_err(|err| {
        tracing::debug!(
            "Error occurred while trying to update {} of ad {}",
            field.name(),
            id
        );
        Error::from(err)
    })
}

pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<(), Error> {
    sqlx::query("DELETE FROM ads WHERE id = ?")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete an ad by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
