use crate::{types::Context, utils::error::HttpError};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqliteConnection, SqlitePool,
};
use std::{
    ops::{Deref, DerefMut},
    str::FromStr,
    sync::Arc,
};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: SqlitePool,
}

pub async fn connect(database_url: &str, max_connections: u32) -> DatabaseConnection {
    let options = SqliteConnectOptions::from_str(database_url)
        .unwrap_or_else(|e| {
            tracing::error!("{:}", e);
            panic!("Invalid database url {}", database_url)
        })
        .create_if_missing(true);

    DatabaseConnection {
        pool: SqlitePoolOptions::new()
            .max_connections(max_connections)
            // an in-memory database lives exactly as long as its connection
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("{:}", e);
                panic!("Error connecting to database {}", database_url)
            }),
    }
}

pub async fn migrate(db_conn: DatabaseConnection) {
    match sqlx::migrate!().run(&db_conn.pool).await {
        Ok(_) => (),
        Err(err) => {
            tracing::error!("{}", err);
            panic!("Failed to run database migrations");
        }
    }
}

/// Unit of work bound to a single request.
///
/// A connection is checked out of the pool when the handler's arguments are
/// extracted and handed back when the value is dropped, whichever way the
/// handler exits. Every statement issued through it is committed on its own.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub async fn open(db_conn: &DatabaseConnection) -> Result<Self, HttpError> {
        let conn = db_conn.pool.acquire().await.map_err(|err| {
            tracing::error!("Failed to open database session: {}", err);
            HttpError::Unexpected
        })?;

        tracing::debug!("Database session opened");

        Ok(Self { conn })
    }
}

impl Deref for Session {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::debug!("Database session closed");
    }
}

#[async_trait]
impl FromRequestParts<Arc<Context>> for Session {
    type Rejection = HttpError;

    async fn from_request_parts(
        _parts: &mut Parts,
        ctx: &Arc<Context>,
    ) -> Result<Self, Self::Rejection> {
        Session::open(&ctx.db_conn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn session_returns_its_connection_to_the_pool() {
        let db_conn = connect("sqlite::memory:", 1).await;

        let session = Session::open(&db_conn).await.unwrap();
        assert_eq!(db_conn.pool.num_idle(), 0);

        drop(session);

        // a second session can only be opened once the first one has been released
        let session = Session::open(&db_conn).await;
        assert!(session.is_ok());
    }

    #[tokio::test]
    async fn migrations_create_the_ads_table() {
        let db_conn = connect("sqlite::memory:", 1).await;
        migrate(db_conn.clone()).await;

        let mut session = Session::open(&db_conn).await.unwrap();
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ads")
            .fetch_one(&mut *session)
            .await
            .unwrap();

        assert_eq!(count.0, 0);
    }
}
