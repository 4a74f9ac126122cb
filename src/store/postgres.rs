use async_trait::async_trait;

use crate::store::{
    connection::{ScopedConnection, StoreConfig},
    error::{Result, StoreError},
    MessageStore,
};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS messages (
    id   BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    text TEXT NOT NULL
)";

const SELECT_TEXTS: &str = "SELECT text FROM messages ORDER BY id ASC";

const INSERT_MESSAGE: &str = "INSERT INTO messages (text) VALUES ($1) RETURNING id::bigint";

// Single statement: a concurrent delete that lost the race matches no row.
const DELETE_NEWEST: &str =
    "DELETE FROM messages WHERE id = (SELECT max(id) FROM messages) RETURNING id::bigint";

/// Message store backed by PostgreSQL, opening one connection per operation
#[derive(Debug, Clone)]
pub struct PostgresStore {
    config: StoreConfig,
}

impl PostgresStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Create the `messages` table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<()> {
        let conn = ScopedConnection::open(&self.config).await?;
        let result = conn.batch_execute(CREATE_TABLE).await;
        conn.close().await;

        result?;
        tracing::info!("messages table ready");
        Ok(())
    }
}

#[async_trait]
impl MessageStore for PostgresStore {
    async fn list_messages(&self) -> Result<Vec<String>> {
        let conn = ScopedConnection::open(&self.config).await?;
        let result = conn.query(SELECT_TEXTS, &[]).await;
        conn.close().await;

        let rows = result?;
        tracing::debug!(count = rows.len(), "listed messages");
        rows.iter()
            .map(|row| row.try_get::<_, String>(0).map_err(StoreError::from))
            .collect()
    }

    async fn append_message(&self, text: &str) -> Result<i64> {
        let conn = ScopedConnection::open(&self.config).await?;
        let result = conn.query_one(INSERT_MESSAGE, &[&text]).await;
        conn.close().await;

        let id: i64 = result?.try_get(0)?;
        tracing::debug!(id, "appended message");
        Ok(id)
    }

    async fn delete_most_recent(&self) -> Result<Option<i64>> {
        let conn = ScopedConnection::open(&self.config).await?;
        let result = conn.query_opt(DELETE_NEWEST, &[]).await;
        conn.close().await;

        let deleted = match result? {
            Some(row) => Some(row.try_get::<_, i64>(0)?),
            None => None,
        };
        match deleted {
            Some(id) => tracing::debug!(id, "deleted most recent message"),
            None => tracing::debug!("no message to delete"),
        }
        Ok(deleted)
    }
}
