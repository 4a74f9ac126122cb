#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use message_board::store::{MessageStore, Result, StoreConfig, StoreError};
use testcontainers::{core::WaitFor, GenericImage, RunnableImage};

/// The PostgreSQL Docker image to use for testing
pub const POSTGRES_IMAGE: &str = "postgres";
pub const POSTGRES_TAG: &str = "16-alpine";

/// Default PostgreSQL port
pub const POSTGRES_PORT: u16 = 5432;

/// Credentials for the test container, mirroring the board's defaults
pub const POSTGRES_USER: &str = "root";
pub const POSTGRES_PASSWORD: &str = "example";
pub const POSTGRES_DB: &str = "appdb";

/// Create a runnable PostgreSQL container
pub fn create_postgres_container() -> RunnableImage<GenericImage> {
    let image = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
        .with_env_var("POSTGRES_USER", POSTGRES_USER)
        .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
        .with_env_var("POSTGRES_DB", POSTGRES_DB)
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ));

    RunnableImage::from(image).with_tag(POSTGRES_TAG)
}

/// Store configuration pointing at the running container
pub fn store_config(host: &str, port: u16) -> StoreConfig {
    StoreConfig {
        host: host.to_string(),
        port,
        database: POSTGRES_DB.to_string(),
        user: POSTGRES_USER.to_string(),
        password: POSTGRES_PASSWORD.to_string(),
    }
}

/// In-process store with the same ordering and identity rules as the database
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    rows: Vec<(i64, String)>,
}

impl MemoryStore {
    pub fn with_messages(texts: &[&str]) -> Self {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            for text in texts {
                state.next_id += 1;
                let id = state.next_id;
                state.rows.push((id, text.to_string()));
            }
        }
        store
    }

    pub fn texts(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.rows.iter().map(|(_, text)| text.clone()).collect()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn list_messages(&self) -> Result<Vec<String>> {
        Ok(self.texts())
    }

    async fn append_message(&self, text: &str) -> Result<i64> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.rows.push((id, text.to_string()));
        Ok(id)
    }

    async fn delete_most_recent(&self) -> Result<Option<i64>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.rows.pop().map(|(id, _)| id))
    }
}

/// Store whose every operation fails as if the database were unreachable
pub struct UnreachableStore;

#[async_trait]
impl MessageStore for UnreachableStore {
    async fn list_messages(&self) -> Result<Vec<String>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn append_message(&self, _text: &str) -> Result<i64> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn delete_most_recent(&self) -> Result<Option<i64>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }
}
