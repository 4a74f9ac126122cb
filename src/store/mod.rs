//! Persistence for board messages.
//!
//! Every operation is a single SQL statement run on its own connection; the
//! connection is opened at the start of the call and released before it
//! returns, on success and on failure alike.
//!
//! # Quick Start
//!
//! ```no_run
//! use message_board::store::{MessageStore, PostgresStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PostgresStore::new(StoreConfig::default());
//!     store.ensure_schema().await?;
//!
//!     store.append_message("hello").await?;
//!     assert_eq!(store.list_messages().await?, vec!["hello".to_string()]);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

pub mod connection;
pub mod error;
pub mod postgres;

pub use connection::{ScopedConnection, StoreConfig};
pub use error::{Result, StoreError};
pub use postgres::PostgresStore;

/// The three operations the board performs on its messages
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Texts of all messages, oldest first (ascending identity)
    async fn list_messages(&self) -> Result<Vec<String>>;

    /// Store a new message and return the identity assigned to it
    async fn append_message(&self, text: &str) -> Result<i64>;

    /// Remove the message with the highest identity.
    ///
    /// Returns the removed identity, or `None` when the store was empty.
    async fn delete_most_recent(&self) -> Result<Option<i64>>;
}
