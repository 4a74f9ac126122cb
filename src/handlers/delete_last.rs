// POST /delete_last handler

use crate::handlers::{redirect_home, SharedStore};
use crate::rejection::ApiError;
use crate::store::MessageStore;

/// Drop the newest message; an empty board is left untouched
pub async fn delete_last_message(store: &dyn MessageStore) -> Result<Option<i64>, ApiError> {
    Ok(store.delete_most_recent().await?)
}

pub async fn delete_last_handler(store: SharedStore) -> Result<impl warp::Reply, warp::Rejection> {
    tracing::info!("POST /delete_last");

    match delete_last_message(&*store)
        .await
        .map_err(warp::reject::custom)?
    {
        Some(id) => tracing::info!(id, "message deleted"),
        None => tracing::info!("board already empty"),
    }

    Ok(redirect_home())
}
