// POST /submit handler

use std::collections::HashMap;

use crate::handlers::{redirect_home, SharedStore};
use crate::rejection::ApiError;
use crate::store::MessageStore;

/// Store the `text` field of a submitted form.
///
/// An absent field is rejected; an empty one is stored as-is.
pub async fn submit_message(
    store: &dyn MessageStore,
    form: &HashMap<String, String>,
) -> Result<i64, ApiError> {
    let text = form
        .get("text")
        .ok_or(ApiError::MissingParameter("text"))?;

    Ok(store.append_message(text).await?)
}

pub async fn submit_handler(
    form: HashMap<String, String>,
    store: SharedStore,
) -> Result<impl warp::Reply, warp::Rejection> {
    tracing::info!("POST /submit");

    let id = submit_message(&*store, &form)
        .await
        .map_err(warp::reject::custom)?;
    tracing::info!(id, "message stored");

    Ok(redirect_home())
}
