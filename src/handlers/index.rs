// GET / handler

use std::sync::Arc;

use crate::handlers::SharedStore;
use crate::rejection::ApiError;
use crate::render::Renderer;
use crate::store::MessageStore;

/// Render the board with every stored message, oldest first
pub async fn index_page(store: &dyn MessageStore, renderer: &Renderer) -> Result<String, ApiError> {
    let messages = store.list_messages().await?;
    Ok(renderer.render_index(&messages)?)
}

pub async fn index_handler(
    store: SharedStore,
    renderer: Arc<Renderer>,
) -> Result<impl warp::Reply, warp::Rejection> {
    tracing::info!("GET /");

    let page = index_page(&*store, &renderer)
        .await
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::html(page))
}
