// Route definitions

use std::convert::Infallible;
use std::sync::Arc;

use warp::Filter;

use crate::handlers::{self, SharedStore};
use crate::rejection::handle_rejection;
use crate::render::Renderer;

pub fn configure_routes(
    store: SharedStore,
    renderer: Arc<Renderer>,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    // GET /
    let index = warp::path::end()
        .and(warp::get())
        .and(with_store(store.clone()))
        .and(with_renderer(renderer))
        .and_then(handlers::index_handler);

    // POST /submit
    let submit = warp::path("submit")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::form())
        .and(with_store(store.clone()))
        .and_then(handlers::submit_handler);

    // POST /delete_last
    let delete_last = warp::path("delete_last")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_store(store))
        .and_then(handlers::delete_last_handler);

    index.or(submit).or(delete_last).recover(handle_rejection)
}

fn with_store(
    store: SharedStore,
) -> impl Filter<Extract = (SharedStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

fn with_renderer(
    renderer: Arc<Renderer>,
) -> impl Filter<Extract = (Arc<Renderer>,), Error = Infallible> + Clone {
    warp::any().map(move || renderer.clone())
}
