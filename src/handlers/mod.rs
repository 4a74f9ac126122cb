// Handlers module

use std::sync::Arc;

use warp::http::Uri;

use crate::store::MessageStore;

pub mod delete_last;
pub mod index;
pub mod submit;

pub use delete_last::{delete_last_handler, delete_last_message};
pub use index::{index_handler, index_page};
pub use submit::{submit_handler, submit_message};

/// Store handle shared by every request
pub type SharedStore = Arc<dyn MessageStore>;

/// Every write answers with a redirect back to the board
pub fn redirect_home() -> impl warp::Reply {
    warp::redirect::found(Uri::from_static("/"))
}
