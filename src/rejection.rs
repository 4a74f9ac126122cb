// Mapping of request failures to HTTP responses

use std::convert::Infallible;

use thiserror::Error;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::render::RenderError;
use crate::store::StoreError;

/// Failures raised by the board's handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required form field was absent
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl warp::reject::Reject for ApiError {}

/// Turn any rejection into a plain-text response.
///
/// Server-side failures are logged with their detail and answered with a
/// generic body. Rejections raised by warp itself (bad media type, unreadable
/// body, missing headers) are all client errors.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(api_error) = err.find::<ApiError>() {
        let status = api_error.status();
        if status.is_server_error() {
            tracing::error!(error = %api_error, "request failed");
            (status, "Internal Server Error".to_string())
        } else {
            tracing::info!(error = %api_error, "rejected request");
            (status, api_error.to_string())
        }
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else {
        tracing::info!(rejection = ?err, "rejected request");
        (StatusCode::BAD_REQUEST, "Bad Request".to_string())
    };

    Ok(warp::reply::with_status(message, status))
}
