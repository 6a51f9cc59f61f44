//! The `POST /fetch` handler: resolve the locator, fetch upstream, reshape.
//!
//! Error causes stay distinct inside [`talmud::FetchError`]; this boundary maps
//! each variant to a status code and a generic JSON message, logging the
//! specific cause server-side only.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use talmud::{ErrorBody, FetchError, FetchRequest};

use super::app::AppState;

pub(crate) async fn fetch_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<FetchRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!("rejected fetch body: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new("Invalid request body")),
            )
                .into_response();
        }
    };

    match talmud::fetch_passage(&state.client, request.into_input()).await {
        Ok(passage) => (StatusCode::OK, Json(passage)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// 405 with a JSON body for non-POST methods on `/fetch`.
pub(crate) async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Method not allowed")),
    )
        .into_response()
}

fn error_response(e: &FetchError) -> Response {
    let (status, message) = match e {
        FetchError::InvalidRef(_) => (StatusCode::BAD_REQUEST, "Invalid URL format"),
        FetchError::NotFound(_) => (StatusCode::NOT_FOUND, "Text not found"),
        FetchError::UrlParse(_) | FetchError::Upstream(_) | FetchError::MalformedBody(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An error occurred while fetching the text",
        ),
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("fetch failed: {}", e);
    } else {
        tracing::warn!("fetch failed: {}", e);
    }
    (status, Json(ErrorBody::new(message))).into_response()
}
