// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Legacy FaceID delete proxy.
//!
//! `GET /api/deleteFaceID?faceID=<id>` forwards to the FaceIO delete
//! endpoint using the server-held API key. The response contract is kept
//! exactly as deployed terminal tooling expects it:
//! - 400 `{error}` when `faceID` is missing;
//! - 200 `{message}` on a confirmed deletion;
//! - 200 `{message}` noting the missing JSON body on an unconfirmed one;
//! - 500 `{error}` when the upstream reports a non-200 status or the call
//!   itself fails;
//! - 405 for any non-GET method.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::AppError;
use crate::services::DeleteOutcome;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    // Only GET is routed; axum answers other methods with 405.
    Router::new().route("/api/deleteFaceID", get(delete_face_id))
}

#[derive(Deserialize)]
struct DeleteParams {
    #[serde(rename = "faceID", default)]
    face_id: Option<String>,
}

async fn delete_face_id(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteParams>,
) -> Response {
    let Some(face_id) = params.face_id.filter(|id| !id.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Face ID is required"})),
        )
            .into_response();
    };

    match state.faceid.delete_credential(&face_id).await {
        Ok(DeleteOutcome::Confirmed) => (
            StatusCode::OK,
            Json(json!({"message": "Face ID deleted successfully"})),
        )
            .into_response(),
        Ok(DeleteOutcome::Unconfirmed) => (
            StatusCode::OK,
            Json(json!({"message": "Face ID deleted successfully (No JSON response from FaceIO)"})),
        )
            .into_response(),
        Err(AppError::FaceIdApi(message)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": message})),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "FaceID delete proxy failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal Server Error"})),
            )
                .into_response()
        }
    }
}
