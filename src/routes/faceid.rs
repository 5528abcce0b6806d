// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Facial credential enrollment and removal routes.
//!
//! Enrollment itself happens in the browser widget; the client posts the
//! resulting receipt here so the credential reference lands on the user's
//! profile document. Removal deletes the credential upstream first and only
//! clears the local field once the upstream reports success.

use axum::{
    extract::{Json, State},
    routing::get,
    Extension, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::EnrollmentReceipt;
use crate::services::DeleteOutcome;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/faceid/config", get(get_config))
        .route(
            "/api/faceid",
            get(get_status).post(record_enrollment).delete(remove),
        )
}

/// Widget bootstrap configuration.
#[derive(Serialize)]
pub struct FaceIdConfig {
    /// Publishable FaceIO application public ID
    pub public_id: String,
}

/// Expose the publishable widget configuration.
async fn get_config(State(state): State<Arc<AppState>>) -> Json<FaceIdConfig> {
    Json(FaceIdConfig {
        public_id: state.faceid.public_id().to_string(),
    })
}

/// Enrollment status for the current user.
#[derive(Serialize)]
pub struct FaceIdStatus {
    pub enrolled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facial_id: Option<String>,
}

async fn get_status(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<FaceIdStatus>> {
    let profile = state
        .db
        .get_user(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    Ok(Json(FaceIdStatus {
        enrolled: profile.face_id.is_some(),
        facial_id: profile.face_id,
    }))
}

/// Response for enrollment and removal actions.
#[derive(Serialize)]
pub struct FaceIdActionResponse {
    pub message: String,
    /// False when the upstream deletion was lenient-success (non-JSON body)
    pub confirmed: bool,
}

/// Persist the credential reference from a widget enrollment receipt.
async fn record_enrollment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(receipt): Json<EnrollmentReceipt>,
) -> Result<Json<FaceIdActionResponse>> {
    if receipt.facial_id.trim().is_empty() {
        return Err(AppError::BadRequest("Face ID is required".to_string()));
    }

    state
        .db
        .set_face_id(&user.user_id, &receipt.facial_id)
        .await?;

    tracing::info!(user_id = %user.user_id, "Facial credential recorded");

    Ok(Json(FaceIdActionResponse {
        message: "Face ID registered successfully!".to_string(),
        confirmed: true,
    }))
}

/// Remove the user's facial credential.
///
/// The remote deletion is awaited and gates the local clear: an upstream
/// failure leaves the profile field unchanged.
async fn remove(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<FaceIdActionResponse>> {
    let profile = state
        .db
        .get_user(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    let facial_id = profile
        .face_id
        .ok_or_else(|| AppError::NotFound("No Face ID enrolled".to_string()))?;

    let outcome = state.faceid.delete_credential(&facial_id).await?;

    state.db.clear_face_id(&user.user_id).await?;

    tracing::info!(
        user_id = %user.user_id,
        confirmed = outcome == DeleteOutcome::Confirmed,
        "Facial credential removed"
    );

    let (message, confirmed) = match outcome {
        DeleteOutcome::Confirmed => ("Face ID deleted successfully".to_string(), true),
        DeleteOutcome::Unconfirmed => (
            "Face ID deleted successfully (no JSON response from FaceIO)".to_string(),
            false,
        ),
    };

    Ok(Json(FaceIdActionResponse { message, confirmed }))
}
