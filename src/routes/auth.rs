// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Email/password authentication routes.
//!
//! Credential validation itself is delegated to the identity provider;
//! these handlers format requests, create the per-user documents at
//! sign-up, and issue session JWTs at login.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::create_session_jwt;
use crate::models::{Preferences, UserProfile};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/login", post(log_in))
        .route("/auth/logout", get(log_out))
}

/// Sign-up / login request body.
#[derive(Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(email(message = "Invalid email address"))]
    email: String,
    /// The identity provider enforces the same minimum.
    #[validate(length(min = 6, message = "Password should be at least 6 characters"))]
    password: String,
}

/// Response for a successful sign-up.
#[derive(Serialize)]
pub struct SignUpResponse {
    pub user_id: String,
    pub email: String,
    pub message: String,
}

/// Create a new account and its profile/preference documents.
async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>)> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let identity = state.identity.sign_up(&req.email, &req.password).await?;

    tracing::info!(user_id = %identity.uid, "Account created with identity provider");

    // Add the new user to Firestore
    let profile = UserProfile {
        user_id: identity.uid.clone(),
        email: identity.email.clone(),
        face_id: None,
        created_at: format_utc_rfc3339(chrono::Utc::now()),
    };
    state.db.upsert_user(&profile).await?;

    // Set default preferences for the new account
    let prefs = Preferences::default_for(&identity.uid);
    state.db.set_preferences(&prefs).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            user_id: identity.uid,
            email: identity.email,
            message: "Account created successfully!".to_string(),
        }),
    ))
}

/// User identity returned at login.
#[derive(Serialize)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub display_name: String,
}

/// Response for a successful login.
#[derive(Serialize)]
pub struct LogInResponse {
    /// Session JWT; send as `Authorization: Bearer` on protected routes
    pub token: String,
    pub user: SessionUser,
}

/// Authenticate and issue a session token.
async fn log_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<LogInResponse>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let identity = state.identity.sign_in(&req.email, &req.password).await?;

    let token = create_session_jwt(&identity.uid, &state.config.session_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    tracing::info!(user_id = %identity.uid, "Login successful");

    Ok(Json(LogInResponse {
        token,
        user: SessionUser {
            uid: identity.uid,
            email: identity.email,
            display_name: identity.display_name.unwrap_or_else(|| "User".to_string()),
        },
    }))
}

/// Logout response.
#[derive(Serialize)]
pub struct LogOutResponse {
    pub message: String,
}

/// Logout. Sessions are bearer tokens, so the client discards its copy;
/// nothing is invalidated server-side.
async fn log_out() -> Json<LogOutResponse> {
    Json(LogOutResponse {
        message: "Logged out".to_string(),
    })
}
