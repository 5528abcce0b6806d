// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::Preferences;
use crate::services::rotation::RotationFeed;
use crate::services::{qr, token};
use crate::AppState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Extension, Json, Router,
};
use futures_util::stream::{self, Stream, StreamExt};
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/qr", get(get_qr))
        .route("/api/qr/stream", get(qr_stream))
        .route("/api/preferences", get(get_preferences))
}

// ─── User Profile ────────────────────────────────────────────

/// Current user response.
#[derive(Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub email: String,
    pub face_enrolled: bool,
    pub created_at: String,
}

/// Get current user profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    let profile = state.db.get_user(&user.user_id).await?.ok_or_else(|| {
        crate::error::AppError::NotFound(format!("User {} not found", user.user_id))
    })?;

    Ok(Json(UserResponse {
        user_id: profile.user_id,
        email: profile.email,
        face_enrolled: profile.face_id.is_some(),
        created_at: profile.created_at,
    }))
}

// ─── Rotating QR Token ───────────────────────────────────────

/// One rotating-token frame with its rendered symbol.
#[derive(Serialize)]
pub struct QrResponse {
    /// Current rotating token (hex HMAC)
    pub token: String,
    /// Time bucket the token was derived for
    pub bucket: u64,
    /// Milliseconds until the next rotation
    pub expires_in_ms: u64,
    /// QR symbol as a data URL for direct embedding
    pub qr_svg: String,
}

/// Get the current rotating token and its QR symbol.
async fn get_qr(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<QrResponse>> {
    let now_ms = token::unix_millis_now();
    let bucket = token::bucket_at(now_ms);
    let signed = state.signer.sign(&user.user_id, bucket);
    let qr_svg = qr::render_data_url(&signed)?;

    Ok(Json(QrResponse {
        token: signed,
        bucket,
        expires_in_ms: token::remaining_ms_at(now_ms),
        qr_svg,
    }))
}

/// One event on the presentation stream.
#[derive(Serialize)]
struct QrStreamEvent {
    token: String,
    bucket: u64,
    countdown: u8,
}

/// Subscribe to the QR presentation loop as Server-Sent Events.
///
/// The loop starts when the subscriber connects and is torn down (both
/// timers cancelled) when the connection drops, because the feed lives
/// inside the stream state.
async fn qr_stream(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let feed = RotationFeed::start(state.signer.clone(), user.user_id.clone());
    let initial = feed.current();
    let rx = feed.subscribe();

    let updates = stream::unfold((feed, rx), |(feed, mut rx)| async move {
        rx.changed().await.ok()?;
        let frame = rx.borrow_and_update().clone();
        Some((frame, (feed, rx)))
    });

    let events = stream::once(async move { initial })
        .chain(updates)
        .map(|frame| {
            let payload = QrStreamEvent {
                token: frame.token,
                bucket: frame.bucket,
                countdown: frame.countdown,
            };
            Ok::<Event, Infallible>(
                Event::default()
                    .event("frame")
                    .json_data(&payload)
                    .unwrap_or_default(),
            )
        });

    Sse::new(events).keep_alive(KeepAlive::default())
}

// ─── Preferences ─────────────────────────────────────────────

/// Get the stored display preferences (written with defaults at sign-up).
async fn get_preferences(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Preferences>> {
    let prefs = state.db.get_preferences(&user.user_id).await?.ok_or_else(|| {
        crate::error::AppError::NotFound(format!("Preferences for {} not found", user.user_id))
    })?;

    Ok(Json(prefs))
}
