// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use qrteller::config::Config;
use qrteller::db::FirestoreDb;
use qrteller::routes::create_router;
use qrteller::services::{FaceIdClient, IdentityClient, TokenSigner};
use qrteller::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Build an app from an explicit config and database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_app_with(config: Config, db: FirestoreDb) -> (axum::Router, Arc<AppState>) {
    let identity = IdentityClient::new(
        config.identity_base_url.clone(),
        config.identity_api_key.clone(),
    );
    let faceid = FaceIdClient::new(
        config.faceio_base_url.clone(),
        config.faceio_public_id.clone(),
        config.faceio_api_key.clone(),
    );
    let signer = TokenSigner::new(config.qr_token_secret.clone());

    let state = Arc::new(AppState {
        config,
        db,
        identity,
        faceid,
        signer,
    });

    (create_router(state.clone()), state)
}

/// Create a test app with offline mock dependencies.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_app_with(Config::test_default(), test_db_offline())
}
