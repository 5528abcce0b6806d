// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! QRTeller API Server
//!
//! Rotating-QR terminal authentication for bank-account holders, with
//! email/password login and optional FaceID enrollment.

use qrteller::{
    config::Config,
    db::FirestoreDb,
    services::{FaceIdClient, IdentityClient, TokenSigner},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting QRTeller API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Identity provider client
    let identity = IdentityClient::new(
        config.identity_base_url.clone(),
        config.identity_api_key.clone(),
    );
    tracing::info!("Identity provider client initialized");

    // FaceIO client
    let faceid = FaceIdClient::new(
        config.faceio_base_url.clone(),
        config.faceio_public_id.clone(),
        config.faceio_api_key.clone(),
    );
    tracing::info!(public_id = %config.faceio_public_id, "FaceIO client initialized");

    // Rotating token signer (secret stays server-side)
    let signer = TokenSigner::new(config.qr_token_secret.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        identity,
        faceid,
        signer,
    });

    // Build router
    let app = qrteller::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("qrteller=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
