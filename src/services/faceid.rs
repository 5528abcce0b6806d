// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FaceIO API client for facial credential deletion.
//!
//! Enrollment and authentication run in the browser widget (loaded with the
//! publishable public ID); the server only records their results and owns
//! deletion, which requires the server-held API key.
//!
//! The upstream delete endpoint replies with a JSON `{status, error}`
//! envelope, but is known to occasionally return a non-JSON body even when
//! the deletion went through. That case is classified as
//! [`DeleteOutcome::Unconfirmed`] rather than an error, preserving the
//! lenient policy of the service while keeping the two outcomes
//! distinguishable for callers and tests.

use crate::error::AppError;
use serde::Deserialize;

/// FaceIO status code meaning "invalid application public key".
const FACEIO_ERR_INVALID_KEY: u16 = 10;

/// Result of a remote credential deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Upstream confirmed the deletion (`status == 200`).
    Confirmed,
    /// Upstream returned a non-JSON body; the deletion likely occurred but
    /// was not confirmed.
    Unconfirmed,
}

/// FaceIO REST client.
#[derive(Clone)]
pub struct FaceIdClient {
    http: reqwest::Client,
    base_url: String,
    public_id: String,
    api_key: String,
}

/// Upstream delete response envelope.
#[derive(Debug, Deserialize)]
struct DeleteResponse {
    status: u16,
    #[serde(default)]
    error: Option<String>,
}

impl FaceIdClient {
    /// Create a new client. `base_url` comes from config so tests can point
    /// it at a mock server.
    pub fn new(base_url: String, public_id: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            public_id,
            api_key,
        }
    }

    /// The publishable application public ID for the browser widget.
    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    /// Delete a facial credential upstream.
    ///
    /// `GET {base}/deletefacialid?fid=<id>&key=<server key>`. The body is
    /// read as text and parsed leniently, matching the upstream's observed
    /// behavior rather than its documented contract.
    pub async fn delete_credential(&self, facial_id: &str) -> Result<DeleteOutcome, AppError> {
        let url = format!(
            "{}/deletefacialid?fid={}&key={}",
            self.base_url,
            urlencoding::encode(facial_id),
            urlencoding::encode(&self.api_key)
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("FaceIO request failed: {}", e)))?;

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("FaceIO response read failed: {}", e)))?;

        match serde_json::from_str::<DeleteResponse>(&text) {
            Ok(body) if body.status == 200 => Ok(DeleteOutcome::Confirmed),
            Ok(body) => {
                let message = if body.status == FACEIO_ERR_INVALID_KEY {
                    AppError::FACEIO_INVALID_PUBLIC_KEY.to_string()
                } else {
                    body.error
                        .unwrap_or_else(|| format!("FaceIO reported status {}", body.status))
                };
                tracing::error!(status = body.status, error = %message, "FaceIO delete failed");
                Err(AppError::FaceIdApi(message))
            }
            Err(_) => {
                tracing::warn!(
                    body = %text,
                    "Non-JSON response from FaceIO delete, treating as unconfirmed success"
                );
                Ok(DeleteOutcome::Unconfirmed)
            }
        }
    }
}
