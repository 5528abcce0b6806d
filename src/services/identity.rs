// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity provider client (Google Identity Toolkit REST API).
//!
//! Owns email/password sign-up and login. Password storage and
//! verification are entirely the provider's concern; this client only
//! formats requests and maps provider error codes to short user-facing
//! messages. No retry on failure.

use crate::error::AppError;
use serde::Deserialize;
use serde_json::json;

/// Identity provider client.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// The user identity triple returned by the provider.
#[derive(Debug, Clone)]
pub struct IdentityUser {
    /// Unique user ID (provider `localId`)
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Raw provider response for signUp / signInWithPassword.
#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
}

/// Provider error envelope: `{"error": {"message": "EMAIL_EXISTS", ...}}`.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

impl IdentityClient {
    /// Create a new client. `base_url` comes from config so tests can point
    /// it at a mock server.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Create a new account with email and password.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<IdentityUser, AppError> {
        self.account_call("accounts:signUp", email, password).await
    }

    /// Authenticate an existing account.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityUser, AppError> {
        self.account_call("accounts:signInWithPassword", email, password)
            .await
    }

    async fn account_call(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<IdentityUser, AppError> {
        let url = format!("{}/{}?key={}", self.base_url, endpoint, self.api_key);

        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::IdentityApi(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            let code = serde_json::from_str::<ProviderErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or_default();

            tracing::warn!(status = %status, code = %code, "Identity provider rejected request");
            return Err(AppError::IdentityApi(user_message(&code).to_string()));
        }

        let account: AccountResponse = response
            .json()
            .await
            .map_err(|e| AppError::IdentityApi(format!("JSON parse error: {}", e)))?;

        Ok(IdentityUser {
            uid: account.local_id,
            email: account.email,
            display_name: account.display_name.filter(|n| !n.is_empty()),
        })
    }
}

/// Map a provider error code to a short user-facing message.
fn user_message(code: &str) -> &'static str {
    // WEAK_PASSWORD arrives as "WEAK_PASSWORD : Password should be ..."
    if code.starts_with("WEAK_PASSWORD") {
        return "Password should be at least 6 characters.";
    }
    match code {
        "EMAIL_EXISTS" => "An account with this email already exists.",
        "INVALID_EMAIL" => "Invalid email address.",
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Failed to log in. Please check your credentials."
        }
        "USER_DISABLED" => "This account has been disabled.",
        _ => "Authentication failed. Please try again.",
    }
}
