// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rotating QR token derivation.
//!
//! A token is an HMAC-SHA256 over `"{user_id}:{bucket}"` rendered as hex,
//! where the bucket is the index of the current 10-second rotation window.
//! The signing secret is server-held only; clients fetch fresh tokens over
//! an authenticated channel instead of deriving them locally.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Fixed rotation interval in milliseconds.
pub const ROTATION_INTERVAL_MS: u64 = 10_000;

/// Signs rotating authentication tokens with a server-held secret.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl TokenSigner {
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Derive the token for a user and time bucket.
    ///
    /// Deterministic: identical `(user_id, bucket)` always yields an
    /// identical token.
    pub fn sign(&self, user_id: &str, bucket: u64) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC accepts keys of any length");
        mac.update(format!("{}:{}", user_id, bucket).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

}

/// Bucket index for a given Unix timestamp in milliseconds.
pub fn bucket_at(unix_ms: u64) -> u64 {
    unix_ms / ROTATION_INTERVAL_MS
}

/// Milliseconds remaining in the rotation window containing `unix_ms`.
pub fn remaining_ms_at(unix_ms: u64) -> u64 {
    ROTATION_INTERVAL_MS - (unix_ms % ROTATION_INTERVAL_MS)
}

/// Current Unix time in milliseconds.
pub fn unix_millis_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signer() -> TokenSigner {
        TokenSigner::new(b"test_qr_token_secret_32_bytes!!!".to_vec())
    }

    #[test]
    fn test_token_is_deterministic() {
        let signer = test_signer();
        let a = signer.sign("user-123", 17_000_000);
        let b = signer.sign("user-123", 17_000_000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_token_is_hex_sha256() {
        let signer = test_signer();
        let token = signer.sign("user-123", 1);
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_buckets_distinct_tokens() {
        let signer = test_signer();
        let t1 = signer.sign("user-123", 100);
        let t2 = signer.sign("user-123", 101);
        assert_ne!(t1, t2);
    }

    #[test]
    fn test_distinct_users_distinct_tokens() {
        let signer = test_signer();
        let t1 = signer.sign("user-a", 100);
        let t2 = signer.sign("user-b", 100);
        assert_ne!(t1, t2);
    }

    #[test]
    fn test_distinct_secrets_distinct_tokens() {
        let a = TokenSigner::new(b"secret-a".to_vec());
        let b = TokenSigner::new(b"secret-b".to_vec());
        assert_ne!(a.sign("user-123", 100), b.sign("user-123", 100));
    }

    #[test]
    fn test_bucket_math() {
        assert_eq!(bucket_at(0), 0);
        assert_eq!(bucket_at(9_999), 0);
        assert_eq!(bucket_at(10_000), 1);
        assert_eq!(bucket_at(25_000), 2);
        assert_eq!(remaining_ms_at(0), 10_000);
        assert_eq!(remaining_ms_at(9_999), 1);
        assert_eq!(remaining_ms_at(10_000), 10_000);
    }
}
