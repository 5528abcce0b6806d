//! User profile model for storage and API.

use serde::{Deserialize, Serialize};

/// User profile stored in Firestore (`users` collection, keyed by user ID).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity provider user ID (also used as document ID)
    pub user_id: String,
    /// Email address
    pub email: String,
    /// FaceIO facial credential reference; absent when not enrolled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
    /// When the account was created (RFC3339)
    pub created_at: String,
}
