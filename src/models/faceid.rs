//! FaceIO enrollment types.

use serde::{Deserialize, Serialize};

/// Enrollment receipt produced by the FaceIO widget after a successful
/// enroll, posted back by the client so the credential reference can be
/// persisted on the user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentReceipt {
    /// Opaque facial credential identifier issued by FaceIO
    pub facial_id: String,
    /// Enrollment timestamp reported by the widget (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
