//! Display preferences model.
//!
//! Preferences are written with defaults at sign-up; mutation happens in a
//! separate settings surface and is out of scope here.

use serde::{Deserialize, Serialize};

/// Per-user display preferences (`preferences` collection, keyed by user ID).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    /// Identity provider user ID (mirrors the document ID)
    pub user_id: String,
    pub theme: String,
    pub font: String,
    pub font_weight: String,
    pub icon_size: String,
    pub text_to_speech: bool,
}

impl Preferences {
    /// Defaults written for a new account.
    pub fn default_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            theme: "light".to_string(),
            font: "Inter".to_string(),
            font_weight: "normal".to_string(),
            icon_size: "medium".to_string(),
            text_to_speech: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default_for("uid-1");
        assert_eq!(prefs.user_id, "uid-1");
        assert_eq!(prefs.theme, "light");
        assert_eq!(prefs.font, "Inter");
        assert_eq!(prefs.font_weight, "normal");
        assert_eq!(prefs.icon_size, "medium");
        assert!(!prefs.text_to_speech);
    }
}
