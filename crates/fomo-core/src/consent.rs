//! Cookie consent flag persisted on the visitor's machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Consent status persisted across sessions.
///
/// Absent on first visit; written once when both boxes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConsentStatus {
    pub cookies: bool,
    pub privacy: bool,
    pub timestamp: Option<DateTime<Utc>>,
}

impl ConsentStatus {
    pub fn accepted_at(at: DateTime<Utc>) -> Self {
        Self {
            cookies: true,
            privacy: true,
            timestamp: Some(at),
        }
    }

    pub fn is_granted(&self) -> bool {
        self.cookies && self.privacy
    }
}
