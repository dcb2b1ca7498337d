use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One registered email and the moment it joined the waitlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

impl WaitlistEntry {
    pub fn new(email: impl Into<String>, joined_at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            joined_at,
        }
    }

    /// Row layout in the sheet: `[email, joined_at]`, timestamp as
    /// `2025-06-01T12:00:00.000Z`.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            self.joined_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        ]
    }
}
