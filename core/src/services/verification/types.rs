//! Types for verification service results

use chrono::{DateTime, Utc};

/// Result of issuing a code; never carries the code itself
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The message ID from the mail provider
    pub message_id: String,
    /// When the issued code stops being accepted
    pub expires_at: DateTime<Utc>,
}
