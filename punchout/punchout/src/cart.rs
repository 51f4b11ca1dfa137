use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entry::PunchoutEntry;

/// A punchout cart: the line items carried by one form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Punchout {
    #[serde(with = "time::serde::rfc3339", default = "OffsetDateTime::now_utc")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub entries: Vec<PunchoutEntry>,
}

impl Punchout {
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    pub fn with_entries(entries: Vec<PunchoutEntry>) -> Self {
        Self {
            created_at: OffsetDateTime::now_utc(),
            entries,
        }
    }
}

impl Default for Punchout {
    fn default() -> Self {
        Self::new()
    }
}
