//! Sample identity and user-facing display names.

use serde::{Deserialize, Serialize};

/// The (id, name) pair identifying the source of a row, plus an optional
/// user override for presentation.
///
/// Uniqueness of display names across samples is a front-end concern; the
/// core tolerates duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleIdentity {
    /// Immutable key from the report's `Sample ID` field.
    pub sample_id: String,
    /// Original name from the report's `Sample Name` field.
    pub sample_name: String,
    /// User-chosen name; `None` when the user has not renamed this sample.
    pub display_name: Option<String>,
}

impl SampleIdentity {
    pub fn new(sample_id: impl Into<String>, sample_name: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
            sample_name: sample_name.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// The name to present: the override if set, the original otherwise.
    pub fn display(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.sample_name)
    }
}
