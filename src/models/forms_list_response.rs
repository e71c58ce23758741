use serde::{Deserialize, Serialize};

use super::FormRecord;

/// Envelope for `GET /formbuilder/api/forms/`.
///
/// The backend wraps the list in a `forms` key; a missing key deserializes
/// to an empty list rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsListResponse {
    /// All stored forms, in backend order
    #[serde(default)]
    pub forms: Vec<FormRecord>,
}
