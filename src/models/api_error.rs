use serde::{Deserialize, Serialize};

/// Error envelope returned by the backend on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub error: String,
}
