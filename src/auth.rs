//! Authentication for requests against the formbuilder backend.
//!
//! The default deployment serves the API unauthenticated, so [`AuthProvider::None`]
//! is the default. Basic and bearer-token auth cover reverse-proxy setups that
//! gate the API.

use base64::{engine::general_purpose, Engine as _};

/// Authentication credentials attached to every outgoing request.
///
/// # Examples
///
/// ```rust
/// use form_link::AuthProvider;
///
/// // No authentication (default)
/// let auth = AuthProvider::none();
///
/// // HTTP Basic Auth
/// let auth = AuthProvider::basic_auth("alice".to_string(), "secret".to_string());
///
/// // Bearer token
/// let auth = AuthProvider::bearer_token("eyJhbGc...".to_string());
/// ```
#[derive(Debug, Clone, Default)]
pub enum AuthProvider {
    /// No authentication
    #[default]
    None,

    /// HTTP Basic Auth (username, password)
    BasicAuth(String, String),

    /// Bearer token in the Authorization header
    BearerToken(String),
}

impl AuthProvider {
    /// No authentication.
    pub fn none() -> Self {
        Self::None
    }

    /// HTTP Basic Auth with the given username and password.
    pub fn basic_auth(username: String, password: String) -> Self {
        Self::BasicAuth(username, password)
    }

    /// Bearer token authentication.
    pub fn bearer_token(token: String) -> Self {
        Self::BearerToken(token)
    }

    /// Attach the appropriate Authorization header to a request.
    pub fn apply_to_request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::None => builder,
            Self::BasicAuth(username, password) => {
                let credentials =
                    general_purpose::STANDARD.encode(format!("{}:{}", username, password));
                builder.header("Authorization", format!("Basic {}", credentials))
            }
            Self::BearerToken(token) => {
                builder.header("Authorization", format!("Bearer {}", token))
            }
        }
    }
}
