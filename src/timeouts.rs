//! Timeout configuration for the forms client.
//!
//! The storage adapter itself carries no timeout logic; timeouts live in the
//! underlying HTTP transport and are configured here, on the client builder.

use std::time::Duration;

/// Timeout configuration for HTTP requests against the formbuilder backend.
///
/// # Examples
///
/// ```rust
/// use form_link::FormLinkTimeouts;
/// use std::time::Duration;
///
/// // Use defaults (recommended for most cases)
/// let timeouts = FormLinkTimeouts::default();
///
/// // Custom timeouts for high-latency environments
/// let timeouts = FormLinkTimeouts::default()
///     .with_connection_timeout(Duration::from_secs(30))
///     .with_receive_timeout(Duration::from_secs(60));
///
/// // Aggressive timeouts for local development
/// let timeouts = FormLinkTimeouts::fast();
/// ```
#[derive(Debug, Clone)]
pub struct FormLinkTimeouts {
    /// Timeout for establishing connections (TCP + TLS handshake).
    /// Default: 10 seconds
    pub connection_timeout: Duration,

    /// Timeout for the full request/response round trip after connecting.
    /// Default: 30 seconds
    pub receive_timeout: Duration,
}

impl Default for FormLinkTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            receive_timeout: Duration::from_secs(30),
        }
    }
}

impl FormLinkTimeouts {
    /// Aggressive timeouts suited to a backend on the same host.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            receive_timeout: Duration::from_secs(5),
        }
    }

    /// Set the connection timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Set the receive timeout.
    pub fn with_receive_timeout(mut self, timeout: Duration) -> Self {
        self.receive_timeout = timeout;
        self
    }
}
