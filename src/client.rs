//! HTTP client for the formbuilder REST API.
//!
//! Thin typed wrapper over the backend's form CRUD surface. Errors surface
//! as [`FormLinkError`]; the storage adapter decides what to swallow.

use crate::{
    auth::AuthProvider,
    error::{FormLinkError, Result},
    models::{ApiError, FormPayload, FormRecord, FormsListResponse},
    timeouts::FormLinkTimeouts,
};
use log::debug;
use reqwest::{Method, StatusCode};
use std::time::{Duration, Instant};

/// Base URL used when `FORMBUILDER_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const BASE_URL_ENV: &str = "FORMBUILDER_API_URL";
const FORMS_PATH: &str = "/formbuilder/api/forms/";

/// Client for the formbuilder backend.
///
/// Use [`FormsClient::builder`] to construct instances with custom
/// configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use form_link::FormsClient;
///
/// # async fn example() -> form_link::Result<()> {
/// let client = FormsClient::builder()
///     .base_url("http://localhost:8000")
///     .build()?;
///
/// let forms = client.list_forms().await?;
/// println!("{} forms stored", forms.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FormsClient {
    base_url: String,
    http_client: reqwest::Client,
    auth: AuthProvider,
}

impl FormsClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> FormsClientBuilder {
        FormsClientBuilder::new()
    }

    /// Build a client from the `FORMBUILDER_API_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::builder().base_url(base_url).build()
    }

    /// The configured base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all stored forms, in backend order.
    pub async fn list_forms(&self) -> Result<Vec<FormRecord>> {
        let url = self.forms_url();
        let response = self.execute(Method::GET, &url, None, "forms").await?;
        let list: FormsListResponse = response.json().await?;
        Ok(list.forms)
    }

    /// Fetch a single form by its backend-assigned ID.
    pub async fn get_form(&self, id: u64) -> Result<FormRecord> {
        let url = self.form_url(id);
        let resource = format!("form {}", id);
        let response = self.execute(Method::GET, &url, None, &resource).await?;
        Ok(response.json().await?)
    }

    /// Create a new form; the backend assigns the ID.
    pub async fn create_form(&self, payload: &FormPayload) -> Result<FormRecord> {
        let url = self.forms_url();
        let response = self
            .execute(Method::POST, &url, Some(payload), "forms")
            .await?;
        Ok(response.json().await?)
    }

    /// Overwrite an existing form's schema and name.
    pub async fn update_form(&self, id: u64, payload: &FormPayload) -> Result<FormRecord> {
        let url = self.form_url(id);
        let resource = format!("form {}", id);
        let response = self
            .execute(Method::PUT, &url, Some(payload), &resource)
            .await?;
        Ok(response.json().await?)
    }

    /// Delete a form by ID.
    pub async fn delete_form(&self, id: u64) -> Result<()> {
        let url = self.form_url(id);
        let resource = format!("form {}", id);
        self.execute(Method::DELETE, &url, None, &resource).await?;
        Ok(())
    }

    fn forms_url(&self) -> String {
        format!("{}{}", self.base_url, FORMS_PATH)
    }

    fn form_url(&self, id: u64) -> String {
        format!("{}{}{}/", self.base_url, FORMS_PATH, id)
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&FormPayload>,
        resource: &str,
    ) -> Result<reqwest::Response> {
        let mut request = self.http_client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }
        request = self.auth.apply_to_request(request);

        let start = Instant::now();
        debug!("[FORMS_HTTP] {} {}", method, url);
        let response = request.send().await?;
        let status = response.status();
        debug!(
            "[FORMS_HTTP] {} {} -> {} duration_ms={}",
            method,
            url,
            status,
            start.elapsed().as_millis()
        );

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::error_message(response).await;
        if status == StatusCode::NOT_FOUND {
            return Err(FormLinkError::not_found(resource));
        }
        Err(FormLinkError::ServerError {
            status_code: status.as_u16(),
            message,
        })
    }

    /// Extract the backend's `{"error": ...}` message, falling back to the
    /// raw body text.
    async fn error_message(response: reqwest::Response) -> String {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        match serde_json::from_str::<ApiError>(&text) {
            Ok(api_error) => api_error.error,
            Err(_) => text,
        }
    }
}

/// Builder for configuring [`FormsClient`] instances.
pub struct FormsClientBuilder {
    base_url: Option<String>,
    timeouts: FormLinkTimeouts,
    auth: AuthProvider,
}

impl FormsClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            timeouts: FormLinkTimeouts::default(),
            auth: AuthProvider::none(),
        }
    }

    /// Set the base URL of the formbuilder backend. Required.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout, keeping the default connection timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.receive_timeout = timeout;
        self
    }

    /// Set the full timeout configuration.
    pub fn timeouts(mut self, timeouts: FormLinkTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Set the authentication provider.
    pub fn auth(mut self, auth: AuthProvider) -> Self {
        self.auth = auth;
        self
    }

    /// Set HTTP Basic Auth credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = AuthProvider::basic_auth(username.into(), password.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<FormsClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| FormLinkError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let http_client = reqwest::Client::builder()
            .timeout(self.timeouts.receive_timeout)
            .connect_timeout(self.timeouts.connection_timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| FormLinkError::Configuration(e.to_string()))?;

        Ok(FormsClient {
            base_url,
            http_client,
            auth: self.auth,
        })
    }
}
