//! Storage adapter between the form designer/renderer widgets and the
//! formbuilder REST API.
//!
//! The widgets hand their storage provider name-keyed operations and have no
//! error-handling path of their own, so the outer methods here never fail:
//! transport and not-found errors collapse into safe defaults (an empty name
//! list, `false`, the empty form) and are logged instead. The `try_*` and
//! `fetch_*` layer underneath keeps the real error taxonomy visible and
//! testable.

use crate::client::FormsClient;
use crate::error::{FormLinkError, Result};
use crate::models::{FormPayload, FormRecord};
use crate::schema;
use log::{debug, error, warn};
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Name persisted when neither the caller nor the name source supplies one.
pub const UNTITLED_FORM_NAME: &str = "Untitled Form";

/// Read-only capability for the current display name of the open form.
///
/// Name edits happen through a separate UI path; the adapter re-reads the
/// name on every save instead of caching it.
///
/// Blanket-implemented for closures:
///
/// ```rust
/// use form_link::NameSource;
///
/// let source = || Some("Customer Survey".to_string());
/// assert_eq!(source.current_name().as_deref(), Some("Customer Survey"));
/// ```
pub trait NameSource: Send + Sync {
    /// The form's current display name, if one is set.
    fn current_name(&self) -> Option<String>;
}

impl<F> NameSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn current_name(&self) -> Option<String> {
        self()
    }
}

/// Storage provider handed to the form designer/renderer widgets.
///
/// Optionally bound to a known form ID (the form currently open) and a
/// [`NameSource`]. Both are read-only for the adapter's lifetime.
///
/// # Examples
///
/// ```rust,no_run
/// use form_link::{FormStorage, FormsClient};
///
/// # async fn example() -> form_link::Result<()> {
/// let client = FormsClient::builder()
///     .base_url("http://localhost:8000")
///     .build()?;
/// let storage = FormStorage::new(client).with_form_id(42);
///
/// // Always a valid schema string, even when the backend is unreachable.
/// let schema_json = storage.get_form(None).await;
/// # Ok(())
/// # }
/// ```
pub struct FormStorage {
    client: FormsClient,
    form_id: Option<u64>,
    name_source: Option<Arc<dyn NameSource>>,
}

impl FormStorage {
    /// Create an adapter bound to no particular form.
    pub fn new(client: FormsClient) -> Self {
        Self {
            client,
            form_id: None,
            name_source: None,
        }
    }

    /// Bind the adapter to a known form ID (the form currently open).
    pub fn with_form_id(mut self, form_id: u64) -> Self {
        self.form_id = Some(form_id);
        self
    }

    /// Inject a name source consulted on every save.
    pub fn with_name_source(mut self, source: Arc<dyn NameSource>) -> Self {
        self.name_source = Some(source);
        self
    }

    /// The bound form ID, if any.
    pub fn form_id(&self) -> Option<u64> {
        self.form_id
    }

    // ==================== inner, Result-returning layer ====================

    /// List the names of all stored forms, in backend order.
    pub async fn try_form_names(&self) -> Result<Vec<String>> {
        let forms = self.client.list_forms().await?;
        Ok(forms.into_iter().map(|form| form.name).collect())
    }

    /// Delete the form with exactly the given name.
    ///
    /// The widgets only know forms by name, so this lists all forms and
    /// matches before deleting by ID. Errors with `NotFound` (and issues no
    /// delete) when no form has that name.
    pub async fn try_remove_form(&self, name: &str) -> Result<()> {
        let forms = self.client.list_forms().await?;
        let form = forms
            .iter()
            .find(|form| form.name == name)
            .ok_or_else(|| FormLinkError::not_found(format!("form named {:?}", name)))?;
        self.client.delete_form(form.id).await
    }

    /// Fetch a form's schema by ID. `Ok(None)` when the record exists but
    /// carries no schema.
    pub async fn fetch_schema_by_id(&self, id: u64) -> Result<Option<JsonValue>> {
        let record = self.client.get_form(id).await?;
        Ok(record.schema)
    }

    /// Fetch a form's schema by exact name match. `Ok(None)` when no form has
    /// that name or the matched record carries no schema.
    pub async fn fetch_schema_by_name(&self, name: &str) -> Result<Option<JsonValue>> {
        let forms = self.client.list_forms().await?;
        let Some(form) = forms.iter().find(|form| form.name == name) else {
            return Ok(None);
        };
        let record = self.client.get_form(form.id).await?;
        Ok(record.schema)
    }

    /// Parse and persist a serialized schema, creating or updating depending
    /// on whether the adapter is bound to a form ID.
    pub async fn try_save_form(
        &self,
        name: Option<&str>,
        serialized_schema: &str,
    ) -> Result<FormRecord> {
        let schema: JsonValue = serde_json::from_str(serialized_schema)?;
        let payload = FormPayload::new(schema, self.effective_name(name));

        match self.form_id {
            Some(id) => self.client.update_form(id, &payload).await,
            None => self.client.create_form(&payload).await,
        }
    }

    /// Resolve the name to persist: a name source's current value wins over
    /// the caller's argument; an empty or absent name collapses to
    /// [`UNTITLED_FORM_NAME`].
    fn effective_name(&self, name: Option<&str>) -> String {
        let current = match &self.name_source {
            Some(source) => source.current_name(),
            None => name.map(str::to_string),
        };
        match current {
            Some(name) if !name.is_empty() => name,
            _ => UNTITLED_FORM_NAME.to_string(),
        }
    }

    // ==================== outer, never-failing layer ====================

    /// List all form names; an empty list on any failure.
    pub async fn form_names(&self) -> Vec<String> {
        match self.try_form_names().await {
            Ok(names) => names,
            Err(e) => {
                error!("[FORM_STORAGE] listing form names failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Remove the form with the given name; `false` on any failure.
    pub async fn remove_form(&self, name: &str) -> bool {
        match self.try_remove_form(name).await {
            Ok(()) => true,
            Err(e) if e.is_not_found() => {
                warn!("[FORM_STORAGE] remove: {}", e);
                false
            }
            Err(e) => {
                error!("[FORM_STORAGE] removing form {:?} failed: {}", name, e);
                false
            }
        }
    }

    /// Resolve a schema for the widgets, always returning a valid serialized
    /// schema string.
    ///
    /// Resolution order, first match wins:
    /// 1. the bound form ID, when present;
    /// 2. the empty form, when no name was given;
    /// 3. exact name match against the stored forms;
    /// 4. the empty form.
    ///
    /// Legacy schemas are migrated to the current shape on both fetch paths.
    /// Any failure at any step falls through to the next.
    pub async fn get_form(&self, name: Option<&str>) -> String {
        if let Some(id) = self.form_id {
            match self.fetch_schema_by_id(id).await {
                Ok(Some(schema)) => return schema::migrate_to_current(schema).to_string(),
                Ok(None) => {
                    warn!("[FORM_STORAGE] form {} has no schema, falling back", id);
                }
                Err(e) if e.is_not_found() => {
                    warn!("[FORM_STORAGE] get: {}", e);
                }
                Err(e) => {
                    error!("[FORM_STORAGE] fetching form {} failed: {}", id, e);
                }
            }
        }

        let name = name.filter(|name| !name.is_empty());
        if let Some(name) = name {
            match self.fetch_schema_by_name(name).await {
                Ok(Some(schema)) => return schema::migrate_to_current(schema).to_string(),
                Ok(None) => {
                    warn!(
                        "[FORM_STORAGE] no stored schema for form {:?}, returning empty form",
                        name
                    );
                }
                Err(e) if e.is_not_found() => {
                    warn!("[FORM_STORAGE] get: {}", e);
                }
                Err(e) => {
                    error!("[FORM_STORAGE] fetching form {:?} failed: {}", name, e);
                }
            }
        }

        schema::empty_form().to_string()
    }

    /// Persist a serialized schema; `false` on any failure. A schema string
    /// that is not valid JSON fails before any network call.
    pub async fn save_form(&self, name: Option<&str>, serialized_schema: &str) -> bool {
        match self.try_save_form(name, serialized_schema).await {
            Ok(record) => {
                debug!(
                    "[FORM_STORAGE] saved form {} ({:?})",
                    record.id, record.name
                );
                true
            }
            Err(e) => {
                error!("[FORM_STORAGE] saving form failed: {}", e);
                false
            }
        }
    }
}
