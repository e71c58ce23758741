//! # form-link
//!
//! Client-side storage adapter bridging form designer/renderer widgets to the
//! formbuilder REST backend.
//!
//! The widgets expect a name-keyed storage provider that never fails and
//! speaks JSON-serialized schema strings; the backend speaks ID-keyed CRUD
//! over `/formbuilder/api/forms/`. [`FormStorage`] mediates between the two:
//! it reconciles name-based lookups against backend IDs, migrates legacy
//! flat-`components` schemas to the current nested `form` tree on every read,
//! and collapses transport failures into safe defaults while keeping the full
//! error taxonomy available on its `try_*` layer.
//!
//! # Examples
//!
//! ```rust,no_run
//! use form_link::{FormStorage, FormsClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> form_link::Result<()> {
//! let client = FormsClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! // Adapter for a form opened by ID, with the display name supplied by the
//! // name editor rather than the widget.
//! let storage = FormStorage::new(client)
//!     .with_form_id(42)
//!     .with_name_source(Arc::new(|| Some("Customer Survey".to_string())));
//!
//! // Always a valid schema string, already migrated to the current shape.
//! let schema_json = storage.get_form(None).await;
//!
//! let saved = storage.save_form(None, &schema_json).await;
//! assert!(saved);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod schema;
pub mod storage;
pub mod timeouts;
pub mod validate;

pub use auth::AuthProvider;
pub use client::{FormsClient, FormsClientBuilder, DEFAULT_BASE_URL};
pub use error::{FormLinkError, Result};
pub use storage::{FormStorage, NameSource, UNTITLED_FORM_NAME};
pub use timeouts::FormLinkTimeouts;
