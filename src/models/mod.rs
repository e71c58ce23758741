//! Data models for the form-link client library.
//!
//! Defines the request and response structures exchanged with the
//! formbuilder REST backend.

pub mod api_error;
pub mod form_payload;
pub mod form_record;
pub mod forms_list_response;


pub use api_error::ApiError;
pub use form_payload::FormPayload;
pub use form_record::FormRecord;
pub use forms_list_response::FormsListResponse;
