//! Validation helpers for form names and legacy-shape schemas.
//!
//! The embedding UI calls these before handing data to the storage adapter;
//! the adapter itself persists whatever parses, so none of this is wired into
//! the save path.

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Characters not allowed in form names.
const FORBIDDEN_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 255;

/// A single validation failure; display strings are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Form name cannot be empty")]
    NameEmpty,
    #[error("Form name must be at least 3 characters long")]
    NameTooShort,
    #[error("Form name cannot exceed 255 characters")]
    NameTooLong,
    #[error("Form name contains invalid characters")]
    NameInvalidCharacters,
    #[error("Form schema must have a components array")]
    MissingComponents,
    #[error("Please add at least one form component")]
    NoComponents,
    /// Component numbers in messages are 1-based.
    #[error("Component {0} is invalid")]
    ComponentInvalid(usize),
    #[error("Component {0} must have a valid key")]
    ComponentMissingKey(usize),
    #[error("Component {0} must have a valid type")]
    ComponentMissingType(usize),
}

/// Validate a form name: trimmed, 3 to 255 characters, no path or markup
/// characters.
pub fn validate_form_name(name: &str) -> std::result::Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    let length = trimmed.chars().count();
    if length < NAME_MIN_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    if length > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong);
    }
    if trimmed.contains(FORBIDDEN_NAME_CHARS) {
        return Err(ValidationError::NameInvalidCharacters);
    }
    Ok(())
}

/// Validate a legacy-shape schema: a non-empty `components` array whose
/// entries each carry a string `key` and `type`.
pub fn validate_form_schema(schema: &JsonValue) -> std::result::Result<(), ValidationError> {
    let components = schema
        .get("components")
        .and_then(JsonValue::as_array)
        .ok_or(ValidationError::MissingComponents)?;

    if components.is_empty() {
        return Err(ValidationError::NoComponents);
    }

    for (index, component) in components.iter().enumerate() {
        let number = index + 1;
        if !component.is_object() {
            return Err(ValidationError::ComponentInvalid(number));
        }
        if !has_nonempty_string(component, "key") {
            return Err(ValidationError::ComponentMissingKey(number));
        }
        if !has_nonempty_string(component, "type") {
            return Err(ValidationError::ComponentMissingType(number));
        }
    }

    Ok(())
}

/// Validate name and schema together, collecting every failure.
pub fn validate_form_data(
    name: &str,
    schema: &JsonValue,
) -> std::result::Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    if let Err(e) = validate_form_name(name) {
        errors.push(e);
    }
    if let Err(e) = validate_form_schema(schema) {
        errors.push(e);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Trimmed form name for display, with a `"New form"` fallback.
pub fn sanitize_form_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => "New form".to_string(),
    }
}

/// True when any component requires a value (`validate.required == true`).
pub fn has_required_fields(schema: &JsonValue) -> bool {
    schema
        .get("components")
        .and_then(JsonValue::as_array)
        .is_some_and(|components| {
            components.iter().any(|component| {
                component
                    .get("validate")
                    .and_then(|validate| validate.get("required"))
                    .and_then(JsonValue::as_bool)
                    .unwrap_or(false)
            })
        })
}

/// At-a-glance description of a schema's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSummary {
    pub component_count: usize,
    pub component_types: Vec<String>,
    pub has_required_fields: bool,
}

/// Summarize a schema, supporting both legacy and current shapes for the
/// count and type listing.
pub fn schema_summary(schema: &JsonValue) -> SchemaSummary {
    SchemaSummary {
        component_count: crate::schema::component_count(schema),
        component_types: crate::schema::component_types(schema),
        has_required_fields: has_required_fields(schema),
    }
}

fn has_nonempty_string(component: &JsonValue, field: &str) -> bool {
    component
        .get(field)
        .and_then(JsonValue::as_str)
        .is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_rules() {
        assert!(validate_form_name("Customer Survey").is_ok());
        assert_eq!(validate_form_name("   "), Err(ValidationError::NameEmpty));
        assert_eq!(validate_form_name("ab"), Err(ValidationError::NameTooShort));
        assert_eq!(
            validate_form_name(&"x".repeat(256)),
            Err(ValidationError::NameTooLong)
        );
        assert_eq!(
            validate_form_name("a/b"),
            Err(ValidationError::NameInvalidCharacters)
        );
        assert_eq!(
            validate_form_name("What?"),
            Err(ValidationError::NameInvalidCharacters)
        );
        // Length is measured after trimming
        assert!(validate_form_name("  abc  ").is_ok());
    }

    #[test]
    fn schema_rules() {
        assert!(validate_form_schema(&json!({
            "components": [{"key": "a", "type": "text"}]
        }))
        .is_ok());

        assert_eq!(
            validate_form_schema(&json!({})),
            Err(ValidationError::MissingComponents)
        );
        assert_eq!(
            validate_form_schema(&json!({"components": {}})),
            Err(ValidationError::MissingComponents)
        );
        assert_eq!(
            validate_form_schema(&json!({"components": []})),
            Err(ValidationError::NoComponents)
        );
        assert_eq!(
            validate_form_schema(&json!({"components": ["nope"]})),
            Err(ValidationError::ComponentInvalid(1))
        );
        assert_eq!(
            validate_form_schema(&json!({"components": [
                {"key": "a", "type": "text"},
                {"type": "text"}
            ]})),
            Err(ValidationError::ComponentMissingKey(2))
        );
        assert_eq!(
            validate_form_schema(&json!({"components": [{"key": "a"}]})),
            Err(ValidationError::ComponentMissingType(1))
        );
    }

    #[test]
    fn data_validation_collects_all_errors() {
        let result = validate_form_data("", &json!({}));
        assert_eq!(
            result,
            Err(vec![
                ValidationError::NameEmpty,
                ValidationError::MissingComponents
            ])
        );
        assert!(validate_form_data(
            "Survey",
            &json!({"components": [{"key": "a", "type": "text"}]})
        )
        .is_ok());
    }

    #[test]
    fn sanitize_name() {
        assert_eq!(sanitize_form_name(Some("  Survey  ")), "Survey");
        assert_eq!(sanitize_form_name(Some("   ")), "New form");
        assert_eq!(sanitize_form_name(None), "New form");
    }

    #[test]
    fn required_fields_and_summary() {
        let schema = json!({"components": [
            {"key": "a", "type": "text"},
            {"key": "b", "type": "number", "validate": {"required": true}},
            {"key": "c", "type": "text"}
        ]});

        assert!(has_required_fields(&schema));
        assert!(!has_required_fields(&json!({"components": [{"key": "a", "type": "text"}]})));
        assert!(!has_required_fields(&json!({})));

        let summary = schema_summary(&schema);
        assert_eq!(summary.component_count, 3);
        assert_eq!(summary.component_types, vec!["text", "number"]);
        assert!(summary.has_required_fields);
    }
}
