//! Schema-shape compatibility shim.
//!
//! The backend stores schemas in two generations of the same JSON format:
//! a legacy flat `components` array, and the current nested `form` tree the
//! designer/renderer widgets expect. This module classifies fetched schemas
//! and migrates legacy ones on the fly. Migration is applied on every read
//! path; a schema with neither key passes through untouched and whatever
//! consumes it is responsible for tolerating that.

use serde_json::{json, Value as JsonValue};

/// Generation of a stored schema, detected from its top-level keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaShape {
    /// Flat `components` array, no `form` key
    Legacy,
    /// Nested `form` tree (internal structure is not validated)
    Current,
    /// Neither key present; passed through as-is
    Unknown,
}

/// Classify a schema value by its top-level keys.
pub fn classify(schema: &JsonValue) -> SchemaShape {
    if schema.get("form").is_some_and(|form| !form.is_null()) {
        return SchemaShape::Current;
    }
    if schema.get("components").is_some_and(JsonValue::is_array) {
        return SchemaShape::Legacy;
    }
    SchemaShape::Unknown
}

/// Migrate a schema to the current shape.
///
/// Legacy schemas are wrapped: the `components` array becomes `form.children`
/// unmodified and in the same order, `localization` is carried over (empty
/// object when absent), and the remaining metadata matches [`empty_form`].
/// Current and unknown shapes are returned unchanged.
pub fn migrate_to_current(schema: JsonValue) -> JsonValue {
    match classify(&schema) {
        SchemaShape::Legacy => {
            let components = schema
                .get("components")
                .cloned()
                .unwrap_or_else(|| json!([]));
            let localization = schema
                .get("localization")
                .cloned()
                .unwrap_or_else(|| json!({}));
            json!({
                "version": "1",
                "tooltipType": "RsTooltip",
                "modalType": "RsModal",
                "form": {
                    "key": "Screen",
                    "type": "Screen",
                    "props": {},
                    "children": components
                },
                "localization": localization,
                "languages": default_languages(),
                "defaultLanguage": "en-US"
            })
        }
        SchemaShape::Current | SchemaShape::Unknown => schema,
    }
}

/// The fixed schema returned whenever no persisted form can be resolved:
/// an empty screen with English (US) as the only language.
pub fn empty_form() -> JsonValue {
    json!({
        "version": "1",
        "tooltipType": "RsTooltip",
        "modalType": "RsModal",
        "form": {
            "key": "Screen",
            "type": "Screen",
            "props": {},
            "children": []
        },
        "localization": {},
        "languages": default_languages(),
        "defaultLanguage": "en-US"
    })
}

fn default_languages() -> JsonValue {
    json!([
        {
            "code": "en",
            "dialect": "US",
            "name": "English",
            "description": "American English",
            "bidi": "ltr"
        }
    ])
}

/// Number of components in a schema, supporting both shapes.
pub fn component_count(schema: &JsonValue) -> usize {
    components_of(schema).map_or(0, <[JsonValue]>::len)
}

/// Distinct component types used in a schema, in first-seen order,
/// supporting both shapes. Components without a `type` report as `unknown`.
pub fn component_types(schema: &JsonValue) -> Vec<String> {
    let mut types = Vec::new();
    for component in components_of(schema).unwrap_or(&[]) {
        let type_name = component
            .get("type")
            .and_then(JsonValue::as_str)
            .unwrap_or("unknown");
        if !types.iter().any(|t| t == type_name) {
            types.push(type_name.to_string());
        }
    }
    types
}

fn components_of(schema: &JsonValue) -> Option<&[JsonValue]> {
    if let Some(children) = schema
        .get("form")
        .and_then(|form| form.get("children"))
        .and_then(JsonValue::as_array)
    {
        return Some(children);
    }
    schema
        .get("components")
        .and_then(JsonValue::as_array)
        .map(Vec::as_slice)
}
