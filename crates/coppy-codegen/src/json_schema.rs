//! JSON Schema export of an inferred descriptor tree.
//!
//! Useful for reviewing what a content payload was inferred as, without reading
//! generated Rust.

use crate::model::{Descriptor, ElementType, FieldType};
use serde_json::{Value, json};

/// Generate a Draft-07 schema with one definition per descriptor.
///
/// The root descriptor is referenced from the top level via `$ref`.
pub fn generate_json_schema(root: &Descriptor) -> Value {
    let mut definitions = serde_json::Map::new();

    for descriptor in root.walk_post_order() {
        definitions.insert(descriptor.name.clone(), generate_descriptor_schema(descriptor));
    }

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$ref": format!("#/definitions/{}", root.name),
        "definitions": definitions,
    })
}

/// Generate JSON Schema for a single descriptor.
fn generate_descriptor_schema(descriptor: &Descriptor) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for field in &descriptor.fields {
        properties.insert(field.key.clone(), generate_field_schema(&field.ty));

        if !field.optional {
            required.push(field.key.clone());
        }
    }

    let mut schema = json!({
        "type": "object",
        "properties": properties,
    });

    if !required.is_empty() {
        schema["required"] = json!(required);
    }

    schema
}

/// Generate JSON Schema for a field type.
fn generate_field_schema(ty: &FieldType) -> Value {
    match ty {
        FieldType::String => json!({"type": "string"}),
        FieldType::Object(descriptor) => reference(descriptor),
        FieldType::Array(ElementType::String) => json!({
            "type": "array",
            "items": {"type": "string"},
        }),
        FieldType::Array(ElementType::Object(descriptor)) => json!({
            "type": "array",
            "items": reference(descriptor),
        }),
    }
}

fn reference(descriptor: &Descriptor) -> Value {
    json!({ "$ref": format!("#/definitions/{}", descriptor.name) })
}
