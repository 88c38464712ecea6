//! Shape inference over a JSON content document.
//!
//! Inference is lenient: keys whose values cannot be described (numbers, booleans,
//! `null`, empty arrays, arrays mixing element kinds) are dropped from the schema
//! instead of failing. Arrays of objects are unified element by element, so a key
//! missing from any element becomes optional.
//!
//! # Examples
//!
//! ```
//! use coppy_codegen::infer::infer;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "title": "Hello",
//!     "links": [{ "url": "/a", "label": "A" }, { "url": "/b" }],
//! });
//!
//! let descriptor = infer(doc.as_object().unwrap(), "Page");
//! let links = descriptor.field("links").unwrap().ty.descriptor().unwrap();
//!
//! assert_eq!(links.name, "PageLinks");
//! assert!(!links.field("url").unwrap().optional);
//! assert!(links.field("label").unwrap().optional);
//! ```

use crate::model::{Descriptor, ElementType, Field, FieldType};
use crate::naming::nested_type_name;
use serde_json::{Map, Value};
use tracing::debug;

/// Infer the descriptor tree for `document`, naming the root `root_name`.
pub fn infer(document: &Map<String, Value>, root_name: &str) -> Descriptor {
    infer_object(document, root_name)
}

/// Infer from any JSON value. Only objects can be described.
pub fn infer_value(document: &Value, root_name: &str) -> Option<Descriptor> {
    document.as_object().map(|obj| infer(obj, root_name))
}

/// Location where two array elements disagreed on a field's shape.
#[derive(Debug)]
struct Incompatible {
    path: String,
}

fn infer_object(obj: &Map<String, Value>, name: &str) -> Descriptor {
    let mut descriptor = Descriptor::new(name);

    for (key, value) in obj {
        match infer_field(key, value, name) {
            Some(field) => descriptor.fields.push(field),
            None => debug!(descriptor = name, key = %key, "dropping key with unsupported value"),
        }
    }

    descriptor
}

fn infer_field(key: &str, value: &Value, parent: &str) -> Option<Field> {
    match value {
        Value::String(s) => Some(Field::string(key, s.is_empty())),
        Value::Object(obj) => {
            let nested = infer_object(obj, &nested_type_name(parent, key));
            Some(Field::object(key, nested, false))
        }
        Value::Array(items) => {
            let element = infer_array(items, &nested_type_name(parent, key))?;
            Some(Field::array(key, element, false))
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

/// Establish the element type from the first item, then check or unify the rest.
fn infer_array(items: &[Value], name: &str) -> Option<ElementType> {
    let (first, rest) = items.split_first()?;

    match first {
        Value::String(_) => rest
            .iter()
            .all(Value::is_string)
            .then_some(ElementType::String),
        Value::Object(obj) => {
            let mut descriptor = infer_object(obj, name);
            for (index, item) in rest.iter().enumerate() {
                let Some(obj) = item.as_object() else {
                    debug!(array = name, index = index + 1, "rejecting array mixing element kinds");
                    return None;
                };
                if let Err(conflict) = reconcile(&mut descriptor, obj) {
                    debug!(array = name, path = %conflict.path, "rejecting array with incompatible elements");
                    return None;
                }
            }
            Some(ElementType::Object(descriptor))
        }
        _ => None,
    }
}

/// Fold one more object into a running descriptor.
///
/// Presence is a union: known keys missing from `obj` become optional, and keys
/// only `obj` has are added as optional.
fn reconcile(descriptor: &mut Descriptor, obj: &Map<String, Value>) -> Result<(), Incompatible> {
    for field in &mut descriptor.fields {
        if !obj.contains_key(&field.key) {
            field.optional = true;
        }
    }

    for (key, value) in obj {
        let position = descriptor.fields.iter().position(|f| f.key == *key);
        match position {
            Some(index) => {
                reconcile_field(&descriptor.name, &mut descriptor.fields[index], value)?;
            }
            None => {
                if let Some(mut field) = infer_field(key, value, &descriptor.name) {
                    field.optional = true;
                    descriptor.fields.push(field);
                }
            }
        }
    }

    Ok(())
}

fn reconcile_field(owner: &str, field: &mut Field, value: &Value) -> Result<(), Incompatible> {
    match (&mut field.ty, value) {
        (_, Value::Null | Value::Bool(_) | Value::Number(_)) => field.optional = true,
        (FieldType::String, Value::String(s)) => {
            if s.is_empty() {
                field.optional = true;
            }
        }
        (FieldType::Object(nested), Value::Object(obj)) => reconcile(nested, obj)?,
        (FieldType::Array(_), Value::Array(items)) if items.is_empty() => field.optional = true,
        (FieldType::Array(element), Value::Array(items)) => {
            reconcile_elements(element, items).map_err(|()| incompatible(owner, &field.key))?;
        }
        _ => return Err(incompatible(owner, &field.key)),
    }

    Ok(())
}

fn reconcile_elements(element: &mut ElementType, items: &[Value]) -> Result<(), ()> {
    match element {
        ElementType::String => {
            if items.iter().all(Value::is_string) {
                Ok(())
            } else {
                Err(())
            }
        }
        ElementType::Object(descriptor) => {
            for item in items {
                let obj = item.as_object().ok_or(())?;
                reconcile(descriptor, obj).map_err(|_| ())?;
            }
            Ok(())
        }
    }
}

fn incompatible(owner: &str, key: &str) -> Incompatible {
    Incompatible {
        path: format!("{owner}.{key}"),
    }
}
