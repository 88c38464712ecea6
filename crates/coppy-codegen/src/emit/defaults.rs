//! Baked-in default values for the root type.
//!
//! Unlike `create_from`, nothing here is allowed to be absent: a required value
//! missing from the source document fails generation with its exact path.

use crate::error::{CodegenError, CodegenResult};
use crate::escape::string_literal;
use crate::model::{Descriptor, ElementType, Field, FieldType};
use crate::naming::field_ident;
use serde_json::{Map, Value};

const INDENT: &str = "    ";

/// `impl Default` for the root type, built from `document`.
pub fn emit_defaults(descriptor: &Descriptor, document: &Map<String, Value>) -> CodegenResult<String> {
    let body = object_literal("Self", descriptor, document, 2)?;

    Ok(format!(
        "impl Default for {} {{\n    fn default() -> Self {{\n        {body}\n    }}\n}}\n",
        descriptor.name
    ))
}

/// A struct literal whose opening line sits at `depth` indentation levels.
fn object_literal(
    type_name: &str,
    descriptor: &Descriptor,
    obj: &Map<String, Value>,
    depth: usize,
) -> CodegenResult<String> {
    if descriptor.fields.is_empty() {
        return Ok(format!("{type_name} {{}}"));
    }

    let indent = INDENT.repeat(depth + 1);
    let mut code = format!("{type_name} {{\n");

    for field in &descriptor.fields {
        let value = field_literal(descriptor, field, obj.get(&field.key), depth + 1)?;
        code.push_str(&format!("{indent}{}: {value},\n", field_ident(&field.key)));
    }
    code.push_str(&INDENT.repeat(depth));
    code.push('}');

    Ok(code)
}

fn field_literal(
    owner: &Descriptor,
    field: &Field,
    value: Option<&Value>,
    depth: usize,
) -> CodegenResult<String> {
    let literal = match &field.ty {
        FieldType::String => value
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(|s| format!("String::from({})", string_literal(s))),
        FieldType::Object(nested) => value
            .and_then(Value::as_object)
            .map(|obj| object_literal(&nested.name, nested, obj, depth))
            .transpose()?,
        FieldType::Array(element) => value
            .and_then(Value::as_array)
            .map(|items| list_literal(element, items, depth))
            .transpose()?,
    };

    match (literal, field.optional) {
        (Some(literal), false) => Ok(literal),
        (Some(literal), true) => Ok(format!("Some({literal})")),
        (None, true) => Ok("None".to_string()),
        (None, false) => Err(CodegenError::missing(
            field.ty.kind(),
            &owner.name,
            &field.key,
        )),
    }
}

/// A `vec![...]` literal. Empty strings are skipped, matching the runtime filter.
fn list_literal(element: &ElementType, items: &[Value], depth: usize) -> CodegenResult<String> {
    let indent = INDENT.repeat(depth + 1);
    let mut entries = Vec::new();

    match element {
        ElementType::String => {
            for item in items.iter().filter_map(Value::as_str) {
                if !item.is_empty() {
                    entries.push(format!("String::from({})", string_literal(item)));
                }
            }
        }
        ElementType::Object(nested) => {
            for item in items.iter().filter_map(Value::as_object) {
                entries.push(object_literal(&nested.name, nested, item, depth + 1)?);
            }
        }
    }

    if entries.is_empty() {
        return Ok("Vec::new()".to_string());
    }

    let mut code = "vec![\n".to_string();
    for entry in entries {
        code.push_str(&format!("{indent}{entry},\n"));
    }
    code.push_str(&INDENT.repeat(depth));
    code.push(']');

    Ok(code)
}
