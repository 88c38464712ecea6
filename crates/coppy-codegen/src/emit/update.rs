//! `update` generation.
//!
//! Absent input is a no-op. Otherwise each field follows its own rule: required
//! values keep what they had when the key is missing, optional values reset to
//! `None`, and required objects delegate to the nested value's own `update`.

use super::collect_elements;
use crate::escape::string_literal;
use crate::model::{Descriptor, Field, FieldType};
use crate::naming::field_ident;

/// The `update` method. `signature` is `pub fn` for inherent impls and `fn` inside
/// the root's `Updatable` impl.
pub(crate) fn emit_update(descriptor: &Descriptor, signature: &str) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "    {signature} update(&mut self, obj: Option<&Map<String, Value>>) {{\n"
    ));
    if descriptor.fields.is_empty() {
        code.push_str("        let _ = obj;\n");
    } else {
        code.push_str("        let Some(obj) = obj else {\n");
        code.push_str("            return;\n");
        code.push_str("        };\n");
        for field in &descriptor.fields {
            code.push_str(&emit_field_update(field));
        }
    }
    code.push_str("    }\n");

    code
}

fn emit_field_update(field: &Field) -> String {
    let ident = field_ident(&field.key);
    let key = string_literal(&field.key);

    match (&field.ty, field.optional) {
        (FieldType::String, false) => format!(
            "        if let Some(Value::String(value)) = obj.get({key}) {{\n            self.{ident} = value.clone();\n        }}\n"
        ),
        (FieldType::String, true) => {
            format!("        self.{ident} = try_string(obj, {key});\n")
        }
        (FieldType::Object(_), false) => format!(
            "        self.{ident}.update(obj.get({key}).and_then(Value::as_object));\n"
        ),
        (FieldType::Object(nested), true) => format!(
            "        self.{ident} = {}::create_from(obj.get({key}).and_then(Value::as_object));\n",
            nested.name
        ),
        (FieldType::Array(element), false) => format!(
            "        if let Some(items) = obj.get({key}).and_then(Value::as_array) {{\n            self.{ident} = {}.collect();\n        }}\n",
            collect_elements(element)
        ),
        (FieldType::Array(element), true) => format!(
            "        self.{ident} = obj\n            .get({key})\n            .and_then(Value::as_array)\n            .map(|items| {}.collect());\n",
            collect_elements(element)
        ),
    }
}
