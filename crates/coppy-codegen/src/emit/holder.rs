//! Holder struct and read-only accessors.

use super::{element_type_name, storage_type};
use crate::model::{Descriptor, FieldType};
use crate::naming::field_ident;

/// The struct definition. Storage is private; accessors are the read path.
pub(crate) fn emit_struct(descriptor: &Descriptor) -> String {
    let mut code = String::new();

    code.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
    if descriptor.fields.is_empty() {
        code.push_str(&format!("pub struct {} {{}}\n", descriptor.name));
        return code;
    }

    code.push_str(&format!("pub struct {} {{\n", descriptor.name));
    for field in &descriptor.fields {
        code.push_str(&format!(
            "    {}: {},\n",
            field_ident(&field.key),
            storage_type(field)
        ));
    }
    code.push_str("}\n");

    code
}

/// One accessor per field, borrowing from storage.
pub(crate) fn emit_accessors(descriptor: &Descriptor) -> String {
    let mut code = String::new();

    for (i, field) in descriptor.fields.iter().enumerate() {
        if i > 0 {
            code.push('\n');
        }

        let ident = field_ident(&field.key);
        let (return_type, body) = match (&field.ty, field.optional) {
            (FieldType::String, false) => ("&str".to_string(), format!("&self.{ident}")),
            (FieldType::String, true) => (
                "Option<&str>".to_string(),
                format!("self.{ident}.as_deref()"),
            ),
            (FieldType::Object(nested), false) => {
                (format!("&{}", nested.name), format!("&self.{ident}"))
            }
            (FieldType::Object(nested), true) => (
                format!("Option<&{}>", nested.name),
                format!("self.{ident}.as_ref()"),
            ),
            (FieldType::Array(element), false) => (
                format!("&[{}]", element_type_name(element)),
                format!("&self.{ident}"),
            ),
            (FieldType::Array(element), true) => (
                format!("Option<&[{}]>", element_type_name(element)),
                format!("self.{ident}.as_deref()"),
            ),
        };

        code.push_str(&format!(
            "    pub fn {ident}(&self) -> {return_type} {{\n        {body}\n    }}\n"
        ));
    }

    code
}
