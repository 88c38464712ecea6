//! `create_from` generation.
//!
//! Every candidate is read before any is checked, then the struct literal applies
//! `?` to the required ones. A value is either complete or `None`.

use super::collect_elements;
use crate::escape::string_literal;
use crate::model::{Descriptor, Field, FieldType};
use crate::naming::field_ident;

pub(crate) fn emit_factory(descriptor: &Descriptor) -> String {
    let mut code = String::new();

    code.push_str("    pub fn create_from(obj: Option<&Map<String, Value>>) -> Option<Self> {\n");
    if descriptor.fields.is_empty() {
        code.push_str("        obj?;\n");
        code.push_str("        Some(Self {})\n");
        code.push_str("    }\n");
        return code;
    }

    code.push_str("        let obj = obj?;\n");
    for field in &descriptor.fields {
        code.push_str(&format!(
            "        let {} = {};\n",
            field_ident(&field.key),
            candidate(field)
        ));
    }

    code.push_str("        Some(Self {\n");
    for field in &descriptor.fields {
        let ident = field_ident(&field.key);
        if field.optional {
            code.push_str(&format!("            {ident},\n"));
        } else {
            code.push_str(&format!("            {ident}: {ident}?,\n"));
        }
    }
    code.push_str("        })\n");
    code.push_str("    }\n");

    code
}

/// Expression reading one field as an `Option`.
fn candidate(field: &Field) -> String {
    let key = string_literal(&field.key);

    match &field.ty {
        FieldType::String => format!("try_string(obj, {key})"),
        FieldType::Object(nested) => format!(
            "{}::create_from(obj.get({key}).and_then(Value::as_object))",
            nested.name
        ),
        FieldType::Array(element) => format!(
            "obj\n            .get({key})\n            .and_then(Value::as_array)\n            .map(|items| {}.collect::<Vec<_>>())",
            collect_elements(element)
        ),
    }
}
