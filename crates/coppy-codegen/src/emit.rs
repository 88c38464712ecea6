//! Rust source generation from descriptors.
//!
//! Every descriptor becomes one Rust type with three members that have to agree on
//! the same field layout:
//!
//! - the holder: a struct with private storage and read-only accessors
//! - `update`: re-populates an existing value from a later document
//! - `create_from`: builds a value, or `None` when a required field is absent
//!
//! The root descriptor gets no factory. Its starting values are baked in from the
//! source document through `impl Default`, and it implements
//! `coppy_runtime::Updatable` so the runtime can apply fresh content to it.
//!
//! ```text
//! JSON document
//!     ↓
//!  [infer]
//!     ↓
//!  Descriptor tree ──→ [validate names]
//!     ↓
//!  ├─→ header + helpers
//!  ├─→ nested types (children first)
//!  └─→ root type + Default + Updatable
//! ```

mod defaults;
mod factory;
mod holder;
mod update;

use crate::error::{CodegenError, CodegenResult};
use crate::infer::infer;
use crate::model::{Descriptor, ElementType, Field, FieldType};
use crate::naming::{self, DEFAULT_ROOT_NAME};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

pub use defaults::emit_defaults;

/// Names the generated unit imports or defines itself.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "Default",
    "Deserialize",
    "Map",
    "None",
    "Option",
    "Serialize",
    "Some",
    "String",
    "Updatable",
    "Value",
    "Vec",
];

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Name of the root content type.
    pub root_name: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
        }
    }
}

impl GenerateOptions {
    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }
}

/// Output of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    /// The inferred schema, with root fields marked required.
    pub descriptor: Descriptor,

    /// The generated Rust source.
    pub source: String,
}

/// Infer the schema of `document` and generate the content module for it.
pub fn generate(
    document: &Map<String, Value>,
    options: &GenerateOptions,
) -> CodegenResult<GeneratedModule> {
    let root_name = options.root_name.as_str();
    if !naming::is_valid_type_name(root_name) || RESERVED_TYPE_NAMES.contains(&root_name) {
        return Err(CodegenError::InvalidRootName(root_name.to_string()));
    }

    let descriptor = root_view(infer(document, root_name));
    validate_names(&descriptor)?;

    let mut code = emit_header();
    for nested in descriptor.nested() {
        code.push_str(&emit_types(nested));
    }
    code.push_str(&emit_root(&descriptor, document)?);

    debug!(
        root = root_name,
        types = descriptor.walk_post_order().len(),
        "generated content module"
    );

    Ok(GeneratedModule {
        descriptor,
        source: code,
    })
}

/// Generate the content module source for `document`.
pub fn generate_content_module(
    document: &Map<String, Value>,
    options: &GenerateOptions,
) -> CodegenResult<String> {
    generate(document, options).map(|module| module.source)
}

/// Parse `json` and generate the content module source for it.
pub fn generate_content_module_from_str(
    json: &str,
    options: &GenerateOptions,
) -> CodegenResult<String> {
    let value: Value = serde_json::from_str(json)?;
    let document = as_document(&value)?;
    generate_content_module(document, options)
}

/// The document as an object, or the kind of value it is instead.
pub(crate) fn as_document(value: &Value) -> CodegenResult<&Map<String, Value>> {
    match value {
        Value::Object(obj) => Ok(obj),
        Value::Null => Err(CodegenError::NotAnObject("null")),
        Value::Bool(_) => Err(CodegenError::NotAnObject("a boolean")),
        Value::Number(_) => Err(CodegenError::NotAnObject("a number")),
        Value::String(_) => Err(CodegenError::NotAnObject("a string")),
        Value::Array(_) => Err(CodegenError::NotAnObject("an array")),
    }
}

/// File banner, imports, and the helpers the generated members call.
pub fn emit_header() -> String {
    r#"// @generated by coppy-codegen. Do not edit by hand.

use coppy_runtime::Updatable;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reads the string at `key`. An empty string counts as absent.
#[allow(dead_code)]
fn try_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(try_string_item)
}

/// Reads a string array element. An empty string counts as absent.
#[allow(dead_code)]
fn try_string_item(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
"#
    .to_string()
}

/// Generate `descriptor` and everything nested in it, children first.
pub fn emit_types(descriptor: &Descriptor) -> String {
    descriptor
        .walk_post_order()
        .into_iter()
        .map(emit_type)
        .collect()
}

/// Generate one nested type: holder, accessors, updater and factory.
pub fn emit_type(descriptor: &Descriptor) -> String {
    let mut code = String::new();

    code.push('\n');
    code.push_str(&holder::emit_struct(descriptor));
    code.push('\n');
    code.push_str(&format!("impl {} {{\n", descriptor.name));
    let accessors = holder::emit_accessors(descriptor);
    if !accessors.is_empty() {
        code.push_str(&accessors);
        code.push('\n');
    }
    code.push_str(&update::emit_update(descriptor, "pub fn"));
    code.push('\n');
    code.push_str(&factory::emit_factory(descriptor));
    code.push_str("}\n");

    code
}

/// Generate the root type with baked-in defaults and the `Updatable` impl.
///
/// Every root field is treated as required regardless of its inferred flag.
pub fn emit_root(descriptor: &Descriptor, document: &Map<String, Value>) -> CodegenResult<String> {
    let descriptor = root_view(descriptor.clone());
    let defaults = emit_defaults(&descriptor, document)?;

    let mut code = String::new();

    code.push('\n');
    code.push_str(&holder::emit_struct(&descriptor));
    code.push('\n');
    code.push_str(&format!("impl {} {{\n", descriptor.name));
    code.push_str(&holder::emit_accessors(&descriptor));
    code.push_str("}\n\n");
    code.push_str(&defaults);
    code.push('\n');
    code.push_str(&format!("impl Updatable for {} {{\n", descriptor.name));
    code.push_str(&update::emit_update(&descriptor, "fn"));
    code.push_str("}\n");

    Ok(code)
}

/// Reject trees where a type name is reserved, two descriptors share a type name,
/// or two keys of one descriptor share a Rust identifier.
pub fn validate_names(root: &Descriptor) -> CodegenResult<()> {
    let mut seen = BTreeMap::new();
    validate_descriptor(root, root.name.clone(), &mut seen)
}

fn validate_descriptor(
    descriptor: &Descriptor,
    origin: String,
    seen: &mut BTreeMap<String, String>,
) -> CodegenResult<()> {
    let name = descriptor.name.as_str();
    if !naming::is_valid_type_name(name) || RESERVED_TYPE_NAMES.contains(&name) {
        return Err(CodegenError::ReservedTypeName {
            name: descriptor.name.clone(),
            path: origin,
        });
    }

    if let Some(first) = seen.get(&descriptor.name) {
        return Err(CodegenError::TypeNameCollision {
            name: descriptor.name.clone(),
            first: first.clone(),
            second: origin,
        });
    }
    seen.insert(descriptor.name.clone(), origin);

    let mut idents: BTreeMap<String, &str> = BTreeMap::new();
    for field in &descriptor.fields {
        let ident = naming::field_ident(&field.key);
        if let Some(first) = idents.get(&ident) {
            return Err(CodegenError::FieldNameCollision {
                descriptor: descriptor.name.clone(),
                ident,
                first: (*first).to_string(),
                second: field.key.clone(),
            });
        }
        idents.insert(ident, &field.key);
    }

    for field in &descriptor.fields {
        if let Some(nested) = field.ty.descriptor() {
            validate_descriptor(nested, format!("{}.{}", descriptor.name, field.key), seen)?;
        }
    }

    Ok(())
}

/// Root fields are never optional; missing root values fail generation instead.
fn root_view(mut descriptor: Descriptor) -> Descriptor {
    for field in &mut descriptor.fields {
        field.optional = false;
    }
    descriptor
}

/// Rust type of an array element.
pub(crate) fn element_type_name(element: &ElementType) -> &str {
    match element {
        ElementType::String => "String",
        ElementType::Object(descriptor) => &descriptor.name,
    }
}

/// Rust type of a field's storage slot.
pub(crate) fn storage_type(field: &Field) -> String {
    let inner = match &field.ty {
        FieldType::String => "String".to_string(),
        FieldType::Object(descriptor) => descriptor.name.clone(),
        FieldType::Array(element) => format!("Vec<{}>", element_type_name(element)),
    };

    if field.optional {
        format!("Option<{inner}>")
    } else {
        inner
    }
}

/// Expression building a `Vec` from a JSON array bound to `items`.
pub(crate) fn collect_elements(element: &ElementType) -> String {
    match element {
        ElementType::String => "items.iter().filter_map(try_string_item)".to_string(),
        ElementType::Object(descriptor) => format!(
            "items.iter().filter_map(|item| {}::create_from(item.as_object()))",
            descriptor.name
        ),
    }
}
