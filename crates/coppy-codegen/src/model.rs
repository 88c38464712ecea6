//! Descriptor model shared by the inferencer and the emitters.
//!
//! A [`Descriptor`] is the inferred structural type of one JSON object shape. Its
//! [`Field`]s keep the order in which keys were first observed, which is what makes
//! generated output stable across runs.
//!
//! # Structure
//!
//! - [`Descriptor`]: a named, ordered list of fields
//! - [`Field`]: one key with its [`FieldType`] and optionality
//! - [`FieldType`]: closed set of shapes (string, object, array)
//! - [`ElementType`]: what an array holds (strings or objects)

use serde::Serialize;
use std::fmt;

/// Inferred type for one JSON object shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// Type name, unique within a generation run.
    pub name: String,

    /// Fields in first-seen order.
    pub fields: Vec<Field>,
}

/// One named member of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Key as it appears in the JSON document.
    pub key: String,

    /// Shape of the value.
    #[serde(rename = "type")]
    pub ty: FieldType,

    /// Whether the value may be absent.
    pub optional: bool,
}

/// Shape of a field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "lowercase")]
pub enum FieldType {
    /// A string. Empty strings are read as absent.
    String,

    /// A nested object with its own descriptor.
    Object(Descriptor),

    /// A homogeneous array.
    Array(ElementType),
}

/// Element shape of an array field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "lowercase")]
pub enum ElementType {
    /// Array of strings.
    String,

    /// Array of objects sharing one descriptor.
    Object(Descriptor),
}

/// Shape tag without nested payload, used for compatibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Object,
    Array,
}

impl Descriptor {
    /// Create an empty descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Look up a field by its JSON key.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Look up a field by its JSON key for in-place reconciliation.
    pub fn field_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.key == key)
    }

    /// Fields that must be present for a value to be constructed.
    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.optional)
    }

    /// Directly nested descriptors, in field order.
    pub fn nested(&self) -> impl Iterator<Item = &Descriptor> {
        self.fields.iter().filter_map(|f| f.ty.descriptor())
    }

    /// Every descriptor in the tree, nested ones before the descriptor that
    /// references them. The receiver comes last.
    pub fn walk_post_order(&self) -> Vec<&Descriptor> {
        let mut out = Vec::new();
        collect_post_order(self, &mut out);
        out
    }
}

fn collect_post_order<'a>(descriptor: &'a Descriptor, out: &mut Vec<&'a Descriptor>) {
    for nested in descriptor.nested() {
        collect_post_order(nested, out);
    }
    out.push(descriptor);
}

impl Field {
    pub fn new(key: impl Into<String>, ty: FieldType, optional: bool) -> Self {
        Self {
            key: key.into(),
            ty,
            optional,
        }
    }

    pub fn string(key: impl Into<String>, optional: bool) -> Self {
        Self::new(key, FieldType::String, optional)
    }

    pub fn object(key: impl Into<String>, descriptor: Descriptor, optional: bool) -> Self {
        Self::new(key, FieldType::Object(descriptor), optional)
    }

    pub fn array(key: impl Into<String>, element: ElementType, optional: bool) -> Self {
        Self::new(key, FieldType::Array(element), optional)
    }
}

impl FieldType {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldType::String => FieldKind::String,
            FieldType::Object(_) => FieldKind::Object,
            FieldType::Array(_) => FieldKind::Array,
        }
    }

    /// The nested descriptor carried by object fields and object arrays.
    pub fn descriptor(&self) -> Option<&Descriptor> {
        match self {
            FieldType::String | FieldType::Array(ElementType::String) => None,
            FieldType::Object(descriptor) | FieldType::Array(ElementType::Object(descriptor)) => {
                Some(descriptor)
            }
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Object => write!(f, "object"),
            FieldKind::Array => write!(f, "array"),
        }
    }
}
