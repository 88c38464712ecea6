//! Error types for code generation

use crate::model::FieldKind;
use thiserror::Error;

/// Result type alias for code generation
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for code generation.
///
/// Inference itself never fails; these errors come from reading input and from
/// baking default values, where every required value must be present.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The content payload is not valid JSON
    #[error("invalid content JSON: {0}")]
    InvalidJson(String),

    /// The content payload is valid JSON but not an object
    #[error("content document must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A required value is missing from the document used for defaults
    #[error("cannot generate code: missing required {kind} value: {path}")]
    MissingRequired { kind: FieldKind, path: String },

    /// Two descriptors in the tree resolved to the same type name
    #[error("cannot generate code: type name {name} is produced by both {first} and {second}")]
    TypeNameCollision {
        name: String,
        first: String,
        second: String,
    },

    /// Two keys of one descriptor resolved to the same Rust identifier
    #[error("cannot generate code: keys {first:?} and {second:?} of {descriptor} both map to field {ident}")]
    FieldNameCollision {
        descriptor: String,
        ident: String,
        first: String,
        second: String,
    },

    /// A nested type name would shadow a name the generated module uses
    #[error("cannot generate code: type name {name} produced by {path} is reserved")]
    ReservedTypeName { name: String, path: String },

    /// The configured root type name is not a usable Rust type name
    #[error("invalid root type name: {0:?}")]
    InvalidRootName(String),

    /// Reading or writing generation files failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Build a missing-value error for `<descriptor>.<key>`.
    pub fn missing(kind: FieldKind, descriptor: &str, key: &str) -> Self {
        CodegenError::MissingRequired {
            kind,
            path: format!("{descriptor}.{key}"),
        }
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::InvalidJson(err.to_string())
    }
}
