//! coppy-codegen - Content shape inference and typed accessor generation
//!
//! This crate turns a CMS content payload (a JSON object) into Rust source:
//! - [`infer`] walks the document and produces a [`Descriptor`] tree
//! - [`emit`] turns the tree into holder types with `update` and `create_from`,
//!   plus a root type with baked-in defaults that implements
//!   `coppy_runtime::Updatable`
//! - [`json_schema`] exports the tree as JSON Schema for inspection
//! - [`build`] wires generation into a Cargo build script
//!
//! Inference is lenient (unsupported keys are dropped), default baking is strict
//! (missing required values fail generation with their exact path).

pub mod build;
pub mod emit;
pub mod error;
pub mod escape;
pub mod infer;
pub mod json_schema;
pub mod model;
pub mod naming;

pub use emit::{
    GenerateOptions, GeneratedModule, generate, generate_content_module,
    generate_content_module_from_str,
};
pub use error::{CodegenError, CodegenResult};
pub use infer::{infer, infer_value};
pub use json_schema::generate_json_schema;
pub use model::{Descriptor, ElementType, Field, FieldKind, FieldType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodegenError, CodegenResult, Descriptor, ElementType, Field, FieldType, GenerateOptions,
        generate_content_module, infer,
    };
}
