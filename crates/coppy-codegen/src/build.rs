//! Helpers for running generation from a Cargo build script.
//!
//! ```rust,no_run
//! // build.rs
//! use coppy_codegen::{GenerateOptions, build};
//! use std::path::PathBuf;
//!
//! let out = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("content.rs");
//! build::generate_file("content.json".as_ref(), &out, &GenerateOptions::default()).unwrap();
//! println!("cargo:rerun-if-changed=content.json");
//! ```

use crate::emit::{GenerateOptions, GeneratedModule, as_document, generate};
use crate::error::CodegenResult;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read the content payload at `input`, generate, and write the module to `output`.
///
/// The output file is only rewritten when its content changes, so downstream
/// compilation is not invalidated by identical regenerations.
pub fn generate_file(
    input: &Path,
    output: &Path,
    options: &GenerateOptions,
) -> CodegenResult<GeneratedModule> {
    let json = fs::read_to_string(input)?;
    let value: Value = serde_json::from_str(&json)?;
    let module = generate(as_document(&value)?, options)?;

    write_if_changed(output, &module.source)?;

    Ok(module)
}

/// Write `contents` to `path` unless the file already holds exactly that.
///
/// Returns whether the file was written.
pub fn write_if_changed(path: &Path, contents: &str) -> CodegenResult<bool> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == contents) {
        debug!(path = %path.display(), "generated module unchanged");
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    info!(path = %path.display(), "wrote generated content module");

    Ok(true)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::error::CodegenError;

    #[test]
    fn generate_file___writes_module() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("content.json");
        let output = dir.path().join("generated/content.rs");
        fs::write(&input, r#"{ "title": "Hello" }"#).unwrap();

        let module = generate_file(&input, &output, &GenerateOptions::default()).unwrap();

        assert_eq!(module.descriptor.name, "CoppyContent");
        assert_eq!(fs::read_to_string(&output).unwrap(), module.source);
    }

    #[test]
    fn generate_file___missing_input___io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = generate_file(
            &dir.path().join("absent.json"),
            &dir.path().join("content.rs"),
            &GenerateOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, CodegenError::Io(_)));
    }

    #[test]
    fn generate_file___generation_error___leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("content.json");
        let output = dir.path().join("content.rs");
        fs::write(&input, r#"{ "title": "" }"#).unwrap();
        fs::write(&output, "// previous").unwrap();

        let result = generate_file(&input, &output, &GenerateOptions::default());

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "// previous");
    }

    #[test]
    fn write_if_changed___identical_contents___skips_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.rs");

        assert!(write_if_changed(&path, "a").unwrap());
        assert!(!write_if_changed(&path, "a").unwrap());
        assert!(write_if_changed(&path, "b").unwrap());
    }
}
