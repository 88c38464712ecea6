//! `coppy schema`: show what a content document is inferred as.

use anyhow::{Context, Result};
use coppy_codegen::{generate_json_schema, infer};
use serde_json::Value;
use std::path::Path;

/// Inferred shape of `json`, as JSON Schema or as the raw descriptor tree.
pub fn describe(json: &str, root_name: &str, descriptor: bool) -> Result<Value> {
    let value: Value = serde_json::from_str(json).context("Content is not valid JSON")?;
    let Some(document) = value.as_object() else {
        anyhow::bail!("Content document must be a JSON object");
    };

    let tree = infer(document, root_name);
    if descriptor {
        return serde_json::to_value(&tree).context("Failed to serialize descriptor");
    }
    Ok(generate_json_schema(&tree))
}

/// Schema command implementation
pub fn run(input: &str, root_name: &str, descriptor: bool) -> Result<()> {
    let json = std::fs::read_to_string(Path::new(input))
        .with_context(|| format!("Failed to read content: {input}"))?;

    let output = describe(&json, root_name, descriptor)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
