//! Manifest parsing and validation

use anyhow::{Context, Result};
use coppy_codegen::naming::{DEFAULT_ROOT_NAME, is_valid_type_name};
use coppy_runtime::ContentConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Manifest file looked up in the current directory when none is given
pub const DEFAULT_MANIFEST: &str = "coppy.toml";

/// coppy.toml manifest structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub content: ContentSection,

    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSection {
    /// Content space in the CMS
    #[serde(default)]
    pub space_key: Option<String>,

    /// Local copy of the content document
    #[serde(default = "default_input")]
    pub input: String,

    /// Name of the generated root type
    #[serde(default = "default_root_name")]
    pub root_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_dir")]
    pub dir: String,

    #[serde(default = "default_output_file")]
    pub file: String,
}

fn default_input() -> String {
    "coppy.json".to_string()
}

fn default_root_name() -> String {
    DEFAULT_ROOT_NAME.to_string()
}

fn default_output_dir() -> String {
    "src".to_string()
}

fn default_output_file() -> String {
    "coppy_content.rs".to_string()
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            space_key: None,
            input: default_input(),
            root_name: default_root_name(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            file: default_output_file(),
        }
    }
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if let Some(space_key) = &self.content.space_key {
            ContentConfig::new(space_key.as_str())
                .validate()
                .context("Invalid [content] space_key")?;
        }

        if self.content.input.is_empty() {
            anyhow::bail!("Content input path cannot be empty");
        }

        if !is_valid_type_name(&self.content.root_name) {
            anyhow::bail!(
                "Root name must be a Rust type name (e.g., CoppyContent): {}",
                self.content.root_name
            );
        }

        if !self.output.file.ends_with(".rs") {
            anyhow::bail!("Output file should be a Rust source file: {}", self.output.file);
        }

        Ok(())
    }

    /// URL the content document is served from, if a space is configured
    pub fn content_url(&self) -> Option<String> {
        self.content
            .space_key
            .as_deref()
            .map(|key| ContentConfig::new(key).content_url())
    }

    /// Where the generated module is written
    pub fn output_path(&self) -> PathBuf {
        Path::new(&self.output.dir).join(&self.output.file)
    }
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

    println!("Checking manifest: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    match manifest.content_url() {
        Some(url) => println!("✓ Content: {url}"),
        None => println!("✓ Content: no space_key, local input only"),
    }
    println!("✓ Input: {}", manifest.content.input);
    println!("✓ Root type: {}", manifest.content.root_name);
    println!("✓ Output: {}", manifest.output_path().display());
    println!("\nManifest is valid!");

    Ok(())
}
