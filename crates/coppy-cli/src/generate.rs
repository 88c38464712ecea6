//! `coppy generate`: write the typed content module for a content document.

use crate::manifest::{DEFAULT_MANIFEST, Manifest};
use anyhow::{Context, Result};
use coppy_codegen::{GenerateOptions, build::write_if_changed, generate_content_module_from_str};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Command line overrides for a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub manifest: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub root_name: Option<String>,
}

/// Fully resolved generation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub root_name: String,
}

/// What a generation run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateReport {
    Written,
    Unchanged,
    /// Input was unavailable; the existing output was left as is
    Preserved,
}

impl GenerateSettings {
    /// Merge command line overrides over the manifest.
    ///
    /// An explicit `--manifest` must exist; the default `coppy.toml` is optional.
    pub fn resolve(args: &GenerateArgs) -> Result<Self> {
        let manifest = match &args.manifest {
            Some(path) => Manifest::from_file(path)?,
            None if Path::new(DEFAULT_MANIFEST).exists() => Manifest::from_file(DEFAULT_MANIFEST)?,
            None => Manifest::default(),
        };
        manifest.validate()?;

        Ok(Self::from_manifest(&manifest, args))
    }

    pub fn from_manifest(manifest: &Manifest, args: &GenerateArgs) -> Self {
        Self {
            input: args
                .input
                .as_ref()
                .map_or_else(|| PathBuf::from(&manifest.content.input), PathBuf::from),
            output: args
                .output
                .as_ref()
                .map_or_else(|| manifest.output_path(), PathBuf::from),
            root_name: args
                .root_name
                .clone()
                .unwrap_or_else(|| manifest.content.root_name.clone()),
        }
    }
}

/// Generate the module described by `settings`.
pub fn generate(settings: &GenerateSettings) -> Result<GenerateReport> {
    let json = match std::fs::read_to_string(&settings.input) {
        Ok(json) => json,
        Err(e) if settings.output.exists() => {
            warn!(
                input = %settings.input.display(),
                output = %settings.output.display(),
                error = %e,
                "content unavailable, keeping existing generated module"
            );
            return Ok(GenerateReport::Preserved);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to read content: {}", settings.input.display())
            });
        }
    };

    let options = GenerateOptions::default().with_root_name(settings.root_name.as_str());
    let source = generate_content_module_from_str(&json, &options)?;
    debug!(bytes = source.len(), "generated content module");

    let written = write_if_changed(&settings.output, &source)
        .with_context(|| format!("Failed to write {}", settings.output.display()))?;

    Ok(if written {
        GenerateReport::Written
    } else {
        GenerateReport::Unchanged
    })
}

/// Generate command implementation
pub fn run(args: GenerateArgs) -> Result<()> {
    let settings = GenerateSettings::resolve(&args)?;

    println!("Generating {} from {}", settings.root_name, settings.input.display());

    match generate(&settings)? {
        GenerateReport::Written => println!("✓ Wrote {}", settings.output.display()),
        GenerateReport::Unchanged => println!("✓ {} is up to date", settings.output.display()),
        GenerateReport::Preserved => println!(
            "⚠ Content unavailable, kept existing {}",
            settings.output.display()
        ),
    }

    Ok(())
}
