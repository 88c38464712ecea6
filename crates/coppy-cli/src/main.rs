//! coppy CLI - Content code generator
//!
//! Commands:
//! - `coppy generate` - Generate the typed content module from a content document
//! - `coppy schema` - Print the inferred shape of a content document
//! - `coppy check` - Validate a coppy.toml manifest

use clap::{Parser, Subcommand};
use coppy_codegen::naming::DEFAULT_ROOT_NAME;
use tracing_subscriber::EnvFilter;

mod generate;
mod manifest;
mod schema;

#[derive(Parser)]
#[command(name = "coppy")]
#[command(author, version, about = "Typed content code generator for coppy", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the typed content module
    Generate {
        /// Path to coppy.toml manifest (default: ./coppy.toml if present)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Content document to generate from
        #[arg(short, long)]
        input: Option<String>,

        /// Output path for the generated module
        #[arg(short, long)]
        output: Option<String>,

        /// Name of the root content type
        #[arg(short, long)]
        root_name: Option<String>,
    },

    /// Print the inferred shape of a content document
    Schema {
        /// Content document to inspect
        #[arg(short, long)]
        input: String,

        /// Name of the root content type
        #[arg(short, long, default_value = DEFAULT_ROOT_NAME)]
        root_name: String,

        /// Print the descriptor tree instead of JSON Schema
        #[arg(short, long)]
        descriptor: bool,
    },

    /// Validate a coppy.toml manifest
    Check {
        /// Path to coppy.toml (default: ./coppy.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            manifest,
            input,
            output,
            root_name,
        } => {
            generate::run(generate::GenerateArgs {
                manifest,
                input,
                output,
                root_name,
            })?;
        }
        Commands::Schema {
            input,
            root_name,
            descriptor,
        } => {
            schema::run(&input, &root_name, descriptor)?;
        }
        Commands::Check { manifest } => {
            manifest::check(manifest)?;
        }
    }

    Ok(())
}
