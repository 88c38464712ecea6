use coppy_codegen::{GenerateOptions, build};
use std::path::{Path, PathBuf};

fn generate(input: &str, output: &Path, options: &GenerateOptions) {
    println!("cargo:rerun-if-changed={input}");

    if let Err(e) = build::generate_file(input.as_ref(), output, options) {
        panic!("content generation failed for {input}: {e}");
    }
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());

    generate(
        "content.json",
        &out_dir.join("content.rs"),
        &GenerateOptions::default(),
    );
    // Only compiled into the integration tests.
    generate(
        "fixtures/properties.json",
        &out_dir.join("properties.rs"),
        &GenerateOptions::default().with_root_name("Doc"),
    );
}
