//! Regenerates `include/cgol.h` from the `extern "C"` surface.

use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let config = cbindgen::Config::from_file(manifest_dir.join("cbindgen.toml"))?;

    let include = manifest_dir.join("include");
    std::fs::create_dir_all(&include)?;
    cbindgen::generate_with_config(&manifest_dir, config)?.write_to_file(include.join("cgol.h"));
    Ok(())
}
