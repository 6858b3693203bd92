use std::path::{Path, PathBuf};

use log::error;

use crate::CliResult;

pub fn run(image: &Path, pdf: &Path, output: Option<PathBuf>) -> CliResult<()> {
    let injected = polyglot_core::commands::inject(image, pdf, output).map_err(|e| {
        error!("Failed to create polyglot: {e}");
        e
    })?;

    println!("Polyglot Created Successfully!");
    println!();
    println!("Mode:   {}", injected.kind.label());
    println!("Output: {}", injected.output.display());
    println!("Size:   {} bytes", injected.size);

    Ok(())
}
