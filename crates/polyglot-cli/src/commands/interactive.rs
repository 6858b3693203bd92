use std::io;
use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Input};
use polyglot_core::api::inject::default_output_name;
use polyglot_core::PolyglotError;

use super::inject;
use crate::CliResult;

pub fn run() -> CliResult<()> {
    let image = ask_existing_path("Enter Image Path (JPG/PNG)")?;
    let pdf = ask_existing_path("Enter PDF Path")?;

    let output: String = Input::new()
        .with_prompt("Enter Output Filename")
        .default(default_output_name(&image).display().to_string())
        .interact_text()
        .map_err(prompt_error)?;

    let proceed = Confirm::new()
        .with_prompt(format!(
            "Proceed to combine {} + {}?",
            image.display(),
            pdf.display()
        ))
        .default(true)
        .interact()
        .map_err(prompt_error)?;

    if !proceed {
        println!("Aborted.");
        return Ok(());
    }

    inject::run(&image, &pdf, Some(PathBuf::from(output)))
}

fn ask_existing_path(prompt: &str) -> CliResult<PathBuf> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            let path = clean_path(input);
            if Path::new(&path).exists() {
                Ok(())
            } else {
                Err(format!("File not found: {path}. Please try again."))
            }
        })
        .interact_text()
        .map_err(prompt_error)?;

    Ok(PathBuf::from(clean_path(&raw)))
}

/// Strips quotes and the `& ` PowerShell adds to drag-and-dropped paths.
fn clean_path(input: &str) -> String {
    let mut path = input.trim();
    if let Some(rest) = path.strip_prefix("& ") {
        path = rest.trim();
    }
    path.trim_matches(|c| c == '"' || c == '\'').to_string()
}

fn prompt_error(e: dialoguer::Error) -> PolyglotError {
    PolyglotError::IoError(io::Error::new(io::ErrorKind::Other, e))
}
