use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::media::{ImageKind, Persist, Polyglot};
use crate::{PolyglotError, Result};

/// Folder a bare output file name is placed in.
pub const DEFAULT_OUTPUT_DIR: &str = "polyglot_results";

/// File stem used when no output name was given.
pub const DEFAULT_OUTPUT_STEM: &str = "polyglot_output";

pub fn prepare() -> InjectApi {
    InjectApi::default()
}

/// Suggested output name for an image: `photo.jpg` becomes `photo_polyglot.jpg`.
pub fn default_output_name<A: AsRef<Path>>(image: A) -> PathBuf {
    let image = image.as_ref();
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_OUTPUT_STEM.to_string());
    let mut name = format!("{stem}_polyglot");
    if let Some(ext) = image.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }

    PathBuf::from(name)
}

/// What [`InjectApi::execute`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injected {
    pub output: PathBuf,
    pub kind: ImageKind,
    pub size: usize,
}

#[derive(Debug)]
pub struct InjectApi {
    image: Option<PathBuf>,
    pdf: Option<PathBuf>,
    output: Option<PathBuf>,
    output_dir: PathBuf,
}

impl Default for InjectApi {
    fn default() -> Self {
        Self {
            image: None,
            pdf: None,
            output: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl InjectApi {
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_pdf<A: AsRef<Path>>(mut self, pdf: A) -> Self {
        self.pdf = Some(pdf.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the output file
    /// If `None` is passed, `polyglot_output.<ext>` is used
    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    /// Folder used for output names without a directory component.
    pub fn with_output_dir<A: AsRef<Path>>(mut self, output_dir: A) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    /// Builds the polyglot and writes it.
    pub fn execute(self) -> Result<Injected> {
        let Some(image) = self.image else {
            return Err(PolyglotError::CarrierNotSet);
        };
        let Some(pdf) = self.pdf else {
            return Err(PolyglotError::PdfNotSet);
        };
        if !image.is_file() {
            return Err(PolyglotError::ImageNotFound(image));
        }
        if !pdf.is_file() {
            return Err(PolyglotError::PdfNotFound(pdf));
        }

        let image_data = fs::read(&image).map_err(|source| PolyglotError::ReadError { source })?;
        let pdf_data = fs::read(&pdf).map_err(|source| PolyglotError::ReadError { source })?;
        debug!(
            "read {} image bytes from {image:?} and {} pdf bytes from {pdf:?}",
            image_data.len(),
            pdf_data.len()
        );

        let polyglot = Polyglot::create(&image_data, &pdf_data)?;
        info!("Injecting payload ({})", polyglot.kind().label());

        let output = resolve_output(
            self.output,
            &self.output_dir,
            polyglot.kind().extension(),
        )?;
        polyglot.save_as(&output)?;

        Ok(Injected {
            output,
            kind: polyglot.kind(),
            size: polyglot.len(),
        })
    }
}

fn resolve_output(output: Option<PathBuf>, output_dir: &Path, extension: &str) -> Result<PathBuf> {
    let output = output
        .filter(|o| !o.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(format!("{DEFAULT_OUTPUT_STEM}.{extension}")));
    let bare_name = output
        .parent()
        .map_or(true, |parent| parent.as_os_str().is_empty());
    if !bare_name {
        return Ok(output);
    }

    if !output_dir.is_dir() {
        debug!("creating output folder {output_dir:?}");
        fs::create_dir_all(output_dir).map_err(|source| PolyglotError::WriteError { source })?;
    }

    Ok(output_dir.join(output))
}
