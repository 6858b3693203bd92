use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{error, info};

use crate::error::PolyglotError;
use crate::result::Result;

use super::{jpeg, png, Persist};

/// The image containers a PDF can be injected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    /// Detect the container from magic bytes.
    pub fn detect(data: &[u8]) -> Result<Self> {
        if png::is_png(data) {
            Ok(Self::Png)
        } else if jpeg::is_jpeg(data) {
            Ok(Self::Jpeg)
        } else {
            Err(PolyglotError::UnsupportedFormat)
        }
    }

    /// Extension the resulting polyglot should carry.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Mode name shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG+PDF",
            Self::Jpeg => "JPG+PDF",
        }
    }

    pub fn inject(self, image: &[u8], pdf: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Png => png::inject_png(image, pdf),
            Self::Jpeg => jpeg::inject_jpeg(image, pdf),
        }
    }
}

/// A finished image/PDF polyglot held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyglot {
    kind: ImageKind,
    bytes: Vec<u8>,
}

impl Polyglot {
    /// Detects the image container and injects `pdf` into it.
    pub fn create(image: &[u8], pdf: &[u8]) -> Result<Self> {
        let kind = ImageKind::detect(image)?;
        let bytes = kind.inject(image, pdf)?;

        Ok(Self { kind, bytes })
    }

    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Shorthand for [`Polyglot::create`].
pub fn create_polyglot(image: &[u8], pdf: &[u8]) -> Result<Polyglot> {
    Polyglot::create(image, pdf)
}

impl Persist for Polyglot {
    fn save_as(&self, file: &Path) -> Result<()> {
        let mut f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PolyglotError::WriteError { source: e }
        })?;
        f.write_all(&self.bytes).map_err(|e| {
            error!("Error writing file {file:?}: {e}");
            PolyglotError::WriteError { source: e }
        })?;
        info!("{} polyglot written to {file:?} ({} bytes)", self.kind.label(), self.len());

        Ok(())
    }
}
