use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolyglotError {
    /// Represents an image whose magic bytes do not match the format it was handed to
    #[error("Input file is not a valid {expected}")]
    Format { expected: &'static str },

    /// Represents an image format other than PNG or JPEG
    #[error("Unsupported image format. Only JPG and PNG are supported")]
    UnsupportedFormat,

    /// Represents a JPEG comment segment whose length would not fit the 2 byte length field
    #[error("PDF header too long for a single JPG comment segment: {0} bytes exceeds 65535")]
    SegmentTooLarge(usize),

    /// Represents PNG chunk data too long for the 4 byte length field
    #[error("PNG chunk data of {0} bytes exceeds the maximum of 2147483647")]
    ChunkTooLarge(usize),

    /// Represents a PNG whose first chunk claims more bytes than the file holds
    #[error("PNG chunk at offset {offset} with length {len} runs past the end of the file")]
    TruncatedChunk { offset: usize, len: usize },

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No PDF document set")]
    PdfNotSet,

    #[error("Image file not found: {0}")]
    ImageNotFound(PathBuf),

    #[error("PDF file not found: {0}")]
    PdfNotFound(PathBuf),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
