//! Minimal PDF object header that opens a stream.
//!
//! The header is placed inside an image metadata unit. Everything that follows
//! it, up to [`STREAM_TERMINATOR`], is swallowed by the PDF reader as stream data.

use std::fmt;

/// PDF version announced in the header line.
pub const PDF_VERSION: &str = "1.4";

/// Fixed object number of the wrapping stream object.
pub const PDF_OBJECT_NUMBER: u32 = 9999;

/// Closes the stream object opened by the header, placed right before the PDF body.
pub const STREAM_TERMINATOR: &[u8] = b"\nendstream\nendobj\n";

/// Builds the header text announcing a stream of `declared_length` bytes.
pub fn synthesize_header(declared_length: usize) -> String {
    PdfHeader::new(declared_length).to_string()
}

/// A PDF stream header together with the length it declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfHeader {
    declared_length: usize,
}

impl PdfHeader {
    pub fn new(declared_length: usize) -> Self {
        Self { declared_length }
    }

    pub fn declared_length(&self) -> usize {
        self.declared_length
    }

    /// ASCII bytes of the header, ready to be used as chunk or segment payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for PdfHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "%PDF-{PDF_VERSION}\n{PDF_OBJECT_NUMBER} 0 obj\n<< /Length {} >>\nstream\n",
            self.declared_length
        )
    }
}
