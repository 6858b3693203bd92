//! # Polyglot Core API
//!
//! Builds files that are a valid PNG or JPEG image and a PDF document at the
//! same time. A PDF stream header is injected into a metadata unit of the
//! image (a private ancillary chunk for PNG, a comment segment for JPEG), the
//! rest of the image becomes the stream content and the PDF body is appended.
//!
//! - [`Polyglot::create`] works purely on bytes
//! - [`api::inject`] works on files and handles output naming
//!
//! # Usage Examples
//!
//! ## In memory
//!
//! ```rust
//! use polyglot_core::{ImageKind, Polyglot};
//!
//! let jpeg = [0xFF_u8, 0xD8, 0xFF, 0xD9];
//! let polyglot = Polyglot::create(&jpeg, b"%PDF-1.4\n%%EOF").expect("Failed to inject");
//!
//! assert_eq!(polyglot.kind(), ImageKind::Jpeg);
//! assert!(polyglot.as_bytes().ends_with(b"%%EOF"));
//! ```
//!
//! ## From files
//!
//! ```rust,no_run
//! polyglot_core::api::inject::prepare()
//!     .with_image("photo.png")
//!     .with_pdf("document.pdf")
//!     .with_output("photo_polyglot.png") // lands in `polyglot_results/`
//!     .execute()
//!     .expect("Failed to create polyglot");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod pdf_header;
pub mod result;

pub use crate::error::PolyglotError;
pub use crate::media::jpeg::inject_jpeg;
pub use crate::media::png::inject_png;
pub use crate::media::{create_polyglot, ImageKind, Persist, Polyglot};
pub use crate::pdf_header::{synthesize_header, PdfHeader, STREAM_TERMINATOR};
pub use crate::result::Result;
