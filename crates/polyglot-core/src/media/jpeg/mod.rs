//! JPEG comment segment injection.
//!
//! The PDF header travels in a `COM` segment placed right after `SOI`.
//! Decoders skip comment segments.

pub mod marker;

use byteorder::{BigEndian, WriteBytesExt};
use log::debug;

pub use marker::Marker;

use crate::error::PolyglotError;
use crate::pdf_header::{PdfHeader, STREAM_TERMINATOR};
use crate::result::Result;

/// Largest value the 2 byte segment length field can hold.
pub const MAX_SEGMENT_LENGTH: usize = u16::MAX as usize;

const LENGTH_FIELD_SIZE: usize = 2;

pub fn is_jpeg(data: &[u8]) -> bool {
    data.starts_with(&Marker::SOI.to_bytes())
}

/// A `COM` marker segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSegment {
    payload: Vec<u8>,
}

impl CommentSegment {
    pub fn new(payload: Vec<u8>) -> Result<Self> {
        let length = LENGTH_FIELD_SIZE + payload.len();
        if length > MAX_SEGMENT_LENGTH {
            return Err(PolyglotError::SegmentTooLarge(length));
        }
        Ok(Self { payload })
    }

    /// Value of the length field, which counts itself but not the marker.
    pub fn length_field(&self) -> u16 {
        (LENGTH_FIELD_SIZE + self.payload.len()) as u16
    }

    /// Size of the segment on the wire, marker included.
    pub fn encoded_len(&self) -> usize {
        2 + LENGTH_FIELD_SIZE + self.payload.len()
    }

    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(&Marker::COM.to_bytes());
        out.write_u16::<BigEndian>(self.length_field())?;
        out.extend_from_slice(&self.payload);
        Ok(())
    }
}

/// Splices a comment segment behind `SOI` and appends the stream terminator plus `pdf`.
pub fn inject_jpeg(image: &[u8], pdf: &[u8]) -> Result<Vec<u8>> {
    if !is_jpeg(image) {
        return Err(PolyglotError::Format { expected: "JPG" });
    }

    let soi_len = Marker::SOI.to_bytes().len();
    let header = PdfHeader::new(image.len() - soi_len);
    let segment = CommentSegment::new(header.to_bytes())?;
    debug!(
        "injecting {} byte comment segment, declared stream length {}",
        segment.encoded_len(),
        header.declared_length()
    );

    let mut out = Vec::with_capacity(
        image.len() + segment.encoded_len() + STREAM_TERMINATOR.len() + pdf.len(),
    );
    out.extend_from_slice(&image[..soi_len]);
    segment.write_to(&mut out)?;
    out.extend_from_slice(&image[soi_len..]);
    out.extend_from_slice(STREAM_TERMINATOR);
    out.extend_from_slice(pdf);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf_header::synthesize_header;

    #[test]
    fn should_build_the_documented_layout() {
        let mut image = vec![0xFF, 0xD8];
        image.extend_from_slice(&[0u8; 100]);

        let out = inject_jpeg(&image, b"DUMMY").unwrap();

        let header = synthesize_header(100);
        let mut expected = vec![0xFF, 0xD8, 0xFF, 0xFE];
        expected.extend_from_slice(&((2 + header.len()) as u16).to_be_bytes());
        expected.extend_from_slice(header.as_bytes());
        expected.extend_from_slice(&[0u8; 100]);
        expected.extend_from_slice(b"\nendstream\nendobj\n");
        expected.extend_from_slice(b"DUMMY");

        assert_eq!(out, expected);
    }

    #[test]
    fn should_reject_missing_soi() {
        let err = inject_jpeg(b"\x89PNG\r\n\x1a\n", b"pdf").unwrap_err();
        assert!(matches!(err, PolyglotError::Format { expected: "JPG" }));
    }

    #[test]
    fn should_accept_a_bare_soi() {
        let out = inject_jpeg(&[0xFF, 0xD8], b"").unwrap();
        let header = synthesize_header(0);
        assert_eq!(&out[6..6 + header.len()], header.as_bytes());
        assert!(out.ends_with(STREAM_TERMINATOR));
    }

    #[test]
    fn should_refuse_oversized_segments() {
        assert!(CommentSegment::new(vec![b'x'; MAX_SEGMENT_LENGTH - 2]).is_ok());
        assert!(matches!(
            CommentSegment::new(vec![b'x'; MAX_SEGMENT_LENGTH - 1]),
            Err(PolyglotError::SegmentTooLarge(65536))
        ));
    }

    #[test]
    fn should_count_the_length_field_itself() {
        let segment = CommentSegment::new(b"abc".to_vec()).unwrap();
        assert_eq!(segment.length_field(), 5);
        assert_eq!(segment.encoded_len(), 7);

        let mut out = Vec::new();
        segment.write_to(&mut out).unwrap();
        assert_eq!(out, b"\xFF\xFE\x00\x05abc");
    }
}
