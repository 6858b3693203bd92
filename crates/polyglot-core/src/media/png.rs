//! PNG chunk level injection.
//!
//! The PDF header travels in a private ancillary chunk placed right after
//! `IHDR`. Decoders that do not know the chunk type skip it.

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use log::debug;

use crate::error::PolyglotError;
use crate::pdf_header::{PdfHeader, STREAM_TERMINATOR};
use crate::result::Result;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const LENGTH_FIELD_SIZE: usize = 4;
const TYPE_FIELD_SIZE: usize = 4;
const CRC_FIELD_SIZE: usize = 4;

/// Chunk type carrying the PDF header.
///
/// Case bits: `p` ancillary, `d` private, `F` reserved bit clear, `h` safe to copy.
pub const POLYGLOT_CHUNK_TYPE: [u8; 4] = *b"pdFh";

/// PNG limits chunk data lengths to 2^31 - 1 bytes.
pub const MAX_CHUNK_LENGTH: usize = i32::MAX as usize;

/// Counted into the declared stream length on top of the image bytes that follow the chunk.
const PNG_LENGTH_SLACK: usize = 4;

/// A single PNG chunk: length and CRC are derived when writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub chunk_type: [u8; 4],
    pub data: Vec<u8>,
}

impl Chunk {
    pub fn new(chunk_type: [u8; 4], data: Vec<u8>) -> Self {
        Self { chunk_type, data }
    }

    /// CRC-32 over type tag and data, as stored in the chunk trailer.
    pub fn crc(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.chunk_type);
        hasher.update(&self.data);
        hasher.finalize()
    }

    /// Size of the chunk on the wire.
    pub fn encoded_len(&self) -> usize {
        LENGTH_FIELD_SIZE + TYPE_FIELD_SIZE + self.data.len() + CRC_FIELD_SIZE
    }

    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        out.write_u32::<BigEndian>(length_field(self.data.len())?)?;
        out.extend_from_slice(&self.chunk_type);
        out.extend_from_slice(&self.data);
        out.write_u32::<BigEndian>(self.crc())?;
        Ok(())
    }
}

fn length_field(len: usize) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|&l| l as usize <= MAX_CHUNK_LENGTH)
        .ok_or(PolyglotError::ChunkTooLarge(len))
}

pub fn is_png(data: &[u8]) -> bool {
    data.starts_with(&PNG_SIGNATURE)
}

/// Byte offset right behind the first chunk (`IHDR`), i.e. behind its CRC.
pub fn ihdr_end_offset(image: &[u8]) -> Result<usize> {
    if !is_png(image) {
        return Err(PolyglotError::Format { expected: "PNG" });
    }

    let start = PNG_SIGNATURE.len();
    let header_end = start + LENGTH_FIELD_SIZE + TYPE_FIELD_SIZE;
    if image.len() < header_end {
        return Err(PolyglotError::TruncatedChunk {
            offset: start,
            len: 0,
        });
    }

    let len = BigEndian::read_u32(&image[start..start + LENGTH_FIELD_SIZE]) as usize;
    let end = header_end
        .checked_add(len)
        .and_then(|o| o.checked_add(CRC_FIELD_SIZE))
        .filter(|&o| o <= image.len())
        .ok_or(PolyglotError::TruncatedChunk { offset: start, len })?;

    debug!(
        "first chunk {:?} has {len} data bytes, ends at {end}",
        String::from_utf8_lossy(&image[start + LENGTH_FIELD_SIZE..header_end])
    );

    Ok(end)
}

/// Splices a [`POLYGLOT_CHUNK_TYPE`] chunk behind `IHDR` and appends the stream terminator plus `pdf`.
pub fn inject_png(image: &[u8], pdf: &[u8]) -> Result<Vec<u8>> {
    let offset = ihdr_end_offset(image)?;
    let tail_len = image.len() - offset + PNG_LENGTH_SLACK;

    let header = PdfHeader::new(tail_len);
    let chunk = Chunk::new(POLYGLOT_CHUNK_TYPE, header.to_bytes());
    debug!(
        "injecting {} byte chunk at offset {offset}, declared stream length {tail_len}",
        chunk.encoded_len()
    );

    let mut out = Vec::with_capacity(
        image.len() + chunk.encoded_len() + STREAM_TERMINATOR.len() + pdf.len(),
    );
    out.extend_from_slice(&image[..offset]);
    chunk.write_to(&mut out)?;
    out.extend_from_slice(&image[offset..]);
    out.extend_from_slice(STREAM_TERMINATOR);
    out.extend_from_slice(pdf);

    Ok(out)
}
