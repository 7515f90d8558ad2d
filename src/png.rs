//! Minimal PNG header reading.
//!
//! Reads just enough of a PNG byte stream to recover the declared pixel
//! dimensions from the IHDR chunk. Nothing is decoded and nothing past the
//! first chunk is inspected; IHDR is required to be first in a well-formed
//! file, so a missing leading IHDR is itself a format violation.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use thiserror::Error;

/// The fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Failure modes when reading a PNG header.
///
/// Display strings double as the reason text recorded by the scanner, so
/// they stay short and lowercase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid PNG signature")]
    InvalidSignature,

    #[error("truncated PNG header")]
    TruncatedHeader,

    #[error("IHDR chunk not found")]
    HeaderChunkNotFound,

    #[error("truncated IHDR chunk")]
    TruncatedHeaderChunk,

    #[error("{0}")]
    Io(String),
}

/// Read the declared pixel dimensions from a PNG file.
///
/// Returns `(width, height)` parsed from the first 8 bytes of the IHDR
/// payload as big-endian u32s. The file is opened read-only and never
/// modified.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32), FormatError> {
    let mut file = File::open(path).map_err(|e| FormatError::Io(e.to_string()))?;

    let mut signature = [0u8; 8];
    read_exact_or(&mut file, &mut signature, FormatError::InvalidSignature)?;
    if signature != PNG_SIGNATURE {
        return Err(FormatError::InvalidSignature);
    }

    // Chunk header: 4-byte big-endian length, then the 4-byte type tag.
    let mut chunk_header = [0u8; 8];
    read_exact_or(&mut file, &mut chunk_header, FormatError::TruncatedHeader)?;
    let length = u32::from_be_bytes([
        chunk_header[0],
        chunk_header[1],
        chunk_header[2],
        chunk_header[3],
    ]);
    if &chunk_header[4..8] != b"IHDR" {
        return Err(FormatError::HeaderChunkNotFound);
    }

    // The payload may come up short of the declared length; only the first
    // 8 bytes (width + height) are required to be present.
    let mut payload = Vec::with_capacity(length.min(1024) as usize);
    file.take(u64::from(length))
        .read_to_end(&mut payload)
        .map_err(|e| FormatError::Io(e.to_string()))?;
    if payload.len() < 8 {
        return Err(FormatError::TruncatedHeaderChunk);
    }

    let width = u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]);
    let height = u32::from_be_bytes([payload[4], payload[5], payload[6], payload[7]]);
    Ok((width, height))
}

/// Read exactly `buf.len()` bytes, mapping a short read to `short` and any
/// other I/O failure to `FormatError::Io`.
fn read_exact_or(file: &mut File, buf: &mut [u8], short: FormatError) -> Result<(), FormatError> {
    file.read_exact(buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            short
        } else {
            FormatError::Io(e.to_string())
        }
    })
}
