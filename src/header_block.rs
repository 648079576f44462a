//! Name/value header block coder (SPDY §4.2).
//!
//! The plaintext block is a count-prefixed list of length-prefixed
//! name/value pairs; the count and length prefixes are 16-bit in SPDY/2 and
//! 32-bit in SPDY/3. That plaintext is then deflated through a
//! direction-specific zlib stream primed with the SPDY dictionary
//! (`dictionary.rs`), sync-flushed so the peer can decode without waiting
//! for more frames.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::dictionary::dictionary_for_version;
use crate::error::{CodecError, CompressionError, FramingError, LayoutError};
use crate::bitpack::{BitReader, BitWriter};

/// A single decoded header name/value pair. Byte strings, not `str`, since
/// the wire format never requires the names or values to be valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: Vec<u8>,
    pub value: Vec<u8>,
}

impl HeaderField {
    pub fn new(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An ordered name/value list. Order is preserved for determinism but is
/// not semantically significant; duplicate names are not supported.
pub type HeaderBlock = Vec<HeaderField>;

fn count_width(version: u8) -> u8 {
    if version == 2 {
        16
    } else {
        32
    }
}

/// Serializes a header block to its uncompressed wire form.
pub fn encode_plaintext(headers: &HeaderBlock, version: u8) -> Result<Vec<u8>, LayoutError> {
    let width = count_width(version);
    let mut w = BitWriter::new();
    w.write(headers.len() as u64, width)?;
    for field in headers {
        w.write(field.name.len() as u64, width)?;
        w.write_bytes(&field.name)?;
        w.write(field.value.len() as u64, width)?;
        w.write_bytes(&field.value)?;
    }
    Ok(w.into_bytes())
}

/// Parses a header block's uncompressed wire form.
pub fn decode_plaintext(bytes: &[u8], version: u8) -> Result<HeaderBlock, FramingError> {
    let width = count_width(version);
    let mut r = BitReader::new(bytes);
    let count = r
        .read(width, "header_block_count")
        .map_err(|_| FramingError::HeaderBlock("truncated header count"))?;
    let mut headers = Vec::with_capacity(count.min(4096) as usize);
    for _ in 0..count {
        let name_len = r
            .read(width, "header_name_len")
            .map_err(|_| FramingError::HeaderBlock("truncated name length"))?;
        let name = r
            .read_bytes(name_len as usize, "header_name")
            .map_err(|_| FramingError::HeaderBlock("truncated name"))?;
        let value_len = r
            .read(width, "header_value_len")
            .map_err(|_| FramingError::HeaderBlock("truncated value length"))?;
        let value = r
            .read_bytes(value_len as usize, "header_value")
            .map_err(|_| FramingError::HeaderBlock("truncated value"))?;
        headers.push(HeaderField { name, value });
    }
    Ok(headers)
}

/// Owns the deflate/inflate zlib stream pair for one direction of a
/// session. The frame codec never touches `flate2` directly; it only ever
/// calls `compress_block`/`decompress_block`, per the compressor-ownership
/// design note.
pub struct HeaderCompressor {
    version: u8,
    deflate: Compress,
    inflate: Decompress,
    inflate_poisoned: bool,
}

impl std::fmt::Debug for HeaderCompressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderCompressor")
            .field("version", &self.version)
            .field("inflate_poisoned", &self.inflate_poisoned)
            .finish()
    }
}

impl HeaderCompressor {
    pub fn new(version: u8) -> Self {
        let mut deflate = Compress::new(Compression::default(), true);
        deflate
            .set_dictionary(dictionary_for_version(version))
            .expect("priming a freshly constructed deflate stream with the SPDY dictionary");
        Self {
            version,
            deflate,
            inflate: Decompress::new(true),
            inflate_poisoned: false,
        }
    }

    /// Encodes and compresses a header block, ready to embed in a frame.
    pub fn compress_block(&mut self, headers: &HeaderBlock) -> Result<Vec<u8>, CodecError> {
        let plaintext = encode_plaintext(headers, self.version)?;
        let compressed = compress_all(&mut self.deflate, &plaintext)?;
        tracing::trace!(
            plaintext_len = plaintext.len(),
            compressed_len = compressed.len(),
            "compressed header block"
        );
        Ok(compressed)
    }

    /// Decompresses and parses a header block from its compressed wire form.
    pub fn decompress_block(&mut self, bytes: &[u8]) -> Result<HeaderBlock, CodecError> {
        if self.inflate_poisoned {
            return Err(CompressionError::Poisoned.into());
        }
        let plaintext = decompress_all(&mut self.inflate, self.version, bytes).map_err(|e| {
            self.inflate_poisoned = true;
            tracing::warn!(error = %e, "inflate stream poisoned");
            e
        })?;
        Ok(decode_plaintext(&plaintext, self.version)?)
    }
}

/// Runs `compress` to completion with a sync flush, growing the output
/// buffer as needed. Feeds the *remaining* unconsumed input on each
/// iteration, since `Compress::compress_vec` consumes from the front of
/// whatever slice it is given, not from a stream-wide cursor.
fn compress_all(compress: &mut Compress, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut output = Vec::with_capacity(input.len() + 64);
    let start_in = compress.total_in();
    loop {
        let consumed = (compress.total_in() - start_in) as usize;
        if consumed >= input.len() {
            break;
        }
        let remaining = &input[consumed..];
        output.reserve(remaining.len() + 64);
        compress
            .compress_vec(remaining, &mut output, FlushCompress::Sync)
            .map_err(|e| CompressionError::Deflate(format!("{e:?}")))?;
    }
    Ok(output)
}

/// Runs `decompress` to completion with a sync flush, transparently
/// supplying the SPDY dictionary the first time zlib reports that it needs
/// one (per §4.2's "lazy dictionary loading" requirement).
fn decompress_all(
    decompress: &mut Decompress,
    version: u8,
    input: &[u8],
) -> Result<Vec<u8>, CompressionError> {
    let mut output = Vec::with_capacity(input.len() * 3 + 64);
    let start_in = decompress.total_in();
    let mut dictionary_supplied = false;
    loop {
        let consumed = (decompress.total_in() - start_in) as usize;
        if consumed >= input.len() {
            break;
        }
        let remaining = &input[consumed..];
        output.reserve(remaining.len() * 3 + 64);
        match decompress.decompress_vec(remaining, &mut output, FlushDecompress::Sync) {
            Ok(Status::StreamEnd) => break,
            Ok(_) => {}
            Err(e) if !dictionary_supplied && e.needs_dictionary().is_some() => {
                decompress
                    .set_dictionary(dictionary_for_version(version))
                    .map_err(|e| CompressionError::Inflate(format!("{e:?}")))?;
                dictionary_supplied = true;
            }
            Err(e) => return Err(CompressionError::Inflate(format!("{e:?}"))),
        }
    }
    Ok(output)
}
