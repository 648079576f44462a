//! Error taxonomy for the codec.
//!
//! Four distinguishable kinds, matching the wire-level failure modes a SPDY
//! endpoint actually needs to tell apart: malformed bytes, a poisoned
//! compressor, a value that doesn't fit its bit width, and an attempt to
//! build a frame the negotiated version doesn't support.

use thiserror::Error;

/// Top-level error returned by every fallible codec operation.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Framing(#[from] FramingError),

    #[error(transparent)]
    Compression(#[from] CompressionError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("invalid frame for this session: {0}")]
    InvalidFrame(String),
}

/// The bytes on the wire do not conform to the SPDY framing rules.
#[derive(Debug, Error)]
pub enum FramingError {
    #[error("unknown control frame type {0}")]
    UnknownType(u16),

    #[error("unsupported SPDY version {0}")]
    UnsupportedVersion(u16),

    #[error("control frame declares wire version {wire} but this session negotiated SPDY/{session}")]
    VersionMismatch { wire: u16, session: u8 },

    #[error("bad payload length for {frame}: expected {expected}, got {actual}")]
    BadLength {
        frame: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("truncated {frame} payload: needed {needed} bytes, had {had}")]
    Truncated {
        frame: &'static str,
        needed: usize,
        had: usize,
    },

    #[error("header block framing error: {0}")]
    HeaderBlock(&'static str),

    #[error("CONTINUATION-style header block exceeds {0} bytes")]
    HeaderBlockTooLarge(usize),
}

/// The zlib stream backing the header block coder failed.
#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("zlib deflate failed: {0}")]
    Deflate(String),

    #[error("zlib inflate failed: {0}")]
    Inflate(String),

    #[error("inflate stream is poisoned by a previous decompression failure")]
    Poisoned,
}

/// An attribute value did not fit the bit width its slot declares, or a
/// variable-length slot was not aligned the way the layout requires.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("value {value} does not fit in {width} bits")]
    ValueTooWide { value: u64, width: u8 },

    #[error("variable-length slot must start on a byte boundary ({context})")]
    Misaligned { context: &'static str },

    #[error("not enough bits remaining to read {width} bits ({context})")]
    Underrun { width: u8, context: &'static str },

    #[error("not enough bytes remaining: needed {needed}, had {available} ({context})")]
    OutOfBounds {
        needed: usize,
        available: usize,
        context: &'static str,
    },
}
