//! Per-connection session state (SPDY §3, §5).
//!
//! A `Context` is the single mutable object a caller drives: push bytes in
//! with `incoming`, pull frames out with `get_frame`; hand frames in with
//! `put_frame`, pull bytes out with `outgoing`. It owns the two
//! direction-specific `HeaderCompressor`s and the stream/ping id counters,
//! but never touches a socket, a timer, or a thread — that is the caller's
//! job, per the sans-I/O design note.

use crate::error::CodecError;
use crate::frame::{self, CommonHeader, Frame};
use crate::header_block::HeaderCompressor;

/// Which end of the connection this context represents. Fixes the parity
/// of stream ids and ping ids this side allocates (SPDY §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Client,
    Server,
}

impl Role {
    fn first_id(self) -> u32 {
        match self {
            Role::Client => 1,
            Role::Server => 2,
        }
    }
}

/// One SPDY connection's mutable state: negotiated version, role, the two
/// header compressors, buffered input, and queued output.
#[derive(Debug)]
pub struct Context {
    role: Role,
    version: u8,
    compressor: HeaderCompressor,
    input_buffer: Vec<u8>,
    output_buffer: Vec<u8>,
    next_stream_id: u32,
    next_ping_id: u32,
    peer_stream_id: u32,
}

impl Context {
    /// Builds a new session. `version` must be `2` or `3`; this is a
    /// construction-time invariant of the caller, not something negotiated
    /// by the codec itself.
    pub fn new(role: Role, version: u8) -> Self {
        Self {
            role,
            version,
            compressor: HeaderCompressor::new(version),
            input_buffer: Vec::new(),
            output_buffer: Vec::new(),
            next_stream_id: role.first_id(),
            next_ping_id: role.first_id(),
            peer_stream_id: 0,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Highest stream id this side has allocated so far, without consuming
    /// the next one.
    pub fn current_stream_id(&self) -> u32 {
        self.next_stream_id.saturating_sub(2)
    }

    /// Allocates the next stream id for a frame this side originates
    /// (SYN_STREAM). Ids increase by 2 to preserve this side's parity.
    pub fn allocate_stream_id(&mut self) -> u32 {
        let id = self.next_stream_id;
        self.next_stream_id += 2;
        id
    }

    /// Allocates the next PING id this side originates, with the same
    /// parity rule as stream ids.
    pub fn allocate_ping_id(&mut self) -> u32 {
        let id = self.next_ping_id;
        self.next_ping_id += 2;
        id
    }

    /// Highest stream id seen from the peer so far. Used to fill in
    /// GOAWAY's `last_stream_id` when this side initiates a shutdown.
    pub fn peer_stream_id(&self) -> u32 {
        self.peer_stream_id
    }

    /// Encodes `frame` and appends the bytes to the outgoing queue.
    /// WINDOW_UPDATE against a SPDY/2 session is rejected here as
    /// `CodecError::InvalidFrame` rather than silently miscompiled.
    pub fn put_frame(&mut self, frame: &Frame) -> Result<(), CodecError> {
        let bytes = frame::encode_frame(frame, self.version, &mut self.compressor)?;
        tracing::trace!(kind = frame.kind(), len = bytes.len(), "queued outgoing frame");
        self.output_buffer.extend_from_slice(&bytes);
        Ok(())
    }

    /// Drains and returns all bytes queued by `put_frame` since the last
    /// call. Returns an empty vector if nothing is pending.
    pub fn outgoing(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output_buffer)
    }

    /// Appends bytes read from the transport to the input buffer.
    pub fn incoming(&mut self, data: &[u8]) {
        self.input_buffer.extend_from_slice(data);
    }

    /// Pulls the next complete frame out of the input buffer, if one is
    /// available. `Ok(None)` means NEED_MORE: call again after feeding more
    /// bytes with `incoming`. NOOP frames (SPDY/2) are tolerated: they are
    /// consumed from the buffer but never returned to the caller.
    ///
    /// A frame whose common header parses but whose payload fails to
    /// decode still advances the buffer past that frame's declared
    /// length — the length field is trusted even when the payload is not,
    /// so one bad frame cannot desynchronize the rest of the stream.
    pub fn get_frame(&mut self) -> Result<Option<Frame>, CodecError> {
        loop {
            let Some(header) = CommonHeader::parse(&self.input_buffer) else {
                return Ok(None);
            };
            let total = header.total_len();
            if self.input_buffer.len() < total {
                return Ok(None);
            }
            let frame_bytes: Vec<u8> = self.input_buffer.drain(..total).collect();
            let payload = &frame_bytes[8..];

            match frame::decode_payload(&header, payload, self.version, &mut self.compressor) {
                Ok(Some(frame)) => {
                    if let Some(id) = frame.peer_initiated_stream_id() {
                        if id > self.peer_stream_id {
                            self.peer_stream_id = id;
                        }
                    }
                    tracing::trace!(kind = frame.kind(), "decoded incoming frame");
                    return Ok(Some(frame));
                }
                Ok(None) => {
                    tracing::debug!("discarding NOOP frame");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to decode frame payload");
                    return Err(e);
                }
            }
        }
    }
}
