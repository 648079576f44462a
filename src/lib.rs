//! spdy-codec: a sans-I/O SPDY/2 and SPDY/3 frame codec
//!
//! This crate provides a synchronous SPDY frame parser and encoder designed
//! for environments that cannot use async runtimes (e.g. WebAssembly,
//! embedded systems).
//!
//! # Features
//!
//! - **Sans-I/O Design**: no async runtime dependencies, no internal I/O
//! - **SPDY/2 and SPDY/3**: both protocol versions, fixed per session
//! - **Header compression**: zlib-backed, dictionary-primed name/value
//!   header blocks (SPDY §4.2)
//! - **Incremental parsing**: `get_frame` reports NEED_MORE rather than
//!   blocking or erroring on a partial frame
//!
//! # Quick Start
//!
//! ```rust
//! use spdy_codec::{Context, Role, Frame, SynStreamFrame, HeaderField};
//!
//! let mut client = Context::new(Role::Client, 3);
//! let mut server = Context::new(Role::Server, 3);
//!
//! let stream_id = client.allocate_stream_id();
//! let headers = vec![HeaderField::new(":method", "GET")];
//! client
//!     .put_frame(&Frame::SynStream(SynStreamFrame::new(stream_id, headers)))
//!     .unwrap();
//!
//! server.incoming(&client.outgoing());
//! while let Some(frame) = server.get_frame().unwrap() {
//!     println!("received {}", frame.kind());
//! }
//! ```
//!
//! # Architecture
//!
//! This crate is intentionally minimal. It provides:
//! - Frame parsing (bytes -> `Frame`)
//! - Frame encoding (`Frame` -> bytes)
//! - Header block compression (via zlib through `flate2`)
//! - Per-session stream id and ping id bookkeeping
//!
//! It does NOT provide:
//! - TCP/TLS transport (you provide the bytes)
//! - Stream multiplexing or flow control policy
//! - Connection-level retry or backoff
//!
//! # Use Cases
//!
//! - Protocol analyzers and proxies that need to speak SPDY without an
//!   async runtime
//! - Interop and conformance testing against legacy SPDY deployments
//! - Embedding in constrained environments where a full HTTP stack is
//!   too heavy

pub mod bitpack;
pub mod dictionary;
pub mod error;
pub mod frame;
pub mod header_block;
pub mod session;

pub use error::{CodecError, CompressionError, FramingError, LayoutError};
pub use frame::{
    error_code, flags, frame_type, goaway_status, settings_id, settings_id_flag, DataFrame, Frame,
    GoawayFrame, HeadersFrame, PingFrame, RstStreamFrame, SettingEntry, SettingsFrame,
    SynReplyFrame, SynStreamFrame, WindowUpdateFrame,
};
pub use header_block::{HeaderBlock, HeaderCompressor, HeaderField};
pub use session::{Context, Role};
