//! # RESP - Redis Serialization Protocol client codec
//!
//! Encodes commands as RESP request frames and decodes replies from any
//! blocking byte stream.
//!
//! - **Request encoding**: a space-separated command line becomes an array of
//!   bulk strings.
//! - **Reply decoding**: exactly one reply is read from a [`std::io::Read`]
//!   source per call; short reads are retried transparently.
//! - **Typed replies**: [`Reply`] covers the five RESP2 shapes, with the two
//!   null sentinels kept on their own variants.
//!
//! The codec never opens sockets. Pair it with any stream that implements
//! `Read` and `Write`.
//!
//! ## Example
//!
//! ```rust
//! use resp::Reply;
//!
//! let frame = resp::encode_command("SET key value");
//! assert_eq!(&frame[..], b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n");
//!
//! let reply = resp::parse(b"*2\r\n$3\r\nfoo\r\n$-1\r\n").unwrap();
//! assert_eq!(reply, Reply::array(vec![Reply::bulk("foo"), Reply::null_bulk()]));
//! ```

mod command;
mod decoder;
mod encode;
mod error;
mod reader;
mod types;
mod utils;

pub use command::Command;
pub use decoder::DEFAULT_MAX_BULK_LEN;
pub use decoder::DEFAULT_MAX_DEPTH;
pub use decoder::Decoder;
pub use decoder::decode;
pub use decoder::parse;
pub use encode::RespEncoder;
pub use encode::encode_command;
pub use error::DecodeError;
pub use error::EncodeError;
pub use reader::DEFAULT_CHUNK_SIZE;
pub use reader::DEFAULT_MAX_LINE_LEN;
pub use reader::LineReader;
pub use types::Reply;
