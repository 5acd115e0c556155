//! Error types for RESP decoding and encoding.

use thiserror::Error;

/// Errors that can occur while decoding a reply from a stream.
///
/// Transport failures ([`DecodeError::Io`]) are kept apart from protocol
/// malformation so callers can tell a dropped connection from a peer that
/// speaks something other than RESP. Null replies are never errors.
#[derive(Error, Debug)]
pub enum DecodeError {
	/// The underlying stream failed
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The stream ended before a complete reply was read
	#[error("Unexpected end of input")]
	UnexpectedEof,

	/// A reply line carried no type marker
	#[error("Empty reply line")]
	EmptyLine,

	/// Invalid type marker encountered
	#[error("Invalid type marker: 0x{0:02X}")]
	InvalidTypeMarker(u8),

	/// Invalid integer value
	#[error("Invalid integer: {0}")]
	InvalidInteger(String),

	/// Invalid bulk string length
	#[error("Invalid bulk string length: {0}")]
	InvalidBulkStringLength(i64),

	/// Invalid array length
	#[error("Invalid array length: {0}")]
	InvalidArrayLength(i64),

	/// Invalid format for the current type
	#[error("Invalid format: {0}")]
	InvalidFormat(String),

	/// A line exceeded the reader's limit without a terminator
	#[error("Line exceeds maximum length of {0} bytes")]
	LineTooLong(usize),

	/// A bulk string declared a length above the decoder's limit
	#[error("Bulk string length {0} exceeds limit")]
	BulkTooLarge(usize),

	/// Arrays nested deeper than the decoder's limit
	#[error("Nesting depth exceeds limit of {0}")]
	DepthExceeded(usize),
}

impl DecodeError {
	/// Returns true when the failure came from the stream rather than the
	/// bytes on it.
	pub fn is_transport(&self) -> bool {
		matches!(self, DecodeError::Io(_))
	}
}

/// Errors that can occur during RESP encoding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
	/// Invalid value for encoding
	#[error("Invalid value: {0}")]
	InvalidValue(String),
}
