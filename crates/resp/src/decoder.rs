//! Recursive-descent RESP reply decoder over a blocking byte stream.

use std::io::Read;

use log::trace;

use crate::error::DecodeError;
use crate::reader::LineReader;
use crate::types::Reply;
use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::CRLF;
use crate::utils::ERROR;
use crate::utils::INTEGER;
use crate::utils::SIMPLE_STRING;
use crate::utils::parse_integer;
use crate::utils::parse_length;

/// Deepest array nesting accepted from a peer.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Largest bulk string accepted from a peer (Redis' `proto-max-bulk-len`).
pub const DEFAULT_MAX_BULK_LEN: usize = 512 * 1024 * 1024;

/// Reads one reply at a time from a stream.
///
/// The decoder owns the stream for as long as it lives. Bytes past the end of
/// a reply stay buffered for the next [`Decoder::decode`] call, so one decoder
/// can serve a long-lived connection.
pub struct Decoder<R> {
	reader: LineReader<R>,
	max_depth: usize,
	max_bulk_len: usize,
}

impl<R: Read> Decoder<R> {
	pub fn new(inner: R) -> Self {
		Self::from_reader(LineReader::new(inner))
	}

	pub fn from_reader(reader: LineReader<R>) -> Self {
		Self {
			reader,
			max_depth: DEFAULT_MAX_DEPTH,
			max_bulk_len: DEFAULT_MAX_BULK_LEN,
		}
	}

	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	pub fn with_max_bulk_len(mut self, max_bulk_len: usize) -> Self {
		self.max_bulk_len = max_bulk_len;
		self
	}

	/// Consume exactly one complete reply, nested elements included.
	///
	/// An error reply from the peer (`-ERR ...`) is returned as
	/// `Ok(Reply::Error(..))`; only transport failures and malformed input
	/// are `Err`.
	pub fn decode(&mut self) -> Result<Reply, DecodeError> {
		let reply = self.decode_value(0)?;
		trace!("decoded {} reply", reply.kind());
		Ok(reply)
	}

	pub fn get_ref(&self) -> &R {
		self.reader.get_ref()
	}

	pub fn get_mut(&mut self) -> &mut R {
		self.reader.get_mut()
	}

	pub fn into_inner(self) -> R {
		self.reader.into_inner()
	}

	fn decode_value(&mut self, depth: usize) -> Result<Reply, DecodeError> {
		let line = self.reader.read_line()?;
		let (&marker, rest) = line.split_first().ok_or(DecodeError::EmptyLine)?;
		let payload = line.slice(1..);

		match marker {
			SIMPLE_STRING => Ok(Reply::Simple(payload)),
			ERROR => Ok(Reply::Error(payload)),
			INTEGER => parse_integer(rest).map(Reply::Integer),
			BULK_STRING => self.decode_bulk_string(rest),
			ARRAY => self.decode_array(rest, depth),
			_ => Err(DecodeError::InvalidTypeMarker(marker)),
		}
	}

	fn decode_bulk_string(&mut self, header: &[u8]) -> Result<Reply, DecodeError> {
		let Some(length) = parse_length(header, DecodeError::InvalidBulkStringLength)? else {
			return Ok(Reply::BulkString(None));
		};
		if length > self.max_bulk_len {
			return Err(DecodeError::BulkTooLarge(length));
		}

		let data = self.reader.read_exact(length)?;
		let terminator = self.reader.read_exact(CRLF.len())?;
		if terminator != CRLF {
			return Err(DecodeError::InvalidFormat(
				"Missing CRLF after bulk string".to_string(),
			));
		}
		Ok(Reply::BulkString(Some(data)))
	}

	fn decode_array(&mut self, header: &[u8], depth: usize) -> Result<Reply, DecodeError> {
		let Some(length) = parse_length(header, DecodeError::InvalidArrayLength)? else {
			return Ok(Reply::Array(None));
		};
		if depth >= self.max_depth {
			return Err(DecodeError::DepthExceeded(self.max_depth));
		}

		// The header alone cannot be trusted to size an allocation.
		let mut items = Vec::with_capacity(length.min(1024));
		for _ in 0..length {
			items.push(self.decode_value(depth + 1)?);
		}
		Ok(Reply::Array(Some(items)))
	}
}

/// Decode a single reply from `reader`.
///
/// Bytes after the reply may have been buffered and are dropped with the
/// decoder; use [`Decoder`] directly to read several replies from one stream.
pub fn decode<R: Read>(reader: R) -> Result<Reply, DecodeError> {
	Decoder::new(reader).decode()
}

/// Decode a single reply from a complete byte slice.
///
/// Returns [`DecodeError::UnexpectedEof`] if the slice holds only part of a
/// reply.
pub fn parse(buf: &[u8]) -> Result<Reply, DecodeError> {
	decode(buf)
}
