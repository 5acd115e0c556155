//! Growable-buffer reader that hands out whole lines and fixed-size blocks.
//!
//! A single `read` on a socket may return any number of bytes, so both
//! [`LineReader::read_line`] and [`LineReader::read_exact`] keep pulling from
//! the source until the request is satisfied or the source is exhausted.

use std::io;
use std::io::Read;

use bytes::Buf;
use bytes::Bytes;
use bytes::BytesMut;

use crate::error::DecodeError;
use crate::utils::find_lf;
use crate::utils::trim_line_ending;

/// Bytes requested from the source per fill.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Longest line accepted before a terminator must appear.
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

pub struct LineReader<R> {
	inner: R,
	buf: BytesMut,
	chunk_size: usize,
	max_line_len: usize,
}

impl<R: Read> LineReader<R> {
	pub fn new(inner: R) -> Self {
		Self::with_chunk_size(inner, DEFAULT_CHUNK_SIZE)
	}

	pub fn with_chunk_size(inner: R, chunk_size: usize) -> Self {
		let chunk_size = chunk_size.max(1);
		Self {
			inner,
			buf: BytesMut::with_capacity(chunk_size),
			chunk_size,
			max_line_len: DEFAULT_MAX_LINE_LEN,
		}
	}

	pub fn set_max_line_len(&mut self, max_line_len: usize) {
		self.max_line_len = max_line_len;
	}

	/// Read the next line, without its `\n` and a preceding `\r`.
	///
	/// Fails with [`DecodeError::UnexpectedEof`] when the source ends before
	/// a terminator, even if some bytes were read.
	pub fn read_line(&mut self) -> Result<Bytes, DecodeError> {
		let mut scanned = 0;
		loop {
			if let Some(pos) = find_lf(&self.buf[scanned..]) {
				let raw = self.buf.split_to(scanned + pos + 1).freeze();
				let len = trim_line_ending(&raw).len();
				return Ok(raw.slice(..len));
			}
			scanned = self.buf.len();
			if scanned > self.max_line_len {
				return Err(DecodeError::LineTooLong(self.max_line_len));
			}
			if self.fill()? == 0 {
				return Err(DecodeError::UnexpectedEof);
			}
		}
	}

	/// Read exactly `n` bytes, which may contain any byte value.
	pub fn read_exact(&mut self, n: usize) -> Result<Bytes, DecodeError> {
		while self.buf.len() < n {
			if self.fill()? == 0 {
				return Err(DecodeError::UnexpectedEof);
			}
		}
		Ok(self.buf.split_to(n).freeze())
	}

	/// Discard exactly `n` bytes.
	pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
		while self.buf.len() < n {
			if self.fill()? == 0 {
				return Err(DecodeError::UnexpectedEof);
			}
		}
		self.buf.advance(n);
		Ok(())
	}

	/// Bytes read from the source but not yet consumed.
	pub fn buffered(&self) -> &[u8] {
		&self.buf
	}

	pub fn get_ref(&self) -> &R {
		&self.inner
	}

	pub fn get_mut(&mut self) -> &mut R {
		&mut self.inner
	}

	/// Give back the source. Buffered bytes are dropped.
	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Pull one chunk from the source, retrying interrupted reads.
	fn fill(&mut self) -> Result<usize, DecodeError> {
		let start = self.buf.len();
		self.buf.resize(start + self.chunk_size, 0);
		let result = loop {
			match self.inner.read(&mut self.buf[start..]) {
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				other => break other,
			}
		};
		match result {
			Ok(n) => {
				self.buf.truncate(start + n);
				Ok(n)
			}
			Err(e) => {
				self.buf.truncate(start);
				Err(e.into())
			}
		}
	}
}
