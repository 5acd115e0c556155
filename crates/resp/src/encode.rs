use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::command::Command;
use crate::error::EncodeError;
use crate::types::Reply;
use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::CRLF;
use crate::utils::ERROR;
use crate::utils::INTEGER;
use crate::utils::SIMPLE_STRING;

/// Trait for encoding values into RESP frames.
pub trait RespEncoder {
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError>;

	fn encode(&self) -> Result<Bytes, EncodeError> {
		let mut buf = BytesMut::new();
		self.encode_to(&mut buf)?;
		Ok(buf.freeze())
	}
}

/// Encode a space-separated command line as a request frame.
///
/// `"SET key value"` becomes `*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n`;
/// an empty line becomes `*0\r\n`.
pub fn encode_command(line: &str) -> Bytes {
	let mut buf = BytesMut::new();
	Command::parse(line).write_frame(&mut buf);
	buf.freeze()
}

impl Command {
	/// Exact size of the encoded request frame.
	pub fn frame_len(&self) -> usize {
		self.tokens().iter().fold(header_len(self.len()), |acc, t| {
			acc + header_len(t.len()) + t.len() + CRLF.len()
		})
	}

	/// Append the request frame. Request frames are always well formed, so
	/// this cannot fail.
	pub fn write_frame(&self, buf: &mut BytesMut) {
		buf.reserve(self.frame_len());
		encode_length(buf, ARRAY, self.len());
		for token in self.tokens() {
			encode_bulk_string(buf, token);
		}
	}
}

impl RespEncoder for Command {
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError> {
		self.write_frame(buf);
		Ok(())
	}
}

impl RespEncoder for Reply {
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError> {
		match self {
			Reply::Simple(s) => encode_line(buf, SIMPLE_STRING, s)?,
			Reply::Error(e) => encode_line(buf, ERROR, e)?,
			Reply::Integer(i) => encode_integer(buf, *i),
			Reply::BulkString(Some(s)) => encode_bulk_string(buf, s),
			Reply::BulkString(None) => encode_null(buf, BULK_STRING),
			Reply::Array(Some(arr)) => encode_array(buf, arr)?,
			Reply::Array(None) => encode_null(buf, ARRAY),
		}
		Ok(())
	}
}

/// Length of a `<marker><n>\r\n` header line.
#[inline]
fn header_len(n: usize) -> usize {
	1 + n.checked_ilog10().unwrap_or(0) as usize + 1 + CRLF.len()
}

#[inline]
fn encode_line(buf: &mut BytesMut, marker: u8, s: &Bytes) -> Result<(), EncodeError> {
	if memchr::memchr2(b'\r', b'\n', s).is_some() {
		return Err(EncodeError::InvalidValue(format!(
			"line reply may not contain CR or LF: {:?}",
			String::from_utf8_lossy(s)
		)));
	}
	buf.put_u8(marker);
	buf.put_slice(s);
	buf.put_slice(CRLF);
	Ok(())
}

#[inline]
fn encode_integer(buf: &mut BytesMut, i: i64) {
	buf.put_u8(INTEGER);
	buf.put_slice(i.to_string().as_bytes());
	buf.put_slice(CRLF);
}

#[inline]
fn encode_length(buf: &mut BytesMut, marker: u8, length: usize) {
	buf.put_u8(marker);
	buf.put_slice(length.to_string().as_bytes());
	buf.put_slice(CRLF);
}

#[inline]
fn encode_bulk_string(buf: &mut BytesMut, s: &[u8]) {
	encode_length(buf, BULK_STRING, s.len());
	buf.put_slice(s);
	buf.put_slice(CRLF);
}

#[inline]
fn encode_null(buf: &mut BytesMut, marker: u8) {
	buf.put_u8(marker);
	buf.put_slice(b"-1");
	buf.put_slice(CRLF);
}

fn encode_array(buf: &mut BytesMut, arr: &[Reply]) -> Result<(), EncodeError> {
	encode_length(buf, ARRAY, arr.len());
	for value in arr {
		value.encode_to(buf)?;
	}
	Ok(())
}
