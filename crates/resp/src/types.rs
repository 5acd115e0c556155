//! RESP reply representation.

use bytes::Bytes;

/// A decoded RESP reply.
///
/// The variant is decided entirely by the first byte of the reply line. The
/// two null sentinels (`$-1` and `*-1`) are kept on their own variants as
/// `None`, so a null bulk string, a null array and an empty value are all
/// distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reply {
	/// Status line: `+OK\r\n`
	Simple(Bytes),

	/// Error line: `-ERR message\r\n`
	Error(Bytes),

	/// Integer: `:1000\r\n`
	Integer(i64),

	/// Bulk string: `$6\r\nfoobar\r\n`, or `$-1\r\n` as `None`
	BulkString(Option<Bytes>),

	/// Array: `*2\r\n:1\r\n:2\r\n`, or `*-1\r\n` as `None`
	Array(Option<Vec<Reply>>),
}

impl Reply {
	/// Check if the value is an error reply
	pub fn is_error(&self) -> bool {
		matches!(self, Reply::Error(_))
	}

	/// Check if the value is a null bulk string or a null array
	pub fn is_null(&self) -> bool {
		matches!(self, Reply::BulkString(None) | Reply::Array(None))
	}

	/// Check for the `+OK` status
	pub fn is_ok(&self) -> bool {
		matches!(self, Reply::Simple(s) if s == "OK")
	}

	/// Check for the `+PONG` status
	pub fn is_pong(&self) -> bool {
		matches!(self, Reply::Simple(s) if s == "PONG")
	}

	/// Payload of a status, error or non-null bulk string
	pub fn as_bytes(&self) -> Option<&Bytes> {
		match self {
			Reply::Simple(b) | Reply::Error(b) | Reply::BulkString(Some(b)) => Some(b),
			_ => None,
		}
	}

	/// Try to convert to a string slice
	pub fn as_str(&self) -> Option<&str> {
		self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
	}

	/// Try to convert to integer
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Reply::Integer(i) => Some(*i),
			_ => None,
		}
	}

	/// Elements of a non-null array
	pub fn as_array(&self) -> Option<&[Reply]> {
		match self {
			Reply::Array(Some(a)) => Some(a),
			_ => None,
		}
	}

	/// Try to consume and convert to Vec<Reply>
	pub fn into_array(self) -> Option<Vec<Reply>> {
		match self {
			Reply::Array(Some(a)) => Some(a),
			_ => None,
		}
	}

	/// Convert to String with lossy UTF-8 conversion
	pub fn to_string_lossy(&self) -> Option<String> {
		self.as_bytes()
			.map(|b| String::from_utf8_lossy(b).into_owned())
	}

	/// Short name of the reply kind, for logging.
	pub fn kind(&self) -> &'static str {
		match self {
			Reply::Simple(_) => "simple",
			Reply::Error(_) => "error",
			Reply::Integer(_) => "integer",
			Reply::BulkString(Some(_)) => "bulk",
			Reply::BulkString(None) => "null-bulk",
			Reply::Array(Some(_)) => "array",
			Reply::Array(None) => "null-array",
		}
	}

	// Convenience constructors

	/// Create a status reply
	pub fn simple(s: impl Into<Bytes>) -> Self {
		Reply::Simple(s.into())
	}

	/// Create an error reply
	pub fn error(s: impl Into<Bytes>) -> Self {
		Reply::Error(s.into())
	}

	/// Create a bulk string reply
	pub fn bulk(s: impl Into<Bytes>) -> Self {
		Reply::BulkString(Some(s.into()))
	}

	/// Create the `$-1` null bulk string
	pub fn null_bulk() -> Self {
		Reply::BulkString(None)
	}

	/// Create an array reply
	pub fn array(items: Vec<Reply>) -> Self {
		Reply::Array(Some(items))
	}

	/// Create the `*-1` null array
	pub fn null_array() -> Self {
		Reply::Array(None)
	}
}

impl From<i64> for Reply {
	fn from(i: i64) -> Self {
		Reply::Integer(i)
	}
}

impl From<Vec<Reply>> for Reply {
	fn from(items: Vec<Reply>) -> Self {
		Reply::Array(Some(items))
	}
}
