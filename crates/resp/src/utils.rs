//! Utility functions and constants for RESP protocol.

use crate::error::DecodeError;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type markers
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Find the position of the first `\n` in a byte slice
#[inline]
pub fn find_lf(buf: &[u8]) -> Option<usize> {
	memchr::memchr(b'\n', buf)
}

/// Strip a trailing `\n` and the `\r` right before it, if present.
#[inline]
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
	let line = line.strip_suffix(b"\n").unwrap_or(line);
	line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parse a signed decimal integer from a byte slice.
///
/// Only ASCII digits with an optional leading `-` are accepted: no `+`, no
/// whitespace, no empty field. Overflow is an error.
pub fn parse_integer(buf: &[u8]) -> Result<i64, DecodeError> {
	let invalid = || DecodeError::InvalidInteger(String::from_utf8_lossy(buf).into_owned());

	let (negative, digits) = match buf.split_first() {
		Some((b'-', rest)) => (true, rest),
		Some(_) => (false, buf),
		None => return Err(invalid()),
	};
	if digits.is_empty() {
		return Err(invalid());
	}

	// Accumulate as a negative number so i64::MIN stays representable.
	let mut n: i64 = 0;
	for &b in digits {
		if !b.is_ascii_digit() {
			return Err(invalid());
		}
		n = n
			.checked_mul(10)
			.and_then(|n| n.checked_sub(i64::from(b - b'0')))
			.ok_or_else(invalid)?;
	}

	if negative {
		Ok(n)
	} else {
		n.checked_neg().ok_or_else(invalid)
	}
}

/// Parse the length field of a `$` or `*` header.
///
/// Returns `Ok(None)` for the `-1` null sentinel. Any other negative value is
/// reported through `on_negative` so bulk strings and arrays can name their
/// own error.
pub fn parse_length(
	buf: &[u8],
	on_negative: fn(i64) -> DecodeError,
) -> Result<Option<usize>, DecodeError> {
	match parse_integer(buf)? {
		-1 => Ok(None),
		n if n < 0 => Err(on_negative(n)),
		n => usize::try_from(n).map(Some).map_err(|_| on_negative(n)),
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn test_find_lf() {
		assert_eq!(find_lf(b"hello\r\n"), Some(6));
		assert_eq!(find_lf(b"hello"), None);
		assert_eq!(find_lf(b"\n"), Some(0));
	}

	#[rstest]
	#[case(b"OK\r\n", b"OK")]
	#[case(b"OK\n", b"OK")]
	#[case(b"\r\n", b"")]
	#[case(b"a\rb\r\n", b"a\rb")]
	fn test_trim_line_ending(#[case] input: &[u8], #[case] expected: &[u8]) {
		assert_eq!(trim_line_ending(input), expected);
	}

	#[rstest]
	#[case(b"0", 0)]
	#[case(b"123", 123)]
	#[case(b"-456", -456)]
	#[case(b"9223372036854775807", i64::MAX)]
	#[case(b"-9223372036854775808", i64::MIN)]
	fn test_parse_integer_valid(#[case] input: &[u8], #[case] expected: i64) {
		assert_eq!(parse_integer(input).unwrap(), expected);
	}

	#[rstest]
	#[case(b"")]
	#[case(b"-")]
	#[case(b"+5")]
	#[case(b"abc")]
	#[case(b"12a")]
	#[case(b" 12")]
	#[case(b"1-2")]
	#[case(b"9223372036854775808")]
	fn test_parse_integer_invalid(#[case] input: &[u8]) {
		assert!(matches!(
			parse_integer(input),
			Err(DecodeError::InvalidInteger(_))
		));
	}

	#[test]
	fn test_parse_length() {
		let neg = DecodeError::InvalidBulkStringLength;
		assert_eq!(parse_length(b"-1", neg).unwrap(), None);
		assert_eq!(parse_length(b"0", neg).unwrap(), Some(0));
		assert_eq!(parse_length(b"42", neg).unwrap(), Some(42));
		assert!(matches!(
			parse_length(b"-2", neg),
			Err(DecodeError::InvalidBulkStringLength(-2))
		));
		assert!(matches!(
			parse_length(b"x", neg),
			Err(DecodeError::InvalidInteger(_))
		));
	}
}
