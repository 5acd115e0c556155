//! Human-readable rendering of replies, in the style of `redis-cli`.

use std::fmt::Write;

use resp::Reply;

/// Render a reply for display.
///
/// ```
/// use resp::Reply;
/// use resp_client::output::format_reply;
///
/// assert_eq!(format_reply(&Reply::Integer(3)), "(integer) 3");
/// assert_eq!(format_reply(&Reply::null_bulk()), "(nil)");
/// ```
pub fn format_reply(reply: &Reply) -> String {
	let mut out = String::new();
	write_reply(&mut out, reply, 0);
	out
}

fn write_reply(out: &mut String, reply: &Reply, indent: usize) {
	match reply {
		Reply::Simple(s) => out.push_str(&String::from_utf8_lossy(s)),
		Reply::Error(e) => {
			out.push_str("(error) ");
			out.push_str(&String::from_utf8_lossy(e));
		}
		Reply::Integer(i) => {
			let _ = write!(out, "(integer) {i}");
		}
		Reply::BulkString(Some(b)) => quote_into(out, b),
		Reply::BulkString(None) | Reply::Array(None) => out.push_str("(nil)"),
		Reply::Array(Some(items)) if items.is_empty() => out.push_str("(empty array)"),
		Reply::Array(Some(items)) => {
			let width = items.len().to_string().len();
			for (i, item) in items.iter().enumerate() {
				if i > 0 {
					out.push('\n');
					out.push_str(&" ".repeat(indent));
				}
				let label = format!("{:>width$}) ", i + 1);
				out.push_str(&label);
				write_reply(out, item, indent + label.len());
			}
		}
	}
}

/// Double-quote binary data, escaping anything that is not printable ASCII.
fn quote_into(out: &mut String, data: &[u8]) {
	out.push('"');
	for &b in data {
		match b {
			b'"' => out.push_str("\\\""),
			b'\\' => out.push_str("\\\\"),
			b'\n' => out.push_str("\\n"),
			b'\r' => out.push_str("\\r"),
			b'\t' => out.push_str("\\t"),
			0x07 => out.push_str("\\a"),
			0x08 => out.push_str("\\b"),
			b if b.is_ascii_graphic() || b == b' ' => out.push(char::from(b)),
			b => {
				let _ = write!(out, "\\x{b:02x}");
			}
		}
	}
	out.push('"');
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(Reply::simple("OK"), "OK")]
	#[case(Reply::error("ERR unknown command"), "(error) ERR unknown command")]
	#[case(Reply::Integer(-5), "(integer) -5")]
	#[case(Reply::bulk("foo"), "\"foo\"")]
	#[case(Reply::bulk(""), "\"\"")]
	#[case(Reply::null_bulk(), "(nil)")]
	#[case(Reply::null_array(), "(nil)")]
	#[case(Reply::array(vec![]), "(empty array)")]
	fn test_format_scalar(#[case] reply: Reply, #[case] expected: &str) {
		assert_eq!(format_reply(&reply), expected);
	}

	#[test]
	fn test_format_escapes() {
		let reply = Reply::bulk(&b"a\"b\\c\r\n\x00\xff"[..]);
		assert_eq!(format_reply(&reply), r#""a\"b\\c\r\n\x00\xff""#);
	}

	#[test]
	fn test_format_flat_array() {
		let reply = Reply::array(vec![Reply::bulk("foo"), Reply::Integer(7)]);
		assert_eq!(format_reply(&reply), "1) \"foo\"\n2) (integer) 7");
	}

	#[test]
	fn test_format_nested_array() {
		let reply = Reply::array(vec![
			Reply::bulk("a"),
			Reply::array(vec![Reply::Integer(1), Reply::null_bulk()]),
		]);
		assert_eq!(
			format_reply(&reply),
			"1) \"a\"\n2) 1) (integer) 1\n   2) (nil)"
		);
	}

	#[test]
	fn test_format_wide_index() {
		let items = (0..10i64).map(Reply::from).collect();
		let text = format_reply(&Reply::array(items));
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines[0], " 1) (integer) 0");
		assert_eq!(lines[9], "10) (integer) 9");
	}
}
