//! Integration tests for reply decoding

use bytes::Bytes;
use resp::DecodeError;
use resp::Reply;
use rstest::rstest;

#[rstest]
#[case(b"+PONG\r\n", Reply::simple("PONG"))]
#[case(b"+OK\r\n", Reply::simple("OK"))]
#[case(b"+\r\n", Reply::simple(""))]
#[case(b"-ERR wrong type\r\n", Reply::error("ERR wrong type"))]
#[case(b":1000\r\n", Reply::Integer(1000))]
#[case(b":-5\r\n", Reply::Integer(-5))]
#[case(b":0\r\n", Reply::Integer(0))]
#[case(b"$-1\r\n", Reply::BulkString(None))]
#[case(b"$0\r\n\r\n", Reply::BulkString(Some(Bytes::new())))]
#[case(b"$3\r\nfoo\r\n", Reply::bulk("foo"))]
#[case(b"*-1\r\n", Reply::Array(None))]
#[case(b"*0\r\n", Reply::Array(Some(vec![])))]
#[case(
	b"*2\r\n$3\r\nfoo\r\n:7\r\n",
	Reply::array(vec![Reply::bulk("foo"), Reply::Integer(7)])
)]
#[case(
	b"*1\r\n*1\r\n:5\r\n",
	Reply::array(vec![Reply::array(vec![Reply::Integer(5)])])
)]
#[case(
	b"*3\r\n$-1\r\n*-1\r\n-ERR inner\r\n",
	Reply::array(vec![Reply::null_bulk(), Reply::null_array(), Reply::error("ERR inner")])
)]
fn test_decode_reply(#[case] input: &[u8], #[case] expected: Reply) {
	assert_eq!(resp::parse(input).unwrap(), expected);
}

#[test]
fn test_deeply_nested_arrays() {
	let depth = 100;
	let mut data = b"*1\r\n".repeat(depth);
	data.extend_from_slice(b":5\r\n");

	let mut value = resp::parse(&data).unwrap();
	for _ in 0..depth {
		let mut items = value.into_array().unwrap();
		assert_eq!(items.len(), 1);
		value = items.remove(0);
	}
	assert_eq!(value, Reply::Integer(5));
}

#[rstest]
#[case(b"$abc\r\nabc\r\n")]
#[case(b"$3x\r\nfoo\r\n")]
#[case(b"$\r\n\r\n")]
#[case(b"$+3\r\nfoo\r\n")]
#[case(b"$ 3\r\nfoo\r\n")]
#[case(b"*two\r\n")]
#[case(b"*\r\n")]
#[case(b":12a\r\n")]
#[case(b":\r\n")]
#[case(b":-\r\n")]
fn test_malformed_numeric_field(#[case] input: &[u8]) {
	assert!(matches!(
		resp::parse(input),
		Err(DecodeError::InvalidInteger(_))
	));
}

#[test]
fn test_negative_lengths_other_than_sentinel() {
	assert!(matches!(
		resp::parse(b"$-2\r\n"),
		Err(DecodeError::InvalidBulkStringLength(-2))
	));
	assert!(matches!(
		resp::parse(b"*-7\r\n"),
		Err(DecodeError::InvalidArrayLength(-7))
	));
}

#[rstest]
#[case(b"?what\r\n", b'?')]
#[case(b"_\r\n", b'_')]
#[case(b"#t\r\n", b'#')]
#[case(b"PONG\r\n", b'P')]
fn test_invalid_type_marker(#[case] input: &[u8], #[case] marker: u8) {
	match resp::parse(input) {
		Err(DecodeError::InvalidTypeMarker(m)) => assert_eq!(m, marker),
		other => panic!("Expected InvalidTypeMarker, got {:?}", other),
	}
}

#[rstest]
#[case(b"")]
#[case(b"+OK")]
#[case(b"$10\r\nshort\r\n")]
#[case(b"$3\r\nfoo")]
#[case(b"*3\r\n:1\r\n:2\r\n")]
fn test_truncated_stream(#[case] input: &[u8]) {
	assert!(matches!(
		resp::parse(input),
		Err(DecodeError::UnexpectedEof)
	));
}

#[test]
fn test_error_inside_array_fails_whole_reply() {
	let result = resp::parse(b"*3\r\n:1\r\n:oops\r\n:3\r\n");
	assert!(matches!(result, Err(DecodeError::InvalidInteger(_))));
}

#[test]
fn test_peer_error_is_data() {
	let reply = resp::parse(b"-WRONGTYPE Operation against a key\r\n").unwrap();
	assert!(reply.is_error());
	assert_eq!(reply.as_str(), Some("WRONGTYPE Operation against a key"));
}
