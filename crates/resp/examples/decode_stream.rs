use std::io;
use std::io::Read;

use resp::DecodeError;
use resp::Decoder;

/// Simulates a socket that delivers a reply stream in uneven chunks.
struct Chunked {
	chunks: Vec<&'static [u8]>,
}

impl Read for Chunked {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let Some(&chunk) = self.chunks.first() else {
			return Ok(0);
		};
		let n = chunk.len().min(buf.len());
		buf[..n].copy_from_slice(&chunk[..n]);
		println!("[Stream] Delivered {:?}", String::from_utf8_lossy(&chunk[..n]));
		if n == chunk.len() {
			self.chunks.remove(0);
		} else {
			self.chunks[0] = &chunk[n..];
		}
		Ok(n)
	}
}

fn main() {
	println!("--- RESP Stream Decode Example ---");

	println!(
		"[Encoder] SET key value -> {:?}",
		String::from_utf8_lossy(&resp::encode_command("SET key value"))
	);

	// - A status: "+OK\r\n"
	// - An integer: ":1000\r\n"
	// - An array holding a bulk string and a null: "*2\r\n$3\r\nfoo\r\n$-1\r\n"
	let stream = Chunked {
		chunks: vec![
			b"+O".as_slice(),
			b"K\r\n:1".as_slice(),
			b"00".as_slice(),
			b"0\r\n*2\r\n$3\r\nf".as_slice(),
			b"oo\r\n$-".as_slice(),
			b"1\r\n".as_slice(),
		],
	};

	let mut decoder = Decoder::new(stream);
	loop {
		match decoder.decode() {
			Ok(reply) => println!("[Decoder] Complete: {:?}", reply),
			Err(DecodeError::UnexpectedEof) => {
				println!("[Decoder] Stream closed");
				break;
			}
			Err(e) => {
				eprintln!("[Decoder] Error: {}", e);
				break;
			}
		}
	}
}
