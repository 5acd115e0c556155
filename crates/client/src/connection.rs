//! Transport side of a round trip: write a request frame, read one reply.

use std::io::Read;
use std::io::Write;
use std::net::SocketAddr;
use std::net::TcpStream;
use std::net::ToSocketAddrs;

use bytes::BytesMut;
use log::debug;
use log::warn;
use resp::Command;
use resp::Decoder;
use resp::Reply;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// A request/response channel over any duplex byte stream.
///
/// Requests are sent one at a time and each waits for its reply before
/// returning, so the stream may be reused for successive queries. The
/// connection has no locking; share it across threads only behind an
/// external lock.
pub struct Connection<S> {
	decoder: Decoder<S>,
}

impl<S: Read + Write> Connection<S> {
	pub fn new(stream: S) -> Self {
		Self {
			decoder: Decoder::new(stream),
		}
	}

	/// Send a space-separated command line and wait for its reply.
	pub fn query(&mut self, line: &str) -> Result<Reply, ClientError> {
		self.send(&Command::parse(line))
	}

	/// Send a prebuilt command and wait for its reply.
	pub fn send(&mut self, command: &Command) -> Result<Reply, ClientError> {
		let mut frame = BytesMut::with_capacity(command.frame_len());
		command.write_frame(&mut frame);

		let stream = self.decoder.get_mut();
		stream.write_all(&frame)?;
		stream.flush()?;
		debug!("Sent {} bytes ({} tokens)", frame.len(), command.len());

		let reply = self.decoder.decode()?;
		debug!("Received {} reply", reply.kind());
		Ok(reply)
	}

	pub fn get_ref(&self) -> &S {
		self.decoder.get_ref()
	}

	pub fn into_inner(self) -> S {
		self.decoder.into_inner()
	}
}

impl Connection<TcpStream> {
	/// Open a TCP connection using the address and timeouts in `config`.
	///
	/// Every resolved address is tried in order; the last failure is
	/// returned if none accepts.
	pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
		let addr = config.addr();
		let candidates: Vec<SocketAddr> = addr
			.to_socket_addrs()
			.map_err(|_| ClientError::Resolve(addr.clone()))?
			.collect();

		let mut last_err = None;
		for candidate in candidates {
			let attempt = match config.connect_timeout() {
				Some(timeout) => TcpStream::connect_timeout(&candidate, timeout),
				None => TcpStream::connect(candidate),
			};
			match attempt {
				Ok(stream) => {
					stream.set_read_timeout(config.read_timeout())?;
					stream.set_write_timeout(config.read_timeout())?;
					stream.set_nodelay(true)?;
					debug!("Connected to {}", candidate);
					return Ok(Self::new(stream));
				}
				Err(e) => {
					warn!("Failed to connect to {}: {}", candidate, e);
					last_err = Some(e);
				}
			}
		}

		Err(last_err.map_or(ClientError::Resolve(addr), ClientError::Io))
	}
}

/// Run one command over a fresh connection and close it afterwards.
pub fn query_once(config: &ClientConfig, line: &str) -> Result<Reply, ClientError> {
	let mut conn = Connection::connect(config)?;
	conn.query(line)
}
