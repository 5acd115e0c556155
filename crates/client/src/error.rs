use resp::DecodeError;
use thiserror::Error;

use crate::config::ConfigError;

/// Failures of a client round trip.
///
/// An error reply sent by the server is not one of these: it arrives as
/// [`resp::Reply::Error`] and the caller decides what it means.
#[derive(Error, Debug)]
pub enum ClientError {
	#[error("Failed to resolve '{0}'")]
	Resolve(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Protocol error: {0}")]
	Decode(#[from] DecodeError),

	#[error(transparent)]
	Config(#[from] ConfigError),
}

impl ClientError {
	/// True when the connection itself failed, as opposed to the peer
	/// sending bytes we could not decode.
	pub fn is_transport(&self) -> bool {
		match self {
			ClientError::Resolve(_) | ClientError::Io(_) => true,
			ClientError::Decode(e) => e.is_transport(),
			ClientError::Config(_) => false,
		}
	}
}
