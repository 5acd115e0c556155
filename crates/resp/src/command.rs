//! Request commands: the token list sent to the peer as an array of bulk
//! strings.

use bytes::Bytes;

use crate::error::DecodeError;
use crate::types::Reply;

/// An ordered list of command tokens, the name first.
///
/// Tokens are opaque bytes once built. They must not contain `\r` or `\n`;
/// nothing checks this and a peer will misread such a frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
	tokens: Vec<Bytes>,
}

impl Command {
	/// Build a command from any sequence of tokens.
	pub fn new<I, T>(tokens: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<Bytes>,
	{
		Self {
			tokens: tokens.into_iter().map(Into::into).collect(),
		}
	}

	/// Split a command line on the space character.
	///
	/// There is no quoting or escaping: `SET k "a b"` yields four tokens, and
	/// runs of spaces yield empty tokens. An empty line yields no tokens.
	pub fn parse(line: &str) -> Self {
		if line.is_empty() {
			return Self::default();
		}
		Self::new(
			line.split(' ')
				.map(|t| Bytes::copy_from_slice(t.as_bytes())),
		)
	}

	/// The command name, if any token is present
	pub fn name(&self) -> Option<&Bytes> {
		self.tokens.first()
	}

	/// Tokens after the name
	pub fn args(&self) -> &[Bytes] {
		self.tokens.get(1..).unwrap_or_default()
	}

	pub fn tokens(&self) -> &[Bytes] {
		&self.tokens
	}

	pub fn into_tokens(self) -> Vec<Bytes> {
		self.tokens
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

impl From<&str> for Command {
	fn from(line: &str) -> Self {
		Command::parse(line)
	}
}

/// Rebuild a command from a decoded request frame.
impl TryFrom<Reply> for Command {
	type Error = DecodeError;

	fn try_from(value: Reply) -> Result<Self, Self::Error> {
		let items = match value {
			Reply::Array(Some(items)) => items,
			other => {
				return Err(DecodeError::InvalidFormat(format!(
					"Expected array of bulk strings, got {}",
					other.kind()
				)));
			}
		};

		let tokens = items
			.into_iter()
			.map(|item| match item {
				Reply::BulkString(Some(b)) => Ok(b),
				other => Err(DecodeError::InvalidFormat(format!(
					"Expected bulk string argument, got {}",
					other.kind()
				))),
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Command { tokens })
	}
}
