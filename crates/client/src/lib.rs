//! Blocking RESP command client.
//!
//! [`Connection`] pairs the `resp` codec with a byte stream; [`query_once`]
//! applies the connection-per-call policy used by the `resp-client` binary.

pub mod config;
pub mod connection;
mod error;
pub mod output;

pub use connection::Connection;
pub use connection::query_once;
pub use error::ClientError;
