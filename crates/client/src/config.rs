//! Configuration for the command client
//!
//! Values come from, in increasing priority: built-in defaults, a TOML, JSON
//! or YAML file, and command-line flags.
//!
//! # Example
//!
//! ```no_run
//! use resp_client::config::{Cli, Parser, load};
//!
//! let args = Cli::parse();
//! let config = load(&args)?;
//! println!("Server address: {}:{}", config.host, config.port);
//! # Ok::<(), resp_client::config::ConfigError>(())
//! ```

use std::path::Path;
use std::time::Duration;

pub use clap::Parser;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Config file picked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "conf/client.toml";

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Failed to read configuration file '{path}': {source}")]
	Io {
		source: std::io::Error,
		path: String,
	},

	#[error("Failed to parse TOML configuration: {0}")]
	TomlParse(#[from] toml::de::Error),

	#[error("Failed to parse JSON configuration: {0}")]
	JsonParse(#[from] serde_json::Error),

	#[error("Failed to parse YAML configuration: {0}")]
	YamlParse(#[from] serde_yaml::Error),

	#[error("Unsupported configuration format: {0}")]
	UnsupportedFormat(String),

	#[error("Configuration file has no extension")]
	NoExtension,
}

/// Command-line arguments for the client
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// Configuration file path (TOML, JSON, or YAML).
	/// Defaults to conf/client.toml if it exists.
	#[arg(short, long)]
	pub config: Option<String>,

	/// Server host
	#[arg(long)]
	pub host: Option<String>,

	/// Server port
	#[arg(short, long)]
	pub port: Option<u16>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long)]
	pub log_level: Option<String>,

	/// Connect timeout in milliseconds (0 waits indefinitely)
	#[arg(long)]
	pub connect_timeout_ms: Option<u64>,

	/// Read/write timeout in milliseconds (0 waits indefinitely)
	#[arg(long)]
	pub read_timeout_ms: Option<u64>,

	/// Command to send, e.g. `SET key value`. Read line by line from stdin
	/// when omitted.
	#[arg(trailing_var_arg = true, allow_hyphen_values = true)]
	pub command: Vec<String>,
}

impl Cli {
	/// The command words joined back into one space-separated line.
	pub fn command_line(&self) -> Option<String> {
		if self.command.is_empty() {
			None
		} else {
			Some(self.command.join(" "))
		}
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
	pub host: String,
	pub port: u16,
	pub log_level: String,
	pub connect_timeout_ms: u64,
	pub read_timeout_ms: u64,
}

impl ClientConfig {
	pub fn addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}

	pub fn connect_timeout(&self) -> Option<Duration> {
		millis(self.connect_timeout_ms)
	}

	pub fn read_timeout(&self) -> Option<Duration> {
		millis(self.read_timeout_ms)
	}
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".into(),
			port: 6379,
			log_level: "warn".into(),
			connect_timeout_ms: 5000,
			read_timeout_ms: 5000,
		}
	}
}

fn millis(ms: u64) -> Option<Duration> {
	(ms > 0).then(|| Duration::from_millis(ms))
}

/// Build the effective configuration for `args`.
pub fn load(args: &Cli) -> Result<ClientConfig, ConfigError> {
	let mut config = match args.config.as_deref() {
		Some(p) => load_from_file(p)?,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
		None => ClientConfig::default(),
	};

	// Override with CLI arguments if explicitly provided
	if let Some(host) = &args.host {
		config.host = host.clone();
	}
	if let Some(port) = args.port {
		config.port = port;
	}
	if let Some(log_level) = &args.log_level {
		config.log_level = log_level.clone();
	}
	if let Some(ms) = args.connect_timeout_ms {
		config.connect_timeout_ms = ms;
	}
	if let Some(ms) = args.read_timeout_ms {
		config.read_timeout_ms = ms;
	}

	Ok(config)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig, ConfigError> {
	let path_ref = path.as_ref();
	let content = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
		path: path_ref.display().to_string(),
		source,
	})?;

	let extension = path_ref
		.extension()
		.and_then(|ext| ext.to_str())
		.ok_or(ConfigError::NoExtension)?;

	match extension.to_lowercase().as_str() {
		"toml" => Ok(toml::from_str(&content)?),
		"json" => Ok(serde_json::from_str(&content)?),
		"yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
		_ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = ClientConfig::default();
		assert_eq!(config.addr(), "127.0.0.1:6379");
		assert_eq!(config.connect_timeout(), Some(Duration::from_secs(5)));
	}

	#[test]
	fn test_zero_timeout_disables() {
		let config = ClientConfig {
			read_timeout_ms: 0,
			..ClientConfig::default()
		};
		assert_eq!(config.read_timeout(), None);
	}

	#[test]
	fn test_parse_toml() {
		let dir = tempfile::tempdir().unwrap();
		let file_path = dir.path().join("client.toml");
		let content = r#"
host = "10.0.0.5"
port = 7000
log_level = "debug"
"#;
		std::fs::write(&file_path, content).unwrap();

		let config = load_from_file(&file_path).unwrap();
		assert_eq!(config.host, "10.0.0.5");
		assert_eq!(config.port, 7000);
		assert_eq!(config.log_level, "debug");
		// Missing keys fall back to defaults
		assert_eq!(config.read_timeout_ms, 5000);
	}

	#[test]
	fn test_parse_json() {
		let dir = tempfile::tempdir().unwrap();
		let file_path = dir.path().join("client.json");
		let content = r#"{ "host": "redis.local", "port": 6380, "read_timeout_ms": 250 }"#;
		std::fs::write(&file_path, content).unwrap();

		let config = load_from_file(&file_path).unwrap();
		assert_eq!(config.host, "redis.local");
		assert_eq!(config.port, 6380);
		assert_eq!(config.read_timeout(), Some(Duration::from_millis(250)));
	}

	#[test]
	fn test_parse_yaml() {
		let dir = tempfile::tempdir().unwrap();
		let file_path = dir.path().join("client.yml");
		let content = "host: \"127.0.0.1\"\nport: 1234\nconnect_timeout_ms: 0\n";
		std::fs::write(&file_path, content).unwrap();

		let config = load_from_file(&file_path).unwrap();
		assert_eq!(config.port, 1234);
		assert_eq!(config.connect_timeout(), None);
	}

	#[test]
	fn test_unsupported_format() {
		let dir = tempfile::tempdir().unwrap();
		let file_path = dir.path().join("client.ini");
		std::fs::write(&file_path, "port=1").unwrap();
		assert!(matches!(
			load_from_file(&file_path),
			Err(ConfigError::UnsupportedFormat(ext)) if ext == "ini"
		));

		let file_path = dir.path().join("client");
		std::fs::write(&file_path, "port=1").unwrap();
		assert!(matches!(
			load_from_file(&file_path),
			Err(ConfigError::NoExtension)
		));
	}

	#[test]
	fn test_missing_file() {
		assert!(matches!(
			load_from_file("/nonexistent/client.toml"),
			Err(ConfigError::Io { .. })
		));
	}

	#[test]
	fn test_cli_overrides_file() {
		let dir = tempfile::tempdir().unwrap();
		let file_path = dir.path().join("client.toml");
		std::fs::write(&file_path, "host = \"a\"\nport = 1\n").unwrap();

		let args = Cli::parse_from([
			"resp-client",
			"--config",
			file_path.to_str().unwrap(),
			"--port",
			"2",
			"SET",
			"key",
			"value",
		]);
		let config = load(&args).unwrap();
		assert_eq!(config.host, "a");
		assert_eq!(config.port, 2);
		assert_eq!(args.command_line().as_deref(), Some("SET key value"));
	}

	#[test]
	fn test_cli_without_command() {
		let args = Cli::parse_from(["resp-client", "--host", "db"]);
		assert_eq!(args.command_line(), None);
		assert_eq!(args.host.as_deref(), Some("db"));
	}
}
