use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TelemetryError {
	#[error("Invalid log level: {0} (expected trace, debug, info, warn or error)")]
	InvalidLogLevel(String),

	#[error("Logger has not been initialized")]
	NotInitialized,

	#[error("Failed to reload log level: {0}")]
	ReloadFailed(String),
}
