use std::io::BufRead;
use std::process::ExitCode;

use log::debug;
use log::error;
use resp_client::ClientError;
use resp_client::config::Cli;
use resp_client::config::ClientConfig;
use resp_client::config::Parser;
use resp_client::config::load;
use resp_client::output::format_reply;
use resp_client::query_once;

fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
	let args = Cli::parse();
	let config = load(&args)?;
	telemetry::init(&config.log_level)?;
	debug!("Using server {}", config.addr());

	if let Some(line) = args.command_line() {
		let failed = run(&config, &line)?;
		return Ok(exit_code(failed));
	}

	// One connection per line, like a sequence of separate invocations
	let mut failed = false;
	for line in std::io::stdin().lock().lines() {
		let line = line?;
		if line.trim().is_empty() {
			continue;
		}
		match run(&config, &line) {
			Ok(reply_failed) => failed |= reply_failed,
			Err(e) => {
				error!("{}", e);
				eprintln!("Error: {}", e);
				failed = true;
			}
		}
	}
	Ok(exit_code(failed))
}

/// Send one command and print its reply. Returns true if the server answered
/// with an error reply.
fn run(config: &ClientConfig, line: &str) -> Result<bool, ClientError> {
	let reply = query_once(config, line)?;
	println!("{}", format_reply(&reply));
	Ok(reply.is_error())
}

fn exit_code(failed: bool) -> ExitCode {
	if failed {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}
