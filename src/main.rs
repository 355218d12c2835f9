#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmd;

#[derive(Parser)]
#[command(name = "propdoc", about = "Inspect and round-trip reflected property documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print a host's property descriptors.
	Describe(cmd::describe::Args),
	/// Serialize a default-constructed host.
	Dump(cmd::dump::Args),
	/// Load a JSON document into a host and print the re-serialized result.
	Load(cmd::load::Args),
}

fn main() {
	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> propdoc::prop::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Describe(args) => cmd::describe::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
		Commands::Load(args) => cmd::load::run(args),
	}
}
