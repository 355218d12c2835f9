use propdoc::prop::{Result, to_json_string};

use crate::cmd::hosts::{HostKind, with_host};

#[derive(clap::Args)]
pub struct Args {
	#[arg(value_enum)]
	pub host: HostKind,
	#[arg(long)]
	pub pretty: bool,
}

/// Serialize a default-constructed host.
pub fn run(args: Args) -> Result<()> {
	let Args { host: kind, pretty } = args;
	let text = with_host!(kind, |host| to_json_string(&host, pretty))?;
	println!("{text}");
	Ok(())
}
