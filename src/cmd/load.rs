use std::path::PathBuf;

use propdoc::prop::{LoadOptions, PropError, PropertyHost, PropertyHostExt, Result, Variant, deserialize_with, serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::cmd::hosts::{HostKind, with_host};
use crate::cmd::util::{emit_json, parse_assignment};

#[derive(clap::Args)]
pub struct Args {
	#[arg(value_enum)]
	pub host: HostKind,
	pub path: PathBuf,
	#[arg(long = "set", value_name = "NAME=VALUE")]
	pub set: Vec<String>,
	#[arg(long)]
	pub strict: bool,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	#[arg(long)]
	pub pretty: bool,
}

/// Load a document into a fresh host, apply overrides, and print the result.
pub fn run(args: Args) -> Result<()> {
	let Args {
		host: kind,
		path,
		set,
		strict,
		max_array,
		pretty,
	} = args;

	let text = std::fs::read_to_string(&path)?;
	let tree: JsonValue = serde_json::from_str(&text)?;

	let mut opt = if strict { LoadOptions::strict() } else { LoadOptions::default() };
	if let Some(max) = max_array {
		opt.max_array_elems = max;
	}

	let out = with_host!(kind, |host| load_into(&mut host, &tree, &opt, &set))?;
	emit_json(&out, pretty)
}

fn load_into<H: PropertyHost>(host: &mut H, tree: &JsonValue, opt: &LoadOptions, set: &[String]) -> Result<JsonValue> {
	deserialize_with(tree, host, opt)?;
	for item in set {
		apply_assignment(host, item)?;
	}
	Ok(serialize(host))
}

fn apply_assignment<H: PropertyHost>(host: &mut H, text: &str) -> Result<()> {
	let (name, value) = parse_assignment(text)?;
	let info = host.property_info(name).ok_or_else(|| PropError::UnknownProperty { name: name.to_owned() })?;
	let value = Variant::from_text(info.ty(), value)?;
	debug!(property = name, %value, "applying override");
	if host.set_property(name, value) {
		Ok(())
	} else {
		Err(PropError::WriteRejected { name: name.to_owned() })
	}
}
