use propdoc::prop::{PropertyHost, PropertyInfo, PropertyStorage, Result, Variant};
use serde_json::Value as JsonValue;

use crate::cmd::hosts::{HostKind, with_host};
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(value_enum)]
	pub host: HostKind,
	#[arg(long)]
	pub json: bool,
}

/// Print the property descriptor table of a built-in host.
pub fn run(args: Args) -> Result<()> {
	let Args { host: kind, json } = args;
	with_host!(kind, |host| describe(kind, &host, json))
}

fn describe<H: PropertyHost>(kind: HostKind, host: &H, json: bool) -> Result<()> {
	let infos = host.property_infos();

	if json {
		let payload = DescribeJson {
			host: kind.name(),
			properties: infos.iter().map(property_json).collect(),
		};
		return emit_json(&payload, true);
	}

	println!("host: {}", kind.name());
	println!("properties: {}", infos.len());
	for info in infos.iter() {
		let mut line = format!("  {} {}", info.name(), info.ty());
		if info.is_array() {
			line.push_str("[]");
		}
		if let Some(range) = info.range() {
			line.push_str(&format!(" range=[{}, {}]", range.min, range.max));
		}
		for (flag, set) in [
			("accessor", matches!(info.storage(), PropertyStorage::Accessor(_))),
			("read-only", info.is_read_only()),
			("no-save", info.skips_serialization()),
		] {
			if set {
				line.push_str(&format!(" [{flag}]"));
			}
		}
		line.push_str(&format!(" default={}", info.default_value()));
		println!("{line}");
	}

	Ok(())
}

fn property_json<H: PropertyHost>(info: &PropertyInfo<H>) -> PropertyJson {
	PropertyJson {
		name: info.name().to_owned(),
		label: info.label().to_owned(),
		ty: info.ty().as_str(),
		storage: match info.storage() {
			PropertyStorage::Field(_) => "field",
			PropertyStorage::ArrayField(_) => "array_field",
			PropertyStorage::Accessor(_) => "accessor",
		},
		array: info.is_array(),
		read_only: info.is_read_only(),
		skip_serialization: info.skips_serialization(),
		range: info.range().map(|range| [Variant::Float(range.min).to_json(), Variant::Float(range.max).to_json()]),
		default: info.default_value().to_json(),
		description: info.description().map(str::to_owned),
		enum_names: info.enum_names(),
	}
}

#[derive(serde::Serialize)]
struct DescribeJson {
	host: &'static str,
	properties: Vec<PropertyJson>,
}

#[derive(serde::Serialize)]
struct PropertyJson {
	name: String,
	label: String,
	#[serde(rename = "type")]
	ty: &'static str,
	storage: &'static str,
	array: bool,
	read_only: bool,
	skip_serialization: bool,
	range: Option<[JsonValue; 2]>,
	default: JsonValue,
	description: Option<String>,
	enum_names: &'static [&'static str],
}
