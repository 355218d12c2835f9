use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

use crate::prop::host::{array_len, read_element_by_info, resize_by_info, write_element_by_info, write_scalar_by_info};
use crate::prop::variant::from_json_checked;
use crate::prop::{PropError, PropertyHost, PropertyHostExt, PropertyInfo, Result, Variant};

/// Limits and strictness switches for loading a property document.
#[derive(Debug, Clone)]
pub struct LoadOptions {
	/// Error on composite text that does not fully describe a value instead
	/// of keeping the parsed prefix.
	pub strict_text: bool,
	/// Maximum accepted array element count.
	pub max_array_elems: usize,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self {
			strict_text: false,
			max_array_elems: 65536,
		}
	}
}

impl LoadOptions {
	/// Preset for documents from untrusted sources.
	pub fn strict() -> Self {
		Self {
			strict_text: true,
			max_array_elems: 4096,
		}
	}

	/// Preset that accepts anything the tolerant parser can read.
	pub fn unbounded() -> Self {
		Self {
			strict_text: false,
			max_array_elems: usize::MAX,
		}
	}
}

/// Write every serializable property of `host` into a JSON object, in
/// declaration order.
pub fn serialize<H: PropertyHost>(host: &H) -> JsonValue {
	let infos = host.property_infos();
	let mut out = Map::new();
	for info in infos.iter() {
		if info.skips_serialization() {
			continue;
		}
		let value = if info.is_array() {
			let count = array_len(host, info);
			JsonValue::Array((0..count).map(|element| read_element_by_info(host, info, element).to_json()).collect())
		} else {
			host.property_by_info(info).to_json()
		};
		out.insert(info.name().to_owned(), value);
	}
	JsonValue::Object(out)
}

/// Load `tree` into `host` tolerantly.
///
/// Read-only and skip-serialization properties are left alone. Missing
/// scalars take their declared default and missing arrays become empty.
/// Values that cannot be read fall back to the default.
pub fn deserialize<H: PropertyHost>(tree: &JsonValue, host: &mut H) {
	if let Err(err) = deserialize_with(tree, host, &LoadOptions::unbounded()) {
		warn!(%err, "document not loaded");
	}
}

/// Load `tree` into `host`, enforcing `opt`.
///
/// Each property is validated before it is written, so an error leaves the
/// properties before it loaded and the rest untouched.
pub fn deserialize_with<H: PropertyHost>(tree: &JsonValue, host: &mut H, opt: &LoadOptions) -> Result<()> {
	let Some(root) = tree.as_object() else {
		return Err(PropError::NotAnObject { got: json_kind(tree) });
	};

	let infos = host.property_infos();
	for info in infos.iter() {
		if info.is_read_only() || info.skips_serialization() {
			continue;
		}
		let entry = root.get(info.name());
		if info.is_array() {
			load_array(host, info, entry, opt)?;
		} else {
			let value = match entry {
				Some(json) => read_value(info, json, opt)?,
				None => read_value(info, &info.default_value().to_json(), opt)?,
			};
			write_scalar_by_info(host, info, value, false);
		}
	}
	Ok(())
}

/// Serialize `host` to JSON text.
pub fn to_json_string<H: PropertyHost>(host: &H, pretty: bool) -> Result<String> {
	let tree = serialize(host);
	let text = if pretty { serde_json::to_string_pretty(&tree)? } else { serde_json::to_string(&tree)? };
	Ok(text)
}

/// Parse JSON text and load it into `host` with default options.
pub fn from_json_str<H: PropertyHost>(text: &str, host: &mut H) -> Result<()> {
	let tree: JsonValue = serde_json::from_str(text)?;
	deserialize_with(&tree, host, &LoadOptions::default())
}

fn load_array<H: PropertyHost>(host: &mut H, info: &PropertyInfo<H>, entry: Option<&JsonValue>, opt: &LoadOptions) -> Result<()> {
	let items: &[JsonValue] = match entry {
		Some(JsonValue::Array(items)) => items,
		Some(other) => {
			warn!(property = info.name(), got = json_kind(other), "expected an array, loading as empty");
			&[]
		}
		None => &[],
	};
	if items.len() > opt.max_array_elems {
		return Err(PropError::ArrayTooLarge {
			property: info.name().to_owned(),
			count: items.len(),
			max: opt.max_array_elems,
		});
	}

	let values = items.iter().map(|item| read_value(info, item, opt)).collect::<Result<Vec<_>>>()?;
	debug!(property = info.name(), count = values.len(), "loading array");
	resize_by_info(host, info, values.len());
	for (element, value) in values.into_iter().enumerate() {
		write_element_by_info(host, info, element, value, false);
	}
	Ok(())
}

fn read_value<H: PropertyHost>(info: &PropertyInfo<H>, json: &JsonValue, opt: &LoadOptions) -> Result<Variant> {
	match from_json_checked(info.ty(), json) {
		Some((value, true)) => Ok(value),
		Some((value, false)) => {
			if opt.strict_text {
				return Err(PropError::MalformedText {
					property: info.name().to_owned(),
					type_name: info.ty().as_str(),
					text: json.as_str().map_or_else(|| json.to_string(), str::to_owned),
				});
			}
			debug!(property = info.name(), "keeping partially parsed value");
			Ok(value)
		}
		None => {
			if opt.strict_text {
				return Err(PropError::MalformedText {
					property: info.name().to_owned(),
					type_name: info.ty().as_str(),
					text: json.to_string(),
				});
			}
			warn!(property = info.name(), got = json_kind(json), "value does not fit property type, using default");
			Ok(info.default_value().clone())
		}
	}
}

fn json_kind(value: &JsonValue) -> &'static str {
	match value {
		JsonValue::Null => "null",
		JsonValue::Bool(_) => "bool",
		JsonValue::Number(_) => "number",
		JsonValue::String(_) => "string",
		JsonValue::Array(_) => "array",
		JsonValue::Object(_) => "object",
	}
}
