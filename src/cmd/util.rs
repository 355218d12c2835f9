use propdoc::prop::{PropError, Result};
use serde::Serialize;

/// Split a `name=value` assignment. The value may contain `=`.
pub(crate) fn parse_assignment(text: &str) -> Result<(&str, &str)> {
	match text.split_once('=') {
		Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
		_ => Err(PropError::InvalidAssignment { text: text.to_owned() }),
	}
}

/// Print `value` as JSON on stdout.
pub(crate) fn emit_json(value: &impl Serialize, pretty: bool) -> Result<()> {
	let text = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
	println!("{text}");
	Ok(())
}
