//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Read and parse a JSON fixture.
pub fn fixture_json(name: &str) -> Value {
	let path = fixture_path(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} readable: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("fixture {} is json: {err}", path.display()))
}

/// Run `bin` with `args` and capture its output.
pub fn run_bin(bin: &Path, args: &[&str]) -> Output {
	Command::new(bin)
		.args(args)
		.output()
		.unwrap_or_else(|err| panic!("{} executes: {err}", bin.display()))
}

/// Run `bin`, require success, and parse stdout as JSON.
pub fn run_bin_json(bin: &Path, args: &[&str]) -> Value {
	let output = run_bin(bin, args);
	assert!(
		output.status.success(),
		"{} failed with status={}: {}",
		bin.display(),
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
