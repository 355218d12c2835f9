use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

static PROPDOC_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_propdoc(args: &[&str]) -> Output {
	propdoc_testkit::run_bin(propdoc_bin(), args)
}

pub(crate) fn run_propdoc_json(args: &[&str]) -> serde_json::Value {
	propdoc_testkit::run_bin_json(propdoc_bin(), args)
}

fn propdoc_bin() -> &'static PathBuf {
	PROPDOC_BIN.get_or_init(resolve_propdoc_bin)
}

fn resolve_propdoc_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_propdoc") {
		return PathBuf::from(path);
	}

	let mut bin = propdoc_testkit::target_dir().join("debug");
	bin.push(if cfg!(windows) { "propdoc.exe" } else { "propdoc" });

	let status = Command::new("cargo")
		.current_dir(propdoc_testkit::workspace_root())
		.args(["build", "--quiet", "--bin", "propdoc"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build propdoc binary at {}", bin.display());

	bin
}
