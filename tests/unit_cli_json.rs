#![allow(missing_docs)]

use std::path::Path;

use propdoc_testkit::{fixture_path, run_bin, run_bin_json};
use serde_json::json;

fn bin() -> &'static Path {
	Path::new(env!("CARGO_BIN_EXE_propdoc"))
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

#[test]
fn dump_spring_joint_defaults() {
	let json = run_bin_json(bin(), &["dump", "spring-joint"]);

	assert_eq!(
		json,
		json!({
			"anchor": "0 0 0",
			"angles": "0 0 0",
			"enableLimitDistances": false,
			"minDistance": 0.0,
			"maxDistance": 0.0,
			"stiffness": 30.0,
			"damping": 0.2,
		})
	);
}

#[test]
fn dump_particle_emitter_skips_unsaved_properties() {
	let json = run_bin_json(bin(), &["dump", "particle-emitter", "--pretty"]);

	let keys: Vec<&str> = json.as_object().expect("object root").keys().map(String::as_str).collect();
	assert_eq!(
		keys,
		[
			"guid",
			"duration",
			"looping",
			"maxParticles",
			"simulationSpace",
			"startLifetime",
			"startColor",
			"rotation",
			"spawnArea",
			"pivot",
			"colorKeys",
			"burstTimes",
		]
	);
	assert_eq!(json["guid"], "6f1c2d4e-8a3b-4c5d-9e7f-0a1b2c3d4e5f");
	assert_eq!(json["startLifetime"], "0 5 0 0");
	assert_eq!(json["colorKeys"], json!([]));
}

#[test]
fn load_spring_joint_clamps_and_keeps_accessor_values() {
	let json = run_bin_json(bin(), &["load", "spring-joint", &fixture("spring_joint.json")]);

	assert_eq!(json["anchor"], "0 1 0");
	assert_eq!(json["enableLimitDistances"], true);
	assert_eq!(json["stiffness"], 50.0);
	assert_eq!(json["damping"], 1.0, "damping range is [0, 1]");

	let angles = json["angles"].as_str().expect("angles text");
	let yaw: f32 = angles.split_whitespace().next().and_then(|item| item.parse().ok()).expect("yaw component");
	assert!((yaw - 90.0).abs() < 1e-3, "angles={angles}");
}

#[test]
fn load_particle_emitter_round_trips_fixture() {
	let json = run_bin_json(bin(), &["load", "particle-emitter", &fixture("particle_emitter.json")]);

	assert_eq!(json["guid"], "6f1c2d4e-8a3b-4c5d-9e7f-0a1b2c3d4e5f", "read-only guid is not loaded");
	assert_eq!(json["duration"], 2.5);
	assert_eq!(json["looping"], false);
	assert_eq!(json["maxParticles"], 250);
	assert_eq!(json["simulationSpace"], 1);
	assert_eq!(json["startLifetime"], "1 2 0 2 0 0.5 1 1");
	assert_eq!(json["spawnArea"], "-8 -8 16 16");
	assert_eq!(json["pivot"], "4 2");
	assert_eq!(json["colorKeys"], json!(["1 1 1 1", "1 0 0 0.5", "0 0 0 0"]));
	assert_eq!(json["burstTimes"], json!([0.0, 0.5, 1.25]));
	assert!(json.get("randomSeed").is_none());
}

#[test]
fn load_applies_overrides_after_the_document() {
	let json = run_bin_json(
		bin(),
		&[
			"load",
			"particle-emitter",
			&fixture("particle_emitter.json"),
			"--set",
			"duration=4",
			"--set",
			"pivot=1 1",
		],
	);

	assert_eq!(json["duration"], 4.0);
	assert_eq!(json["pivot"], "1 1");
}

#[test]
fn tolerant_load_fills_partial_text() {
	let json = run_bin_json(bin(), &["load", "particle-emitter", &fixture("particle_emitter_partial.json")]);

	assert_eq!(json["duration"], 3.0);
	assert_eq!(json["spawnArea"], "0 0 32 0");
	assert_eq!(json["colorKeys"], json!(["1 0 0 0"]));
	assert_eq!(json["maxParticles"], 1000, "missing keys fall back to defaults");
}

#[test]
fn strict_load_rejects_partial_text() {
	let output = run_bin(bin(), &["load", "particle-emitter", &fixture("particle_emitter_partial.json"), "--strict"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: malformed rect text for property spawnArea"), "{stderr}");
	assert!(output.stdout.is_empty());
}

#[test]
fn array_limit_flag_is_enforced() {
	let output = run_bin(bin(), &["load", "particle-emitter", &fixture("particle_emitter.json"), "--max-array", "2"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("array property colorKeys too large: count=3, max=2"), "{stderr}");
}

#[test]
fn override_of_read_only_property_is_rejected() {
	let output = run_bin(
		bin(),
		&[
			"load",
			"particle-emitter",
			&fixture("particle_emitter.json"),
			"--set",
			"guid=00000000-0000-0000-0000-000000000002",
		],
	);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: property guid rejected the write"), "{stderr}");
}

#[test]
fn describe_json_reports_flags_and_enum_names() {
	let json = run_bin_json(bin(), &["describe", "particle-emitter", "--json"]);

	let props = json["properties"].as_array().expect("properties array");
	let find = |name: &str| props.iter().find(|item| item["name"] == name).expect("property listed");

	assert_eq!(find("guid")["read_only"], true);
	assert_eq!(find("randomSeed")["skip_serialization"], true);
	assert_eq!(find("colorKeys")["array"], true);
	assert_eq!(find("colorKeys")["type"], "color4");
	assert_eq!(find("simulationSpace")["enum_names"], json!(["Local", "Global"]));
	assert_eq!(find("maxParticles")["range"], json!([1.0, 10000.0]));
	assert_eq!(find("startLifetime")["default"], "0 5 0 0");
}

#[test]
fn describe_text_lists_every_property() {
	let output = run_bin(bin(), &["describe", "spring-joint"]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.starts_with("host: spring-joint\nproperties: 7\n"), "{stdout}");
	assert!(stdout.contains("  angles angles [accessor] default=0 0 0"), "{stdout}");
	assert!(stdout.contains("  damping float range=[0, 1] default=0.2"), "{stdout}");
}
