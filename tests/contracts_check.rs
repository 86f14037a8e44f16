use assert_cmd::cargo::cargo_bin_cmd;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn run_json(home: &Path, args: &[&str]) -> Value {
    let orig_home = std::env::var("HOME").unwrap_or_default();
    let mut cmd = cargo_bin_cmd!("glofwatch");
    cmd.env("HOME", home)
        .env("CARGO_HOME", PathBuf::from(&orig_home).join(".cargo"))
        .env("RUSTUP_HOME", PathBuf::from(&orig_home).join(".rustup"))
        .env_remove("GLOFWATCH_CONFIG")
        .env_remove("GLOFWATCH_FLOOD_PROBABILITY")
        .env_remove("MAPBOX_PUBLIC_TOKEN")
        .arg("--json")
        .args(args);

    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid json output")
}

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn evacuation_outputs_match_contracts() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path();

    for village in ["Hassanabad", "Aliabad", "Karimabad", "Ganish"] {
        let v = run_json(home, &["routes", village]);
        validate("routes.schema.json", &v);
        let v = run_json(home, &["routes", village, "--weather", "heavy-rain", "--flood-probability", "20"]);
        validate("routes.schema.json", &v);
    }

    let v = run_json(home, &["status", "hassanabad-primary"]);
    validate("status.schema.json", &v);
    let v = run_json(home, &["status", "aliabad-primary"]);
    validate("status.schema.json", &v);

    for step in ["0", "3", "5"] {
        let v = run_json(home, &["plan", "Aliabad", "--step", step, "--flood-probability", "50"]);
        validate("plan.schema.json", &v);
    }
}

#[test]
fn monitoring_outputs_match_contracts() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path();

    let v = run_json(home, &["summary"]);
    validate("summary.schema.json", &v);

    let v = run_json(home, &["alerts", "list"]);
    validate("alerts.schema.json", &v);

    let v = run_json(home, &["map"]);
    validate("map.schema.json", &v);

    let v = run_json(home, &["validate"]);
    validate("validate.schema.json", &v);
}
