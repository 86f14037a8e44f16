use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
    cargo_home: PathBuf,
    rustup_home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");

        let orig_home = std::env::var("HOME").unwrap_or_default();
        let cargo_home = PathBuf::from(&orig_home).join(".cargo");
        let rustup_home = PathBuf::from(&orig_home).join(".rustup");

        Self {
            _tmp: tmp,
            home,
            work,
            cargo_home,
            rustup_home,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("glofwatch");
        cmd.env("HOME", &self.home)
            .env("CARGO_HOME", &self.cargo_home)
            .env("RUSTUP_HOME", &self.rustup_home)
            .env_remove("GLOFWATCH_CONFIG")
            .env_remove("GLOFWATCH_FLOOD_PROBABILITY")
            .env_remove("GLOFWATCH_LOG")
            .env_remove("MAPBOX_PUBLIC_TOKEN");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Writes `~/.config/glofwatch/config.toml` inside the isolated home.
    pub fn write_default_config(&self, body: &str) -> PathBuf {
        let p = self.home.join(".config/glofwatch/config.toml");
        fs::create_dir_all(p.parent().expect("config parent")).expect("create config dir");
        fs::write(&p, body).expect("write config");
        p
    }

    pub fn write_file(&self, name: &str, body: &str) -> PathBuf {
        let p = self.work.join(name);
        fs::write(&p, body).expect("write file");
        p
    }

    pub fn write_dataset(&self, name: &str, data: &Value) -> PathBuf {
        self.write_file(
            name,
            &serde_json::to_string_pretty(data).expect("serialize dataset"),
        )
    }
}

/// The bundled dataset as loose JSON, for tests that tweak it.
pub fn bundled_dataset() -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("data/hunza_valley.json")).expect("read dataset");
    serde_json::from_str(&raw).expect("parse dataset")
}

pub fn route_ids(report: &Value) -> Vec<String> {
    report["data"]["routes"]
        .as_array()
        .expect("routes array")
        .iter()
        .map(|r| r["id"].as_str().expect("route id").to_string())
        .collect()
}
