use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("glofwatch");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    // evacuation commands
    run_help(&home, &["routes"]);
    run_help(&home, &["status"]);
    run_help(&home, &["plan"]);
    run_help(&home, &["villages"]);
    run_help(&home, &["zones"]);
    run_help(&home, &["blocks"]);

    // monitoring commands
    run_help(&home, &["lakes"]);
    run_help(&home, &["lake"]);
    run_help(&home, &["summary"]);
    run_help(&home, &["alerts"]);
    run_help(&home, &["simulate"]);
    run_help(&home, &["infrastructure"]);
    run_help(&home, &["map"]);
    run_help(&home, &["validate"]);

    // grouped subcommands
    run_help(&home, &["alerts", "list"]);
    run_help(&home, &["alerts", "broadcast"]);
}

#[test]
fn unknown_weather_value_is_rejected() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cargo_bin_cmd!("glofwatch");
    cmd.env("HOME", home.path())
        .args(["routes", "Aliabad", "--weather", "monsoon"])
        .assert()
        .failure();
}
