//! End-to-end tests for the campusnav binary

use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn campusnav(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("campusnav");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// Working directory holding a generated sample campus
fn generated() -> TempDir {
    let dir = tempdir().unwrap();
    campusnav(dir.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("57 nodes"));
    assert!(dir.path().join("data/campus.json").is_file());
    dir
}

#[test]
fn test_help_lists_commands() {
    let dir = tempdir().unwrap();
    campusnav(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: campusnav"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("console"));
}

#[test]
fn test_route_text() {
    let dir = generated();
    campusnav(dir.path())
        .args(["route", "SPORT", "LIB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym -> Assembly -> Lobby -> SL1 -> SL2 -> Library"))
        .stdout(predicate::str::contains("Length: 20.00"));
}

#[test]
fn test_route_json_astar() {
    let dir = generated();
    let output = campusnav(dir.path())
        .args(["route", "1", "47", "--algorithm", "astar", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["algorithm"], "astar");
    assert_eq!(value["path"][0], "1");
    assert_eq!(value["path"].as_array().unwrap().last().unwrap(), "47");
}

#[test]
fn test_algorithms_agree() {
    let dir = generated();
    let length = |algorithm: &str| {
        let output = campusnav(dir.path())
            .args(["route", "SPORT", "40", "--format", "json", "-a", algorithm])
            .output()
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        value["total_weight"].as_f64().unwrap()
    };
    assert!((length("dijkstra") - length("astar")).abs() < 1e-9);
}

#[test]
fn test_unknown_node_fails() {
    let dir = generated();
    campusnav(dir.path())
        .args(["route", "SPORT", "ROOF"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("ROOF"));
}

#[test]
fn test_missing_data_hint() {
    let dir = tempdir().unwrap();
    campusnav(dir.path())
        .args(["route", "SPORT", "LIB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("campusnav generate"));
}

#[test]
fn test_svg_and_geojson_output() {
    let dir = generated();
    campusnav(dir.path())
        .args([
            "route",
            "SPORT",
            "LIB",
            "--svg-dir",
            "plans",
            "--geojson",
            "route.geojson",
        ])
        .assert()
        .success();

    for stem in ["floor-1", "floor-2", "floor-3", "all-floors"] {
        let svg = fs::read_to_string(dir.path().join(format!("plans/{stem}.svg"))).unwrap();
        assert!(svg.contains("<svg"), "{stem} is not an SVG document");
    }
    let geojson = fs::read_to_string(dir.path().join("route.geojson")).unwrap();
    assert!(geojson.contains("FeatureCollection"));
}

#[test]
fn test_nodes_listing() {
    let dir = generated();
    campusnav(dir.path())
        .args(["nodes", "--floor", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LIB — Library"))
        .stdout(predicate::str::contains("SPORT").not());
}

#[test]
fn test_reach() {
    let dir = generated();
    campusnav(dir.path())
        .args(["reach", "LIB", "--max-cost", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00  LIB — Library"))
        .stdout(predicate::str::contains("STAIR_L_F2 — SL2"))
        .stdout(predicate::str::contains("19").not());
}

#[test]
fn test_reach_rejects_negative_bound() {
    let dir = generated();
    campusnav(dir.path())
        .args(["reach", "LIB", "--max-cost=-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    campusnav(dir.path())
        .args(["generate", "--output", "building/plan.json"])
        .assert()
        .success();
    fs::write(
        dir.path().join("campusnav.toml"),
        "data_path = \"building/plan.json\"\ndefault_algorithm = \"astar\"\n",
    )
    .unwrap();

    campusnav(dir.path())
        .args(["route", "SPORT", "HALL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: A*"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = generated();
    fs::write(dir.path().join("custom.toml"), "draw_weights = \"maybe\"\n").unwrap();

    campusnav(dir.path())
        .args(["--config", "custom.toml", "nodes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_console_session() {
    let dir = generated();
    campusnav(dir.path())
        .arg("console")
        .write_stdin("SPORT\nLIB\nastar\nyes\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Length: 20.00"))
        .stdout(predicate::str::contains("Saved floor plans:"))
        .stdout(predicate::str::ends_with("Goodbye.\n"));
    assert!(dir.path().join("renders/floor-1.svg").is_file());
}

#[test]
fn test_console_end_of_input() {
    let dir = generated();
    campusnav(dir.path())
        .arg("console")
        .write_stdin("SPORT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye."));
}
