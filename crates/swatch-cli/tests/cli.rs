//! Runs the `swatch` binary end to end.

use std::path::Path;
use std::process::{Command, Output};

fn swatch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swatch"))
        .args(args)
        .output()
        .expect("failed to run swatch")
}

fn stdout(out: &Output) -> String {
    assert!(
        out.status.success(),
        "swatch failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn parse_prints_hex_and_lab() {
    let text = stdout(&swatch(&["parse", "rgb(255, 0, 0)"]));
    assert!(text.contains("#FF0000"), "{text}");
    assert!(text.contains("Lab:"), "{text}");
}

#[test]
fn parse_rejects_garbage() {
    let out = swatch(&["parse", "not-a-color"]);
    assert!(!out.status.success());
}

#[test]
fn export_then_strip_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("strip.png");
    stdout(&swatch(&[
        "export",
        "-c",
        "#C8102E",
        "-c",
        "#005EB8",
        "-c",
        "#FEDD00",
        "-o",
        path_str(&png),
    ]));

    let text = stdout(&swatch(&["strip", path_str(&png)]));
    let hexes: Vec<&str> = text
        .lines()
        .filter_map(|l| l.split_whitespace().nth(1))
        .collect();
    assert_eq!(hexes, ["#C8102E", "#005EB8", "#FEDD00"]);
}

fn strip_hexes(png: &Path) -> Vec<String> {
    stdout(&swatch(&["strip", path_str(png)]))
        .lines()
        .filter_map(|l| l.split_whitespace().nth(1).map(str::to_owned))
        .collect()
}

#[test]
fn export_seeded_shuffle_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let colors = ["#C8102E", "#005EB8", "#FEDD00", "#202020", "#E0E0E0", "#00A651"];
    let mut hexes = Vec::new();
    for name in ["a.png", "b.png"] {
        let png = dir.path().join(name);
        let mut args = vec!["export", "--shuffle", "--seed", "42", "-o", path_str(&png)];
        for c in colors {
            args.extend(["-c", c]);
        }
        stdout(&swatch(&args));
        hexes.push(strip_hexes(&png));
    }
    assert_eq!(hexes[0], hexes[1]);

    let mut sorted = hexes[0].clone();
    sorted.sort();
    let mut expected: Vec<String> = colors.iter().map(|c| c.to_string()).collect();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn extract_json_with_counts() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("two.png");
    stdout(&swatch(&["export", "-c", "#202020", "-c", "#E0E0E0", "-o", path_str(&png)]));

    let text = stdout(&swatch(&["extract", path_str(&png), "--json", "--counts", "-a"]));
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let colors = json[0]["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0]["count"], 2500);
    assert_eq!(colors[1]["count"], 2500);
}

#[test]
fn extract_reads_yaml_preset() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("three.png");
    stdout(&swatch(&[
        "export", "-c", "#FF0000", "-c", "#00FF00", "-c", "#0000FF", "-o", path_str(&png),
    ]));
    let preset = dir.path().join("preset.yaml");
    std::fs::write(&preset, "max_colors: 1\n").unwrap();

    let text = stdout(&swatch(&["extract", path_str(&png), "--config", path_str(&preset)]));
    let listed = text.lines().filter(|l| l.contains('#')).count();
    assert_eq!(listed, 1);
}

#[test]
fn nearest_uses_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("names.json");
    std::fs::write(
        &table,
        r##"{ "Ink": "#000000", "Signal Red": "#E10600", "Ocean": "#005EB8" }"##,
    )
    .unwrap();
    let text = stdout(&swatch(&["nearest", "#D01010", "--table", path_str(&table)]));
    assert!(text.starts_with("Signal Red"), "{text}");
}

#[test]
fn harmony_lists_five_colors() {
    let text = stdout(&swatch(&["harmony", "#3A7FC2", "-m", "analogous"]));
    assert_eq!(text.lines().count(), 5);
}
