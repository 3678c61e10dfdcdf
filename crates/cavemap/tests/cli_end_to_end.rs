use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_cavemap");
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run cavemap binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn empty_fill_renders_open_cave() {
    let output = run(&["10", "6", "0", "5", "-1", "1"]);
    assert!(output.status.success(), "cavemap exited with {:?}", output.status);

    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "W[0](p) = rand[0,100) < 0");
    assert_eq!(lines[1], "Repeat 1: W'(p) = R[1](p) >= 5");

    // Interior corners see five border walls and close up; the rest stays open.
    assert_eq!(
        &lines[2..],
        &[
            "##########",
            "##......##",
            "#........#",
            "#........#",
            "##......##",
            "##########",
        ]
    );
}

#[test]
fn full_fill_renders_solid_cave() {
    let output = run(&["10", "6", "100", "5", "-1", "1"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2 + 6);
    assert!(lines[2..].iter().all(|row| row == "##########"));
}

#[test]
fn summary_lists_every_rule() {
    let output = run(&["64", "20", "40", "5", "2", "4", "5", "-1", "3"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "W[0](p) = rand[0,100) < 40");
    assert_eq!(lines[1], "Repeat 4: W'(p) = R[1](p) >= 5 || R[2](p) <= 2");
    assert_eq!(lines[2], "Repeat 3: W'(p) = R[1](p) >= 5");

    let map = &lines[3..];
    assert_eq!(map.len(), 20);
    assert!(map.iter().all(|row| row.len() == 64));
    assert!(map.iter().all(|row| row.chars().all(|c| c == '#' || c == '.')));
    assert!(map[0].chars().all(|c| c == '#'));
    assert!(map[19].chars().all(|c| c == '#'));
    assert!(map.iter().all(|row| row.starts_with('#') && row.ends_with('#')));
}

#[test]
fn too_few_arguments_prints_usage() {
    let output = run(&["10", "6", "40", "5", "2"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Usage: "), "got {stdout:?}");
    assert!(stdout.contains("width height fillPercent (r1_threshold r2_threshold repeatCount)+"));
}

#[test]
fn no_arguments_prints_usage() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Usage: "));
}

#[test]
fn malformed_number_prints_usage() {
    let output = run(&["10", "six", "40", "5", "2", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Usage: "));
    assert!(!output.stderr.is_empty());
}

#[test]
fn incomplete_trailing_rule_prints_usage() {
    let output = run(&["10", "6", "40", "5", "2", "1", "5", "2"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Usage: "));
}

#[test]
fn json_format_emits_single_document() {
    let output = run(&["10", "6", "100", "5", "-1", "1", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["config"]["width"], 10);
    assert_eq!(value["summary"][0], "W[0](p) = rand[0,100) < 100");
    assert_eq!(value["map"].as_array().unwrap().len(), 6);
    assert_eq!(value["map"][3], "##########");
}

#[test]
fn zero_width_prints_one_empty_line_per_row() {
    let output = run(&["0", "5", "40", "5", "2", "1"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2 + 5);
    assert!(lines[2..].iter().all(String::is_empty));
}

#[test]
fn fill_above_hundred_prints_usage() {
    let output = run(&["10", "6", "101", "5", "-1", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Usage: "));
    assert!(!output.stderr.is_empty());
}
