use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn check_reports_valid_file() {
    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("check").arg(fixture_path("valid.actor"));

    cmd.assert().success().stdout(predicate::str::contains(
        "ok, Actor('Valid actor', 2 blurb line(s), 3 goal(s))",
    ));
}

#[test]
fn check_reports_parse_error_with_position() {
    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("check").arg(fixture_path("duplicate_actor.actor"));

    cmd.assert().failure().stderr(
        predicate::str::contains("[Line 0003:00] Only one actor definition is permitted per file")
            .and(predicate::str::contains("duplicate_actor.actor")),
    );
}

#[test]
fn check_missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("check").arg(fixture_path("absent.actor"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Failed to read"));
}

#[test]
fn fmt_prints_canonical_form() {
    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("fmt").arg(fixture_path("valid.actor"));

    let expected = "\
@tag1 @tag2
Actor: Valid actor
    Description and blurb... multi line 1 tab indent
    Some other line of blurb

    @tag3 @tag4
    Goal: Goal number 3

    Goals:
        Goal number 1
        Goal number 2
";
    cmd.assert().success().stdout(expected);
}

#[test]
fn fmt_write_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messy.actor");
    fs::write(&path, "# notes\nactor: Messy\n  Some blurb\n  @t\n  goal: Tidy up\n").unwrap();

    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("fmt").arg("--write").arg(&path);
    cmd.assert().success().stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Actor: Messy\n    Some blurb\n\n    @t\n    Goal: Tidy up\n"
    );
}

#[test]
fn fmt_honours_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("actor.toml");
    fs::write(&config, "[writer]\nindent_width = 2\nalways_emit_goal_list = true\n").unwrap();
    let source = dir.path().join("plain.actor");
    fs::write(&source, "Actor: Plain\n    Goals:\n        One\n").unwrap();

    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("fmt").arg(&source).arg("--config").arg(&config);

    cmd.assert()
        .success()
        .stdout("Actor: Plain\n  Goals:\n    One\n");
}

#[test]
fn inspect_json() {
    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("inspect").arg(fixture_path("valid.actor"));

    cmd.assert().success().stdout(
        predicate::str::contains("\"name\": \"Valid actor\"")
            .and(predicate::str::contains("\"Goal number 3\"")),
    );
}

#[test]
fn inspect_yaml() {
    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("inspect")
        .arg(fixture_path("valid.actor"))
        .arg("--format")
        .arg("yaml");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("name: Valid actor"));
}

#[test]
fn inspect_tree() {
    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("inspect")
        .arg(fixture_path("valid.actor"))
        .arg("--format")
        .arg("tree");

    cmd.assert().success().stdout(
        predicate::str::contains("02:00 Actor: Valid actor")
            .and(predicate::str::contains("11:04 Goal: Goal number 3")),
    );
}

#[test]
fn requires_a_subcommand() {
    let mut cmd = cargo_bin_cmd!("actor");
    cmd.assert().failure();
}

#[test]
fn fmt_write_refuses_to_drop_untagged_goals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("untagged.actor");
    let source = "Actor: A\n    Goals:\n        One\n        Two\n";
    fs::write(&path, source).unwrap();

    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("fmt").arg("--write").arg(&path);
    cmd.assert().failure().stderr(
        predicate::str::contains("2 untagged goal(s) would be dropped")
            .and(predicate::str::contains("--force")),
    );

    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn fmt_write_force_drops_untagged_goals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("untagged.actor");
    fs::write(&path, "Actor: A\n    Goals:\n        One\n").unwrap();

    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("fmt").arg("--write").arg("--force").arg(&path);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Actor: A\n");
}

#[test]
fn fmt_print_warns_about_dropped_goals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("untagged.actor");
    fs::write(&path, "Actor: A\n    Goals:\n        One\n").unwrap();

    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("fmt").arg(&path);
    cmd.assert()
        .success()
        .stdout("Actor: A\n")
        .stderr(predicate::str::contains("untagged goals are only written next to a tagged goal"));
}

#[test]
fn fmt_writes_configured_header_comment() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("actor.toml");
    fs::write(&config, "[writer]\nheader_comment = \"Generated\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("actor");
    cmd.arg("fmt")
        .arg(fixture_path("valid.actor"))
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("# Generated\n@tag1 @tag2\n"));
}
