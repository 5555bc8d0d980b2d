mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn exit_prints_goodbye() {
    let ctx = TestContext::new();

    ctx.archiver()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("MODPACK FOLDER ARCHIVER"))
        .stdout(predicate::str::contains("Goodbye"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let ctx = TestContext::new();
    ctx.archiver().write_stdin("").assert().success();
}

#[test]
fn list_shows_prefixed_folders_only() {
    let ctx = TestContext::new();
    ctx.make_folder("GTNH-2.7.0");
    ctx.make_folder("Vanilla");

    ctx.archiver()
        .write_stdin("1\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Folders found: 1"))
        .stdout(predicate::str::contains("GTNH-2.7.0"))
        .stdout(predicate::str::contains("Vanilla").not());
}

#[test]
fn archive_keeps_folder_when_declined() {
    let ctx = TestContext::new();
    let folder = ctx.make_folder("GTNH-2.7.0");

    ctx.archiver()
        .write_stdin("2\n1\nN\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive verified"))
        .stdout(predicate::str::contains("Folder kept."));

    assert!(folder.exists());
    let archives = ctx.archives();
    assert_eq!(archives.len(), 1);
    assert!(archives[0].starts_with("GTNH-2.7.0_"));
    assert!(archives[0].ends_with(".zip"));
}

#[test]
fn archive_deletes_folder_by_default() {
    let ctx = TestContext::new();
    let folder = ctx.make_folder("GTNH-2.7.0");

    ctx.archiver()
        .write_stdin("2\n1\n\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    assert!(!folder.exists());
    assert_eq!(ctx.archives().len(), 1);
}

#[test]
fn settings_change_is_persisted() {
    let ctx = TestContext::new();

    ctx.archiver().write_stdin("3\n4\nModpack\n\n0\n0\n").assert().success();

    let saved = fs::read_to_string(ctx.home().join(".gtnh_archiver.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["prefix"], "Modpack");
}

#[test]
fn corrupt_settings_fall_back_to_defaults() {
    let ctx = TestContext::new();
    fs::write(ctx.home().join(".gtnh_archiver.json"), "{not json").unwrap();

    ctx.archiver()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using default settings"))
        .stdout(predicate::str::contains("GTNH"));
}
