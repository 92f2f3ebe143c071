//! Integration tests for the Passtable CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive prompts are avoided by supplying the primary passphrase
//! through `PASSTABLE_PASSWORD` and passing `--force` where a
//! confirmation would be asked.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const PASS: &str = "correct horse";

/// Helper: get a Command pointing at the passtable binary.
fn passtable() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passtable").expect("binary should exist")
}

/// Helper: a command running inside `dir` with the passphrase set.
fn in_vault(dir: &TempDir) -> Command {
    let mut cmd = passtable();
    cmd.current_dir(dir.path())
        .env("PASSTABLE_PASSWORD", PASS)
        .env_remove("PASSTABLE_NEW_PASSWORD")
        .env_remove("PASSTABLE_LOG");
    cmd
}

/// Helper: init a vault with two records.
fn seeded_vault() -> TempDir {
    let tmp = TempDir::new().unwrap();
    in_vault(&tmp).arg("init").assert().success();
    in_vault(&tmp)
        .args(["add", "--tag", "red", "--note", "bank", "-u", "alice", "-p", "hunter2"])
        .assert()
        .success();
    in_vault(&tmp)
        .args(["add", "-t", "3", "-n", "mail", "-u", "bob", "-p", "s3cret"])
        .assert()
        .success();
    tmp
}

#[test]
fn help_flag_shows_usage() {
    passtable()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted password table"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn version_flag_shows_version() {
    passtable()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passtable"));
}

#[test]
fn version_command_shows_format() {
    passtable()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault format"));
}

#[test]
fn no_args_shows_help() {
    passtable()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_prints_password_of_requested_length() {
    let tmp = TempDir::new().unwrap();
    let out = passtable()
        .current_dir(tmp.path())
        .args(["generate", "--length", "24"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let pw = String::from_utf8(out).unwrap();
    assert_eq!(pw.trim_end().chars().count(), 24);
}

#[test]
fn generate_rejects_impossible_requirements() {
    let tmp = TempDir::new().unwrap();
    passtable()
        .current_dir(tmp.path())
        .args(["generate", "--length", "2"])
        .assert()
        .failure();
}

#[test]
fn list_on_missing_vault_fails() {
    let tmp = TempDir::new().unwrap();
    in_vault(&tmp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn init_creates_vault_file() {
    let tmp = TempDir::new().unwrap();
    in_vault(&tmp)
        .args(["init", "--file", "mine.ptb"])
        .assert()
        .success();
    tmp.child("mine.ptb").assert(predicate::path::exists());
}

#[test]
fn init_refuses_existing_vault() {
    let tmp = TempDir::new().unwrap();
    in_vault(&tmp).arg("init").assert().success();
    in_vault(&tmp).arg("init").assert().failure();
}

#[test]
fn init_rejects_reserved_file_name() {
    let tmp = TempDir::new().unwrap();
    in_vault(&tmp)
        .args(["init", "--file", "CON"])
        .assert()
        .failure();
}

#[test]
fn add_and_list_hide_passwords() {
    let tmp = seeded_vault();
    in_vault(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("bank"))
        .stdout(predicate::str::contains("bob"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn list_json_is_machine_readable() {
    let tmp = seeded_vault();
    let out = in_vault(&tmp)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["tag"], "red");
    assert_eq!(rows[1]["has_password"], true);
}

#[test]
fn show_reveal_prints_password() {
    let tmp = seeded_vault();
    in_vault(&tmp)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not());
    in_vault(&tmp)
        .args(["show", "1", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2"));
}

#[test]
fn wrong_passphrase_is_rejected() {
    let tmp = seeded_vault();
    in_vault(&tmp)
        .env("PASSTABLE_PASSWORD", "not it")
        .arg("list")
        .assert()
        .failure();
}

#[test]
fn invalid_tag_is_rejected() {
    let tmp = seeded_vault();
    in_vault(&tmp)
        .args(["add", "-t", "9", "-n", "x", "-p", ""])
        .assert()
        .failure();
}

#[test]
fn edit_changes_fields() {
    let tmp = seeded_vault();
    in_vault(&tmp)
        .args(["edit", "2", "--note", "work mail", "--tag", "green"])
        .assert()
        .success();
    in_vault(&tmp)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work mail"))
        .stdout(predicate::str::contains("green"));
}

#[test]
fn search_by_text_and_colour() {
    let tmp = seeded_vault();
    in_vault(&tmp)
        .args(["search", "MAIL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mail"))
        .stdout(predicate::str::contains("bank").not());
    in_vault(&tmp)
        .args(["search", "--color", "red,purple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bank"));
    in_vault(&tmp)
        .args(["search", "--color", "orange"])
        .assert()
        .failure();
}

#[test]
fn move_swap_and_delete() {
    let tmp = seeded_vault();
    in_vault(&tmp).args(["swap", "1", "2"]).assert().success();
    in_vault(&tmp).args(["move", "2", "1"]).assert().success();
    in_vault(&tmp).args(["move", "1", "3"]).assert().failure();
    in_vault(&tmp)
        .args(["delete", "1", "--force"])
        .assert()
        .success();
    in_vault(&tmp)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bank").not())
        .stdout(predicate::str::contains("mail"));
}

#[test]
fn record_number_zero_is_rejected() {
    let tmp = seeded_vault();
    in_vault(&tmp).args(["show", "0"]).assert().failure();
}

#[test]
fn passwd_reencrypts_vault() {
    let tmp = seeded_vault();
    in_vault(&tmp)
        .env("PASSTABLE_NEW_PASSWORD", "battery staple")
        .arg("passwd")
        .assert()
        .success();
    in_vault(&tmp).arg("list").assert().failure();
    in_vault(&tmp)
        .env("PASSTABLE_PASSWORD", "battery staple")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("bank"));
}

#[test]
fn config_file_sets_default_vault() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".passtable.toml")
        .write_str("default_vault = \"team.ptb\"\n")
        .unwrap();
    in_vault(&tmp).arg("init").assert().success();
    tmp.child("team.ptb").assert(predicate::path::exists());
}

#[test]
fn completions_for_bash() {
    passtable()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passtable"));
}
