use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PRODUCT_DEPS: &str = "\
parent artdaq v1_12_08

product          version     optional
art              v1_14_00
cetbuildtools    v4_09_02    -
gallery          v1_03_08    s41
end_product_list

qualifier      art             notes
e15:s21:prof   e15:s21:prof
e15:s21:debug  e15:s21:debug
e10:s41        -nq-
end_qualifier_list
";

#[allow(deprecated)]
fn pdeps_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pdeps").unwrap();
    cmd.env("HOME", home).env_remove("PDEPS_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_product_deps(dir: &Path) -> String {
    let path = dir.join("product_deps");
    fs::write(&path, PRODUCT_DEPS).unwrap();
    path.display().to_string()
}

#[test]
fn test_resolve_prints_dependencies() {
    let tmp = TempDir::new().unwrap();
    let file = write_product_deps(tmp.path());

    pdeps_cmd(tmp.path())
        .args([file.as_str(), "artdaq", "v1_12_08", "s21:e15:debug"])
        .assert()
        .success()
        .stdout("art: v1_14_00 e15:s21\ncetbuildtools: v4_09_02 -\n");
}

#[test]
fn test_resolve_no_qualifier_column_value() {
    let tmp = TempDir::new().unwrap();
    let file = write_product_deps(tmp.path());

    pdeps_cmd(tmp.path())
        .args([file.as_str(), "artdaq", "v1_12_08", "e10:s41:prof"])
        .assert()
        .success()
        .stdout(predicate::str::contains("art: v1_14_00 -"))
        .stdout(predicate::str::contains("gallery: v1_03_08 -"));
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let tmp = TempDir::new().unwrap();

    pdeps_cmd(tmp.path())
        .args(["product_deps", "artdaq", "v1_12_08"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    pdeps_cmd(tmp.path())
        .args(["product_deps", "artdaq", "v1_12_08", "e15", "extra"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_qualifiers_fail() {
    let tmp = TempDir::new().unwrap();
    let file = write_product_deps(tmp.path());

    pdeps_cmd(tmp.path())
        .args([file.as_str(), "artdaq", "v1_12_08", "e20:s99"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("e20:s99"))
        .stderr(predicate::str::contains("product_deps"));
}

#[test]
fn test_missing_file_fails() {
    let tmp = TempDir::new().unwrap();

    pdeps_cmd(tmp.path())
        .args(["/nonexistent/product_deps", "artdaq", "v1_12_08", "e15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_json_format_flag() {
    let tmp = TempDir::new().unwrap();
    let file = write_product_deps(tmp.path());

    pdeps_cmd(tmp.path())
        .args([file.as_str(), "artdaq", "v1_12_08", "e15:s21", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"package\": \"art\""))
        .stdout(predicate::str::contains("\"qualifier\": \"e15:s21\""));
}

#[test]
fn test_config_selects_json_format() {
    let tmp = TempDir::new().unwrap();
    let file = write_product_deps(tmp.path());
    let config = tmp.path().join("pdeps.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    pdeps_cmd(tmp.path())
        .env("PDEPS_CONFIG", &config)
        .args([file.as_str(), "artdaq", "v1_12_08", "e15:s21"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));

    // The flag wins over the config file.
    pdeps_cmd(tmp.path())
        .args(["--config", config.to_str().unwrap()])
        .args([file.as_str(), "artdaq", "v1_12_08", "e15:s21", "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("art: v1_14_00 e15:s21"));
}

#[test]
fn test_invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    let file = write_product_deps(tmp.path());
    fs::create_dir(tmp.path().join(".pdeps")).unwrap();
    fs::write(tmp.path().join(".pdeps").join("config.toml"), "output = 3\n").unwrap();

    pdeps_cmd(tmp.path())
        .args([file.as_str(), "artdaq", "v1_12_08", "e15:s21"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let tmp = TempDir::new().unwrap();
    let file = write_product_deps(tmp.path());

    pdeps_cmd(tmp.path())
        .args(["-v", file.as_str(), "artdaq", "v1_12_08", "e15:s21"])
        .assert()
        .success()
        .stdout("art: v1_14_00 e15:s21\ncetbuildtools: v4_09_02 -\n")
        .stderr(predicate::str::contains("qualifier row"));
}

#[test]
fn test_version_flag_and_version_positional_coexist() {
    let tmp = TempDir::new().unwrap();

    pdeps_cmd(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pdeps"));
}

#[test]
fn test_end_to_end_example() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("product_deps");
    fs::write(
        &path,
        "product version optional e15:debug notes\n\
         foo 1.0\n\
         bar 2.0 e15\n\
         end_product_list\n\
         \n\
         qualifier foo bar notes\n\
         e15:debug - -nq-\n\
         end_qualifier_list\n",
    )
    .unwrap();

    pdeps_cmd(tmp.path())
        .args([path.to_str().unwrap(), "x", "v1", "e15:prof"])
        .assert()
        .success()
        .stdout("bar: 2.0 -\n");
}
