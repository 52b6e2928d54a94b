//! Error-path integration tests: exit codes, fail-closed rendering, and
//! user-facing suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ossify(env_root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ossify").unwrap();
    cmd.env("XDG_CONFIG_HOME", env_root.path().join("config"))
        .env("XDG_CACHE_HOME", env_root.path().join("cache"))
        .env_remove("OSSIFY_TEMPLATES_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_classification_is_a_user_error() {
    let env = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    // stdin is not a terminal here, so the questionnaire cannot run.
    ossify(&env)
        .args(["setup", "--repository-url", "https://github.com/acme/widget", "--yes"])
        .arg("--dir")
        .arg(work.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--class"));
}

#[test]
fn unparseable_explicit_url_is_a_user_error() {
    let env = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let common = templates.path().join("common");
    fs::create_dir_all(&common).unwrap();
    fs::write(common.join("_LICENSE"), "mit\n").unwrap();

    ossify(&env)
        .args([
            "setup",
            "--class",
            "library",
            "--repository-url",
            "not a repository url",
            "--templates",
        ])
        .arg(templates.path())
        .arg("--dir")
        .arg(work.path())
        .arg("--yes")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a recognizable repository reference"));

    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

#[test]
fn unresolved_placeholder_fails_closed() {
    let env = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let common = templates.path().join("common");
    fs::create_dir_all(&common).unwrap();
    // {{MAINTAINER}} is not a value this tool provides.
    fs::write(common.join("_README.md"), "Maintained by {{MAINTAINER}}\n").unwrap();

    ossify(&env)
        .args([
            "setup",
            "--class",
            "library",
            "--repository-url",
            "https://github.com/acme/widget",
            "--templates",
        ])
        .arg(templates.path())
        .arg("--dir")
        .arg(work.path())
        .arg("--yes")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("MAINTAINER"));

    assert!(
        !work.path().join("README.md").exists(),
        "no partial output on render failure"
    );
}

#[test]
fn explicit_missing_config_file_is_a_configuration_error() {
    let env = TempDir::new().unwrap();

    ossify(&env)
        .args(["--config", "/absolutely/does/not/exist.toml", "plan", "--class", "library"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("config"));
}

#[test]
fn config_default_classification_is_honoured() {
    let env = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    let common = templates.path().join("common");
    fs::create_dir_all(&common).unwrap();
    fs::write(common.join("_LICENSE"), "mit {{ORGANIZATION}}\n").unwrap();

    let config = env.path().join("ossify.toml");
    fs::write(&config, "[defaults]\nclass = \"library\"\n").unwrap();

    // No --class flag: the config default applies, so plan succeeds.
    ossify(&env)
        .arg("--config")
        .arg(&config)
        .args(["plan", "--templates"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("LICENSE"));
}
