//! Smoke tests for the nodepulse binary's CLI surface.
//!
//! Only offline paths are exercised; `run` and `check telegram` need a live
//! bot token and are left to manual verification.

use assert_cmd::Command;
use predicates::prelude::*;

fn nodepulse() -> Command {
    let mut cmd = Command::cargo_bin("nodepulse").expect("binary builds");
    // Isolate from the developer's real environment.
    cmd.env_remove("TELEGRAM_BOT_TOKEN");
    cmd.env_remove("CHAT_ID");
    cmd
}

#[test]
fn help_lists_subcommands() {
    nodepulse()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn check_help_lists_targets() {
    nodepulse()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("telegram"));
}

#[test]
fn check_config_fails_without_bot_token() {
    nodepulse()
        .args(["check", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bot_token"));
}

#[test]
fn check_config_reports_a_valid_setup() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[telegram]\nchat_id = 4242\n").unwrap();

    nodepulse()
        .env("TELEGRAM_BOT_TOKEN", "123456:test-token")
        .args(["check", "config", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("4242"))
        .stdout(predicate::str::contains("multiple.cc"));
}

#[test]
fn check_tokens_counts_accounts() {
    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("token.txt");
    std::fs::write(&token_path, "alpha-token\nbeta-token\n").unwrap();

    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[telegram]\nchat_id = 4242\n\n[accounts]\ntoken_file = \"{}\"\n",
            token_path.display()
        ),
    )
    .unwrap();

    nodepulse()
        .env("TELEGRAM_BOT_TOKEN", "123456:test-token")
        .args(["check", "tokens", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Accounts"))
        .stdout(predicate::str::contains("2"))
        // Raw credentials never reach the terminal.
        .stdout(predicate::str::contains("alpha-token").not());
}

#[test]
fn check_tokens_hints_when_the_list_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[telegram]\nchat_id = 4242\n\n[accounts]\ntoken_file = \"{}\"\n",
            dir.path().join("absent.txt").display()
        ),
    )
    .unwrap();

    nodepulse()
        .env("TELEGRAM_BOT_TOKEN", "123456:test-token")
        .args(["check", "tokens", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("hint"));
}
