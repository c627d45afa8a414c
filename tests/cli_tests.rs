//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clip_bridge_bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clip-bridge").expect("binary should build");
    // Keep the user's real config and data out of the test
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("CLIP_BRIDGE_STORAGE_PATH")
        .env_remove("CLIP_BRIDGE_UI_SOCKET")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    clip_bridge_bin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard"))
        .stdout(predicate::str::contains("--poll-interval"))
        .stdout(predicate::str::contains("--storage-file"))
        .stdout(predicate::str::contains("--ui-socket"))
        .stdout(predicate::str::contains("--ephemeral"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    clip_bridge_bin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clip-bridge"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    clip_bridge_bin(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clip-bridge"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    clip_bridge_bin(&home)
        .args(["config", "set", "poll_interval", "250ms"])
        .assert()
        .success();
    clip_bridge_bin(&home)
        .args(["config", "get", "poll_interval"])
        .assert()
        .success()
        .stdout(predicate::str::contains("250ms"));
}

#[test]
fn tags_show_defaults_to_empty() {
    let home = TempDir::new().unwrap();
    let storage = home.path().join("storage.json");
    clip_bridge_bin(&home)
        .args(["--storage-file", storage.to_str().unwrap(), "tags", "show"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn bridge_persists_tags_over_stdio() {
    let home = TempDir::new().unwrap();
    let storage = home.path().join("storage.json");
    let storage_arg = storage.to_str().unwrap();

    // Sends init first, persists the update, and exits when stdin closes.
    clip_bridge_bin(&home)
        .args(["--storage-file", storage_arg, "--clipboard", "wayland"])
        .write_stdin("{\"port\":\"updateTags\",\"value\":[\"one\"]}\n{\"port\":\"updateTags\",\"value\":[{\"id\":2}]}\n")
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "{\"port\":\"init\",\"flags\":{\"tags\":[]}}\n",
        ));

    // A second start hands the stored tags to the UI.
    clip_bridge_bin(&home)
        .args(["--storage-file", storage_arg, "--clipboard", "wayland"])
        .write_stdin("")
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "{\"port\":\"init\",\"flags\":{\"tags\":[{\"id\":2}]}}\n",
        ));

    clip_bridge_bin(&home)
        .args(["--storage-file", storage_arg, "tags", "clear"])
        .assert()
        .success();
    clip_bridge_bin(&home)
        .args(["--storage-file", storage_arg, "tags", "show"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}
