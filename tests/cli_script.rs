use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::tempdir;

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("points_core_cli").unwrap();
    cmd.env("POINTS_TRACKER_HOME", home);
    cmd
}

#[test]
fn add_list_total_flow() {
    let home = tempdir().unwrap();

    cli(home.path())
        .args(["add", "MR", "10000"])
        .assert()
        .success()
        .stdout(contains("Amex Rewards"));

    cli(home.path())
        .args(["add", "custom", "airline", "House Miles", "hm", "5000", "1.2"])
        .assert()
        .success()
        .stdout(contains("House Miles").and(contains("HM")));

    cli(home.path())
        .args(["list", "airline"])
        .assert()
        .success()
        .stdout(contains("House Miles").and(contains("Total")));

    cli(home.path())
        .arg("total")
        .assert()
        .success()
        .stdout(contains("2 accounts").and(contains("15000 points")));
}

#[test]
fn invalid_custom_account_is_rejected() {
    let home = tempdir().unwrap();

    cli(home.path())
        .args(["add", "custom", "bank", "  ", "XX", "100", "1.0"])
        .assert()
        .failure()
        .stderr(contains("program name"));

    cli(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No accounts."));
}

#[test]
fn unknown_preset_is_reported() {
    let home = tempdir().unwrap();

    cli(home.path())
        .args(["add", "ZZ", "100"])
        .assert()
        .failure()
        .stderr(contains("unknown preset"));
}

#[test]
fn remove_of_unknown_id_is_a_noop() {
    let home = tempdir().unwrap();

    cli(home.path())
        .args(["remove", "42", "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to remove"));
}

#[test]
fn theme_round_trips() {
    let home = tempdir().unwrap();

    cli(home.path()).arg("theme").assert().success().stdout(contains("light"));

    cli(home.path()).args(["theme", "dark"]).assert().success();

    cli(home.path()).arg("theme").assert().success().stdout(contains("dark"));
}

#[test]
fn presets_listing_shows_catalog() {
    let home = tempdir().unwrap();

    cli(home.path())
        .args(["presets", "hotel"])
        .assert()
        .success()
        .stdout(contains("World of Hyatt").and(contains("HOTEL")));
}
