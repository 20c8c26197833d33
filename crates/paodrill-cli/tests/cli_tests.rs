//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paodrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("paodrill").unwrap()
}

fn write_table(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("pao.csv");
    let mut csv = String::from("number,person,action,object\n");
    for i in 0..100 {
        csv.push_str(&format!("{i:02},Person {i:02},Action {i:02},Object {i:02}\n"));
    }
    std::fs::write(&path, csv).unwrap();
    path
}

#[test]
fn init_creates_config_and_table() {
    let dir = TempDir::new().unwrap();

    paodrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created paodrill.toml"))
        .stdout(predicate::str::contains("Created pao.csv"));

    assert!(dir.path().join("paodrill.toml").exists());
    assert!(dir.path().join("pao.csv").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();

    paodrill().current_dir(dir.path()).arg("init").assert().success();
    paodrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("paodrill.toml already exists"))
        .stdout(predicate::str::contains("pao.csv already exists"));
}

#[test]
fn starter_table_passes_validation() {
    // The table init writes must load: browse renders all 100 keys from it.
    let dir = TempDir::new().unwrap();
    paodrill().current_dir(dir.path()).arg("init").assert().success();

    paodrill()
        .current_dir(dir.path())
        .arg("browse")
        .assert()
        .success()
        .stdout(predicate::str::contains("00"))
        .stdout(predicate::str::contains("99"))
        .stdout(predicate::str::contains("Merlin"));
}

#[test]
fn browse_lists_all_keys_with_accuracy_column() {
    let dir = TempDir::new().unwrap();
    let table = write_table(&dir);

    paodrill()
        .arg("browse")
        .arg("--data")
        .arg(&table)
        .arg("--stats-file")
        .arg(dir.path().join("stats.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Person 42"))
        .stdout(predicate::str::contains("Accuracy"));
}

#[test]
fn stats_on_fresh_store_reports_everything_untested() {
    let dir = TempDir::new().unwrap();
    let table = write_table(&dir);

    paodrill()
        .arg("stats")
        .arg("--data")
        .arg(&table)
        .arg("--stats-file")
        .arg(dir.path().join("stats.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("no attempts recorded"))
        .stdout(predicate::str::contains("Untested: 100 of 100 keys"));
}

#[test]
fn train_quit_flushes_the_stats_file() {
    let dir = TempDir::new().unwrap();
    let table = write_table(&dir);
    let stats = dir.path().join("stats.json");

    paodrill()
        .arg("train")
        .arg("--data")
        .arg(&table)
        .arg("--stats-file")
        .arg(&stats)
        .write_stdin("quit\n")
        .assert()
        .success();

    assert!(stats.exists());
}

#[test]
fn train_records_a_graded_answer() {
    let dir = TempDir::new().unwrap();
    let table = write_table(&dir);
    let stats = dir.path().join("stats.json");

    // Study acknowledgement, a wrong triple, then quit.
    paodrill()
        .arg("train")
        .arg("--data")
        .arg(&table)
        .arg("--stats-file")
        .arg(&stats)
        .write_stdin("\nx\ny\nz\nquit\n")
        .assert()
        .success();

    let saved = std::fs::read_to_string(&stats).unwrap();
    assert!(saved.contains("\"attempts\": 1"), "saved stats: {saved}");
    assert!(saved.contains("\"correct\": 0"), "saved stats: {saved}");
}

#[test]
fn missing_association_table_is_fatal() {
    let dir = TempDir::new().unwrap();

    paodrill()
        .arg("browse")
        .arg("--data")
        .arg(dir.path().join("nonexistent.csv"))
        .arg("--stats-file")
        .arg(dir.path().join("stats.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn corrupt_stats_file_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    let table = write_table(&dir);
    let stats = dir.path().join("stats.json");
    std::fs::write(&stats, "{not json").unwrap();

    paodrill()
        .arg("browse")
        .arg("--data")
        .arg(&table)
        .arg("--stats-file")
        .arg(&stats)
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"));
}
