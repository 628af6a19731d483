use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const STORAGE_FILE: &str = "sms.students.v1.json";

fn roster(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("ROSTER_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(home);
    cmd
}

fn stored(home: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(home.join(STORAGE_FILE)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn first_run_seeds_demo_data() {
    let home = TempDir::new().unwrap();

    roster(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ava Johnson"))
        .stdout(predicate::str::contains("Liam Garcia"));

    let data = stored(home.path());
    assert_eq!(data.as_array().unwrap().len(), 4);
    assert_eq!(data[0]["id"], "S-1001");
}

#[test]
fn no_command_lists_students() {
    let home = TempDir::new().unwrap();
    roster(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Noah Chen"));
}

#[test]
fn list_filters_by_class_and_status() {
    let home = TempDir::new().unwrap();

    roster(home.path())
        .args(["ls", "--class", "10A", "--status", "alumni"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sophia Patel"))
        .stdout(predicate::str::contains("Ava Johnson").not());

    roster(home.path())
        .args(["ls", "--class", "12Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn all_class_and_status_list_everyone() {
    let home = TempDir::new().unwrap();
    roster(home.path())
        .args(["ls", "--class", "all", "--status", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ava Johnson"))
        .stdout(predicate::str::contains("Liam Garcia"))
        .stdout(predicate::str::contains("Sophia Patel"));
}

#[test]
fn search_matches_email_case_insensitively() {
    let home = TempDir::new().unwrap();
    roster(home.path())
        .args(["search", "NOAH.CHEN@"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S-1002"))
        .stdout(predicate::str::contains("S-1001").not());
}

#[test]
fn add_view_edit_delete_flow() {
    let home = TempDir::new().unwrap();

    roster(home.path())
        .args([
            "add", "--id", "S-2001", "--name", "Mia Wong", "--class", "11B", "--email",
            "mia@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student created (S-2001): Mia Wong"));

    roster(home.path())
        .args(["view", "S-2001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mailto:mia@example.com"))
        .stdout(predicate::str::contains("assets/avatars/default.jpg"))
        .stdout(predicate::str::contains("Created "));

    roster(home.path())
        .args(["edit", "S-2001", "--status", "alumni"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student updated (S-2001)"));

    let data = stored(home.path());
    let mia = data
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == "S-2001")
        .unwrap();
    assert_eq!(mia["status"], "alumni");
    assert_eq!(mia["class"], "11B");
    let history = mia["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].as_str().unwrap().starts_with("Updated "));

    roster(home.path())
        .args(["rm", "S-2001", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student deleted (S-2001): Mia Wong"));

    assert_eq!(stored(home.path()).as_array().unwrap().len(), 4);
}

#[test]
fn add_with_missing_fields_fails_and_persists_nothing() {
    let home = TempDir::new().unwrap();
    roster(home.path()).arg("list").assert().success();

    roster(home.path())
        .args(["add", "--id", "S-3000", "--name", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Please fill all required fields"))
        .stderr(predicate::str::contains("name"));

    assert_eq!(stored(home.path()).as_array().unwrap().len(), 4);
}

#[test]
fn add_with_existing_id_replaces_record() {
    let home = TempDir::new().unwrap();
    roster(home.path())
        .args([
            "add", "--id", "S-1001", "--name", "Ava J.", "--class", "11A", "--email",
            "ava@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student updated (S-1001)"));

    let data = stored(home.path());
    assert_eq!(data.as_array().unwrap().len(), 4);
    assert_eq!(data[0]["name"], "Ava J.");
    assert_eq!(data[0]["avatar"], "assets/avatars/ava.jpg");
}

#[test]
fn avatar_file_is_embedded() {
    let home = TempDir::new().unwrap();
    let image = home.path().join("face.png");
    fs::write(&image, b"\x89PNG").unwrap();

    roster(home.path())
        .args([
            "add", "--id", "S-5", "--name", "Pia", "--class", "8A", "--email", "p@x.io",
            "--avatar",
        ])
        .arg(&image)
        .assert()
        .success();

    let data = stored(home.path());
    let avatar = data[4]["avatar"].as_str().unwrap();
    assert!(avatar.starts_with("data:image/png;base64,"));
}

#[test]
fn unknown_id_is_a_quiet_no_op() {
    let home = TempDir::new().unwrap();

    roster(home.path())
        .args(["delete", "S-9999", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No student with id S-9999"));

    roster(home.path())
        .args(["view", "S-9999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No student with id S-9999"));

    assert_eq!(stored(home.path()).as_array().unwrap().len(), 4);
}

#[test]
fn delete_without_confirmation_keeps_record() {
    let home = TempDir::new().unwrap();
    roster(home.path())
        .args(["delete", "S-1001"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    assert_eq!(stored(home.path()).as_array().unwrap().len(), 4);

    roster(home.path())
        .args(["delete", "S-1001"])
        .write_stdin("yes\n")
        .assert()
        .success();
    assert_eq!(stored(home.path()).as_array().unwrap().len(), 3);
}

#[test]
fn export_writes_filtered_csv_file() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("tenA.csv");

    roster(home.path())
        .args(["export", "--class", "10A", "--sort", "id", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 students"));

    let csv = fs::read_to_string(&out).unwrap();
    assert_eq!(
        csv,
        "id,name,class,email,status\n\
         \"S-1001\",\"Ava Johnson\",\"10A\",\"ava.johnson@example.com\",\"active\"\n\
         \"S-1003\",\"Sophia Patel\",\"10A\",\"sophia.patel@example.com\",\"alumni\""
    );
}

#[test]
fn export_defaults_to_students_csv() {
    let home = TempDir::new().unwrap();
    roster(home.path()).arg("export").assert().success();

    let csv = fs::read_to_string(home.path().join("students.csv")).unwrap();
    assert_eq!(csv.lines().count(), 5);
    assert!(!csv.ends_with('\n'));
}

#[test]
fn export_to_stdout() {
    let home = TempDir::new().unwrap();
    roster(home.path())
        .args(["export", "--status", "inactive", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,name,class,email,status\n"))
        .stdout(predicate::str::contains("\"Liam Garcia\""));
}

#[test]
fn classes_are_distinct_and_sorted() {
    let home = TempDir::new().unwrap();
    roster(home.path())
        .arg("classes")
        .assert()
        .success()
        .stdout("10A\n10B\n9C\n");
}

#[test]
fn reset_restores_demo_data() {
    let home = TempDir::new().unwrap();
    roster(home.path()).args(["rm", "S-1002", "-y"]).assert().success();
    assert_eq!(stored(home.path()).as_array().unwrap().len(), 3);

    roster(home.path())
        .args(["reset", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo data restored"));

    let data = stored(home.path());
    assert_eq!(data.as_array().unwrap().len(), 4);
    assert_eq!(data[1]["name"], "Noah Chen");
}

#[test]
fn corrupt_storage_is_replaced_with_demo_data() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(STORAGE_FILE), "{not json").unwrap();

    roster(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ava Johnson"))
        .stderr(predicate::str::is_empty());

    assert_eq!(stored(home.path()).as_array().unwrap().len(), 4);
}

#[test]
fn non_utf8_storage_is_replaced_with_demo_data() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(STORAGE_FILE), [0xff, 0xfe, b'[', 0x80]).unwrap();

    roster(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sophia Patel"))
        .stderr(predicate::str::is_empty());

    assert_eq!(stored(home.path()).as_array().unwrap().len(), 4);
}

#[test]
fn data_dir_flag_overrides_env() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();

    roster(home.path())
        .arg("--data-dir")
        .arg(other.path())
        .arg("list")
        .assert()
        .success();

    assert!(other.path().join(STORAGE_FILE).exists());
    assert!(!home.path().join(STORAGE_FILE).exists());
}

#[test]
fn config_sets_default_sort() {
    let home = TempDir::new().unwrap();

    roster(home.path())
        .args(["config", "sort-by", "class"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sort-by set to class"));

    roster(home.path())
        .args(["config", "sort-by"])
        .assert()
        .success()
        .stdout(predicate::str::contains("class"));

    roster(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("export-file = students.csv"))
        .stdout(predicate::str::contains("banner = true"));

    let out = roster(home.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(out.stdout).unwrap();
    let first = stdout.lines().next().unwrap();
    assert!(first.contains("Ava Johnson") || first.contains("Sophia Patel"));
    assert!(stdout.lines().last().unwrap().contains("Liam Garcia"));
}

#[test]
fn config_rejects_unknown_sort_field() {
    let home = TempDir::new().unwrap();
    roster(home.path())
        .args(["config", "sort-by", "avatar"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown sort field"));
}

#[test]
fn grouped_help_and_version() {
    let home = TempDir::new().unwrap();
    roster(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Core Commands:"))
        .stdout(predicate::str::contains("Data Commands:"));

    roster(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roster 0.3.2"));
}
