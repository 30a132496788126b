use predicates::str::contains;
use std::fs;

mod common;
use common::{dotlog, init_and_login, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    dotlog()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,level,note,created_at,updated_at")
    );

    // oldest first
    let dates: Vec<&str> = lines.map(|l| l.split(',').nth(1).unwrap()).collect();
    assert_eq!(dates, vec!["2024-05-31", "2024-06-14", "2024-06-15"]);
}

#[test]
fn test_export_json_month_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_range", "json");

    dotlog()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2024-06",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2024-06-14");
    assert_eq!(rows[1]["level"], 4);
    assert_eq!(rows[1]["note"], "went hiking");
    assert!(!content.contains("2024-05-31"));
}

#[test]
fn test_export_only_includes_current_user() {
    let db_path = setup_test_db("export_current_user");
    init_db_with_data(&db_path);

    dotlog()
        .args(["--db", &db_path, "--user", "bob", "add", "2024-06-01", "-l", "5", "-n", "bob's day"])
        .assert()
        .success();

    let out = temp_out("export_current_user", "csv");
    dotlog()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("2024-06-01"));
    assert!(content.contains("went hiking"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_and_login(&db_path);

    let out = temp_out("export_empty_range", "csv");
    dotlog()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2020"])
        .assert()
        .success()
        .stdout(contains("No entries found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_refuses_to_overwrite_without_confirmation() {
    let db_path = setup_test_db("export_no_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    dotlog()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    dotlog()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("2024-06-15"));
}

#[test]
fn test_export_rejects_bad_range() {
    let db_path = setup_test_db("export_bad_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_bad_range", "csv");
    dotlog()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "june"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));
}
