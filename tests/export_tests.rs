mod common;
use common::{TODAY, init_db_with_data, pos, rdt, setup_test_db, temp_out, test_home};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_in_list_order() {
    let home = test_home("export_csv_order");
    let db_path = setup_test_db("export_csv_order");
    init_db_with_data(&home, &db_path);

    let out = temp_out("export_csv_order", "csv");

    rdt(&home)
        .args([
            "--db", &db_path, "--today", TODAY, "export", "--format", "csv", "--file", &out,
            "--category", "_all",
        ])
        .assert()
        .success()
        .stdout(contains("3 events"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with(
        "id,date,next_occurrence,days_remaining,title,description,icon,group"
    ));
    assert!(content.contains("1990-06-14,2025-06-14,364,Mum"));
    assert!(pos(&content, "Soon") < pos(&content, "Far"));
    assert!(pos(&content, "Far") < pos(&content, "Mum"));
}

#[test]
fn test_export_json_filtered() {
    let home = test_home("export_json_filtered");
    let db_path = setup_test_db("export_json_filtered");
    init_db_with_data(&home, &db_path);

    let out = temp_out("export_json_filtered", "json");

    rdt(&home)
        .args([
            "--db", &db_path, "--today", TODAY, "export", "--format", "json", "--file", &out,
            "--category", "_events",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let titles: Vec<&str> = rows
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Soon", "Far"]);
    assert_eq!(rows[0]["days_remaining"], 2);
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let home = test_home("export_overwrite");
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&home, &db_path);

    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    rdt(&home)
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rdt(&home)
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("id,"));
}

#[test]
fn test_backup_compressed() {
    let home = test_home("backup_compressed");
    let db_path = setup_test_db("backup_compressed");
    init_db_with_data(&home, &db_path);

    let out = temp_out("backup_compressed", "sqlite");
    let zip = out.replace(".sqlite", ".zip");
    fs::remove_file(&zip).ok();

    rdt(&home)
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(std::path::Path::new(&zip).exists());
    assert!(!std::path::Path::new(&out).exists());
}
