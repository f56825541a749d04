//! Integration tests for the brugen CLI binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn write_routes_fixture(dir: &std::path::Path) -> std::path::PathBuf {
    let routes = json!({
        "app_user_list": {
            "path": "/users",
            "methods": ["GET"],
            "defaults": { "_controller": "App\\Controller\\UserController::list" }
        },
        "app_user_show": {
            "path": "/users/{id}",
            "methods": ["GET"],
            "defaults": {
                "_controller": "App\\Controller\\UserController::show",
                "id": "1"
            }
        }
    });

    let path = dir.join("routes.json");
    std::fs::write(&path, routes.to_string()).unwrap();
    path
}

#[test]
fn test_make_generates_collection() {
    let workdir = TempDir::new().unwrap();
    let routes_path = write_routes_fixture(workdir.path());
    let collection_dir = workdir.path().join("bruno");

    let mut cmd = Command::cargo_bin("brugen").unwrap();
    cmd.arg("make")
        .arg("--routes")
        .arg(&routes_path)
        .arg("--collection-dir")
        .arg(&collection_dir)
        // collection name, base url, one controller confirmation
        .write_stdin("petshop\nhttps://localhost:8000\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated:"))
        .stdout(predicate::str::contains("get_app_user_list.bru"));

    assert!(collection_dir.join("bruno.json").exists());
    assert!(collection_dir.join("environments/localhost.bru").exists());
    assert!(collection_dir.join("user/get_app_user_list.bru").exists());
    assert!(collection_dir.join("user/get_app_user_show.bru").exists());
}

#[test]
fn test_make_accepts_prompt_defaults() {
    let workdir = TempDir::new().unwrap();
    let routes_path = write_routes_fixture(workdir.path());
    let collection_dir = workdir.path().join("bruno");

    let mut cmd = Command::cargo_bin("brugen").unwrap();
    cmd.arg("make")
        .arg("--routes")
        .arg(&routes_path)
        .arg("--collection-dir")
        .arg(&collection_dir)
        // empty answers fall back to defaults, then confirm
        .write_stdin("\n\ny\n")
        .assert()
        .success();

    let bruno_json = std::fs::read_to_string(collection_dir.join("bruno.json")).unwrap();
    assert!(bruno_json.contains("\"name\": \"my_collection\""));
}

#[test]
fn test_make_fails_on_corrupt_collection() {
    let workdir = TempDir::new().unwrap();
    let routes_path = write_routes_fixture(workdir.path());
    let collection_dir = workdir.path().join("bruno");

    std::fs::create_dir_all(&collection_dir).unwrap();
    std::fs::write(collection_dir.join("bruno.json"), "{ broken").unwrap();

    let mut cmd = Command::cargo_bin("brugen").unwrap();
    cmd.arg("make")
        .arg("--routes")
        .arg(&routes_path)
        .arg("--collection-dir")
        .arg(&collection_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bruno generation failed"));
}

#[test]
fn test_make_fails_on_missing_route_table() {
    let workdir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("brugen").unwrap();
    cmd.arg("make")
        .arg("--routes")
        .arg(workdir.path().join("missing.json"))
        .arg("--collection-dir")
        .arg(workdir.path().join("bruno"))
        .assert()
        .failure();
}

#[test]
fn test_help_describes_make_command() {
    let mut cmd = Command::cargo_bin("brugen").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("make"))
        .stdout(predicate::str::contains("Generate bruno files"));
}
