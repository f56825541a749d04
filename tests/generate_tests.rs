//! Integration tests for the generation workflow, driven through a
//! scripted prompt collaborator, no console interaction required.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;

use brugen::bru::Collection;
use brugen::config::Config;
use brugen::error::{Error, Result};
use brugen::generation::Generator;
use brugen::prompt::Prompter;

/// Prompter that replays pre-seeded answers.
struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    confirms: Mutex<VecDeque<bool>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str], confirms: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|s| s.to_string()).collect()),
            confirms: Mutex::new(confirms.iter().copied().collect()),
        }
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn ask(&self, _question: &str, default: &str) -> Result<String> {
        Ok(self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| default.to_string()))
    }

    async fn confirm(&self, _question: &str, _default: bool) -> Result<bool> {
        Ok(self.confirms.lock().unwrap().pop_front().unwrap_or(false))
    }
}

async fn write_routes_fixture(dir: &Path) -> std::path::PathBuf {
    let routes = json!({
        "app_user_list": {
            "path": "/users",
            "methods": ["GET"],
            "defaults": { "_controller": "App\\Controller\\UserController::list" }
        },
        "app_user_show": {
            "path": "/users/{id}",
            "methods": ["GET", "DELETE"],
            "defaults": {
                "_controller": "App\\Controller\\UserController::show",
                "id": "1"
            },
            "requirements": { "id": "\\d+" }
        },
        "app_admin_dashboard": {
            "path": "/admin/dashboard",
            "defaults": { "_controller": "App\\Controller\\Admin\\DashboardController::index" }
        },
        "_profiler": {
            "path": "/_profiler",
            "defaults": { "_controller": "Vendor\\Profiler\\Controller::panel" }
        }
    });

    let path = dir.join("routes.json");
    tokio::fs::write(&path, serde_json::to_string_pretty(&routes).unwrap())
        .await
        .unwrap();
    path
}

fn config(workdir: &Path, routes_path: std::path::PathBuf) -> Config {
    Config {
        routes_path,
        collection_dir: workdir.join("bruno"),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_run_bootstraps_collection_and_generates_requests() {
    let workdir = TempDir::new().unwrap();
    let routes_path = write_routes_fixture(workdir.path()).await;
    let config = config(workdir.path(), routes_path);
    let collection_dir = config.collection_dir.clone();

    // Controllers are confirmed in sorted order: Admin\Dashboard, then User
    let prompter = ScriptedPrompter::new(&["petshop", "https://localhost:8000"], &[true, true]);
    let report = Generator::new(config).run(&prompter).await.unwrap();

    assert_eq!(report.collection_name, "petshop");
    assert_eq!(report.generated.len(), 4);

    // Bootstrap artifacts
    let bruno_json =
        std::fs::read_to_string(collection_dir.join("bruno.json")).unwrap();
    assert!(bruno_json.contains("\"name\": \"petshop\""));
    let localhost =
        std::fs::read_to_string(collection_dir.join("environments/localhost.bru")).unwrap();
    assert!(localhost.contains("baseUrl: https://localhost:8000"));

    // Request documents mirror controller namespaces
    assert!(collection_dir.join("admin/dashboard/get_app_admin_dashboard.bru").exists());
    assert!(collection_dir.join("user/get_app_user_list.bru").exists());
    assert!(collection_dir.join("user/get_app_user_show.bru").exists());
    assert!(collection_dir.join("user/delete_app_user_show.bru").exists());

    let show = std::fs::read_to_string(collection_dir.join("user/get_app_user_show.bru")).unwrap();
    assert!(show.contains("url: {{baseUrl}}/users/:id"));
    assert!(show.contains("body: none"));
    assert!(show.contains("auth: inherit"));
    assert!(show.contains("params:path {"));
    assert!(show.contains("id: 1"));

    // DELETE variant carries no GET-only defaults
    let delete =
        std::fs::read_to_string(collection_dir.join("user/delete_app_user_show.bru")).unwrap();
    assert!(!delete.contains("body: none"));
    assert!(!delete.contains("auth: inherit"));

    // Vendor controllers are never generated
    assert!(!collection_dir.join("vendor").exists());
}

#[tokio::test]
async fn test_generated_collection_parses_back() {
    let workdir = TempDir::new().unwrap();
    let routes_path = write_routes_fixture(workdir.path()).await;
    let config = config(workdir.path(), routes_path);
    let collection_dir = config.collection_dir.clone();

    let prompter = ScriptedPrompter::new(&[], &[true, true]);
    Generator::new(config).run(&prompter).await.unwrap();

    let collection = Collection::parse(&collection_dir).await.unwrap();
    assert_eq!(collection.name(), "my_collection");
    assert_eq!(collection.environments().len(), 1);

    let user = collection
        .folders()
        .iter()
        .find(|folder| folder.name == "user")
        .unwrap();
    assert_eq!(user.files.len(), 3);
    assert!(user.files.iter().any(|f| f.name() == "get_app_user_list"));
}

#[tokio::test]
async fn test_run_reuses_existing_collection() {
    let workdir = TempDir::new().unwrap();
    let routes_path = write_routes_fixture(workdir.path()).await;
    let config = config(workdir.path(), routes_path);
    let collection_dir = config.collection_dir.clone();

    Collection::new("existing", "https://api.example.test")
        .unwrap()
        .write(&collection_dir)
        .await
        .unwrap();

    // No ask answers seeded: bootstrap prompts must not run
    let prompter = ScriptedPrompter::new(&["should_not_be_used"], &[false, false]);
    let report = Generator::new(config).run(&prompter).await.unwrap();

    assert_eq!(report.collection_name, "existing");
    assert!(report.generated.is_empty());

    let bruno_json = std::fs::read_to_string(collection_dir.join("bruno.json")).unwrap();
    assert!(bruno_json.contains("\"name\": \"existing\""));
}

#[tokio::test]
async fn test_run_aborts_on_unsupported_method() {
    let workdir = TempDir::new().unwrap();
    let routes = json!({
        "app_trace": {
            "path": "/trace",
            "methods": ["TRACE"],
            "defaults": { "_controller": "App\\Controller\\TraceController::trace" }
        }
    });
    let routes_path = workdir.path().join("routes.json");
    tokio::fs::write(&routes_path, routes.to_string()).await.unwrap();

    let config = config(workdir.path(), routes_path);
    let collection_dir = config.collection_dir.clone();

    let prompter = ScriptedPrompter::new(&[], &[true]);
    let err = Generator::new(config).run(&prompter).await.unwrap_err();

    assert!(matches!(err, Error::UnsupportedMethod(_)));
    assert!(!collection_dir.join("trace/trace_app_trace.bru").exists());
}

#[tokio::test]
async fn test_run_fails_on_corrupt_collection() {
    let workdir = TempDir::new().unwrap();
    let routes_path = write_routes_fixture(workdir.path()).await;
    let config = config(workdir.path(), routes_path);

    tokio::fs::create_dir_all(&config.collection_dir).await.unwrap();
    tokio::fs::write(config.collection_dir.join("bruno.json"), "{ broken")
        .await
        .unwrap();

    let prompter = ScriptedPrompter::new(&[], &[]);
    let err = Generator::new(config).run(&prompter).await.unwrap_err();
    assert!(matches!(err, Error::CollectionParse(_)));
}

#[tokio::test]
async fn test_declined_controller_generates_nothing() {
    let workdir = TempDir::new().unwrap();
    let routes_path = write_routes_fixture(workdir.path()).await;
    let config = config(workdir.path(), routes_path);
    let collection_dir = config.collection_dir.clone();

    let prompter = ScriptedPrompter::new(&[], &[false, true]);
    let report = Generator::new(config).run(&prompter).await.unwrap();

    // First (sorted) controller declined, second confirmed
    assert!(!collection_dir.join("admin").exists());
    assert!(collection_dir.join("user/get_app_user_list.bru").exists());
    assert_eq!(report.generated.len(), 3);
}
