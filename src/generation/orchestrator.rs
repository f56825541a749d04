//! Execution phase of the generation workflow.
//!
//! Drives the per-controller, per-route, per-method loop: bootstrap or
//! parse the collection, confirm each controller interactively, build the
//! request documents from the plan, and write them one by one. Strictly
//! sequential: every prompt, directory creation, and document write
//! completes before the next begins.

use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::bru::{Collection, TagRegistry};
use crate::config::Config;
use crate::error::Result;
use crate::generation::planner::{build_document, plan_controller};
use crate::prompt::Prompter;
use crate::routes::RouteTable;
use crate::routes::grouper::controllers;

/// Outcome of a generation run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Name of the collection generated into
    pub collection_name: String,
    /// One `METHOD url -> path` line per written request document
    pub generated: Vec<String>,
}

/// Drives generation of request documents from a route table.
pub struct Generator {
    config: Config,
    registry: TagRegistry,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, TagRegistry::with_defaults())
    }

    /// Use a custom tag registry, e.g. with extra method tags registered.
    pub fn with_registry(config: Config, registry: TagRegistry) -> Self {
        Self { config, registry }
    }

    /// Run the full generation workflow.
    ///
    /// Fatal errors (collection parse/create failures, an unsupported
    /// HTTP method, I/O failures) abort the run; already-written
    /// documents are left in place.
    pub async fn run(&self, prompter: &dyn Prompter) -> Result<RunReport> {
        let table = RouteTable::from_file(&self.config.routes_path).await?;
        info!(
            routes = table.len(),
            path = %self.config.routes_path.display(),
            "loaded route table"
        );

        let collection = self.create_or_parse_collection(prompter).await?;

        info!("if you're finished, just terminate the command with Ctrl+C");

        let mut report = RunReport {
            collection_name: collection.name().to_string(),
            generated: Vec::new(),
        };

        for controller in controllers(&table, &self.config.app_namespace) {
            let plan = plan_controller(&table, &controller, &self.config.app_namespace);

            if plan.requests.is_empty() {
                info!(controller = %controller, "no routes for controller, skipping");
                continue;
            }

            let confirmed = prompter
                .confirm(
                    &format!(
                        "Do you want to generate {} requests for the {} controller?",
                        plan.requests.len(),
                        controller
                    ),
                    true,
                )
                .await?;

            if !confirmed {
                info!(controller = %controller, "skipped controller");
                continue;
            }

            if plan.directory.remapped {
                warn!(
                    controller = %controller,
                    "the folder name \"environments\" at the collection root is reserved in bruno, defaulting to \"environments_folder\""
                );
            }
            for route_name in &plan.defaulted_routes {
                info!(route = %route_name, "no methods specified for route, defaulting to GET");
            }

            let request_dir = self.config.collection_dir.join(&plan.directory.path);
            if !fs::try_exists(&request_dir).await? {
                fs::create_dir_all(&request_dir).await?;
            }

            // Writing individually
            let mut generated = Vec::new();
            for request in &plan.requests {
                let document = build_document(request, &self.registry)?;
                document.write(&request_dir).await?;

                generated.push(format!(
                    "{} {} -> {}",
                    request.method,
                    request.url,
                    display_path(
                        &self.config.collection_dir,
                        &plan.directory.path,
                        &document.file_name()
                    ),
                ));
            }

            if generated.is_empty() {
                warn!(controller = %controller, "no requests generated for controller");
            } else {
                println!("Generated:");
                for line in &generated {
                    println!("  • {line}");
                }
            }
            report.generated.extend(generated);
        }

        Ok(report)
    }

    async fn create_or_parse_collection(&self, prompter: &dyn Prompter) -> Result<Collection> {
        let dir = &self.config.collection_dir;
        let exists = fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false);

        if exists {
            let collection = Collection::parse(dir.as_path()).await?;
            info!(
                name = %collection.name(),
                path = %dir.display(),
                "found bruno collection"
            );
            Ok(collection)
        } else {
            let name = prompter
                .ask(
                    "How do you want to call your bruno collection?",
                    &self.config.default_collection_name,
                )
                .await?;
            let base_url = prompter
                .ask(
                    "What is your application base url?",
                    &self.config.default_base_url,
                )
                .await?;

            let collection = Collection::new(name, &base_url)?;
            collection.write(dir.as_path()).await?;
            info!(
                name = %collection.name(),
                path = %dir.display(),
                "created bruno collection"
            );
            Ok(collection)
        }
    }
}

fn display_path(collection_dir: &Path, controller_dir: &str, file_name: &str) -> String {
    let mut path = collection_dir.display().to_string().replace('\\', "/");
    if !path.ends_with('/') {
        path.push('/');
    }
    format!("{path}{controller_dir}/{file_name}")
}
