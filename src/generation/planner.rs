//! Pure planning phase of the generation workflow.
//!
//! Computes everything a run will generate (controllers, request names,
//! templated URLs, path-parameter defaults) without touching the
//! filesystem or the prompt collaborator, so the whole plan is testable
//! offline. Execution lives in the orchestrator.

use crate::bru::{Block, BlockEntry, BruFile, TagRegistry};
use crate::error::Result;
use crate::generation::url::{path_param_defaults, template_url};
use crate::routes::RouteTable;
use crate::routes::grouper::{ControllerDirectory, controller_directory, routes_for};
use crate::utils::to_snake_case;

/// Base-URL variable token prefixed to every request URL.
const BASE_URL_TOKEN: &str = "{{baseUrl}}";

/// One request document to be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRequest {
    /// Route the request was derived from
    pub route_name: String,
    /// HTTP verb, as declared on the route
    pub method: String,
    /// Request name, `snake_case(method_routeName)`; also the file stem
    pub name: String,
    /// Templated URL including the base-URL token
    pub url: String,
    /// Path-parameter defaults, in route-defaults order
    pub path_params: Vec<BlockEntry>,
}

/// Everything to generate for one controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerPlan {
    pub controller: String,
    pub directory: ControllerDirectory,
    pub requests: Vec<PlannedRequest>,
    /// Routes that declared no methods and were defaulted to GET
    pub defaulted_routes: Vec<String>,
}

/// Plan all requests for one controller.
///
/// Routes keep the router's enumeration order; a route without methods is
/// planned as a single GET request and recorded in `defaulted_routes` so
/// the orchestrator can report it.
pub fn plan_controller(
    table: &RouteTable,
    controller: &str,
    app_namespace: &str,
) -> ControllerPlan {
    let directory = controller_directory(controller, app_namespace);
    let mut requests = Vec::new();
    let mut defaulted_routes = Vec::new();

    for (route_name, route) in routes_for(table, controller) {
        let url = format!(
            "{BASE_URL_TOKEN}{}",
            template_url(&route.path, &route.defaults, &route.requirements)
        );

        let methods = if route.methods.is_empty() {
            defaulted_routes.push(route_name.to_string());
            vec!["GET".to_string()]
        } else {
            route.methods.clone()
        };

        for method in methods {
            let name = to_snake_case(&format!("{method}_{route_name}"));
            requests.push(PlannedRequest {
                route_name: route_name.to_string(),
                method,
                name,
                url: url.clone(),
                path_params: path_param_defaults(route, &url),
            });
        }
    }

    ControllerPlan {
        controller: controller.to_string(),
        directory,
        requests,
        defaulted_routes,
    }
}

/// Build the request document for one planned request.
///
/// The document carries exactly one meta block and one method block; a
/// `params:path` block is added only when the plan extracted defaults.
/// Fails when the method has no registered tag variant, which aborts the
/// run; there is no partial-document recovery.
pub fn build_document(request: &PlannedRequest, registry: &TagRegistry) -> Result<BruFile> {
    let mut file = BruFile::new(request.name.as_str());

    file.add_block(Block::with_entries(
        "meta",
        vec![
            BlockEntry::new("name", request.name.as_str()),
            BlockEntry::new("type", "http"),
        ],
    ));

    let mut tag = registry.resolve(&request.method)?;
    tag.push("url", request.url.as_str());
    file.add_block(tag.into_block());

    if !request.path_params.is_empty() {
        file.add_block(Block::with_entries(
            "params:path",
            request.path_params.clone(),
        ));
    }

    Ok(file)
}
