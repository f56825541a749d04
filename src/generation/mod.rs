//! Route-to-request-document compilation.
//!
//! Split into a pure planning phase (URL templating, request naming,
//! path-parameter extraction) and an execution phase (prompts, directory
//! creation, per-document writes).

pub mod orchestrator;
pub mod planner;
pub mod url;

pub use orchestrator::{Generator, RunReport};
pub use planner::{ControllerPlan, PlannedRequest, build_document, plan_controller};
pub use url::{path_param_defaults, template_url};
