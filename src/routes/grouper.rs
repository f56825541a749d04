//! Route classification and controller grouping.
//!
//! Filters the route table down to application-owned controllers, groups
//! routes per controller, and derives the collection sub-directory each
//! controller's requests are written to.

use std::collections::BTreeSet;

use crate::routes::{Route, RouteTable};
use crate::utils::to_snake_case;

/// Bruno reserves the `environments` folder at the collection root for
/// environment files, so a controller namespace starting there is remapped.
const RESERVED_ROOT_FOLDER: &str = "environments";
const RESERVED_ROOT_REMAP: &str = "environments_folder";

/// Derived output directory for one controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDirectory {
    /// Slash-joined, snake_cased path relative to the collection root
    pub path: String,
    /// Whether the reserved `environments` root segment was remapped
    pub remapped: bool,
}

/// List application-owned controller identifiers, sorted and deduplicated.
///
/// A route qualifies only when its `_controller` default starts with the
/// application namespace prefix; framework, vendor, and inline-callable
/// actions are excluded, as are routes with no `_controller` default. The
/// `::action` suffix is stripped so each controller class appears once.
pub fn controllers(table: &RouteTable, app_namespace: &str) -> Vec<String> {
    let unique: BTreeSet<String> = table
        .iter()
        .filter_map(|(_, route)| route.controller())
        .filter(|action| action.starts_with(app_namespace))
        .map(|action| {
            action
                .split_once("::")
                .map_or(action, |(class, _)| class)
                .to_string()
        })
        .collect();

    unique.into_iter().collect()
}

/// All routes handled by `controller`, in the router's enumeration order.
pub fn routes_for<'a>(table: &'a RouteTable, controller: &str) -> Vec<(&'a str, &'a Route)> {
    table
        .iter()
        .filter(|(_, route)| {
            route
                .controller()
                .is_some_and(|action| action.starts_with(controller))
        })
        .collect()
}

/// Derive the collection sub-directory for a controller identifier.
///
/// The application namespace prefix and every `Controller\` namespace
/// segment are stripped, a trailing `Controller` class suffix is dropped,
/// and the remaining segments are snake_cased and slash-joined. The
/// reserved `environments` name is remapped on the first segment only.
///
/// `App\Controller\Admin\UserController` becomes `admin/user`.
pub fn controller_directory(controller: &str, app_namespace: &str) -> ControllerDirectory {
    let stripped = controller.strip_prefix(app_namespace).unwrap_or(controller);
    let stripped = stripped.replace("Controller\\", "");

    let mut segments: Vec<String> = stripped
        .split('\\')
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect();

    if let Some(last) = segments.last_mut() {
        if let Some(class) = last.strip_suffix("Controller") {
            if !class.is_empty() {
                *last = class.to_string();
            }
        }
    }

    let mut segments: Vec<String> = segments.iter().map(|s| to_snake_case(s)).collect();

    let mut remapped = false;
    if let Some(first) = segments.first_mut() {
        if first == RESERVED_ROOT_FOLDER {
            *first = RESERVED_ROOT_REMAP.to_string();
            remapped = true;
        }
    }

    ControllerDirectory {
        path: segments.join("/"),
        remapped,
    }
}
