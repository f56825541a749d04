//! URL templating and path-parameter extraction.
//!
//! Rewrites a route's raw path pattern into a Bruno request URL: `{name}`
//! placeholders become `:name` parameters (camelCased), and the reserved
//! `_format` placeholder is resolved from the route's requirement and
//! default. The companion extractor pulls the defaults for every parameter
//! that survived templating.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value as JsonValue};

use crate::bru::BlockEntry;
use crate::routes::Route;
use crate::utils::to_camel_case;

/// `{name}` placeholder with an optional leading dot for suffix-style
/// segments (`/items.{_format}`).
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<dot>\.?)\{(?P<name>[^}]+)\}").unwrap());

const FORMAT_PLACEHOLDER: &str = "_format";

/// Rewrite a raw path pattern into a templated request URL.
///
/// Every placeholder becomes `:camelCasedName`, keeping a leading dot
/// verbatim. The reserved `_format` placeholder is special-cased:
///
/// - with a requirement entry (any entry, even an empty pattern) and a
///   truthy default, the literal default value is substituted;
/// - with a requirement entry but no usable default, it becomes the
///   `:format` parameter;
/// - without a requirement entry it is optional and removed entirely,
///   leading dot included.
///
/// A path without placeholders is returned unchanged. The caller prefixes
/// the result with the `{{baseUrl}}` variable.
pub fn template_url(
    path: &str,
    defaults: &Map<String, JsonValue>,
    requirements: &Map<String, JsonValue>,
) -> String {
    PLACEHOLDER_RE
        .replace_all(path, |caps: &Captures| {
            let dot = caps.name("dot").map_or("", |m| m.as_str());
            let name = &caps["name"];

            if name == FORMAT_PLACEHOLDER {
                if requirements.contains_key(name) {
                    return match defaults.get(name) {
                        Some(value) if is_truthy(value) => {
                            format!("{dot}{}", scalar_string(value))
                        }
                        _ => format!("{dot}:{}", to_camel_case(name)),
                    };
                }
                // Optional format suffix, omit entirely
                return String::new();
            }

            format!("{dot}:{}", to_camel_case(name))
        })
        .into_owned()
}

/// Extract path-parameter defaults for a templated URL.
///
/// For each (name, default) pair in the route's defaults, in iteration
/// order: camelCase the name and keep it iff the templated URL contains
/// the literal `:camelName` substring and the default is truthy.
pub fn path_param_defaults(route: &Route, url: &str) -> Vec<BlockEntry> {
    route
        .defaults
        .iter()
        .filter_map(|(name, value)| {
            let camel = to_camel_case(name);
            let param = format!(":{camel}");
            (url.contains(&param) && is_truthy(value))
                .then(|| BlockEntry::new(camel, scalar_string(value)))
        })
        .collect()
}

/// PHP-style truthiness for route default scalars: null, `false`, zero,
/// the empty string, and `"0"` are all falsy.
pub(crate) fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty() && s != "0",
        JsonValue::Array(a) => !a.is_empty(),
        JsonValue::Object(o) => !o.is_empty(),
    }
}

/// Render a default scalar as its URL/document text, without JSON quoting.
pub(crate) fn scalar_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
