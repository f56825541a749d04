//! String transformation utilities for request and folder naming.
//!
//! Route names, HTTP methods, and controller namespace segments all need to
//! be normalized before they become file names (`snake_case`) or URL
//! parameters (`camelCase`).

/// Converts a string to snake_case format for request file names.
///
/// Handles PascalCase and camelCase words as well as inputs already
/// containing separators (`_`, `-`, `.`, spaces), which are normalized to a
/// single underscore.
///
/// # Examples
/// ```
/// use brugen::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("GET_app_user_list"), "get_app_user_list");
/// assert_eq!(to_snake_case("ApiToken"), "api_token");
/// assert_eq!(to_snake_case("app.user.list"), "app_user_list");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            // Word boundary only after a lowercase run
            if prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else if ch.is_alphanumeric() {
            out.push(ch);
            prev_lower = ch.is_lowercase();
        } else {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        }
    }

    out.trim_end_matches('_').to_string()
}

/// Converts a string to camelCase format for URL parameter names.
///
/// The input is normalized through [`to_snake_case`] first, so leading
/// underscores disappear: the router-internal `_format` placeholder becomes
/// the `format` parameter.
///
/// # Examples
/// ```
/// use brugen::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("user_id"), "userId");
/// assert_eq!(to_camel_case("_format"), "format");
/// assert_eq!(to_camel_case("id"), "id");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let snake = to_snake_case(s);
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;

    for ch in snake.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}
