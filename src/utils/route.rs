//! URL route utilities.
//!
//! Pure functions shared by config validation and the validate command:
//! - Link type detection (external vs internal)
//! - Fragment splitting
//! - Route normalization for target lookup

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```
/// use docsite::utils::route::is_external_link;
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/guide/"));
/// assert!(!is_external_link("#install"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts
///
/// # Returns
/// A tuple of (path, fragment) where fragment is empty string if no `#` found
///
/// # Examples
/// ```
/// use docsite::utils::route::split_path_fragment;
/// assert_eq!(split_path_fragment("/guide/#install"), ("/guide/", "install"));
/// assert_eq!(split_path_fragment("/guide/"), ("/guide/", ""));
/// ```
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

/// Normalize an internal route for lookup.
///
/// Trailing slashes are not significant: `/guide/` and `/guide` name the
/// same page. The site root stays `/`.
///
/// # Examples
/// ```
/// use docsite::utils::route::normalize_route;
/// assert_eq!(normalize_route("/guide/"), "/guide");
/// assert_eq!(normalize_route("/guide"), "/guide");
/// assert_eq!(normalize_route("/"), "/");
/// ```
#[inline]
pub fn normalize_route(route: &str) -> &str {
    let trimmed = route.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://github.com/user/repo"));
        assert!(is_external_link("http://localhost:8080"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/components/button"));
        assert!(!is_external_link("./relative"));
        assert!(!is_external_link("#anchor"));
        assert!(!is_external_link(""));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("/faq/#setup"), ("/faq/", "setup"));
        assert_eq!(split_path_fragment("/faq/"), ("/faq/", ""));
        assert_eq!(split_path_fragment("#top"), ("", "top"));
    }

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route("/guide/"), "/guide");
        assert_eq!(normalize_route("/guide/installation"), "/guide/installation");
        assert_eq!(normalize_route("/"), "/");
        assert_eq!(normalize_route(""), "/");
    }
}
