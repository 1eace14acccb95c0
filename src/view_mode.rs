//! View-Mode Resolver
//!
//! Read-only "customer view" is toggled by the `?view=only` query
//! parameter. Resolved once per page load and never persisted.

const VIEW_PARAM: &str = "view";
const VIEW_ONLY_VALUE: &str = "only";

/// Rendering mode for this page load
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewMode {
    pub read_only: bool,
}

/// Resolve the view mode from the current page URL
pub fn resolve() -> ViewMode {
    let query = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    ViewMode {
        read_only: is_view_only(&query),
    }
}

/// `true` iff the query string carries `view=only`
pub fn is_view_only(query: &str) -> bool {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').any(|pair| {
        let mut parts = pair.splitn(2, '=');
        parts.next() == Some(VIEW_PARAM) && parts.next() == Some(VIEW_ONLY_VALUE)
    })
}

/// The shareable customer link for a given page origin
pub fn view_only_url(origin: &str) -> String {
    format!("{}/?{}={}", origin.trim_end_matches('/'), VIEW_PARAM, VIEW_ONLY_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_only_requires_the_exact_parameter() {
        assert!(is_view_only("?view=only"));
        assert!(is_view_only("view=only"));
        assert!(is_view_only("?table=4&view=only"));
        assert!(is_view_only("?view=only&lang=en"));
    }

    #[test]
    fn everything_else_is_editable() {
        assert!(!is_view_only(""));
        assert!(!is_view_only("?"));
        assert!(!is_view_only("?view=all"));
        assert!(!is_view_only("?view="));
        assert!(!is_view_only("?views=only"));
        assert!(!is_view_only("?only=view"));
    }

    #[test]
    fn share_url_points_at_the_view_mode() {
        assert_eq!(view_only_url("https://menu.example"), "https://menu.example/?view=only");
        assert_eq!(view_only_url("https://menu.example/"), "https://menu.example/?view=only");
    }
}
