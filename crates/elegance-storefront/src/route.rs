//! Page routes.

/// A page the storefront can show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Product collection at `/`.
    #[default]
    Catalog,
    /// Contact page at `/contact`.
    Contact,
    /// Anything else.
    NotFound(String),
}

impl Route {
    /// Resolve a path. Any query string or fragment is ignored.
    pub fn from_path(path_with_query: &str) -> Self {
        let (path, _) = split_query(path_with_query);
        match path.trim_end_matches('/') {
            "" => Route::Catalog,
            "/contact" => Route::Contact,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> &str {
        match self {
            Route::Catalog => "/",
            Route::Contact => "/contact",
            Route::NotFound(path) => path,
        }
    }
}

/// Split `path?query#fragment` into path and query.
pub fn split_query(path_with_query: &str) -> (&str, &str) {
    let without_fragment = path_with_query
        .split('#')
        .next()
        .unwrap_or(path_with_query);
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    }
}

/// Whether a link only jumps to an anchor: it carries a `#fragment` and no
/// query string.
pub fn is_anchor_link(path_with_query: &str) -> bool {
    let (_, query) = split_query(path_with_query);
    path_with_query.contains('#') && query.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Catalog);
        assert_eq!(Route::from_path(""), Route::Catalog);
        assert_eq!(Route::from_path("/?sort=rating"), Route::Catalog);
        assert_eq!(Route::from_path("/contact"), Route::Contact);
        assert_eq!(Route::from_path("/contact/"), Route::Contact);
        assert_eq!(
            Route::from_path("/cart"),
            Route::NotFound("/cart".to_string())
        );
    }

    #[test]
    fn test_split_query() {
        assert_eq!(split_query("/?a=1#top"), ("/", "a=1"));
        assert_eq!(split_query("/contact"), ("/contact", ""));
    }

    #[test]
    fn test_is_anchor_link() {
        assert!(is_anchor_link("/#collection"));
        assert!(is_anchor_link("#collection"));
        assert!(!is_anchor_link("/"));
        assert!(!is_anchor_link("/?sort=name#collection"));
    }

    #[test]
    fn test_path() {
        assert_eq!(Route::Contact.path(), "/contact");
        assert_eq!(Route::from_path("/x").path(), "/x");
    }
}
