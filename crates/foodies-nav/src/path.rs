//! Active link resolution.

/// Strip one trailing slash, so `/menu/` and `/menu` compare equal.
///
/// The site root `/` normalizes to the empty string.
pub fn normalize_path(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Index of the first link whose path matches `current_path`.
///
/// `link_paths` yields each link's resolved pathname, or `None` when the
/// href could not be resolved (such a link is never active).
pub fn active_link<'a>(
    link_paths: impl IntoIterator<Item = Option<&'a str>>,
    current_path: &str,
) -> Option<usize> {
    let current = normalize_path(current_path);
    link_paths
        .into_iter()
        .position(|path| path.is_some_and(|p| normalize_path(p) == current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_path("/menu/"), "/menu");
        assert_eq!(normalize_path("/menu"), "/menu");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path("/a//"), "/a/");
    }

    #[test]
    fn test_second_link_active() {
        let links = [Some("/"), Some("/menu.html"), Some("/about.html")];
        assert_eq!(active_link(links, "/menu.html"), Some(1));
    }

    #[test]
    fn test_trailing_slash_ignored() {
        let links = [Some("/"), Some("/menu/")];
        assert_eq!(active_link(links, "/menu"), Some(1));
        assert_eq!(active_link([Some("/menu")], "/menu/"), Some(0));
    }

    #[test]
    fn test_root_matches_root() {
        let links = [Some("/"), Some("/menu")];
        assert_eq!(active_link(links, "/"), Some(0));
    }

    #[test]
    fn test_no_match() {
        let links = [Some("/"), Some("/menu")];
        assert_eq!(active_link(links, "/contact"), None);
    }

    #[test]
    fn test_unresolvable_link_skipped() {
        let links = [None, Some("/menu")];
        assert_eq!(active_link(links, "/menu"), Some(1));
    }

    #[test]
    fn test_first_match_wins() {
        let links = [Some("/menu"), Some("/menu/")];
        assert_eq!(active_link(links, "/menu"), Some(0));
    }
}
