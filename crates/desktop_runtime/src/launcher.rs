//! Start-menu search over the static launch catalog.

use crate::apps::{launch_catalog, LaunchItem};

/// Filters the launch catalog by `query`.
///
/// Matching is a case-insensitive substring test against each item's label and keywords. A blank
/// query returns the whole catalog. Results keep catalog order; window state is never consulted.
pub fn search_launch_items(query: &str) -> Vec<LaunchItem> {
    let needle = query.trim().to_lowercase();
    let catalog = launch_catalog();
    if needle.is_empty() {
        return catalog;
    }
    catalog
        .into_iter()
        .filter(|item| item.matches(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{apps::LaunchTarget, model::WindowIdentity};

    fn keys(items: &[LaunchItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.key).collect()
    }

    #[test]
    fn blank_query_returns_full_catalog() {
        assert_eq!(search_launch_items("   "), launch_catalog());
        assert_eq!(search_launch_items(""), launch_catalog());
    }

    #[test]
    fn label_match_is_case_insensitive() {
        let results = search_launch_items("PROJ");
        assert_eq!(keys(&results), vec!["projects"]);
        assert_eq!(
            results[0].target,
            LaunchTarget::Window(WindowIdentity::Projects)
        );
    }

    #[test]
    fn keywords_match_windows_and_links() {
        assert_eq!(keys(&search_launch_items("cv")), vec!["experience", "resume"]);
        assert_eq!(
            keys(&search_launch_items("email")),
            vec!["contact", "email"]
        );
    }

    #[test]
    fn accented_label_matches_lowercased_query() {
        assert_eq!(keys(&search_launch_items("RÉSUMÉ")), vec!["resume"]);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(search_launch_items("zzz-not-here").is_empty());
    }
}
