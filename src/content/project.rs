//! Project records and tag filtering.

use serde::{Deserialize, Serialize};

/// Pseudo-tag selecting every project.
pub const TAG_ALL: &str = "all";

/// A portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier, filesystem/URL safe.
    pub slug: String,
    pub title: String,
    /// One-line summary shown in the list view.
    pub summary: String,
    /// Long-form description shown in the detail view.
    pub details: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Filter projects by tag.
///
/// The [`TAG_ALL`] pseudo-tag (or an empty filter) selects every project;
/// otherwise a project matches when its tag list contains the filter.
pub fn filter_projects<'a>(projects: &'a [Project], tag: &str) -> Vec<&'a Project> {
    if tag.is_empty() || tag == TAG_ALL {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|project| project.tags.iter().any(|t| t == tag))
        .collect()
}

/// Distinct tags across `projects`, sorted, with [`TAG_ALL`] first.
pub fn available_tags(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = projects
        .iter()
        .flat_map(|project| project.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags.insert(0, TAG_ALL.to_string());
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(slug: &str, tags: &[&str]) -> Project {
        Project {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            summary: String::new(),
            details: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            tech: vec![],
            link: None,
        }
    }

    #[test]
    fn all_tag_selects_everything() {
        let projects = vec![project("a", &["cli"]), project("b", &["web"])];
        assert_eq!(filter_projects(&projects, TAG_ALL).len(), 2);
        assert_eq!(filter_projects(&projects, "").len(), 2);
    }

    #[test]
    fn tag_filter_matches_projects_carrying_the_tag() {
        let projects = vec![
            project("a", &["cli", "tui"]),
            project("b", &["web"]),
            project("c", &["cli"]),
        ];
        let filtered = filter_projects(&projects, "cli");
        let slugs: Vec<&str> = filtered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c"]);
    }

    #[test]
    fn unknown_tag_matches_nothing() {
        let projects = vec![project("a", &["cli"])];
        assert!(filter_projects(&projects, "embedded").is_empty());
    }

    #[test]
    fn available_tags_are_sorted_and_deduplicated_with_all_first() {
        let projects = vec![
            project("a", &["web", "cli"]),
            project("b", &["cli", "data"]),
        ];
        assert_eq!(
            available_tags(&projects),
            vec!["all", "cli", "data", "web"]
        );
    }

    #[test]
    fn untagged_catalog_still_offers_all() {
        let projects = vec![project("a", &[])];
        assert_eq!(available_tags(&projects), vec!["all"]);
    }
}
