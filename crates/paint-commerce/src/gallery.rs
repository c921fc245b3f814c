//! Portfolio gallery for the home page.
//!
//! Projects are tagged with a lower-case kind and browsed through tabs. The
//! `all` tab shows everything; any other tab is an exact tag match.

use crate::ids::ProjectId;
use serde::{Deserialize, Serialize};

/// Tab that shows every project.
pub const ALL_PROJECTS: &str = "all";

/// Project tags of the built-in portfolio, in tab order.
pub const PROJECT_KINDS: [&str; 4] = ["interior", "exterior", "design", "commercial"];

/// A completed painting project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub category: String,
    pub image: String,
}

/// An ordered collection of portfolio projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gallery {
    projects: Vec<Project>,
}

impl Gallery {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The built-in portfolio.
    pub fn portfolio() -> Self {
        let projects = [
            (1, "interior", "/int1.jpg"),
            (2, "exterior", "/HOUSE6.jpg"),
            (3, "design", "/int2.jpg"),
            (4, "commercial", "/EXT1.jpg"),
            (5, "interior", "/int3.jpg"),
            (6, "exterior", "/HOUSE2.jpg"),
        ]
        .into_iter()
        .map(|(id, category, image)| Project {
            id: ProjectId::new(id),
            category: category.to_string(),
            image: image.to_string(),
        })
        .collect();
        Self { projects }
    }

    /// Tabs: `all` followed by each tag in first-appearance order.
    pub fn tabs(&self) -> Vec<&str> {
        let mut tabs = vec![ALL_PROJECTS];
        for project in &self.projects {
            if !tabs.contains(&project.category.as_str()) {
                tabs.push(&project.category);
            }
        }
        tabs
    }

    /// Projects shown under `tab`, in gallery order.
    pub fn filter(&self, tab: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| tab == ALL_PROJECTS || p.category == tab)
            .collect()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tab() {
        let gallery = Gallery::portfolio();
        assert_eq!(gallery.filter("all").len(), 6);
    }

    #[test]
    fn test_tab_filter_keeps_order() {
        let gallery = Gallery::portfolio();
        let ids: Vec<u64> = gallery.filter("interior").iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_unknown_tab_is_empty() {
        let gallery = Gallery::portfolio();
        assert!(gallery.filter("industrial").is_empty());
        assert!(gallery.filter("Interior").is_empty());
    }

    #[test]
    fn test_tabs() {
        let gallery = Gallery::portfolio();
        let mut expected = vec![ALL_PROJECTS];
        expected.extend(PROJECT_KINDS);
        assert_eq!(gallery.tabs(), expected);
    }
}
