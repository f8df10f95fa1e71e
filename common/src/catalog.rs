//! Project catalog, category filter and detail selection
//!
//! The catalog is an immutable, ordered collection of projects built once at
//! startup. Two independent pieces of state sit on top of it:
//! - FilterState: which category constrains the visible subset
//! - SelectionState: which project, if any, is shown in the detail view
//!
//! Both are plain owned values; the frontend keeps them in signals and calls
//! the pure update methods here.

use crate::error::{Error, Result};
use crate::types::ProjectRecord;

/// Sentinel category matching every project.
pub const ALL_CATEGORY: &str = "All";

/// Immutable, ordered project collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Looks up a project by id.
    pub fn project(&self, id: u32) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Returns the filter labels: "All" first, then every category present in
    /// at least one project, in first-appearance order, without duplicates.
    pub fn categories(&self) -> Vec<String> {
        let mut labels = vec![ALL_CATEGORY.to_string()];
        for project in &self.projects {
            for category in &project.categories {
                if !labels.iter().any(|l| l == category) {
                    labels.push(category.clone());
                }
            }
        }
        labels
    }
}

/// Active category filter over a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
        }
    }
}

impl FilterState {
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// Switches the active category. A label matching no project is valid and
    /// simply yields an empty visible set.
    pub fn set_active_category(&mut self, label: impl Into<String>) {
        self.active_category = label.into();
    }

    /// Projects visible under the active category, in catalog order.
    pub fn visible_projects<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProjectRecord> {
        catalog
            .projects()
            .iter()
            .filter(|p| self.matches(p))
            .collect()
    }

    fn matches(&self, project: &ProjectRecord) -> bool {
        self.active_category == ALL_CATEGORY
            || project.categories.iter().any(|c| *c == self.active_category)
    }
}

/// At most one project designated for the expanded detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<u32>,
}

impl SelectionState {
    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    /// Designates a project by id. Selecting replaces any previous selection.
    /// An id absent from the catalog is a caller contract violation: the
    /// state is left unchanged and `Error::ProjectNotFound` is returned.
    pub fn select(&mut self, catalog: &Catalog, id: u32) -> Result<()> {
        if catalog.project(id).is_none() {
            return Err(Error::ProjectNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Clears the selection. Valid from any state.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    /// Resolves the selected project against the catalog.
    pub fn selected_project<'a>(&self, catalog: &'a Catalog) -> Option<&'a ProjectRecord> {
        self.selected.and_then(|id| catalog.project(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, categories: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id,
            title: format!("Project {}", id),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            project(1, &["Machine Learning", "Data Science"]),
            project(2, &["NLP"]),
            project(3, &["Computer Vision"]),
        ])
    }

    #[test]
    fn test_categories_all_first_no_duplicates() {
        let catalog = Catalog::new(vec![
            project(1, &["Machine Learning", "Data Science"]),
            project(2, &["NLP", "Machine Learning"]),
            project(3, &["Computer Vision"]),
        ]);

        let categories = catalog.categories();
        assert_eq!(
            categories,
            vec![
                "All",
                "Machine Learning",
                "Data Science",
                "NLP",
                "Computer Vision"
            ]
        );
    }

    #[test]
    fn test_filter_by_category_keeps_catalog_order() {
        let catalog = Catalog::new(vec![
            project(1, &["Machine Learning"]),
            project(2, &["NLP"]),
            project(3, &["Machine Learning", "Computer Vision"]),
        ]);

        let mut filter = FilterState::default();
        filter.set_active_category("Machine Learning");

        let visible: Vec<u32> = filter
            .visible_projects(&catalog)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(visible, vec![1, 3]);
    }

    #[test]
    fn test_filter_all_returns_full_catalog() {
        let catalog = sample_catalog();
        let filter = FilterState::default();

        let visible: Vec<u32> = filter
            .visible_projects(&catalog)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(visible, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_multi_category_record_appears_once() {
        let catalog = Catalog::new(vec![project(1, &["Machine Learning", "Data Science"])]);

        let mut filter = FilterState::default();
        filter.set_active_category("Machine Learning");
        assert_eq!(filter.visible_projects(&catalog).len(), 1);

        filter.set_active_category(ALL_CATEGORY);
        assert_eq!(filter.visible_projects(&catalog).len(), 1);
    }

    #[test]
    fn test_filter_unknown_category_is_empty_not_error() {
        let catalog = sample_catalog();

        let mut filter = FilterState::default();
        filter.set_active_category("Quantum Computing");

        assert!(filter.visible_projects(&catalog).is_empty());
        assert_eq!(filter.active_category(), "Quantum Computing");
    }

    #[test]
    fn test_filter_reapply_is_idempotent() {
        let catalog = sample_catalog();

        let mut filter = FilterState::default();
        filter.set_active_category("NLP");
        let first: Vec<u32> = filter
            .visible_projects(&catalog)
            .iter()
            .map(|p| p.id)
            .collect();

        filter.set_active_category("NLP");
        let second: Vec<u32> = filter
            .visible_projects(&catalog)
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![2]);
    }

    #[test]
    fn test_select_valid_id() {
        let catalog = sample_catalog();
        let mut selection = SelectionState::default();

        selection.select(&catalog, 2).expect("select failed");
        assert_eq!(selection.selected_id(), Some(2));
        assert_eq!(selection.selected_project(&catalog).unwrap().id, 2);
    }

    #[test]
    fn test_select_is_idempotent() {
        let catalog = sample_catalog();
        let mut selection = SelectionState::default();

        selection.select(&catalog, 1).expect("select failed");
        selection.select(&catalog, 1).expect("select failed");
        assert_eq!(selection.selected_id(), Some(1));
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let catalog = sample_catalog();
        let mut selection = SelectionState::default();

        selection.select(&catalog, 1).expect("select failed");
        selection.select(&catalog, 3).expect("select failed");
        assert_eq!(selection.selected_id(), Some(3));
    }

    #[test]
    fn test_select_unknown_id_fails_and_keeps_state() {
        let catalog = sample_catalog();
        let mut selection = SelectionState::default();
        selection.select(&catalog, 2).expect("select failed");

        let err = selection.select(&catalog, 99).unwrap_err();
        assert_eq!(err, Error::ProjectNotFound(99));
        assert_eq!(selection.selected_id(), Some(2));
    }

    #[test]
    fn test_dismiss_from_any_state() {
        let catalog = sample_catalog();
        let mut selection = SelectionState::default();

        selection.dismiss();
        assert_eq!(selection.selected_id(), None);

        selection.select(&catalog, 1).expect("select failed");
        selection.dismiss();
        assert_eq!(selection.selected_id(), None);
    }

    #[test]
    fn test_gallery_flow_on_mixed_catalog() {
        let catalog = sample_catalog();
        let mut filter = FilterState::default();
        let mut selection = SelectionState::default();

        filter.set_active_category("Machine Learning");
        let visible: Vec<u32> = filter
            .visible_projects(&catalog)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(visible, vec![1]);

        filter.set_active_category(ALL_CATEGORY);
        let visible: Vec<u32> = filter
            .visible_projects(&catalog)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(visible, vec![1, 2, 3]);

        selection.select(&catalog, 2).expect("select failed");
        assert_eq!(selection.selected_id(), Some(2));

        assert_eq!(
            selection.select(&catalog, 99),
            Err(Error::ProjectNotFound(99))
        );
        assert_eq!(selection.selected_id(), Some(2));
    }

    #[test]
    fn test_selection_independent_of_filter() {
        let catalog = sample_catalog();
        let mut filter = FilterState::default();
        let mut selection = SelectionState::default();

        selection.select(&catalog, 3).expect("select failed");
        filter.set_active_category("NLP");

        // Narrowing the filter does not touch the selection.
        assert_eq!(selection.selected_id(), Some(3));
        let visible: Vec<u32> = filter
            .visible_projects(&catalog)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(visible, vec![2]);
    }
}
