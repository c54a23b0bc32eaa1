use super::models::ProjectRecord;

pub const ALL_CATEGORY: &str = "All";

/// Fetch status of the project catalog. The store call either hasn't
/// resolved yet, resolved with data (possibly zero records), or failed.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// In-memory project list plus the active category filter.
/// Filtering and counts are recomputed on read; there is no cached
/// filtered list to go stale.
pub struct Catalog {
    projects: Vec<ProjectRecord>,
    active_category: String,
    status: CatalogStatus,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            active_category: ALL_CATEGORY.to_string(),
            status: CatalogStatus::Loading,
        }
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    /// Marks the catalog as loading again ahead of a re-issued fetch.
    /// The previous records stay visible until the new result arrives.
    pub fn begin_reload(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<ProjectRecord>, String>) {
        match result {
            Ok(projects) => {
                self.projects = projects;
                self.status = CatalogStatus::Loaded;
            }
            Err(message) => {
                self.projects.clear();
                self.status = CatalogStatus::Failed(message);
            }
        }
    }

    pub fn all_projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// Unknown categories are accepted; they just filter down to nothing.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.active_category = category.into();
    }

    pub fn filtered_projects(&self) -> Vec<&ProjectRecord> {
        self.projects_in(&self.active_category)
    }

    pub fn count(&self, category: &str) -> usize {
        self.projects_in(category).len()
    }

    /// Category tabs: "All" first, then each observed category in
    /// first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        for project in &self.projects {
            if !categories.iter().any(|c| c == &project.category) {
                categories.push(project.category.clone());
            }
        }
        categories
    }

    pub fn project_by_id(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn projects_in(&self, category: &str) -> Vec<&ProjectRecord> {
        self.projects
            .iter()
            .filter(|p| category == ALL_CATEGORY || p.category == category)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: format!("Project {id}"),
            category: category.to_string(),
            year: None,
            location: None,
            area: None,
            concept: None,
            cover_image: None,
            gallery: Vec::new(),
        }
    }

    fn loaded_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.apply_fetch(Ok(vec![
            project("p1", "Residential"),
            project("p2", "Commercial"),
            project("p3", "Residential"),
        ]));
        catalog
    }

    #[test]
    fn starts_loading_and_empty() {
        let catalog = Catalog::new();
        assert_eq!(*catalog.status(), CatalogStatus::Loading);
        assert!(catalog.all_projects().is_empty());
        assert_eq!(catalog.active_category(), ALL_CATEGORY);
    }

    #[test]
    fn all_filter_is_identity() {
        let catalog = loaded_catalog();
        let filtered = catalog.filtered_projects();
        assert_eq!(filtered.len(), catalog.all_projects().len());
        for (filtered, original) in filtered.iter().zip(catalog.all_projects()) {
            assert_eq!(filtered.id, original.id);
        }
    }

    #[test]
    fn category_filter_preserves_order() {
        let mut catalog = loaded_catalog();
        catalog.set_category("Residential");
        let ids: Vec<&str> =
            catalog.filtered_projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }

    #[test]
    fn counts_match_filtered_lengths() {
        let catalog = loaded_catalog();
        for category in ["All", "Residential", "Commercial", "Exhibition"] {
            assert_eq!(
                catalog.count(category),
                catalog
                    .all_projects()
                    .iter()
                    .filter(|p| category == ALL_CATEGORY || p.category == category)
                    .count()
            );
        }
        assert_eq!(catalog.count("Residential"), 2);
        assert_eq!(catalog.count("All"), 3);
        assert_eq!(catalog.count("Exhibition"), 0);
    }

    #[test]
    fn unknown_category_yields_empty_list() {
        let mut catalog = loaded_catalog();
        catalog.set_category("Exhibition");
        assert!(catalog.filtered_projects().is_empty());
    }

    #[test]
    fn categories_in_first_seen_order() {
        let catalog = loaded_catalog();
        assert_eq!(catalog.categories(), vec!["All", "Residential", "Commercial"]);
    }

    #[test]
    fn failed_fetch_leaves_empty_catalog_with_message() {
        let mut catalog = loaded_catalog();
        catalog.begin_reload();
        assert_eq!(*catalog.status(), CatalogStatus::Loading);
        assert_eq!(catalog.all_projects().len(), 3);

        catalog.apply_fetch(Err("connection refused".to_string()));
        assert_eq!(*catalog.status(), CatalogStatus::Failed("connection refused".to_string()));
        assert!(catalog.all_projects().is_empty());
        assert!(catalog.filtered_projects().is_empty());
    }
}
