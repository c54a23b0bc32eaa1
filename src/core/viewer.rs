use super::models::ProjectRecord;

/// The project currently shown in the modal, with its derived image
/// sequence and the index of the displayed image. The index is always
/// in bounds while the images are non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenProject {
    project: ProjectRecord,
    images: Vec<String>,
    index: usize,
}

impl OpenProject {
    pub fn project(&self) -> &ProjectRecord {
        &self.project
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }
}

/// Modal viewer state machine: closed, or open on one project.
/// next/prev wrap around in both directions and are no-ops when the
/// project has fewer than two images or the viewer is closed.
pub struct Viewer {
    open: Option<OpenProject>,
}

impl Viewer {
    pub fn new() -> Self {
        Self { open: None }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open(&self) -> Option<&OpenProject> {
        self.open.as_ref()
    }

    /// Opens the viewer on `project` at image index 0. Selecting while
    /// already open switches project and resets the index.
    pub fn select(&mut self, project: &ProjectRecord) {
        let images = project.image_sequence().into_iter().map(str::to_string).collect();
        self.open = Some(OpenProject { project: project.clone(), images, index: 0 });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn next(&mut self) {
        if let Some(open) = &mut self.open {
            if open.images.len() > 1 {
                open.index = (open.index + 1) % open.images.len();
            }
        }
    }

    pub fn prev(&mut self) {
        if let Some(open) = &mut self.open {
            let count = open.images.len();
            if count > 1 {
                // usize cannot go negative, so step forward by count - 1
                // instead of subtracting one.
                open.index = (open.index + count - 1) % count;
            }
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_images(cover: Option<&str>, gallery: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: "p1".to_string(),
            title: "Riverside Pavilion".to_string(),
            category: "Commercial".to_string(),
            year: None,
            location: None,
            area: None,
            concept: None,
            cover_image: cover.map(str::to_string),
            gallery: gallery.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn starts_closed_and_closed_transitions_are_inert() {
        let mut viewer = Viewer::new();
        assert!(!viewer.is_open());
        viewer.next();
        viewer.prev();
        viewer.close();
        assert!(!viewer.is_open());
    }

    #[test]
    fn select_opens_at_index_zero() {
        let mut viewer = Viewer::new();
        viewer.select(&project_with_images(Some("a.jpg"), &["b.jpg", "c.jpg"]));
        viewer.next();
        assert_eq!(viewer.open().unwrap().index(), 1);

        // Selecting another project while open resets the index.
        let mut other = project_with_images(Some("x.jpg"), &["y.jpg"]);
        other.id = "p2".to_string();
        viewer.select(&other);
        let open = viewer.open().unwrap();
        assert_eq!(open.project().id, "p2");
        assert_eq!(open.index(), 0);
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut viewer = Viewer::new();
        viewer.select(&project_with_images(Some("a.jpg"), &["b.jpg", "c.jpg"]));
        assert_eq!(viewer.open().unwrap().current_image(), Some("a.jpg"));

        viewer.next();
        assert_eq!(viewer.open().unwrap().current_image(), Some("b.jpg"));
        viewer.next();
        assert_eq!(viewer.open().unwrap().current_image(), Some("c.jpg"));
        viewer.next();
        assert_eq!(viewer.open().unwrap().current_image(), Some("a.jpg"));

        viewer.prev();
        assert_eq!(viewer.open().unwrap().current_image(), Some("c.jpg"));
    }

    #[test]
    fn cycling_image_count_times_returns_to_start() {
        let mut viewer = Viewer::new();
        let project = project_with_images(Some("a.jpg"), &["b.jpg", "c.jpg", "d.jpg"]);
        viewer.select(&project);
        viewer.next();
        let start = viewer.open().unwrap().index();

        let count = viewer.open().unwrap().images().len();
        for _ in 0..count {
            viewer.next();
        }
        assert_eq!(viewer.open().unwrap().index(), start);

        for _ in 0..count {
            viewer.prev();
        }
        assert_eq!(viewer.open().unwrap().index(), start);
    }

    #[test]
    fn single_image_navigation_is_a_no_op() {
        let mut viewer = Viewer::new();
        viewer.select(&project_with_images(Some("a.jpg"), &[]));
        viewer.next();
        viewer.prev();
        let open = viewer.open().unwrap();
        assert_eq!(open.index(), 0);
        assert_eq!(open.current_image(), Some("a.jpg"));
    }

    #[test]
    fn empty_image_sequence_never_indexes() {
        let mut viewer = Viewer::new();
        viewer.select(&project_with_images(None, &[]));
        let open = viewer.open().unwrap();
        assert!(open.images().is_empty());
        assert_eq!(open.current_image(), None);

        viewer.next();
        viewer.prev();
        assert_eq!(viewer.open().unwrap().current_image(), None);
    }

    #[test]
    fn close_returns_to_closed_from_any_open_state() {
        let mut viewer = Viewer::new();
        viewer.select(&project_with_images(Some("a.jpg"), &["b.jpg"]));
        viewer.next();
        viewer.close();
        assert!(!viewer.is_open());
        assert!(viewer.open().is_none());
    }
}
