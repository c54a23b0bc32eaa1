/// Fallback text for optional fields the studio never filled in.
pub const FALLBACK_TEXT: &str = "N/A";
pub const FALLBACK_CONCEPT: &str = "No concept description.";

/// One portfolio entry as it leaves the content-client boundary.
/// `id`, `title` and `category` are guaranteed non-empty; everything else
/// is optional and rendered with a fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub year: Option<String>,
    pub location: Option<String>,
    pub area: Option<String>,
    pub concept: Option<String>,
    pub cover_image: Option<String>,
    pub gallery: Vec<String>,
}

impl ProjectRecord {
    /// The navigable image sequence of the modal viewer: cover image first,
    /// then the gallery, with absent entries dropped. May be empty.
    pub fn image_sequence(&self) -> Vec<&str> {
        self.cover_image
            .iter()
            .chain(self.gallery.iter())
            .map(String::as_str)
            .filter(|url| !url.is_empty())
            .collect()
    }

    pub fn location_text(&self) -> &str {
        text_or_fallback(&self.location, FALLBACK_TEXT)
    }

    pub fn area_text(&self) -> &str {
        text_or_fallback(&self.area, FALLBACK_TEXT)
    }

    pub fn year_text(&self) -> &str {
        text_or_fallback(&self.year, FALLBACK_TEXT)
    }

    pub fn concept_text(&self) -> &str {
        text_or_fallback(&self.concept, FALLBACK_CONCEPT)
    }
}

fn text_or_fallback<'a>(field: &'a Option<String>, fallback: &'a str) -> &'a str {
    field.as_deref().filter(|s| !s.trim().is_empty()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectRecord {
        ProjectRecord {
            id: "p1".to_string(),
            title: "Hillside House".to_string(),
            category: "Residential".to_string(),
            year: None,
            location: Some("Pathum Thani".to_string()),
            area: Some("".to_string()),
            concept: None,
            cover_image: Some("a.jpg".to_string()),
            gallery: vec!["b.jpg".to_string(), "c.jpg".to_string()],
        }
    }

    #[test]
    fn image_sequence_is_cover_then_gallery() {
        assert_eq!(record().image_sequence(), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn image_sequence_drops_absent_entries() {
        let mut r = record();
        r.cover_image = None;
        r.gallery = vec!["".to_string(), "b.jpg".to_string()];
        assert_eq!(r.image_sequence(), vec!["b.jpg"]);
    }

    #[test]
    fn image_sequence_may_be_empty() {
        let mut r = record();
        r.cover_image = None;
        r.gallery.clear();
        assert!(r.image_sequence().is_empty());
    }

    #[test]
    fn optional_fields_render_fallback_text() {
        let r = record();
        assert_eq!(r.location_text(), "Pathum Thani");
        assert_eq!(r.area_text(), FALLBACK_TEXT);
        assert_eq!(r.year_text(), FALLBACK_TEXT);
        assert_eq!(r.concept_text(), FALLBACK_CONCEPT);
    }
}
