use serde::Deserialize;

use crate::core::models::ProjectRecord;

/// Response envelope of the content store's query endpoint.
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub result: Option<T>,
}

/// A project document as the store returns it: every field may be
/// missing or null. Validation into [`ProjectRecord`] happens at this
/// boundary so nothing downstream sees a half-formed record.
#[derive(Debug, Deserialize)]
pub struct WireProject {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub location: Option<String>,
    pub area: Option<String>,
    pub concept: Option<String>,
    #[serde(rename = "image")]
    pub cover_image: Option<String>,
    // Gallery entries resolve to null when the asset reference is broken.
    pub gallery: Option<Vec<Option<String>>>,
}

impl WireProject {
    fn into_record(self) -> Option<ProjectRecord> {
        let id = non_empty(self.id)?;
        let title = non_empty(self.title)?;
        let category = non_empty(self.category)?;

        Some(ProjectRecord {
            id,
            title,
            category,
            year: self.year,
            location: self.location,
            area: self.area,
            concept: self.concept,
            cover_image: self.cover_image.filter(|url| !url.is_empty()),
            gallery: self
                .gallery
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .filter(|url| !url.is_empty())
                .collect(),
        })
    }
}

/// Converts wire documents to records, dropping malformed ones and
/// preserving store order.
pub fn validate_records(raw: Vec<WireProject>) -> Vec<ProjectRecord> {
    raw.into_iter()
        .filter_map(|wire| {
            let label = wire.id.clone().unwrap_or_else(|| "<no id>".to_string());
            match wire.into_record() {
                Some(record) => Some(record),
                None => {
                    eprintln!("Skipping malformed project record: {}", label);
                    None
                }
            }
        })
        .collect()
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}
