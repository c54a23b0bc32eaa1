use reqwest::Client;

use super::types::{
    validate_records,
    QueryResponse,
    WireProject,
};
use crate::{
    core::{
        models::ProjectRecord,
        GalleryError,
    },
    persistence::StoreConfig,
};

/// Fixed projection over every document of type "project". Image fields
/// are resolved to CDN URLs on the store side.
const PROJECTS_QUERY: &str = r#"*[_type == "project"]{
  _id,
  title,
  category,
  year,
  location,
  "image": image.asset->url,
  "gallery": gallery[].asset->url,
  concept,
  area
}"#;

/// Single-shot catalog query. No retry, no polling; the caller decides
/// what a failure means for the UI.
pub async fn fetch_projects(config: &StoreConfig) -> Result<Vec<ProjectRecord>, GalleryError> {
    let response: QueryResponse<Vec<WireProject>> = Client::new()
        .get(config.query_url())
        .query(&[("query", PROJECTS_QUERY)])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(validate_records(response.result.unwrap_or_default()))
}
