use std::{
    fs,
    path::PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

const APP_NAME: &str = "atelier";
const CONFIG_FILE: &str = "config.json";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    filename: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

/// Coordinates of the studio's content store. Loaded from `config.json`
/// in the app data directory; defaults point at the production dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub api_host: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: "zq8k2f4d".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            api_host: "api.sanity.io".to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads the config, writing the defaults back on first run so the
    /// file exists for editing.
    pub fn load_or_init() -> Self {
        let config: StoreConfig = load_json_or_default(CONFIG_FILE);

        if !get_data_file_path(CONFIG_FILE).exists() {
            if let Err(e) = save_json(&config, CONFIG_FILE) {
                eprintln!("Failed to write default {}: {}", CONFIG_FILE, e);
            }
        }

        config
    }

    pub fn query_url(&self) -> String {
        format!(
            "https://{}.{}/v{}/data/query/{}",
            self.project_id, self.api_host, self.api_version, self.dataset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_has_store_shape() {
        let config = StoreConfig {
            project_id: "abc123".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            api_host: "api.sanity.io".to_string(),
        };

        assert_eq!(
            config.query_url(),
            "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = StoreConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let loaded: StoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.project_id, config.project_id);
        assert_eq!(loaded.dataset, config.dataset);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let loaded: StoreConfig = serde_json::from_str(r#"{"project_id": "custom"}"#).unwrap();
        assert_eq!(loaded.project_id, "custom");
        assert_eq!(loaded.dataset, "production");
    }
}
