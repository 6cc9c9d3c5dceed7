//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    /// Directory holding one sub-directory per resource kind
    pub data_dir: String,
    /// File name of each resource inside its slug directory
    pub index_file: String,

    // Writing
    /// Reject content paths that do not match `/<data_dir>/<kind>/<slug>/<index_file>`
    pub strict_slugs: bool,
    /// Keep draft posts in listings
    pub render_drafts: bool,

    // Date / Time format
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            index_file: "index.svx".to_string(),
            strict_slugs: false,
            render_drafts: false,
            date_format: "YYYY-MM-DD".to_string(),
            extra: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.data_dir, "data");
        assert_eq!(config.index_file, "index.svx");
        assert!(!config.strict_slugs);
        assert!(!config.render_drafts);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
data_dir: content
strict_slugs: true
title: My Site
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.data_dir, "content");
        assert_eq!(config.index_file, "index.svx");
        assert!(config.strict_slugs);
        assert_eq!(
            config.extra.get("title").and_then(|v| v.as_str()),
            Some("My Site")
        );
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "render_drafts: true\ndate_format: DD/MM/YYYY\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert!(config.render_drafts);
        assert_eq!(config.date_format, "DD/MM/YYYY");
    }
}
