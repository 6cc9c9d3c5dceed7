//! svx-content: loads the posts and projects of a static site
//!
//! Each resource lives at `data/<kind>/<slug>/index.svx`. Loading a kind
//! parses every file's front-matter, derives its slug and heading outline,
//! and returns the records newest first with draft posts left out.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

pub use content::{ContentFiles, ContentLoader, Heading, ResourceKind, ResourceMetadata};
pub use error::ContentError;

use anyhow::Result;
use std::path::Path;

/// A site on disk
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Read the content files and build a loader over them
    pub fn loader(&self) -> Result<ContentLoader> {
        let files = ContentFiles::discover(&self.base_dir, &self.config)?;
        Ok(ContentLoader::with_config(files, self.config.clone()))
    }

    /// Load all resources of a kind
    pub async fn load_resources(&self, kind: ResourceKind) -> Result<Vec<ResourceMetadata>> {
        Ok(self.loader()?.load_resources(kind).await?)
    }
}
