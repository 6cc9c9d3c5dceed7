//! Content loader - turns raw content files into sorted resource listings

use std::cmp::Reverse;
use std::sync::Arc;

use super::{
    extract_headings, ContentFiles, FrontMatter, ResourceKind, ResourceMetadata, SlugDeriver,
};
use crate::config::SiteConfig;
use crate::error::{ContentError, Result};

/// Loads posts and projects from in-memory content files
pub struct ContentLoader {
    files: ContentFiles,
    config: SiteConfig,
}

impl ContentLoader {
    /// Create a loader with the default site layout
    pub fn new(files: ContentFiles) -> Self {
        Self::with_config(files, SiteConfig::default())
    }

    /// Create a loader for a configured site layout
    pub fn with_config(files: ContentFiles, config: SiteConfig) -> Self {
        Self { files, config }
    }

    pub fn files(&self) -> &ContentFiles {
        &self.files
    }

    /// Load resources for a kind given by name.
    /// Fails with `InvalidArgument` before touching any file when the name is empty.
    pub async fn load_resources_named(&self, kind: &str) -> Result<Vec<ResourceMetadata>> {
        let kind: ResourceKind = kind.parse()?;
        self.load_resources(kind).await
    }

    /// Load all resources of a kind, newest first.
    /// Draft posts are dropped unless `render_drafts` is set; projects keep their drafts.
    pub async fn load_resources(&self, kind: ResourceKind) -> Result<Vec<ResourceMetadata>> {
        let deriver = Arc::new(SlugDeriver::new(
            &self.config.data_dir,
            &self.config.index_file,
            kind,
            self.config.strict_slugs,
        ));

        let handles: Vec<_> = self
            .files
            .get(kind)
            .iter()
            .map(|(path, raw)| {
                let path = path.clone();
                let raw = raw.clone();
                let deriver = Arc::clone(&deriver);
                tokio::spawn(async move { load_resource(&path, raw, &deriver) })
            })
            .collect();

        let mut resources = Vec::with_capacity(handles.len());
        for handle in handles {
            resources.push(handle.await??);
        }

        // Stable: equal dates keep file order, undated resources go last
        resources.sort_by_cached_key(|r| Reverse(r.parse_date()));

        let loaded = resources.len();
        if kind == ResourceKind::Post && !self.config.render_drafts {
            resources.retain(|r| !r.draft);
        }

        tracing::info!(
            "Loaded {} {}s ({} drafts skipped)",
            resources.len(),
            kind,
            loaded - resources.len()
        );

        Ok(resources)
    }
}

/// Build one resource from its path and raw content
fn load_resource(path: &str, raw: String, deriver: &SlugDeriver) -> Result<ResourceMetadata> {
    let (fm, _body) = FrontMatter::parse(&raw).map_err(|e| ContentError::parse_failure(path, e))?;
    let slug = deriver.derive(path)?;
    let headings = extract_headings(&raw);

    tracing::debug!(
        "Parsed {} -> slug {:?}, {} headings",
        path,
        slug,
        headings.len()
    );

    Ok(ResourceMetadata::new(fm, slug, headings, raw))
}
