//! Content file discovery
//!
//! Reads every `<index_file>` below `<base>/<data_dir>/<kind>/` into memory
//! once, keyed by its site-absolute path (`/data/post/my-slug/index.svx`).

use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::ResourceKind;
use crate::config::SiteConfig;
use crate::error::{ContentError, Result};

/// Raw file contents by path, in enumeration order
pub type FileMap = IndexMap<String, String>;

/// The raw content files of a site, one map per resource kind
#[derive(Debug, Clone, Default)]
pub struct ContentFiles {
    posts: FileMap,
    projects: FileMap,
}

impl ContentFiles {
    /// Use already materialized path → content maps
    pub fn from_maps(posts: FileMap, projects: FileMap) -> Self {
        Self { posts, projects }
    }

    /// Discover and read content files under `base_dir`
    pub fn discover<P: AsRef<Path>>(base_dir: P, config: &SiteConfig) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let mut files = Self::default();

        for kind in ResourceKind::ALL {
            for (path, content) in discover_kind(base_dir, config, kind)? {
                files.insert(kind, path, content);
            }
            tracing::debug!("Discovered {} {} files", files.get(kind).len(), kind);
        }

        Ok(files)
    }

    /// The files of one kind
    pub fn get(&self, kind: ResourceKind) -> &FileMap {
        match kind {
            ResourceKind::Post => &self.posts,
            ResourceKind::Project => &self.projects,
        }
    }

    /// Add or replace a single file
    pub fn insert(
        &mut self,
        kind: ResourceKind,
        path: impl Into<String>,
        content: impl Into<String>,
    ) {
        let files = match kind {
            ResourceKind::Post => &mut self.posts,
            ResourceKind::Project => &mut self.projects,
        };
        files.insert(path.into(), content.into());
    }
}

fn discover_kind(base_dir: &Path, config: &SiteConfig, kind: ResourceKind) -> Result<FileMap> {
    let data_dir = config.data_dir.trim_matches('/');
    let kind_dir = base_dir.join(data_dir).join(kind.as_str());
    let mut files = FileMap::new();

    if !kind_dir.exists() {
        tracing::debug!("No {} directory at {:?}", kind, kind_dir);
        return Ok(files);
    }

    for entry in WalkDir::new(&kind_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || entry.file_name().to_str() != Some(config.index_file.as_str()) {
            continue;
        }

        let relative = path
            .strip_prefix(&kind_dir)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let key = format!("/{}/{}/{}", data_dir, kind, relative);

        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: key.clone(),
            source,
        })?;
        files.insert(key, content);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(base: &Path, rel: &str, content: &str) {
        let path = base.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_discover_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "data/post/b-post/index.svx", "B");
        write(dir.path(), "data/post/a-post/index.svx", "A");
        write(dir.path(), "data/post/a-post/image.png", "not content");
        write(dir.path(), "data/project/tool/index.svx", "T");

        let files = ContentFiles::discover(dir.path(), &SiteConfig::default()).unwrap();

        let posts: Vec<_> = files.get(ResourceKind::Post).keys().cloned().collect();
        assert_eq!(
            posts,
            vec!["/data/post/a-post/index.svx", "/data/post/b-post/index.svx"]
        );
        assert_eq!(
            files.get(ResourceKind::Post)["/data/post/a-post/index.svx"],
            "A"
        );
        assert_eq!(files.get(ResourceKind::Project).len(), 1);
    }

    #[test]
    fn test_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let files = ContentFiles::discover(dir.path(), &SiteConfig::default()).unwrap();
        assert!(files.get(ResourceKind::Post).is_empty());
        assert!(files.get(ResourceKind::Project).is_empty());
    }

    #[test]
    fn test_custom_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "content/project/tool/page.md", "T");
        let config = SiteConfig {
            data_dir: "content".to_string(),
            index_file: "page.md".to_string(),
            ..Default::default()
        };

        let files = ContentFiles::discover(dir.path(), &config).unwrap();
        assert!(files
            .get(ResourceKind::Project)
            .contains_key("/content/project/tool/page.md"));
    }
}
