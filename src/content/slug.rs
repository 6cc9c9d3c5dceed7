//! Slug derivation from content paths
//!
//! Content lives at `/<data_dir>/<kind>/<slug>/<index_file>` and the slug is
//! whatever sits between the kind root and the index file.

use regex::Regex;

use super::ResourceKind;
use crate::error::{ContentError, Result};

/// Derives slugs for one resource kind
#[derive(Debug, Clone)]
pub struct SlugDeriver {
    kind: ResourceKind,
    root: String,
    index_file: String,
    pattern: Regex,
    strict: bool,
}

impl SlugDeriver {
    /// Create a deriver for paths under `/<data_dir>/<kind>/`
    pub fn new(data_dir: &str, index_file: &str, kind: ResourceKind, strict: bool) -> Self {
        let root = format!("/{}/{}/", data_dir.trim_matches('/'), kind);
        let index_file = index_file.trim_matches('/').to_string();
        let pattern = Regex::new(&format!(
            "{}(.*)/{}",
            regex::escape(&root),
            regex::escape(&index_file)
        ))
        .expect("escaped slug pattern is a valid regex");

        Self {
            kind,
            root,
            index_file,
            pattern,
            strict,
        }
    }

    /// Derive the slug for a content path
    pub fn derive(&self, path: &str) -> Result<String> {
        if self.strict {
            self.derive_strict(path)
        } else {
            Ok(self.derive_lenient(path))
        }
    }

    /// Substitute the first `<root>(.*)/<index_file>` match with the captured part.
    /// Paths of any other shape come back with no substitution applied.
    pub fn derive_lenient(&self, path: &str) -> String {
        self.pattern.replace(path, "$1").into_owned()
    }

    /// Require exactly `<root><slug>/<index_file>` with a non-empty slug
    pub fn derive_strict(&self, path: &str) -> Result<String> {
        path.strip_prefix(self.root.as_str())
            .and_then(|rest| rest.strip_suffix(self.index_file.as_str()))
            .and_then(|rest| rest.strip_suffix('/'))
            .filter(|slug| !slug.is_empty() && !slug.starts_with('/') && !slug.ends_with('/'))
            .map(str::to_string)
            .ok_or_else(|| ContentError::MalformedPath {
                path: path.to_string(),
                kind: self.kind.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deriver(strict: bool) -> SlugDeriver {
        SlugDeriver::new("data", "index.svx", ResourceKind::Post, strict)
    }

    #[test]
    fn test_derive_slug() {
        assert_eq!(
            deriver(false).derive("/data/post/my-slug/index.svx").unwrap(),
            "my-slug"
        );
        assert_eq!(
            deriver(true).derive("/data/post/my-slug/index.svx").unwrap(),
            "my-slug"
        );
    }

    #[test]
    fn test_nested_slug() {
        assert_eq!(
            deriver(false).derive("/data/post/2024/recap/index.svx").unwrap(),
            "2024/recap"
        );
        assert_eq!(
            deriver(true).derive("/data/post/2024/recap/index.svx").unwrap(),
            "2024/recap"
        );
    }

    #[test]
    fn test_lenient_passes_odd_paths_through() {
        let d = deriver(false);
        assert_eq!(d.derive_lenient("/data/project/x/index.svx"), "/data/project/x/index.svx");
        assert_eq!(d.derive_lenient("/data/post/x/readme.md"), "/data/post/x/readme.md");
        assert_eq!(d.derive_lenient("/site/data/post/x/index.svx"), "/sitex");
    }

    #[test]
    fn test_strict_rejects_malformed_paths() {
        let d = deriver(true);
        for path in [
            "/data/project/x/index.svx",
            "/data/post/x/readme.md",
            "/data/post/index.svx",
            "/data/post//index.svx",
            "data/post/x/index.svx",
        ] {
            let err = d.derive(path).unwrap_err();
            assert!(
                matches!(err, ContentError::MalformedPath { .. }),
                "expected malformed path for {}",
                path
            );
        }
    }

    #[test]
    fn test_custom_layout() {
        let d = SlugDeriver::new("/content/", "page.md", ResourceKind::Project, true);
        assert_eq!(d.derive("/content/project/tool/page.md").unwrap(), "tool");
    }
}
