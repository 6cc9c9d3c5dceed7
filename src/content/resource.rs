//! Resource models: posts, projects and their heading outlines

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FrontMatter;
use crate::error::ContentError;
use crate::helpers::parse_date_string;

/// The two kinds of content a site keeps under its data directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Post,
    Project,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Post, ResourceKind::Project];

    /// Directory name under the data directory
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Post => "post",
            ResourceKind::Project => "project",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ContentError::InvalidArgument(
                "resource kind is required".to_string(),
            )),
            "post" | "posts" => Ok(ResourceKind::Post),
            "project" | "projects" => Ok(ResourceKind::Project),
            other => Err(ContentError::InvalidArgument(format!(
                "unknown resource kind: {}. Available: post, project",
                other
            ))),
        }
    }
}

/// A heading line picked out of the raw content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Number of leading `#` characters
    pub level: usize,
    /// Heading text without the marker
    pub value: String,
}

impl Heading {
    pub fn new(level: usize, value: impl Into<String>) -> Self {
        Self {
            level,
            value: value.into(),
        }
    }
}

/// A loaded post or project, ready for the site generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceMetadata {
    pub title: String,

    /// Publication date as written in the front-matter
    pub date: String,

    pub desc: String,

    pub tags: Vec<String>,

    /// Live demo URL (projects)
    pub demo: String,

    /// Source repository URL (projects)
    pub source: String,

    pub layout: String,

    /// Technology stack as (name, url) pairs
    pub stack: Vec<(String, String)>,

    pub draft: bool,

    pub minimal: bool,

    #[serde(rename = "type")]
    pub kind: String,

    /// URL-friendly name derived from the content path
    pub slug: String,

    /// Heading outline in document order
    pub headings: Vec<Heading>,

    /// The complete raw file, front-matter included
    pub content: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl ResourceMetadata {
    /// Combine parsed front-matter with the derived fields
    pub fn new(fm: FrontMatter, slug: String, headings: Vec<Heading>, content: String) -> Self {
        Self {
            title: fm.title,
            date: fm.date,
            desc: fm.desc,
            tags: fm.tags,
            demo: fm.demo,
            source: fm.source,
            layout: fm.layout,
            stack: fm.stack,
            draft: fm.draft,
            minimal: fm.minimal,
            kind: fm.kind,
            slug,
            headings,
            content,
            extra: fm.extra,
        }
    }

    /// Parse the date string, `None` when missing or unrecognised
    pub fn parse_date(&self) -> Option<DateTime<Utc>> {
        parse_date_string(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("post".parse::<ResourceKind>().unwrap(), ResourceKind::Post);
        assert_eq!(
            "projects".parse::<ResourceKind>().unwrap(),
            ResourceKind::Project
        );
    }

    #[test]
    fn test_empty_kind_is_invalid() {
        let err = "".parse::<ResourceKind>().unwrap_err();
        assert!(matches!(err, ContentError::InvalidArgument(_)));

        let err = "page".parse::<ResourceKind>().unwrap_err();
        assert!(err.to_string().contains("unknown resource kind: page"));
    }

    #[test]
    fn test_serialize_uses_type_field() {
        let fm = FrontMatter {
            title: "Hello".to_string(),
            kind: "talk".to_string(),
            ..Default::default()
        };
        let record = ResourceMetadata::new(fm, "hello".to_string(), Vec::new(), String::new());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "talk");
        assert_eq!(json["slug"], "hello");
        assert!(json.get("kind").is_none());
    }
}
