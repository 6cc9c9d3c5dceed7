//! Content module - posts, projects and their derived metadata

mod files;
mod frontmatter;
mod headings;
pub mod loader;
mod resource;
mod slug;

pub use files::{ContentFiles, FileMap};
pub use frontmatter::{FrontMatter, FrontMatterError};
pub use headings::extract_headings;
pub use loader::ContentLoader;
pub use resource::{Heading, ResourceKind, ResourceMetadata};
pub use slug::SlugDeriver;
