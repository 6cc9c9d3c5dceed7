//! Show a single resource

use anyhow::{anyhow, Result};

use crate::content::ResourceMetadata;
use crate::Site;

/// Print one resource as JSON followed by its heading outline
pub async fn run(site: &Site, kind: &str, slug: &str) -> Result<()> {
    let loader = site.loader()?;
    let resources = loader.load_resources_named(kind).await?;
    let resource = find(&resources, slug)
        .ok_or_else(|| anyhow!("No {} with slug {:?}", kind, slug))?;

    println!("{}", serde_json::to_string_pretty(resource)?);
    println!();
    println!("Outline:");
    for heading in &resource.headings {
        println!("{}- {}", "  ".repeat(heading.level.saturating_sub(1)), heading.value);
    }

    Ok(())
}

fn find<'a>(resources: &'a [ResourceMetadata], slug: &str) -> Option<&'a ResourceMetadata> {
    resources.iter().find(|r| r.slug == slug.trim_matches('/'))
}
