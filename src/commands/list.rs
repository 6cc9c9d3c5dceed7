//! List site content

use anyhow::Result;

use crate::content::{ResourceKind, ResourceMetadata};
use crate::helpers::format_date;
use crate::Site;

/// List the resources of a kind, as text lines or a JSON array
pub async fn run(site: &Site, kind: &str, json: bool) -> Result<()> {
    let loader = site.loader()?;
    let resources = loader.load_resources_named(kind).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resources)?);
        return Ok(());
    }

    let kind: ResourceKind = kind.parse()?;
    println!("{} ({}):", title_case(kind), resources.len());
    for line in summary_lines(site, &resources) {
        println!("  {}", line);
    }

    Ok(())
}

fn title_case(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Post => "Posts",
        ResourceKind::Project => "Projects",
    }
}

fn summary_lines(site: &Site, resources: &[ResourceMetadata]) -> Vec<String> {
    resources
        .iter()
        .map(|r| {
            let date = r
                .parse_date()
                .map(|d| format_date(&d, &site.config.date_format))
                .unwrap_or_else(|| "undated".to_string());
            format!("{} - {} [{}]", date, r.title, r.slug)
        })
        .collect()
}
