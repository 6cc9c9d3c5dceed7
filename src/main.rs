//! CLI entry point for svx-content

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "svx-content")]
#[command(version)]
#[command(about = "Load svx posts and projects with slugs and outlines", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or projects, newest first
    #[command(alias = "ls")]
    List {
        /// Kind of content to list (post, project)
        #[arg(default_value = "post")]
        kind: String,

        /// Print the full records as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show a single post or project
    Show {
        /// Kind of content (post, project)
        kind: String,

        /// Slug of the resource
        slug: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, records to stdout
    let filter = if cli.debug {
        "svx_content=debug,info"
    } else {
        "svx_content=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { kind, json } => {
            let site = svx_content::Site::new(&base_dir)?;
            tracing::info!("Listing {} content in {:?}", kind, base_dir);
            svx_content::commands::list::run(&site, &kind, json).await?;
        }

        Commands::Show { kind, slug } => {
            let site = svx_content::Site::new(&base_dir)?;
            svx_content::commands::show::run(&site, &kind, &slug).await?;
        }

        Commands::Version => {
            println!("svx-content version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
