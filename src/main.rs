//! CLI entry point for mdpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdpress")]
#[command(version)]
#[command(about = "A markdown blog content pipeline", long_about = None)]
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Build the post index and write it as JSON
    #[command(alias = "i")]
    Index {
        /// Output file (defaults to <out_dir>/posts.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List posts, newest first
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdpress=debug,info"
    } else {
        "mdpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli
        .cwd
        .map(Ok)
        .unwrap_or_else(std::env::current_dir)?;

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            mdpress::commands::init::init_site(&target_dir)?;
            println!("Initialized empty site in {:?}", target_dir);
        }

        Commands::New { title } => {
            let site = mdpress::Site::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            mdpress::commands::new::create_post(&site, &title)?;
        }

        Commands::Index { output } => {
            let site = mdpress::Site::new(&base_dir)?;
            tracing::info!("Building post index...");
            mdpress::commands::index::run(&site, output.as_deref())?;
            println!("Index built successfully!");
        }

        Commands::List => {
            let site = mdpress::Site::new(&base_dir)?;
            mdpress::commands::list::run(&site)?;
        }
    }

    Ok(())
}
