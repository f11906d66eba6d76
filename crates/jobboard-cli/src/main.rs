//! Job board CLI tool.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod client;
mod commands;

use client::ListParams;

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Job board CLI", long_about = None)]
struct Cli {
    /// API server URL
    #[arg(long, env = "JOBBOARD_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse job postings
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Show the values available for each filter
    Filters,
    /// Upload a KDL job feed as one batch
    Load {
        /// Path to the feed file
        path: String,
    },
    /// Validate a KDL job feed without uploading it
    Validate {
        /// Path to the feed file
        #[arg(default_value = "jobs.kdl")]
        path: String,
    },
}

#[derive(Subcommand)]
enum JobCommands {
    /// List jobs matching the filters
    List {
        /// Text matched against title or company
        #[arg(short, long)]
        query: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        experience: Option<String>,
        /// Exact source name
        #[arg(long)]
        source: Option<String>,
        #[arg(long, default_value = "1")]
        page: u32,
        /// Jobs per page (server default when omitted)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a single job
    Show {
        /// Job ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Jobs { command } => match command {
            JobCommands::List {
                query,
                location,
                experience,
                source,
                page,
                limit,
            } => {
                let params = ListParams {
                    query,
                    location,
                    experience,
                    source,
                    page,
                    limit,
                };
                commands::jobs::list(&cli.api_url, &params).await?;
            }
            JobCommands::Show { id } => {
                commands::jobs::show(&cli.api_url, &id).await?;
            }
        },
        Commands::Filters => {
            commands::filters(&cli.api_url).await?;
        }
        Commands::Load { path } => {
            commands::load(&cli.api_url, &path).await?;
        }
        Commands::Validate { path } => {
            commands::validate(&path)?;
        }
    }

    Ok(())
}
