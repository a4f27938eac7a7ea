use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::error;

use job_ingest::config::IngestConfig;
use job_ingest::logging;
use job_ingest::metrics::IngestMetrics;
use job_ingest::pipeline::{Pipeline, PipelineResult};
use job_ingest::storage::JobStore;

#[derive(Parser)]
#[command(name = "job_ingest")]
#[command(about = "Normalize scraped job postings into a canonical SQLite table")]
#[command(version = "0.1.0")]
struct Cli {
    /// Config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database path, overrides the config file
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the jobs table from both feeds
    Run {
        /// Feed with camelCase records and a jobProviders list
        #[arg(long)]
        provider_feed: Option<PathBuf>,
        /// Feed with snake_case records and direct job URLs
        #[arg(long)]
        direct_feed: Option<PathBuf>,
    },
    /// List stored jobs as id and title
    List,
    /// Print one stored job as JSON
    Show {
        id: i64,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let mut config = IngestConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(database) = cli.database {
        config.database_path = database;
    }

    let _log_guard = logging::init_logging(&config.log_dir).with_context(|| {
        format!("Failed to create log directory '{}'", config.log_dir.display())
    })?;
    IngestMetrics::describe();

    let store = JobStore::open(&config.database_path)
        .with_context(|| format!("Failed to open database '{}'", config.database_path.display()))?;

    match cli.command {
        Commands::Run {
            provider_feed,
            direct_feed,
        } => {
            if let Some(path) = provider_feed {
                config.feeds.provider_list = path;
            }
            if let Some(path) = direct_feed {
                config.feeds.direct_url = path;
            }

            println!("🔄 Rebuilding jobs table in {}...", config.database_path.display());
            let result = Pipeline::run(&store, &config.feed_sources()).map_err(|e| {
                error!("Ingestion run aborted: {}", e);
                e
            })?;
            print_summary(&result);
        }
        Commands::List => {
            for job in store.list_jobs()? {
                println!("{}\t{}", job.id, job.title.as_deref().unwrap_or(""));
            }
        }
        Commands::Show { id } => match store.get_job(id)? {
            Some(job) => println!("{}", serde_json::to_string_pretty(&job)?),
            None => bail!("No job with id {}", id),
        },
    }

    Ok(())
}

fn print_summary(result: &PipelineResult) {
    println!("\n📊 Ingestion results (run {}):", result.run_id);
    for feed in &result.feeds {
        println!("   {} ({}):", feed.path.display(), feed.shape);
        println!("      Records: {}", feed.total_records);
        println!("      Inserted: {}", feed.inserted);
        println!("      Rejected: {}", feed.rejected);
        println!("      SHA-256: {}", feed.content_sha256);
    }
    println!("   Total inserted: {}", result.total_inserted());

    if !result.errors.is_empty() {
        println!("\n⚠️  Feeds that failed:");
        for error in &result.errors {
            println!("   - {}", error);
        }
    }
}
