//! farm-triage - failure triage for Testing Farm jobs
//!
//! ## Commands
//!
//! - `status`: print the raw status record for a job
//! - `analyze`: summarize a successful job, or dig through its results
//!   manifest and logs for a likely failure cause

use anyhow::Result;
use clap::{Parser, Subcommand};
use farm_triage_core::{
    init_tracing, render_failure_analysis, render_pending, render_success_summary,
    render_unknown_state, JobDisposition, LogFetcher, TriageError,
};
use serde_json::json;
use tracing::Level;

mod client;
mod config;
mod http;

use config::FarmConfig;
use http::HttpFetcher;

#[derive(Parser)]
#[command(name = "farm-triage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Failure triage for Testing Farm jobs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    config: FarmConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show basic status information for a job
    Status {
        /// Job ID of the Testing Farm run
        job_id: String,
    },

    /// Analyze a job: success summary, or failure triage over its logs
    Analyze {
        /// Job ID of the Testing Farm run
        job_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    let fetcher = HttpFetcher::new(&cli.config)?;

    match cli.command {
        Commands::Status { job_id } => cmd_status(&fetcher, &cli.config, &job_id).await,
        Commands::Analyze { job_id } => cmd_analyze(&fetcher, &cli.config, &job_id).await,
    }
}

async fn cmd_status(fetcher: &HttpFetcher, config: &FarmConfig, job_id: &str) -> Result<()> {
    let status = match client::fetch_job_status(fetcher, config, job_id).await {
        Ok(status) => status,
        Err(e) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "error": format!("Could not retrieve job status for {}: {}", job_id, e),
                }))?
            );
            return Ok(());
        }
    };

    let record = json!({
        "job_id": job_id,
        "state": status.state,
        "result": status.result,
        "created": status.created,
        "updated": status.updated,
        "environments_requested": status.environments_requested,
    });
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

async fn cmd_analyze(fetcher: &HttpFetcher, config: &FarmConfig, job_id: &str) -> Result<()> {
    let status = match client::fetch_job_status(fetcher, config, job_id).await {
        Ok(status) => status,
        Err(TriageError::StatusUnavailable { .. }) => {
            println!("❌ Could not retrieve job data for {}", job_id);
            return Ok(());
        }
        Err(e) => {
            println!("❌ Error analyzing job {}: {}", job_id, e);
            return Ok(());
        }
    };

    let report = match status.disposition() {
        JobDisposition::Pending => render_pending(job_id, &status.state),
        JobDisposition::CompletedSuccess => render_success_summary(job_id, &status),
        JobDisposition::CompletedFailure => {
            let manifest = fetcher.fetch(&config.manifest_url(job_id)).await;
            render_failure_analysis(job_id, &status, manifest.as_deref(), fetcher).await
        }
        JobDisposition::Unknown => render_unknown_state(job_id, &status.state),
    };

    println!("{}", report);
    Ok(())
}
