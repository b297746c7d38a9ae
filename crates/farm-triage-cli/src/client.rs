//! Job status retrieval.
//!
//! One GET against the Testing Farm API per analysis call. Unlike log
//! fetches, a failure here is surfaced: without a status record there is
//! nothing to analyze.

use farm_triage_core::{JobStatus, LogFetcher, TriageError};
use tracing::debug;

use crate::config::FarmConfig;
use crate::http::HttpFetcher;

/// Fetch and decode the status record for `job_id`.
pub async fn fetch_job_status(
    fetcher: &HttpFetcher,
    config: &FarmConfig,
    job_id: &str,
) -> Result<JobStatus, TriageError> {
    let url = config.request_url(job_id);
    debug!(url = %url, "fetching job status");

    let body = fetcher
        .fetch(&url)
        .await
        .ok_or_else(|| TriageError::StatusUnavailable {
            job_id: job_id.to_string(),
            reason: "no response from API".to_string(),
        })?;

    Ok(JobStatus::from_json(&body)?)
}
