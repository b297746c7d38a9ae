//! Triage aggregation.
//!
//! Drives the sequential scan over a job's logs and assembles the failure
//! report. Fetches are awaited one at a time: a single outstanding request
//! bounds outbound load, and the report's block order stays deterministic
//! regardless of network timing.

use async_trait::async_trait;
use tracing::debug;

use crate::manifest::LogReference;
use crate::prioritize::prioritize;
use crate::scan::scan_for_errors;

/// Report text used when no log produced a single finding.
pub const NO_DETAILS_SENTINEL: &str = "No specific failure details found in available logs.";

/// Log content retrieval collaborator.
///
/// Implementations return `None` on any failure (HTTP error, timeout,
/// transport error); the aggregator treats every absence uniformly and
/// never retries.
#[async_trait]
pub trait LogFetcher: Send + Sync {
    /// Retrieve the text behind `url`, or `None` if it cannot be had.
    async fn fetch(&self, url: &str) -> Option<String>;
}

/// Determine a likely failure reason from a job's log references.
///
/// Prioritizes the references, then examines the resulting list strictly
/// in order: fetch, scan, and on at least one signature match emit a block
/// of the form
///
/// ```text
/// From {name}:
///   {matched line}
///   ...
/// ```
///
/// Logs whose fetch yields no content are skipped without comment in the
/// report. When no block is produced at all (including an empty reference
/// list), the result is [`NO_DETAILS_SENTINEL`].
pub async fn find_failure_reason(log_refs: Vec<LogReference>, fetcher: &dyn LogFetcher) -> String {
    let mut failure_details: Vec<String> = Vec::new();

    for log in prioritize(log_refs) {
        let content = match fetcher.fetch(&log.url).await {
            Some(content) => content,
            None => {
                debug!(log = %log.name, url = %log.url, "no content for log, skipping");
                continue;
            }
        };

        let error_lines = scan_for_errors(&content);
        if error_lines.is_empty() {
            continue;
        }

        failure_details.push(format!("From {}:", log.name));
        failure_details.extend(error_lines.into_iter().map(|line| format!("  {}", line)));
        failure_details.push(String::new());
    }

    if failure_details.is_empty() {
        NO_DETAILS_SENTINEL.to_string()
    } else {
        failure_details.join("\n")
    }
}
