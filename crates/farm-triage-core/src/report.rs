//! Analysis report rendering.
//!
//! One renderer per job disposition. Only the failure path is async: it
//! drives the triage aggregator through the caller's [`LogFetcher`]. The
//! caller decides the disposition first (and fetches the results manifest
//! only for failed jobs), so pending and successful jobs never touch the
//! network beyond the status call.

use tracing::info;

use crate::manifest::{parse_failed_tests, parse_log_refs};
use crate::status::JobStatus;
use crate::triage::{find_failure_reason, LogFetcher};

/// Report for a job that is still queued or running.
pub fn render_pending(job_id: &str, state: &str) -> String {
    format!("⏳ Job {} is still {}. Please wait for completion.", job_id, state)
}

/// Report for a job in a state the analysis flow does not recognize.
pub fn render_unknown_state(job_id: &str, state: &str) -> String {
    format!("❓ Job {} is in unknown state: {}", job_id, state)
}

/// Summary for a job that completed successfully.
///
/// Includes the first requested environment's architecture and compose
/// when the record carries them.
pub fn render_success_summary(job_id: &str, status: &JobStatus) -> String {
    let mut summary = vec![
        format!("✅ Job {} completed successfully", job_id),
        format!("   State: {}", status.state),
        format!("   Result: {}", status.overall_result()),
        format!("   Created: {}", status.created.as_deref().unwrap_or("unknown")),
        format!("   Updated: {}", status.updated.as_deref().unwrap_or("unknown")),
    ];

    if let Some(env) = status.environments_requested.first() {
        summary.push(format!(
            "   Architecture: {}",
            env.arch.as_deref().unwrap_or("unknown")
        ));
        if let Some(compose) = env.os.as_ref().and_then(|os| os.compose.as_deref()) {
            summary.push(format!("   OS: {}", compose));
        }
    }

    summary.join("\n")
}

/// Analysis for a job that completed without passing.
///
/// `manifest` is the job's `results.xml` text when it could be fetched.
/// With a manifest in hand this lists the failed tests, then runs triage
/// over the referenced logs; without one it notes that the job may have
/// failed during setup.
pub async fn render_failure_analysis(
    job_id: &str,
    status: &JobStatus,
    manifest: Option<&str>,
    fetcher: &dyn LogFetcher,
) -> String {
    let mut analysis = vec![
        format!("❌ Job {} failed", job_id),
        format!("   State: {}", status.state),
        format!("   Result: {}", status.overall_result()),
        format!("   Created: {}", status.created.as_deref().unwrap_or("unknown")),
        format!("   Updated: {}", status.updated.as_deref().unwrap_or("unknown")),
        String::new(),
        "🔍 Investigating failure reason...".to_string(),
    ];

    match manifest {
        Some(manifest) => {
            let failed_tests = parse_failed_tests(manifest);
            if !failed_tests.is_empty() {
                analysis.push("\n📋 Failed Tests:".to_string());
                for test in &failed_tests {
                    analysis.push(format!("   • {}: {}", test.name, test.result));
                }
            }

            let log_refs = parse_log_refs(manifest);
            if log_refs.is_empty() {
                analysis.push("\n❓ No detailed logs available for analysis".to_string());
            } else {
                info!(job_id = %job_id, logs = log_refs.len(), "checking logs for failure reason");
                analysis.push(format!("\n🔍 Checking {} available logs...", log_refs.len()));
                let failure_reason = find_failure_reason(log_refs, fetcher).await;
                analysis.push("\n💥 Failure Details:".to_string());
                analysis.push(failure_reason);
            }
        }
        None => {
            analysis.push("\n❓ No XML results available - job may have failed during setup".to_string());
        }
    }

    analysis.join("\n")
}
