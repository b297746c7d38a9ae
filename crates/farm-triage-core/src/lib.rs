//! Farm Triage Core - failure triage engine for Testing Farm jobs
//!
//! Provides the decision logic behind `farm-triage analyze`:
//! - Parses a job's `results.xml` manifest into test outcomes and log references
//! - Prioritizes log references into a bounded examination list
//! - Scans log text for failure signatures
//! - Assembles a deterministic, human-readable failure report
//!
//! The engine performs no I/O of its own. Log content arrives through the
//! [`LogFetcher`] trait, so callers decide transport, auth and timeouts.

pub mod error;
pub mod manifest;
pub mod prioritize;
pub mod report;
pub mod scan;
pub mod status;
pub mod telemetry;
pub mod triage;

// Re-export key types
pub use error::{Result, TriageError};
pub use manifest::{parse_failed_tests, parse_log_refs, LogReference, TestOutcome, TestResult};
pub use prioritize::{classify, prioritize, PriorityTier};
pub use report::{
    render_failure_analysis, render_pending, render_success_summary, render_unknown_state,
};
pub use scan::scan_for_errors;
pub use status::{JobDisposition, JobStatus};
pub use telemetry::init_tracing;
pub use triage::{find_failure_reason, LogFetcher, NO_DETAILS_SENTINEL};
