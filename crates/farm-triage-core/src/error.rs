//! Error types for the triage engine boundary.
//!
//! The triage engine itself never fails: malformed manifests degrade to
//! empty extractions and fetch failures degrade to absent content. The
//! variants below cover the one boundary that does surface errors, the
//! job-status retrieval the analyzer is driven from.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    /// The job status endpoint could not be reached or answered non-2xx.
    #[error("Could not retrieve job data for {job_id}: {reason}")]
    StatusUnavailable { job_id: String, reason: String },

    /// The job status payload was not valid JSON for the status record.
    #[error("Malformed job status payload: {0}")]
    StatusDecode(#[from] serde_json::Error),
}

/// Result type for triage boundary operations
pub type Result<T> = std::result::Result<T, TriageError>;
