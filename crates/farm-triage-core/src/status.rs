//! Job status record and disposition.
//!
//! The Testing Farm API returns a loosely-shaped JSON document per job.
//! `JobStatus` models it with named optional fields and the documented
//! defaults, so missing or extra fields never break decoding. The `result`
//! field in particular arrives either as an object carrying `overall` or
//! as a bare string.

use serde::{Deserialize, Serialize};

fn default_unknown() -> String {
    "unknown".to_string()
}

/// Nested result payload of a job status record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum JobResult {
    /// Object form: `{"overall": "passed", ...}`.
    Detailed {
        #[serde(default)]
        overall: Option<String>,
    },
    /// Bare string form.
    Plain(String),
}

impl JobResult {
    /// Overall result value, `"unknown"` when absent.
    pub fn overall(&self) -> &str {
        match self {
            JobResult::Detailed { overall } => overall.as_deref().unwrap_or("unknown"),
            JobResult::Plain(s) => s,
        }
    }
}

/// OS selection inside a requested environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OsRequest {
    #[serde(default)]
    pub compose: Option<String>,
}

/// One entry of `environments_requested`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentRequest {
    #[serde(default)]
    pub arch: Option<String>,

    #[serde(default)]
    pub os: Option<OsRequest>,
}

/// Status record for one Testing Farm job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobStatus {
    /// Job lifecycle state (`new`, `pending`, `running`, `complete`, ...).
    #[serde(default = "default_unknown")]
    pub state: String,

    /// Nested result, present once the job completed.
    #[serde(default)]
    pub result: Option<JobResult>,

    /// Creation timestamp as reported by the API.
    #[serde(default)]
    pub created: Option<String>,

    /// Last-update timestamp as reported by the API.
    #[serde(default)]
    pub updated: Option<String>,

    /// Environments the job was requested for.
    #[serde(default)]
    pub environments_requested: Vec<EnvironmentRequest>,
}

impl JobStatus {
    /// Decode a status record from the raw API response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Overall result value, `"unknown"` when the job has none yet.
    pub fn overall_result(&self) -> &str {
        self.result.as_ref().map_or("unknown", |r| r.overall())
    }

    /// Classify this record for the analysis flow.
    pub fn disposition(&self) -> JobDisposition {
        match self.state.as_str() {
            "new" | "pending" | "running" => JobDisposition::Pending,
            "complete" => {
                if matches!(self.overall_result(), "passed" | "pass" | "success") {
                    JobDisposition::CompletedSuccess
                } else {
                    JobDisposition::CompletedFailure
                }
            }
            _ => JobDisposition::Unknown,
        }
    }
}

/// Terminal classification of a job status for one analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobDisposition {
    /// Still queued or running; no triage performed.
    Pending,
    /// Completed and passed; summary only.
    CompletedSuccess,
    /// Completed without passing; triage is invoked.
    CompletedFailure,
    /// Unrecognized state.
    Unknown,
}
