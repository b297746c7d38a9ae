//! Testing Farm endpoint configuration.
//!
//! All endpoints and the API token arrive through CLI flags with
//! environment fallbacks; nothing inside the triage engine reads the
//! process environment.

use clap::Args;

/// Connection settings for the Testing Farm API and artifact store.
#[derive(Debug, Clone, Args)]
pub struct FarmConfig {
    /// Testing Farm API base URL
    #[arg(
        long,
        global = true,
        env = "TESTING_FARM_API_URL",
        default_value = "https://api.testing-farm.io/v0.1"
    )]
    pub api_url: String,

    /// Testing Farm artifacts base URL
    #[arg(
        long,
        global = true,
        env = "TESTING_FARM_ARTIFACTS_URL",
        default_value = "https://artifacts.dev.testing-farm.io"
    )]
    pub artifacts_url: String,

    /// API token for authenticated requests
    #[arg(long, global = true, env = "TESTING_FARM_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,
}

impl FarmConfig {
    /// URL of the job status endpoint for `job_id`.
    pub fn request_url(&self, job_id: &str) -> String {
        format!("{}/requests/{}", self.api_url, job_id)
    }

    /// URL of the results manifest for `job_id`.
    pub fn manifest_url(&self, job_id: &str) -> String {
        format!("{}/{}/results.xml", self.artifacts_url, job_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FarmConfig {
        FarmConfig {
            api_url: "https://api.testing-farm.io/v0.1".to_string(),
            artifacts_url: "https://artifacts.dev.testing-farm.io".to_string(),
            api_token: None,
        }
    }

    #[test]
    fn test_request_url() {
        assert_eq!(
            config().request_url("abc-123"),
            "https://api.testing-farm.io/v0.1/requests/abc-123"
        );
    }

    #[test]
    fn test_manifest_url() {
        assert_eq!(
            config().manifest_url("abc-123"),
            "https://artifacts.dev.testing-farm.io/abc-123/results.xml"
        );
    }
}
