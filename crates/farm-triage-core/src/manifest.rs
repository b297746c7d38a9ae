//! Results manifest parsing.
//!
//! Testing Farm publishes a `results.xml` per job. The document nests
//! `<testcase>` and `<log>` elements at arbitrary depth depending on plan
//! structure, so extraction walks every descendant rather than direct
//! children. A manifest that fails to parse yields empty extractions;
//! malformed input is never an error for the caller.

use roxmltree::Document;
use serde::{Deserialize, Serialize};

/// Outcome value carried by a `<testcase>` element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TestResult {
    Passed,
    Failed,
    Error,
    /// Any other value, kept verbatim for display.
    Other(String),
}

impl TestResult {
    /// Parse the `result` attribute value.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "passed" => TestResult::Passed,
            "failed" => TestResult::Failed,
            "error" => TestResult::Error,
            other => TestResult::Other(other.to_string()),
        }
    }

    /// Whether this outcome counts as a failed test.
    ///
    /// Only the exact values `failed` and `error` qualify.
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failed | TestResult::Error)
    }
}

impl std::fmt::Display for TestResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestResult::Passed => write!(f, "passed"),
            TestResult::Failed => write!(f, "failed"),
            TestResult::Error => write!(f, "error"),
            TestResult::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A single test case outcome extracted from the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestOutcome {
    /// Test name (`name` attribute, "Unknown Test" when absent).
    pub name: String,

    /// Reported result.
    pub result: TestResult,
}

/// A log artifact reference extracted from the manifest.
///
/// Invariant: `url` is always an absolute http(s) URL; references with any
/// other scheme are dropped at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogReference {
    /// Log name (`name` attribute, "unknown" when absent).
    pub name: String,

    /// Absolute URL of the log artifact.
    pub url: String,
}

/// Extract failed test outcomes from manifest text.
///
/// Walks every `<testcase>` element regardless of nesting depth and keeps
/// those whose `result` attribute is exactly `failed` or `error`. Returns
/// empty on malformed XML.
pub fn parse_failed_tests(manifest: &str) -> Vec<TestOutcome> {
    let doc = match Document::parse(manifest) {
        Ok(doc) => doc,
        Err(_) => return Vec::new(),
    };

    doc.descendants()
        .filter(|node| node.has_tag_name("testcase"))
        .filter_map(|node| {
            let result = TestResult::from_attr(node.attribute("result").unwrap_or("unknown"));
            if result.is_failure() {
                Some(TestOutcome {
                    name: node.attribute("name").unwrap_or("Unknown Test").to_string(),
                    result,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Extract log artifact references from manifest text.
///
/// Walks every `<log>` element regardless of nesting depth. References
/// whose `href` does not start with `http` are discarded. Returns empty on
/// malformed XML.
pub fn parse_log_refs(manifest: &str) -> Vec<LogReference> {
    let doc = match Document::parse(manifest) {
        Ok(doc) => doc,
        Err(_) => return Vec::new(),
    };

    doc.descendants()
        .filter(|node| node.has_tag_name("log"))
        .filter_map(|node| {
            let href = node.attribute("href").unwrap_or("");
            if href.starts_with("http") {
                Some(LogReference {
                    name: node.attribute("name").unwrap_or("unknown").to_string(),
                    url: href.to_string(),
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failed_tests_basic() {
        let xml = r#"<testsuites>
            <testsuite>
                <testcase name="test_foo" result="failed"/>
                <testcase name="test_bar" result="passed"/>
                <testcase name="test_baz" result="error"/>
            </testsuite>
        </testsuites>"#;

        let failed = parse_failed_tests(xml);
        assert_eq!(failed.len(), 2);
        assert_eq!(failed[0].name, "test_foo");
        assert_eq!(failed[0].result, TestResult::Failed);
        assert_eq!(failed[1].name, "test_baz");
        assert_eq!(failed[1].result, TestResult::Error);
    }

    #[test]
    fn test_parse_failed_tests_any_depth() {
        let xml = r#"<root>
            <a><b><c><testcase name="deep" result="failed"/></c></b></a>
            <testcase name="shallow" result="failed"/>
        </root>"#;

        let failed = parse_failed_tests(xml);
        assert_eq!(failed.len(), 2);
        assert_eq!(failed[0].name, "deep");
        assert_eq!(failed[1].name, "shallow");
    }

    #[test]
    fn test_parse_failed_tests_missing_attributes() {
        let xml = r#"<suite><testcase result="failed"/><testcase name="no_result"/></suite>"#;

        let failed = parse_failed_tests(xml);
        // Missing result defaults to "unknown" and is not a failure.
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].name, "Unknown Test");
    }

    #[test]
    fn test_parse_failed_tests_malformed_xml() {
        assert!(parse_failed_tests("not xml at all").is_empty());
        assert!(parse_failed_tests("<open><unclosed>").is_empty());
        assert!(parse_failed_tests("").is_empty());
    }

    #[test]
    fn test_parse_log_refs_basic() {
        let xml = r#"<testsuites>
            <log name="console.log" href="http://x/console.log"/>
            <log name="harness.log" href="https://x/harness.log"/>
        </testsuites>"#;

        let refs = parse_log_refs(xml);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].name, "console.log");
        assert_eq!(refs[0].url, "http://x/console.log");
    }

    #[test]
    fn test_parse_log_refs_filters_non_http() {
        let xml = r#"<suite>
            <log name="bad" href="ftp://bad"/>
            <log name="relative" href="/logs/out.txt"/>
            <log name="good" href="http://x/out.txt"/>
        </suite>"#;

        let refs = parse_log_refs(xml);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "good");
    }

    #[test]
    fn test_parse_log_refs_default_name() {
        let xml = r#"<suite><log href="http://x/anon.log"/></suite>"#;

        let refs = parse_log_refs(xml);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "unknown");
    }

    #[test]
    fn test_parse_log_refs_malformed_xml() {
        assert!(parse_log_refs("<<<").is_empty());
        assert!(parse_log_refs("").is_empty());
    }

    #[test]
    fn test_test_result_display_roundtrip() {
        assert_eq!(TestResult::from_attr("failed").to_string(), "failed");
        assert_eq!(TestResult::from_attr("skipped").to_string(), "skipped");
        assert!(!TestResult::from_attr("unknown").is_failure());
    }
}
