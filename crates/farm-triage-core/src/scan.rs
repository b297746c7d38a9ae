//! Error signature scanning.
//!
//! Scans one log's text for lines that look like failure indicators. The
//! signature set is a fixed list of substrings matched case-insensitively
//! against each trimmed line; matching stops after 5 hits so one noisy log
//! cannot dominate the report.

/// Substrings that mark a line as a failure indicator.
const ERROR_SIGNATURES: [&str; 11] = [
    "error:",
    "fail",
    "exception",
    "traceback",
    "fatal",
    "not found",
    "permission denied",
    "connection refused",
    "timeout",
    "aborted",
    "killed",
];

/// Matched lines kept per log.
const MAX_MATCHES_PER_LOG: usize = 5;

/// Scan log text for failure-signature lines.
///
/// Each line is trimmed and lowercased for the containment test; the
/// original trimmed line is what ends up in the result, in input order.
/// Returns at most 5 entries; empty input yields empty output.
pub fn scan_for_errors(text: &str) -> Vec<String> {
    let mut matches = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();
        if ERROR_SIGNATURES.iter().any(|sig| lower.contains(sig)) {
            matches.push(trimmed.to_string());
            if matches.len() >= MAX_MATCHES_PER_LOG {
                break;
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_matches_signatures() {
        let text = "INFO: start\nERROR: something failed\nall good\nFATAL crash\n";
        let matches = scan_for_errors(text);
        assert_eq!(
            matches,
            vec!["ERROR: something failed".to_string(), "FATAL crash".to_string()]
        );
    }

    #[test]
    fn test_scan_case_insensitive() {
        let text = "Traceback (most recent call last):\nPermission Denied\n";
        let matches = scan_for_errors(text);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_scan_preserves_original_case_and_trims() {
        let text = "   Connection Refused by peer   \n";
        let matches = scan_for_errors(text);
        assert_eq!(matches, vec!["Connection Refused by peer".to_string()]);
    }

    #[test]
    fn test_scan_caps_at_five() {
        let text = "fail 1\nfail 2\nfail 3\nfail 4\nfail 5\nfail 6\nfail 7\n";
        let matches = scan_for_errors(text);
        assert_eq!(matches.len(), 5);
        assert_eq!(matches[4], "fail 5");
    }

    #[test]
    fn test_scan_substring_semantics() {
        // "failsafe" contains "fail"; literal substring matching keeps it.
        let matches = scan_for_errors("enabling failsafe mode\n");
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_scan_no_matches() {
        assert!(scan_for_errors("all tests passed\nclean run\n").is_empty());
    }

    #[test]
    fn test_scan_empty_input() {
        assert!(scan_for_errors("").is_empty());
    }

    #[test]
    fn test_scan_line_order_preserved() {
        let text = "z timeout\na aborted\nm killed\n";
        let matches = scan_for_errors(text);
        assert_eq!(
            matches,
            vec!["z timeout".to_string(), "a aborted".to_string(), "m killed".to_string()]
        );
    }
}
