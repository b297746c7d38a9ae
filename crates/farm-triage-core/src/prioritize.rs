//! Log prioritization.
//!
//! Orders log references into the examination sequence used by the
//! aggregator. Logs whose names hint at failure content are always
//! examined; the remainder is capped to bound outbound fetch volume.

use crate::manifest::LogReference;

/// Names containing any of these (case-insensitive) mark a log as worth
/// examining first.
const PRIORITY_KEYWORDS: [&str; 4] = ["output", "failures", "error", "console"];

/// How many non-priority logs are examined at most.
const OTHER_LOG_CAP: usize = 3;

/// Examination tier of a single log reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    /// Name suggests actionable failure information.
    Priority,
    /// Everything else.
    Other,
}

/// Classify a log by name.
///
/// Plain substring containment on the lowercased name. `outputs_extra`
/// counts as priority; so does any name embedding a keyword.
pub fn classify(name: &str) -> PriorityTier {
    let lower = name.to_lowercase();
    if PRIORITY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        PriorityTier::Priority
    } else {
        PriorityTier::Other
    }
}

/// Build the examination list: every priority log in input order, then the
/// first 3 other logs in input order.
///
/// The result length is always `priority_count + min(3, other_count)`.
pub fn prioritize(refs: Vec<LogReference>) -> Vec<LogReference> {
    let mut priority = Vec::new();
    let mut other = Vec::new();

    for log in refs {
        match classify(&log.name) {
            PriorityTier::Priority => priority.push(log),
            PriorityTier::Other => other.push(log),
        }
    }

    priority.extend(other.into_iter().take(OTHER_LOG_CAP));
    priority
}
