//! Match scoring: set overlap between resume keywords and job keywords.

use std::collections::HashSet;

/// Result of comparing two keyword lists.
///
/// `matched` and `missing` partition the job keyword set and preserve the
/// job list's rank order, so downstream consumers see the heaviest gaps
/// first and output stays deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// 0.0 - 100.0, rounded to one decimal place.
    pub percentage: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Scores a resume keyword list against a job keyword list.
///
/// matched = resume ∩ job, missing = job - resume, percentage =
/// 100 * |matched| / |job set|. An empty job list scores 100.0: there is
/// nothing to be missing. Never fails.
pub fn score_match(resume_keywords: &[String], job_keywords: &[String]) -> MatchScore {
    let resume_set: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for keyword in job_keywords {
        if !seen.insert(keyword.as_str()) {
            continue;
        }
        if resume_set.contains(keyword.as_str()) {
            matched.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }

    if seen.is_empty() {
        return MatchScore {
            percentage: 100.0,
            matched,
            missing,
        };
    }

    let percentage = round_one_decimal(matched.len() as f64 / seen.len() as f64 * 100.0);
    MatchScore {
        percentage,
        matched,
        missing,
    }
}

/// Rounds to one decimal place. An exact half goes to the even neighbor,
/// so 6.25 becomes 6.2 and 18.75 becomes 18.8.
pub fn round_one_decimal(value: f64) -> f64 {
    let scaled = value * 10.0;
    let below = scaled.floor();
    let fraction = scaled - below;
    let tenths = if fraction > 0.5 {
        below + 1.0
    } else if fraction < 0.5 {
        below
    } else if below % 2.0 == 0.0 {
        below
    } else {
        below + 1.0
    };
    tenths / 10.0
}
