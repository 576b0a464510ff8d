//! Turn a score breakdown into a verdict with an explanation.

use crate::similarity::ScoreBreakdown;
use serde::Serialize;

/// Minimum combined score for two names to count as a match.
///
/// Calibrated against the labeled name pairs in
/// `tests/labeled_names.rs`: every labeled match scores at least 0.77, and
/// lookalike non-matches such as "Christopher"/"Christian" stay just below.
pub const THRESHOLD: f64 = 0.75;

/// Sub-scores closer than this are reported as agreeing.
const SIGNAL_TOLERANCE: f64 = 0.005;

/// Outcome of one verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    pub confidence: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionPolicy {
    threshold: f64,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            threshold: THRESHOLD,
        }
    }
}

impl DecisionPolicy {
    /// Policy with a custom threshold; `None` unless it lies in [0, 1].
    pub fn with_threshold(threshold: f64) -> Option<Self> {
        (0.0..=1.0)
            .contains(&threshold)
            .then_some(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn decide(&self, breakdown: &ScoreBreakdown) -> MatchResult {
        let confidence = breakdown.combined.clamp(0.0, 1.0);
        let matched = confidence >= self.threshold;
        MatchResult {
            matched,
            confidence,
            explanation: self.explain(breakdown, matched, confidence),
        }
    }

    fn explain(&self, breakdown: &ScoreBreakdown, matched: bool, confidence: f64) -> String {
        let mut parts = Vec::new();

        parts.push(if matched {
            format!(
                "Match: confidence {confidence:.2} meets threshold {:.2}.",
                self.threshold
            )
        } else {
            format!(
                "No match: confidence {confidence:.2} is below threshold {:.2}.",
                self.threshold
            )
        });

        let whole = breakdown.whole_string;
        let token = breakdown.token_level;
        parts.push(if (whole - token).abs() < SIGNAL_TOLERANCE {
            format!("Whole-string and token-level similarity agree ({whole:.2}).")
        } else if whole < token {
            format!(
                "Whole-string similarity ({whole:.2}) is the weaker signal; \
                 token-level similarity is {token:.2}."
            )
        } else {
            format!(
                "Token-level similarity ({token:.2}) is the weaker signal; \
                 whole-string similarity is {whole:.2}."
            )
        });

        if breakdown.target_tokens != breakdown.candidate_tokens {
            parts.push(format!(
                "Token count differs (target {}, candidate {}).",
                breakdown.target_tokens, breakdown.candidate_tokens
            ));
        }

        let alignment = &breakdown.alignment;
        if !alignment.joined.is_empty() {
            parts.push(format!(
                "Joined adjacent tokens: {}.",
                alignment.joined.join(", ")
            ));
        }
        if !alignment.unmatched_target.is_empty() {
            parts.push(format!(
                "Target tokens missing from candidate: {}.",
                alignment.unmatched_target.join(", ")
            ));
        }
        if !alignment.unmatched_candidate.is_empty() {
            parts.push(format!(
                "Candidate tokens not in target: {}.",
                alignment.unmatched_candidate.join(", ")
            ));
        }
        if !breakdown.conflicts.is_empty() {
            let pairs: Vec<String> = breakdown
                .conflicts
                .iter()
                .map(|(target, candidate)| format!("{target}/{candidate}"))
                .collect();
            parts.push(format!("Tokens name different people: {}.", pairs.join(", ")));
        }
        if alignment.reordered {
            parts.push("Tokens appear in a different order.".to_string());
        }

        parts.join(" ")
    }
}

/// Decide with the default [`THRESHOLD`].
pub fn decide(breakdown: &ScoreBreakdown) -> MatchResult {
    DecisionPolicy::default().decide(breakdown)
}
