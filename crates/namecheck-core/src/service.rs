//! Verification service: normalize → tokenize → score → decide.

use crate::decision::{DecisionPolicy, MatchResult};
use crate::error::{NameRole, VerifyError};
use crate::normalize::{normalize_as, NormalizedName};
use crate::similarity::{score_breakdown, ScoreBreakdown};
use crate::tokenize::{tokenize, TokenSequence};
use serde::Serialize;

/// Most tokens accepted per name. Compound joining retries every adjacent
/// pair each round, so cost grows steeply with token count.
pub const MAX_TOKENS: usize = 16;

/// Everything computed while verifying one pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    pub target: String,
    pub candidate: String,
    pub normalized_target: String,
    pub normalized_candidate: String,
    pub breakdown: ScoreBreakdown,
    pub result: MatchResult,
}

/// Stateless verifier. Holds only the decision policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verifier {
    policy: DecisionPolicy,
}

impl Verifier {
    pub fn new(policy: DecisionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    /// Verify `candidate` against `target`.
    pub fn verify(&self, target: &str, candidate: &str) -> Result<MatchResult, VerifyError> {
        self.inspect(target, candidate).map(|inspection| inspection.result)
    }

    /// Verify against a target that may not exist yet.
    ///
    /// An absent target is reported as [`VerifyError::NoTargetName`] before
    /// the candidate is looked at; it is never treated as an empty name.
    pub fn verify_latest(
        &self,
        target: Option<&str>,
        candidate: &str,
    ) -> Result<MatchResult, VerifyError> {
        let target = target.ok_or(VerifyError::NoTargetName)?;
        self.verify(target, candidate)
    }

    /// Verify and keep the normalized forms and sub-scores.
    pub fn inspect(&self, target: &str, candidate: &str) -> Result<Inspection, VerifyError> {
        let normalized_target = normalize_as(target, NameRole::Target)?;
        let normalized_candidate = normalize_as(candidate, NameRole::Candidate)?;

        let target_tokens = bounded_tokens(&normalized_target, NameRole::Target)?;
        let candidate_tokens = bounded_tokens(&normalized_candidate, NameRole::Candidate)?;

        let breakdown = score_breakdown(&target_tokens, &candidate_tokens);
        let result = self.policy.decide(&breakdown);

        tracing::debug!(
            target_name = normalized_target.as_str(),
            candidate_name = normalized_candidate.as_str(),
            matched = result.matched,
            confidence = result.confidence,
            "verified name pair"
        );

        Ok(Inspection {
            target: target.to_string(),
            candidate: candidate.to_string(),
            normalized_target: normalized_target.into_string(),
            normalized_candidate: normalized_candidate.into_string(),
            breakdown,
            result,
        })
    }
}

fn bounded_tokens(name: &NormalizedName, role: NameRole) -> Result<TokenSequence, VerifyError> {
    let tokens = tokenize(name);
    if tokens.len() > MAX_TOKENS {
        tracing::warn!(
            %role,
            count = tokens.len(),
            limit = MAX_TOKENS,
            "name has too many tokens"
        );
        return Err(VerifyError::TooManyTokens {
            role,
            count: tokens.len(),
            limit: MAX_TOKENS,
        });
    }
    Ok(tokens)
}

/// Verify with the default policy.
pub fn verify(target: &str, candidate: &str) -> Result<MatchResult, VerifyError> {
    Verifier::default().verify(target, candidate)
}
