//! Verify commands: verify (against the latest target), check (explicit pair).
//!
//! CHANGELOG:
//! - 10/14/2026 - Added check command for explicit target/candidate pairs
//! - 10/14/2026 - Initial implementation

use crate::output::{print_fields, OutputControls};
use crate::store::TargetStore;
use anyhow::{Context, Result};
use namecheck_core::{Inspection, Verifier, VerifyError};
use serde::Serialize;

/// Printable outcome of one verification.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub target_name: String,
    pub candidate_name: String,
    pub matched: bool,
    pub confidence: f64,
    pub explanation: String,
    pub normalized_target: String,
    pub normalized_candidate: String,
    pub whole_string_similarity: f64,
    pub token_level_similarity: f64,
    pub threshold: f64,
}

impl VerifyReport {
    fn new(inspection: Inspection, threshold: f64) -> Self {
        Self {
            target_name: inspection.target,
            candidate_name: inspection.candidate,
            matched: inspection.result.matched,
            confidence: inspection.result.confidence,
            explanation: inspection.result.explanation,
            normalized_target: inspection.normalized_target,
            normalized_candidate: inspection.normalized_candidate,
            whole_string_similarity: inspection.breakdown.whole_string,
            token_level_similarity: inspection.breakdown.token_level,
            threshold,
        }
    }

    fn print(&self, output: &OutputControls) {
        if output.json {
            output.print(self);
            return;
        }
        print_fields(&[
            ("Latest target name", self.target_name.clone()),
            ("Candidate name", self.candidate_name.clone()),
            ("Match", self.matched.to_string()),
            ("Confidence", format!("{:.2}", self.confidence)),
            ("Reason", self.explanation.clone()),
        ]);
    }
}

/// Verify `candidate` against the latest stored target.
///
/// With no stored target this fails with [`VerifyError::NoTargetName`]
/// without running the matcher.
pub fn against_latest(
    store: &dyn TargetStore,
    verifier: &Verifier,
    candidate: &str,
) -> Result<VerifyReport> {
    let target = store
        .latest_target_name()
        .context("Failed to read latest target name")?
        .ok_or(VerifyError::NoTargetName)?;
    pair(verifier, &target, candidate)
}

/// Verify an explicit target/candidate pair.
pub fn pair(verifier: &Verifier, target: &str, candidate: &str) -> Result<VerifyReport> {
    let inspection = verifier.inspect(target, candidate)?;
    Ok(VerifyReport::new(inspection, verifier.policy().threshold()))
}

pub fn run_latest(
    store: &dyn TargetStore,
    verifier: &Verifier,
    candidate: &str,
    output: &OutputControls,
) -> Result<()> {
    against_latest(store, verifier, candidate)?.print(output);
    Ok(())
}

pub fn run_pair(
    verifier: &Verifier,
    target: &str,
    candidate: &str,
    output: &OutputControls,
) -> Result<()> {
    pair(verifier, target, candidate)?.print(output);
    Ok(())
}
