//! Error types for name verification.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which side of a comparison a name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameRole {
    Target,
    Candidate,
}

impl fmt::Display for NameRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRole::Target => f.write_str("target"),
            NameRole::Candidate => f.write_str("candidate"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The name has no letters or digits left after normalization.
    #[error("{role} name is empty after normalization")]
    InvalidInput { role: NameRole },

    /// The name has more tokens than a personal name plausibly carries.
    #[error("{role} name has {count} tokens; at most {limit} are supported")]
    TooManyTokens {
        role: NameRole,
        count: usize,
        limit: usize,
    },

    /// Verification was attempted before any target name was generated.
    #[error("no target name has been generated yet")]
    NoTargetName,
}

impl VerifyError {
    /// Short hint for the user on how to recover.
    pub fn user_hint(&self) -> &'static str {
        match self {
            VerifyError::InvalidInput { .. } => "Provide a name containing at least one letter.",
            VerifyError::TooManyTokens { .. } => "Provide a single personal name, not free text.",
            VerifyError::NoTargetName => "Run `namecheck generate <prompt>` first.",
        }
    }
}
