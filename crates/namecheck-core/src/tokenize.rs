//! Split normalized names into name-part tokens.

use crate::normalize::NormalizedName;
use serde::Serialize;

/// Ordered, non-empty name parts of a [`NormalizedName`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    /// Build a sequence from arbitrary parts, dropping empty ones.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            parts
                .into_iter()
                .map(Into::into)
                .filter(|part: &String| !part.is_empty())
                .collect(),
        )
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tokens joined by single spaces.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    /// Tokens sorted lexicographically, then joined by single spaces.
    pub fn sorted_joined(&self) -> String {
        let mut sorted: Vec<&str> = self.0.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.join(" ")
    }
}

/// Split a normalized name on the single spaces left by normalization.
pub fn tokenize(name: &NormalizedName) -> TokenSequence {
    TokenSequence::from_parts(name.as_str().split(' '))
}
