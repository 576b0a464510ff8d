//! Deterministic fuzzy matching for short personal-name strings.
//!
//! The pipeline is normalize → tokenize → score → decide. Every stage is a
//! pure function over its inputs, so the same pair of names always yields a
//! bit-identical [`MatchResult`].
//!
//! ```
//! let result = namecheck_core::verify("Ahmad ibn Al Farouk", "Ahmed ibn Al Faruk").unwrap();
//! assert!(result.matched);
//! ```

pub mod decision;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod service;
pub mod similarity;
pub mod tokenize;

// Re-export commonly used types
pub use decision::{decide, DecisionPolicy, MatchResult, THRESHOLD};
pub use error::{NameRole, VerifyError};
pub use normalize::{normalize, NormalizedName};
pub use service::{verify, Inspection, Verifier, MAX_TOKENS};
pub use similarity::{score, score_breakdown, token_level_similarity, ScoreBreakdown};
pub use tokenize::{tokenize, TokenSequence};
