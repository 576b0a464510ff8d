//! Target name generation from a free-form prompt.
//!
//! The generator is deliberately simple: the prompt only selects a name from
//! fixed pools. The verifier never depends on how a name was produced.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub const FIRST_NAMES: &[&str] = &[
    "Tyler",
    "Sarah",
    "Mohammed",
    "Elizabeth",
    "Omar",
    "Yusuf",
    "Jean-Luc",
    "Mikhail",
    "Alexander",
    "Abdul Rahman",
];

pub const LAST_NAMES: &[&str] = &[
    "Bliha",
    "Al-Hilal",
    "Al Fayed",
    "Gorbachev",
    "Petrov",
    "Al Qasim",
    "O'Connor",
    "Al Khattab",
    "Al Saud",
    "Gonzalez",
];

/// Produces a target name for a prompt.
pub trait NameGenerator {
    fn generate(&self, prompt: &str) -> String;
}

/// Picks a first and last name from fixed pools, keyed by the prompt.
///
/// The same prompt always yields the same name within a build.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolGenerator;

impl PoolGenerator {
    fn seed(prompt: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        prompt.trim().hash(&mut hasher);
        hasher.finish()
    }
}

impl NameGenerator for PoolGenerator {
    fn generate(&self, prompt: &str) -> String {
        let seed = Self::seed(prompt);
        let first = FIRST_NAMES[(seed % FIRST_NAMES.len() as u64) as usize];
        let last = LAST_NAMES[((seed >> 32) % LAST_NAMES.len() as u64) as usize];
        format!("{first} {last}")
    }
}
