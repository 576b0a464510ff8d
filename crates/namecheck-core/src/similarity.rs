//! Similarity scoring between two token sequences.
//!
//! The final score blends two signals:
//! - whole-string: edit similarity of the full names (or of their
//!   token-sorted forms, whichever is higher);
//! - token-level: greedy one-to-one alignment of tokens, averaged over the
//!   longer sequence so unmatched tokens count as zero.
//!
//! Edit distance is Levenshtein with adjacent transpositions (optimal string
//! alignment), so "tyler"/"tlyer" is a single edit.
//!
//! Tokens that name different people ("rashid"/"rashidi", "michael"/
//! "michelle") score 0 and cap the final score at the token-level signal.
//!
//! CHANGELOG:
//! - 10/14/2026 - One-letter surname extensions count as conflicting tokens
//! - 10/14/2026 - Join adjacent tokens during alignment ("al fayed" ~ "alfayed")
//! - 10/14/2026 - Whole-string signal also compares token-sorted forms
//! - 10/14/2026 - Initial implementation

use crate::lexicon;
use crate::tokenize::TokenSequence;
use serde::Serialize;
use strsim::osa_distance;

/// Weight of the whole-string signal in the final score.
pub const WHOLE_STRING_WEIGHT: f64 = 0.5;

/// Weight of the token-level signal in the final score.
pub const TOKEN_LEVEL_WEIGHT: f64 = 0.5;

/// A joined token must reach this similarity against the other side.
pub const COMPOUND_MIN_SIMILARITY: f64 = 0.85;

/// One aligned pair of tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenPair {
    pub target: String,
    pub candidate: String,
    pub similarity: f64,
}

/// Result of aligning target tokens against candidate tokens.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TokenAlignment {
    /// Matched pairs in target token order.
    pub pairs: Vec<TokenPair>,
    pub unmatched_target: Vec<String>,
    pub unmatched_candidate: Vec<String>,
    /// Tokens produced by joining two adjacent name parts.
    pub joined: Vec<String>,
    /// Matched tokens appear in a different relative order on each side.
    pub reordered: bool,
}

/// Every intermediate value behind a similarity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub whole_string: f64,
    pub token_level: f64,
    pub combined: f64,
    pub target_tokens: usize,
    pub candidate_tokens: usize,
    pub alignment: TokenAlignment,
    /// (target, candidate) token pairs that name different people.
    pub conflicts: Vec<(String, String)>,
}

impl ScoreBreakdown {
    fn empty(target_tokens: usize, candidate_tokens: usize) -> Self {
        Self {
            whole_string: 0.0,
            token_level: 0.0,
            combined: 0.0,
            target_tokens,
            candidate_tokens,
            alignment: TokenAlignment::default(),
            conflicts: Vec::new(),
        }
    }
}

/// Edit similarity in [0, 1]: `1 - distance / longer length` (in chars).
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - osa_distance(a, b) as f64 / longest as f64
}

/// Similarity of two single tokens, with known name variants applied.
pub fn token_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if lexicon::are_variants(a, b) {
        return edit_similarity(a, b).max(lexicon::VARIANT_SIMILARITY);
    }
    if lexicon::are_distinct(a, b) {
        return 0.0;
    }
    edit_similarity(a, b).max(folded_similarity(a, b))
}

/// Edit similarity with both transliteration suffixes folded to `ov`.
///
/// Zero unless both tokens carry a suffix and their stems already overlap.
fn folded_similarity(a: &str, b: &str) -> f64 {
    match (lexicon::suffix_stem(a), lexicon::suffix_stem(b)) {
        (Some(left), Some(right)) if edit_similarity(left, right) > 0.0 => {
            edit_similarity(&lexicon::fold_suffix(a), &lexicon::fold_suffix(b))
        }
        _ => 0.0,
    }
}

/// Token pairs that name different people, skipping tokens that also appear
/// verbatim on the other side.
fn conflicting_tokens(target: &[String], candidate: &[String]) -> Vec<(String, String)> {
    let mut conflicts = Vec::new();
    for left in target.iter().filter(|token| !candidate.contains(token)) {
        for right in candidate.iter().filter(|token| !target.contains(token)) {
            let pair = (left.clone(), right.clone());
            if !lexicon::are_variants(left, right)
                && lexicon::are_distinct(left, right)
                && !conflicts.contains(&pair)
            {
                conflicts.push(pair);
            }
        }
    }
    conflicts
}

/// Whole-string similarity of two token sequences.
pub fn whole_string_similarity(target: &TokenSequence, candidate: &TokenSequence) -> f64 {
    if target.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    let direct = edit_similarity(&target.joined(), &candidate.joined());
    let sorted = edit_similarity(&target.sorted_joined(), &candidate.sorted_joined());
    direct.max(sorted)
}

/// Token-level similarity, symmetric in its arguments.
///
/// Mean of the directional alignment scores in both directions.
pub fn token_level_similarity(target_tokens: &[String], candidate_tokens: &[String]) -> f64 {
    let forward = joined_alignment(target_tokens, candidate_tokens).score;
    let backward = joined_alignment(candidate_tokens, target_tokens).score;
    (forward + backward) / 2.0
}

/// Score two token sequences in [0, 1].
pub fn score(target: &TokenSequence, candidate: &TokenSequence) -> f64 {
    score_breakdown(target, candidate).combined
}

/// Score two token sequences, keeping the sub-scores and alignment.
pub fn score_breakdown(target: &TokenSequence, candidate: &TokenSequence) -> ScoreBreakdown {
    if target.is_empty() || candidate.is_empty() {
        return ScoreBreakdown::empty(target.len(), candidate.len());
    }

    let whole_string = whole_string_similarity(target, candidate);
    let forward = joined_alignment(target.tokens(), candidate.tokens());
    let backward = joined_alignment(candidate.tokens(), target.tokens());
    let token_level = (forward.score + backward.score) / 2.0;
    let conflicts = conflicting_tokens(target.tokens(), candidate.tokens());
    let blended =
        (WHOLE_STRING_WEIGHT * whole_string + TOKEN_LEVEL_WEIGHT * token_level).clamp(0.0, 1.0);
    // Whole-string edits cannot see a conflict; the token-level signal already scores it 0.
    let combined = if conflicts.is_empty() {
        blended
    } else {
        blended.min(token_level)
    };

    tracing::debug!(
        whole_string,
        token_level,
        combined,
        joins = forward.joined.len(),
        conflicts = conflicts.len(),
        "scored name pair"
    );

    ScoreBreakdown {
        whole_string,
        token_level,
        combined,
        target_tokens: target.len(),
        candidate_tokens: candidate.len(),
        alignment: forward.into_alignment(),
        conflicts,
    }
}

/// Greedy matching of `rows` against `cols`.
struct Matching {
    /// (row, col, similarity) in the order the pairs were taken.
    pairs: Vec<(usize, usize, f64)>,
    score: f64,
}

/// Rank all pairs by similarity (ties by row, then column) and take each pair
/// whose tokens are both still free. Zero-similarity pairs are never taken.
fn greedy_matching(rows: &[String], cols: &[String]) -> Matching {
    let longest = rows.len().max(cols.len());
    if rows.is_empty() || cols.is_empty() {
        return Matching {
            pairs: Vec::new(),
            score: 0.0,
        };
    }

    let mut ranked: Vec<(f64, usize, usize)> = Vec::with_capacity(rows.len() * cols.len());
    for (row, left) in rows.iter().enumerate() {
        for (col, right) in cols.iter().enumerate() {
            let similarity = token_similarity(left, right);
            if similarity > 0.0 {
                ranked.push((similarity, row, col));
            }
        }
    }
    ranked.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    let mut row_taken = vec![false; rows.len()];
    let mut col_taken = vec![false; cols.len()];
    let mut best = vec![0.0; rows.len()];
    let mut pairs = Vec::new();
    for (similarity, row, col) in ranked {
        if row_taken[row] || col_taken[col] {
            continue;
        }
        row_taken[row] = true;
        col_taken[col] = true;
        best[row] = similarity;
        pairs.push((row, col, similarity));
    }

    // Summed in row order so the result never depends on ranking ties.
    let total: f64 = best.iter().sum();
    Matching {
        pairs,
        score: total / longest as f64,
    }
}

#[derive(Clone, Copy)]
enum Side {
    Rows,
    Cols,
}

/// Directional alignment after joining adjacent tokens where that helps.
struct JoinedAlignment {
    rows: Vec<String>,
    cols: Vec<String>,
    matching: Matching,
    joined: Vec<String>,
    score: f64,
}

impl JoinedAlignment {
    fn into_alignment(self) -> TokenAlignment {
        let mut row_match: Vec<Option<(usize, f64)>> = vec![None; self.rows.len()];
        let mut col_used = vec![false; self.cols.len()];
        for &(row, col, similarity) in &self.matching.pairs {
            row_match[row] = Some((col, similarity));
            col_used[col] = true;
        }

        let mut pairs = Vec::new();
        let mut unmatched_target = Vec::new();
        let mut last_col = None;
        let mut reordered = false;
        for (row, token) in self.rows.iter().enumerate() {
            match row_match[row] {
                Some((col, similarity)) => {
                    if last_col.is_some_and(|last| col < last) {
                        reordered = true;
                    }
                    last_col = Some(col);
                    pairs.push(TokenPair {
                        target: token.clone(),
                        candidate: self.cols[col].clone(),
                        similarity,
                    });
                }
                None => unmatched_target.push(token.clone()),
            }
        }
        let unmatched_candidate = self
            .cols
            .iter()
            .zip(&col_used)
            .filter(|(_, used)| !**used)
            .map(|(token, _)| token.clone())
            .collect();

        TokenAlignment {
            pairs,
            unmatched_target,
            unmatched_candidate,
            joined: self.joined,
            reordered,
        }
    }
}

fn best_similarity(token: &str, others: &[String]) -> f64 {
    others
        .iter()
        .map(|other| token_similarity(token, other))
        .fold(0.0, f64::max)
}

/// Align `rows` against `cols`, repeatedly applying the single adjacent-token
/// join (on either side) that most improves the directional score.
///
/// A join is only considered when the joined token is a near match for some
/// token on the other side. Ties keep the first join found, rows first.
fn joined_alignment(rows: &[String], cols: &[String]) -> JoinedAlignment {
    let mut rows = rows.to_vec();
    let mut cols = cols.to_vec();
    let mut joined = Vec::new();
    let mut matching = greedy_matching(&rows, &cols);

    loop {
        let mut best: Option<(Side, usize, Matching)> = None;
        let mut best_score = matching.score;

        for side in [Side::Rows, Side::Cols] {
            let (own, other) = match side {
                Side::Rows => (&rows, &cols),
                Side::Cols => (&cols, &rows),
            };
            for index in 0..own.len().saturating_sub(1) {
                let compound = format!("{}{}", own[index], own[index + 1]);
                if best_similarity(&compound, other) < COMPOUND_MIN_SIMILARITY {
                    continue;
                }
                let fused = join_at(own, index);
                let trial = match side {
                    Side::Rows => greedy_matching(&fused, &cols),
                    Side::Cols => greedy_matching(&rows, &fused),
                };
                if trial.score > best_score {
                    best_score = trial.score;
                    best = Some((side, index, trial));
                }
            }
        }

        let Some((side, index, trial)) = best else {
            break;
        };
        let own = match side {
            Side::Rows => &mut rows,
            Side::Cols => &mut cols,
        };
        *own = join_at(own, index);
        joined.push(own[index].clone());
        matching = trial;
    }

    let score = matching.score;
    JoinedAlignment {
        rows,
        cols,
        matching,
        joined,
        score,
    }
}

/// Copy of `tokens` with `tokens[index]` and `tokens[index + 1]` joined.
fn join_at(tokens: &[String], index: usize) -> Vec<String> {
    let mut fused = Vec::with_capacity(tokens.len() - 1);
    fused.extend_from_slice(&tokens[..index]);
    fused.push(format!("{}{}", tokens[index], tokens[index + 1]));
    fused.extend_from_slice(&tokens[index + 2..]);
    fused
}
