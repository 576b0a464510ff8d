//! Fixed name tables consulted by per-token similarity.
//!
//! All entries are in normalized form (lowercase ASCII, no punctuation).

use std::borrow::Cow;

/// Similarity floor for two tokens in the same variant group.
pub const VARIANT_SIMILARITY: f64 = 0.9;

/// Given names that refer to the same person: nicknames and transliterations.
pub const VARIANT_GROUPS: &[&[&str]] = &[
    &["bob", "robert", "rob", "bobby"],
    &["liz", "elizabeth", "beth", "eliza"],
    &["mohammed", "muhammad", "mohammad", "mohamad", "mohamed", "muhamed"],
    &["sarah", "sara"],
    &["jonathon", "jonathan", "johnathon", "johnathan"],
    &["steven", "stephen", "steve"],
    &["sean", "shawn", "shaun"],
    &["alexander", "aleksandr", "aleksander", "alex"],
    &["yusuf", "youssef", "yousuf", "yusef", "yousef"],
    &["katherine", "catherine", "kathryn", "katharine"],
    &["ahmad", "ahmed"],
];

/// Given names that look alike but belong to different people.
pub const DISTINCT_PAIRS: &[(&str, &str)] = &[
    ("michael", "michelle"),
    ("maria", "mario"),
    ("samantha", "samuel"),
    ("william", "liam"),
    ("daniel", "danielle"),
    ("eric", "erica"),
];

/// Transliteration endings folded to `ov` ("petrof", "gorbachev").
const SUFFIX_VARIANTS: [&str; 6] = ["ov", "ev", "of", "off", "ef", "eff"];

/// Minimum stem length left after removing a suffix.
const MIN_SUFFIX_STEM: usize = 3;

/// Shortest token whose one-letter extension names a different family.
const MIN_EXTENDED_LEN: usize = 4;

fn group_of(token: &str) -> Option<usize> {
    VARIANT_GROUPS
        .iter()
        .position(|group| group.contains(&token))
}

/// True when both tokens are listed in the same variant group.
pub fn are_variants(a: &str, b: &str) -> bool {
    match (group_of(a), group_of(b)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

/// True when the pair names different people despite looking similar:
/// either listed in [`DISTINCT_PAIRS`] or a one-letter extension.
pub fn are_distinct(a: &str, b: &str) -> bool {
    DISTINCT_PAIRS
        .iter()
        .any(|&(left, right)| (a == left && b == right) || (a == right && b == left))
        || is_extension(a, b)
}

/// True when one token is the other plus a single trailing letter
/// ("rashid"/"rashidi"), compared after suffix folding.
pub fn is_extension(a: &str, b: &str) -> bool {
    let (a, b) = (fold_suffix(a), fold_suffix(b));
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let short_len = short.chars().count();
    short_len >= MIN_EXTENDED_LEN
        && long.chars().count() == short_len + 1
        && long.starts_with(&*short)
}

/// Stem left after removing a transliteration suffix, if the token has one.
pub fn suffix_stem(token: &str) -> Option<&str> {
    SUFFIX_VARIANTS.iter().find_map(|suffix| {
        token
            .strip_suffix(*suffix)
            .filter(|stem| stem.chars().count() >= MIN_SUFFIX_STEM)
    })
}

/// Fold a transliteration suffix to its canonical `ov` form.
pub fn fold_suffix(token: &str) -> Cow<'_, str> {
    match suffix_stem(token) {
        Some(stem) => Cow::Owned(format!("{stem}ov")),
        None => Cow::Borrowed(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_are_symmetric() {
        assert!(are_variants("bob", "robert"));
        assert!(are_variants("robert", "bob"));
        assert!(!are_variants("bob", "sarah"));
        assert!(!are_variants("unknown", "unknown2"));
    }

    #[test]
    fn test_distinct_pairs_are_symmetric() {
        assert!(are_distinct("michael", "michelle"));
        assert!(are_distinct("michelle", "michael"));
        assert!(!are_distinct("michael", "michael"));
    }

    #[test]
    fn test_one_letter_extension_is_distinct() {
        assert!(are_distinct("rashid", "rashidi"));
        assert!(are_distinct("petrova", "petrov"));
        // Folding makes these the same surname, not an extension.
        assert!(!is_extension("petrof", "petroff"));
        // Too short to carry a family suffix.
        assert!(!is_extension("ali", "alia"));
        assert!(!is_extension("rashid", "rashidov"));
    }

    #[test]
    fn test_suffix_stem() {
        assert_eq!(suffix_stem("petrof"), Some("petr"));
        assert_eq!(suffix_stem("darguloff"), Some("dargul"));
        assert_eq!(suffix_stem("kimev"), Some("kim"));
        assert_eq!(suffix_stem("smith"), None);
        assert_eq!(suffix_stem("lev"), None);
    }

    #[test]
    fn test_fold_suffix() {
        assert_eq!(fold_suffix("petrof"), "petrov");
        assert_eq!(fold_suffix("darguloff"), "dargulov");
        assert_eq!(fold_suffix("gorbachev"), "gorbachov");
        assert_eq!(fold_suffix("smith"), "smith");
        // Stem too short to be a surname.
        assert_eq!(fold_suffix("lev"), "lev");
    }

    #[test]
    fn test_tables_are_normalized() {
        let all = VARIANT_GROUPS
            .iter()
            .flat_map(|group| group.iter())
            .chain(DISTINCT_PAIRS.iter().flat_map(|(a, b)| [a, b]));
        for name in all {
            assert!(name.chars().all(|c| c.is_ascii_lowercase()), "{name}");
        }
    }
}
