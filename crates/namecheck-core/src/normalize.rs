//! Name normalization.
//!
//! Lower-cases, folds diacritics to base letters, joins across hyphens and
//! apostrophes, and collapses separators to single spaces.
//!
//! CHANGELOG:
//! - 10/14/2026 - Treat list separators (comma, slash, ...) as spaces
//! - 10/14/2026 - Initial implementation

use crate::error::{NameRole, VerifyError};
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters that separate name parts the same way whitespace does.
const SEPARATORS: [char; 5] = [',', ';', '/', '_', '|'];

/// A canonical name: lowercase letters and digits separated by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw name.
///
/// Fails with [`VerifyError::InvalidInput`] when nothing comparable is left,
/// e.g. for `""`, `"   "` or `"--"`. The error reports the candidate side;
/// use [`normalize_as`] to attribute it to the target.
pub fn normalize(raw: &str) -> Result<NormalizedName, VerifyError> {
    normalize_as(raw, NameRole::Candidate)
}

/// Normalize a raw name, attributing an empty result to `role`.
pub fn normalize_as(raw: &str, role: NameRole) -> Result<NormalizedName, VerifyError> {
    let lowered = raw.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    // Set by a separator once `out` holds text, so leading separators are dropped.
    let mut pending_space = false;

    for ch in lowered.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_whitespace() || SEPARATORS.contains(&ch) {
            pending_space = !out.is_empty();
            continue;
        }
        let folded = match fold_letter(ch) {
            Some(folded) => folded,
            None if ch.is_alphanumeric() => {
                push_part(&mut out, &mut pending_space, ch.encode_utf8(&mut [0; 4]));
                continue;
            }
            // Hyphens, apostrophes, periods and other punctuation join their neighbours.
            None => continue,
        };
        push_part(&mut out, &mut pending_space, folded);
    }

    if out.is_empty() {
        return Err(VerifyError::InvalidInput { role });
    }
    Ok(NormalizedName(out))
}

fn push_part(out: &mut String, pending_space: &mut bool, part: &str) {
    if *pending_space {
        out.push(' ');
        *pending_space = false;
    }
    out.push_str(part);
}

/// Letters with no canonical decomposition into a base letter.
fn fold_letter(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'ß' => "ss",
        'æ' | 'ǽ' => "ae",
        'œ' => "oe",
        'ø' => "o",
        'đ' => "d",
        'ł' => "l",
        'þ' => "th",
        'ı' => "i",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> String {
        normalize(raw).unwrap().into_string()
    }

    #[test]
    fn test_lowercase_and_collapse_whitespace() {
        assert_eq!(norm("  Ahmad   ibn\tAl  Farouk "), "ahmad ibn al farouk");
    }

    #[test]
    fn test_diacritics_fold_to_base_letters() {
        assert_eq!(norm("José Álvarez"), "jose alvarez");
        assert_eq!(norm("Łukasz Strauß"), "lukasz strauss");
        assert_eq!(norm("Zoë Ørsted"), "zoe orsted");
    }

    #[test]
    fn test_hyphens_and_apostrophes_join_tokens() {
        assert_eq!(norm("Jean-Luc Picard"), "jeanluc picard");
        assert_eq!(norm("Sarah O'Connor"), "sarah oconnor");
        assert_eq!(norm("Sean O’Brien"), "sean obrien");
        assert_eq!(norm("Al-Hilal"), "alhilal");
    }

    #[test]
    fn test_periods_removed_and_separators_split() {
        assert_eq!(norm("J.R. Smith"), "jr smith");
        assert_eq!(norm("Smith,John"), "smith john");
        assert_eq!(norm("Smith, John"), "smith john");
        assert_eq!(norm("(Omar) Khattab!"), "omar khattab");
    }

    #[test]
    fn test_leading_and_trailing_separators_trimmed() {
        assert_eq!(norm(", Sarah ;"), "sarah");
        assert_eq!(norm("- Sarah -"), "sarah");
    }

    #[test]
    fn test_empty_input_is_invalid() {
        for raw in ["", "   ", "\t\n", "--", ". , ;"] {
            assert_eq!(
                normalize(raw),
                Err(VerifyError::InvalidInput {
                    role: NameRole::Candidate
                }),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_role_is_reported() {
        assert_eq!(
            normalize_as(" ", NameRole::Target),
            Err(VerifyError::InvalidInput {
                role: NameRole::Target
            })
        );
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Ahmad ibn Al Farouk",
            "  JEAN-LUC   picard ",
            "José Álvarez-Núñez",
            "Straße, İsmail",
            "O'Connor; Łukasz",
            "Ægir Þór 3rd",
            "Ελένη Παπαδοπούλου",
            "Мария Петрова",
        ];
        for raw in samples {
            let once = normalize(raw).unwrap();
            let twice = normalize(once.as_str()).unwrap();
            assert_eq!(once, twice, "input {raw:?}");
        }
    }
}
