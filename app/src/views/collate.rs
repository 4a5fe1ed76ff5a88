//! Name normalization and locale-style collation for venue sorting.
//!
//! Venue names arrive with stray surrounding quotes, mixed case, accents,
//! and embedded numbers ("Villa 2" vs "Villa 10"). Sorting compares names
//! case-insensitively, punctuation-insensitively, with common Latin
//! diacritics folded to their base letter and digit runs compared by
//! numeric value.

use std::cmp::Ordering;
use std::iter::Peekable;

/// Normalize a venue name for comparison: trim surrounding whitespace,
/// strip leading/trailing quote characters, and case-fold.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '`' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}'))
        .to_lowercase()
}

/// Compare two venue names under the collation described above.
///
/// Total order over normalized names; callers rely on a stable sort to
/// keep ties in input order.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    compare_normalized(&normalize_name(a), &normalize_name(b))
}

fn compare_normalized(a: &str, b: &str) -> Ordering {
    let mut left = significant_chars(a).peekable();
    let mut right = significant_chars(b).peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(lc), Some(rc)) => {
                if lc.is_ascii_digit() && rc.is_ascii_digit() {
                    let ln = take_number(&mut left);
                    let rn = take_number(&mut right);
                    match ln.cmp(&rn) {
                        Ordering::Equal => {}
                        unequal => return unequal,
                    }
                } else {
                    match lc.cmp(&rc) {
                        Ordering::Equal => {
                            left.next();
                            right.next();
                        }
                        unequal => return unequal,
                    }
                }
            }
        }
    }
}

/// Alphanumeric characters only, diacritics folded. Punctuation and
/// whitespace do not participate in the comparison.
fn significant_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|c| c.is_alphanumeric()).map(fold_diacritic)
}

/// Consume a run of ASCII digits as one number.
///
/// Runs longer than u128 capacity saturate, which still orders them after
/// every representable number.
fn take_number<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> u128 {
    let mut value: u128 = 0;
    while let Some(c) = chars.peek().copied() {
        let Some(digit) = c.to_digit(10) else { break };
        value = value
            .saturating_mul(10)
            .saturating_add(u128::from(digit));
        chars.next();
    }
    value
}

/// Fold common Latin diacritics to their base letter.
///
/// Input is already lowercased by [`normalize_name`].
const fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'ē' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'ī' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'ō' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'ç' => 'c',
        'ñ' => 'n',
        'æ' => 'a',
        'ß' => 's',
        other => other,
    }
}
