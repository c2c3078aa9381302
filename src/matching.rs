use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How close a possessed-rows string comes to satisfying a spell's song.
///
/// `possessed_digits` and `missing_digits` partition the unique characters of
/// the required string: every unique required character lands in exactly one
/// of the two, and both are sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub possessed_digits: String,
    pub missing_digits: String,
    pub matching_percentage: u8,
}

/// Compare a spell's required song against the rows currently possessed.
///
/// An empty requirement is trivially satisfied (100%). Otherwise membership
/// is computed on unique characters, but the percentage denominator is the
/// raw required string, repeats included: a song listing a row twice counts
/// it twice against the percentage, so `("112233", "12")` comes out at 33
/// rather than 100. The result is floored to an integer.
///
/// Pure and total: non-digit characters are treated as opaque, not filtered.
/// Possessed-rows normalization happens upstream ([`normalize_possessed`]).
pub fn calculate_matching(required: &str, possessed: &str) -> MatchResult {
    if required.is_empty() {
        return MatchResult {
            possessed_digits: String::new(),
            missing_digits: String::new(),
            matching_percentage: 100,
        };
    }

    let possessed_set: BTreeSet<char> = possessed.chars().collect();
    let mut common = BTreeSet::new();
    let mut missing = BTreeSet::new();
    for character in required.chars() {
        if possessed_set.contains(&character) {
            common.insert(character);
        } else {
            missing.insert(character);
        }
    }

    let matching_percentage = (common.len() * 100 / required.chars().count()) as u8;

    MatchResult {
        possessed_digits: common.into_iter().collect(),
        missing_digits: missing.into_iter().collect(),
        matching_percentage,
    }
}

/// Strip everything but ASCII digits from a raw possessed-rows string.
///
/// The host applies this to user input before handing the string to
/// [`crate::MatchingCache::rebuild`].
pub fn normalize_possessed(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
