//! Closest-match name suggestions for unrecognized declared names.

use std::cmp::Ordering;

/// Minimum similarity for a directory name to be offered as a suggestion.
const MIN_SCORE: f64 = 0.6;
/// Bonus when any single name part (first/last name) is a close match.
const PART_BONUS: f64 = 0.15;
const PART_THRESHOLD: f64 = 0.8;

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = if ca == cb {
                0
            } else {
                1
            };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_len]
}

/// Similarity in `[0, 1]`; 1.0 for identical strings.
fn similarity(a: &str, b: &str) -> f64 {
    let len = a.chars().count().max(b.chars().count());
    if len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / len as f64
}

/// Rank directory names by similarity to `declared` and return up to `limit`
/// suggestions, best first.
///
/// A close match on any single name part earns a small bonus so a typo in
/// one word ("Jane Do") still surfaces the full name ("Jane Doe").
pub fn similar_names(declared: &str, names: &[String], limit: usize) -> Vec<String> {
    let declared_lower = declared.to_lowercase();
    let declared_parts: Vec<&str> = declared_lower.split_whitespace().collect();

    let mut scored: Vec<(f64, &String)> = Vec::new();
    for name in names {
        let name_lower = name.to_lowercase();
        let mut score = similarity(&declared_lower, &name_lower);

        let close_part = declared_parts.iter().any(|dp| {
            name_lower
                .split_whitespace()
                .any(|np| similarity(dp, np) > PART_THRESHOLD)
        });
        if close_part {
            score += PART_BONUS;
        }

        if score >= MIN_SCORE {
            scored.push((score, name));
        }
    }

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.into_iter().take(limit).map(|(_, n)| n.clone()).collect()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn levenshtein_identical() {
        assert_eq!(levenshtein("hello", "hello"), 0);
    }

    #[test]
    fn levenshtein_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn levenshtein_single_edit() {
        assert_eq!(levenshtein("doe", "do"), 1);
        assert_eq!(levenshtein("jane", "jabe"), 1);
    }

    #[test]
    fn typo_surfaces_full_name() {
        let suggestions =
            similar_names("Jane Do", &names(&["Jane Doe", "John Smith"]), 3);
        assert_eq!(suggestions, vec!["Jane Doe"]);
    }

    #[test]
    fn dissimilar_names_are_excluded() {
        let suggestions =
            similar_names("Xavier Quigley", &names(&["Jane Doe", "John Smith"]), 3);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn best_match_comes_first_and_limit_is_respected() {
        let directory = names(&["Jane Doe", "Jane Dow", "Janet Dove", "Jan Deo"]);
        let suggestions = similar_names("Jane Doe", &directory, 2);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0], "Jane Doe");
    }

    #[test]
    fn empty_directory_yields_nothing() {
        assert!(similar_names("Jane Doe", &[], 3).is_empty());
    }

    #[test]
    fn case_is_ignored() {
        let suggestions = similar_names("jane doe", &names(&["Jane Doe"]), 3);
        assert_eq!(suggestions, vec!["Jane Doe"]);
    }
}
