use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Copyright notice lines: `Copyright [(c)|©] <year|[year]> ...` up to end of line.
/// `â©` is `©` read as Latin-1 and then lowercased.
static COPYRIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*copyright (?:©|â©|\(c\))?\s*(?:\d{4}|\[year\]).*")
        .expect("copyright pattern is a valid regex")
});

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w']+").expect("word pattern is a valid regex"));

/// The deduplicated, normalized tokens of a document.
///
/// Set membership is what scoring uses. The first-occurrence index of each
/// token is kept alongside only so divergent words can be reported in roughly
/// the order they appeared in the source text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordSet {
    first_seen: HashMap<String, usize>,
}

impl WordSet {
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.first_seen.contains_key(word)
    }

    /// Index of the word's first occurrence among all extracted tokens.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.first_seen.get(word).copied()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.first_seen.keys().map(String::as_str)
    }

    /// Number of tokens present in both sets.
    pub fn common(&self, other: &WordSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.words().filter(|w| large.contains(w)).count()
    }

    /// Tokens of `self` absent from `other`, ordered by first occurrence in `self`.
    pub fn difference(&self, other: &WordSet) -> Vec<String> {
        let mut words: Vec<&str> = self.words().filter(|w| !other.contains(w)).collect();
        words.sort_by_key(|w| self.position(w));
        words.into_iter().map(str::to_string).collect()
    }
}

/// Lowercase the text and drop copyright notice lines, so holder names and
/// years never influence matching.
pub fn clean_license_text(text: &str) -> String {
    let lower = text.to_lowercase();
    COPYRIGHT.replace_all(&lower, "").into_owned()
}

/// Build the word set of an arbitrary license-like text.
pub fn build_word_set(text: &str) -> WordSet {
    let cleaned = clean_license_text(text);
    let mut first_seen = HashMap::new();
    for (i, m) in WORD.find_iter(&cleaned).enumerate() {
        first_seen.entry(m.as_str().to_string()).or_insert(i);
    }
    WordSet { first_seen }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_dedups() {
        let ws = build_word_set("The Software, the SOFTWARE and the software.");
        assert_eq!(ws.len(), 3);
        assert!(ws.contains("the"));
        assert!(ws.contains("software"));
        assert!(ws.contains("and"));
        assert!(!ws.contains("The"));
    }

    #[test]
    fn test_positions_count_duplicates() {
        let ws = build_word_set("alpha beta alpha gamma");
        assert_eq!(ws.position("alpha"), Some(0));
        assert_eq!(ws.position("beta"), Some(1));
        assert_eq!(ws.position("gamma"), Some(3));
    }

    #[test]
    fn test_apostrophes_and_underscores_are_word_characters() {
        let ws = build_word_set("contributor's snake_case (a)b-c");
        assert!(ws.contains("contributor's"));
        assert!(ws.contains("snake_case"));
        assert!(ws.contains("a"));
        assert!(ws.contains("b"));
        assert!(ws.contains("c"));
        assert_eq!(ws.len(), 5);
    }

    #[test]
    fn test_copyright_lines_do_not_affect_words() {
        let body = "Permission is hereby granted.\nAll rights reserved.\n";
        let a = build_word_set(&format!("Copyright (c) 2020, Example Corp\n{body}"));
        let b = build_word_set(&format!("Copyright (c) 1999, Other Inc\n{body}"));
        assert_eq!(a, b);
        assert!(!a.contains("example"));
        assert!(!a.contains("other"));
    }

    #[test]
    fn test_copyright_variants() {
        assert!(build_word_set("Copyright © 2018 Someone").is_empty());
        assert!(build_word_set("COPYRIGHT 2018 Someone").is_empty());
        assert!(build_word_set("Copyright (c) [year], [fullname]").is_empty());
        assert!(build_word_set("Copyright Â© 2018 Someone").is_empty());
    }

    #[test]
    fn test_copyright_word_in_prose_is_kept() {
        let ws = build_word_set("retain the above copyright notice");
        assert!(ws.contains("copyright"));
        assert!(ws.contains("notice"));
    }

    #[test]
    fn test_empty_text() {
        assert!(build_word_set("").is_empty());
        assert!(build_word_set("  ,.;-- \n").is_empty());
    }

    #[test]
    fn test_difference_is_ordered_by_position() {
        let a = build_word_set("zeta alpha mu beta");
        let b = build_word_set("alpha");
        assert_eq!(a.difference(&b), vec!["zeta", "mu", "beta"]);
        assert!(b.difference(&a).is_empty());
    }

    #[test]
    fn test_common() {
        let a = build_word_set("one two three");
        let b = build_word_set("two three four five");
        assert_eq!(a.common(&b), 2);
        assert_eq!(b.common(&a), 2);
    }
}
