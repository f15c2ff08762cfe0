use crate::license::template::Template;
use crate::license::words::WordSet;

/// Score reported when there was no template to compare against.
pub const NO_TEMPLATE_SCORE: f64 = -1.0;

/// Best template for a candidate and how the two diverge.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub template: Option<&'a Template>,
    /// Dice coefficient in `[0, 1]`, or [`NO_TEMPLATE_SCORE`].
    pub score: f64,
    /// Candidate words absent from the template, in order of first appearance.
    pub extra_words: Vec<String>,
    /// Template words absent from the candidate, in order of first appearance.
    pub missing_words: Vec<String>,
}

/// Dice coefficient `2|A∩B| / (|A|+|B|)`. Two empty sets score 0.
pub fn dice(a: &WordSet, b: &WordSet) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    2.0 * a.common(b) as f64 / total as f64
}

/// Score `candidate` against every template and keep the best.
///
/// Templates are scanned in corpus order and only a strictly greater score
/// replaces the running best, so on ties the earliest template wins.
pub fn match_templates<'a>(candidate: &WordSet, templates: &'a [Template]) -> MatchResult<'a> {
    let mut best_score = NO_TEMPLATE_SCORE;
    let mut best: Option<&Template> = None;

    for template in templates {
        let score = dice(candidate, &template.words);
        if score > best_score {
            best_score = score;
            best = Some(template);
        }
    }

    let (extra_words, missing_words) = match best {
        Some(t) => (candidate.difference(&t.words), t.words.difference(candidate)),
        None => (Vec::new(), Vec::new()),
    };

    MatchResult {
        template: best,
        score: best_score,
        extra_words,
        missing_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::template::parse_template;
    use crate::license::words::build_word_set;

    fn template(nickname: &str, body: &str) -> Template {
        parse_template(&format!(
            "---\ntitle: {nickname} License\nnickname: {nickname}\n---\n{body}"
        ))
    }

    #[test]
    fn test_self_match_is_perfect() {
        let body = "Permission to use, copy, modify and distribute this software.";
        let templates = vec![template("A", body)];
        let result = match_templates(&build_word_set(body), &templates);
        assert_eq!(result.score, 1.0);
        assert!(result.extra_words.is_empty());
        assert!(result.missing_words.is_empty());
    }

    #[test]
    fn test_score_is_symmetric() {
        let a = build_word_set("one two three four");
        let b = build_word_set("three four five");
        assert_eq!(dice(&a, &b), dice(&b, &a));
        assert!((dice(&a, &b) - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_bounds_with_empty_sets() {
        let empty = WordSet::default();
        let full = build_word_set("some words");
        assert_eq!(dice(&empty, &full), 0.0);
        assert_eq!(dice(&full, &empty), 0.0);
        assert_eq!(dice(&empty, &empty), 0.0);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let a = build_word_set("alpha beta");
        let b = build_word_set("gamma delta");
        assert_eq!(dice(&a, &b), 0.0);
    }

    #[test]
    fn test_best_template_wins() {
        let templates = vec![
            template("FAR", "nothing in common here"),
            template("NEAR", "permission granted to use this software"),
        ];
        let candidate = build_word_set("permission granted to use this software freely");
        let result = match_templates(&candidate, &templates);
        assert_eq!(result.template.unwrap().nickname, "NEAR");
        assert_eq!(result.extra_words, vec!["freely"]);
        assert!(result.missing_words.is_empty());
        assert!(result.score > 0.9 && result.score < 1.0);
    }

    #[test]
    fn test_tie_keeps_first_template() {
        let templates = vec![
            template("FIRST", "same words in both"),
            template("SECOND", "both in same words"),
        ];
        let candidate = build_word_set("same words");
        for _ in 0..10 {
            let result = match_templates(&candidate, &templates);
            assert_eq!(result.template.unwrap().nickname, "FIRST");
        }
    }

    #[test]
    fn test_divergent_words_follow_source_order() {
        let templates = vec![template("T", "keep alpha keep beta keep gamma")];
        let candidate = build_word_set("zulu keep yankee");
        let result = match_templates(&candidate, &templates);
        assert_eq!(result.extra_words, vec!["zulu", "yankee"]);
        assert_eq!(result.missing_words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_empty_template_list() {
        let result = match_templates(&build_word_set("anything"), &[]);
        assert!(result.template.is_none());
        assert_eq!(result.score, NO_TEMPLATE_SCORE);
        assert!(result.extra_words.is_empty());
        assert!(result.missing_words.is_empty());
    }

    #[test]
    fn test_empty_candidate_scores_zero_and_misses_everything() {
        let templates = vec![template("T", "one two three")];
        let result = match_templates(&WordSet::default(), &templates);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.template.unwrap().nickname, "T");
        assert!(result.extra_words.is_empty());
        assert_eq!(result.missing_words, vec!["one", "two", "three"]);
    }
}
