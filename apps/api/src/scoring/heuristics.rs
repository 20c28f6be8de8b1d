//! Regex heuristics over the case-folded text. None of these consult the
//! reference JD; each is a total function that always produces a value.

use once_cell::sync::Lazy;
use regex::Regex;

// Matching is plain substring, no word boundaries: "ai" inside a longer word
// counts. The heuristic is deliberately coarse.
static EDUCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"b\.tech|bachelor|master|m\.tech|ph\.d").unwrap());
static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"machine learning|deep learning|nlp|neural network|ai|cv|transformer|llm")
        .unwrap()
});
static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\+?\s+(years|yrs)").unwrap());

/// The three independent signals fed into the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicSignals {
    /// Any degree-related token present, first occurrence suffices.
    pub education_found: bool,
    /// Total non-overlapping keyword occurrences, not distinct terms.
    pub keyword_count: u32,
    /// Occurrences of a "number + optional plus + years/yrs" phrase.
    /// Counts matches, never sums the numeric values.
    pub experience_count: u32,
}

pub fn annotate(text: &str) -> HeuristicSignals {
    let lower = text.to_lowercase();
    HeuristicSignals {
        education_found: EDUCATION_RE.is_match(&lower),
        keyword_count: KEYWORD_RE.find_iter(&lower).count() as u32,
        experience_count: EXPERIENCE_RE.find_iter(&lower).count() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_zero_signals() {
        let signals = annotate("");
        assert!(!signals.education_found);
        assert_eq!(signals.keyword_count, 0);
        assert_eq!(signals.experience_count, 0);
    }

    #[test]
    fn test_education_tokens_are_case_insensitive() {
        assert!(annotate("Bachelor of Science").education_found);
        assert!(annotate("completed my B.Tech in 2019").education_found);
        assert!(annotate("Ph.D candidate").education_found);
        assert!(!annotate("self-taught programmer").education_found);
    }

    #[test]
    fn test_keyword_count_is_additive_over_occurrences() {
        // "ai" three times plus "llm" once — occurrences, not distinct terms.
        let signals = annotate("ai, ai and more ai with one llm");
        assert_eq!(signals.keyword_count, 4);
    }

    #[test]
    fn test_keyword_match_is_substring() {
        // "ai" inside "explained" counts; the heuristic has no word boundaries.
        assert_eq!(annotate("explained").keyword_count, 1);
    }

    #[test]
    fn test_multiword_keywords_match_once_each() {
        let signals = annotate("machine learning and deep learning, plus a neural network");
        assert_eq!(signals.keyword_count, 3);
    }

    #[test]
    fn test_experience_counts_occurrences_not_years() {
        // "3 years ... 10 years" is two matches, never thirteen.
        let signals = annotate("3 years at Acme, then 10 years at Initech");
        assert_eq!(signals.experience_count, 2);
    }

    #[test]
    fn test_experience_matches_plus_and_yrs_forms() {
        assert_eq!(annotate("5+ years of Rust").experience_count, 1);
        assert_eq!(annotate("roughly 3 yrs in data").experience_count, 1);
        assert_eq!(annotate("many years without a number").experience_count, 0);
    }
}
