//! Composite scoring — combines similarity and heuristic signals into the
//! fixed-key report: total = min(S + K*3 + E*5 + (10 if education), 100).

use serde::Serialize;

use crate::scoring::heuristics::HeuristicSignals;

/// The evaluation report for one upload. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// TF-IDF cosine match against the reference JD, 0–100, 2 decimals.
    pub similarity_score: f64,
    pub keyword_count: u32,
    pub education_found: bool,
    pub experience_count: u32,
    /// Clamped composite, 0–100.
    pub total_score: f64,
}

pub fn compose(similarity: f64, signals: &HeuristicSignals) -> ScoreReport {
    let total = similarity
        + f64::from(signals.keyword_count) * 3.0
        + f64::from(signals.experience_count) * 5.0
        + if signals.education_found { 10.0 } else { 0.0 };

    ScoreReport {
        similarity_score: similarity,
        keyword_count: signals.keyword_count,
        education_found: signals.education_found,
        experience_count: signals.experience_count,
        total_score: total.min(100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(keyword_count: u32, experience_count: u32, education_found: bool) -> HeuristicSignals {
        HeuristicSignals {
            education_found,
            keyword_count,
            experience_count,
        }
    }

    #[test]
    fn test_composite_formula() {
        // 50 + 4*3 + 2*5 + 10 = 82
        let report = compose(50.0, &signals(4, 2, true));
        assert_eq!(report.total_score, 82.0);
    }

    #[test]
    fn test_total_is_clamped_to_100() {
        let report = compose(95.5, &signals(40, 10, true));
        assert_eq!(report.total_score, 100.0);
    }

    #[test]
    fn test_zero_input_scores_zero() {
        let report = compose(0.0, &signals(0, 0, false));
        assert_eq!(report.total_score, 0.0);
    }

    #[test]
    fn test_education_alone_adds_ten() {
        let report = compose(0.0, &signals(0, 0, true));
        assert_eq!(report.total_score, 10.0);
    }

    #[test]
    fn test_report_carries_inputs_unchanged() {
        let report = compose(33.33, &signals(2, 1, false));
        assert_eq!(report.similarity_score, 33.33);
        assert_eq!(report.keyword_count, 2);
        assert_eq!(report.experience_count, 1);
        assert!(!report.education_found);
    }

    #[test]
    fn test_report_serializes_with_fixed_keys() {
        let report = compose(75.25, &signals(3, 1, true));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["similarity_score"], 75.25);
        assert_eq!(json["keyword_count"], 3);
        assert_eq!(json["education_found"], true);
        assert_eq!(json["experience_count"], 1);
        assert_eq!(json["total_score"], 99.25);
    }
}
