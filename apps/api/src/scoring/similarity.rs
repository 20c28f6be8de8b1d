//! Lexical similarity between extracted text and the reference JD.
//!
//! Both texts are vectorized into a TF-IDF space built fresh from this pair
//! alone (no corpus, no pretrained vocabulary), then compared with cosine
//! similarity and scaled to a 0–100 percentage rounded to two decimals.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};

// Tokens of two or more word characters, lowercased.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Cosine similarity of the pair-local TF-IDF vectors, as a percentage.
///
/// Empty or token-free text yields 0.0: a zero-length document shares no
/// terms with the reference, and the guard keeps a degenerate vocabulary
/// from turning into a NaN.
pub fn similarity_score(text: &str, reference: &str) -> f64 {
    let doc = term_counts(text);
    let jd = term_counts(reference);
    if doc.is_empty() || jd.is_empty() {
        return 0.0;
    }

    let mut vocab: BTreeSet<&str> = doc.keys().map(String::as_str).collect();
    vocab.extend(jd.keys().map(String::as_str));

    // Smoothed idf over the two-document corpus: ln((1 + n) / (1 + df)) + 1, n = 2.
    let mut doc_vec = Vec::with_capacity(vocab.len());
    let mut jd_vec = Vec::with_capacity(vocab.len());
    for term in &vocab {
        let tf_doc = doc.get(*term).copied().unwrap_or(0.0);
        let tf_jd = jd.get(*term).copied().unwrap_or(0.0);
        let df = (tf_doc > 0.0) as u32 + (tf_jd > 0.0) as u32;
        let idf = (3.0 / (1.0 + df as f64)).ln() + 1.0;
        doc_vec.push(tf_doc * idf);
        jd_vec.push(tf_jd * idf);
    }

    round2(cosine(&doc_vec, &jd_vec) * 100.0)
}

fn term_counts(text: &str) -> HashMap<String, f64> {
    let lower = text.to_lowercase();
    let mut counts = HashMap::new();
    for token in TOKEN_RE.find_iter(&lower) {
        *counts.entry(token.as_str().to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
