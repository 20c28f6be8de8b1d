// Resume scoring pipeline.
// Implements: text extraction, TF-IDF similarity, regex heuristics, composite report.
// Each request runs the pipeline once; no state survives between invocations.

pub mod extract;
pub mod handlers;
pub mod heuristics;
pub mod reference;
pub mod report;
pub mod similarity;
