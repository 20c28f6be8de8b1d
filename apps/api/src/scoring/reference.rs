//! Reference job description every upload is scored against.
//!
//! The default is compiled in; `REFERENCE_JD_PATH` swaps it for a file-backed
//! text at startup so tests and deployments can substitute their own.

use anyhow::{Context, Result};
use std::sync::Arc;

pub const DEFAULT_REFERENCE_JD: &str = "
    We are seeking candidates with strong experience in Artificial Intelligence and Data Science.
    Core expectations include knowledge of:

    - Python programming
    - Numpy, Pandas, and Matplotlib
    - OpenCV for computer vision
    - Power BI for data visualization
    - Machine Learning and Deep Learning concepts
    - Generative AI (GenAI) techniques
    - Excellent problem-solving and communication skills

    A degree in Computer Science or a related field is expected.
    Prior experience with model deployment and data wrangling is a plus.
    ";

/// Loads the reference JD from `path` if given, otherwise the built-in default.
pub fn load_reference(path: Option<&str>) -> Result<Arc<str>> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read reference JD from '{p}'"))?;
            Ok(Arc::from(text.as_str()))
        }
        None => Ok(Arc::from(DEFAULT_REFERENCE_JD)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference_is_used_without_path() {
        let reference = load_reference(None).unwrap();
        assert!(reference.contains("Machine Learning"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_reference(Some("/nonexistent/jd.txt"));
        assert!(result.is_err());
    }
}
