//! Fixed plaintext feedback template.

use crate::scoring::report::ScoreReport;

pub const SUBJECT: &str = "Your Resume Feedback & Score";

/// Renders the feedback body: all five report fields plus two qualitative
/// remarks derived from the similarity and keyword signals.
pub fn render_feedback(display_name: &str, report: &ScoreReport) -> String {
    format!(
        "Hi {name},

Thank you for submitting your resume. Here's a brief summary of your evaluation:

Total CV Score: {total}
JD Match Score: {similarity}
Education Found: {education}
AI Keyword Hits: {keywords}
Estimated Experience (Years): {experience}

Strengths: {strength}
Improvement Area: {improvement}

We encourage you to continue sharpening your profile. Feel free to apply again after making improvements.

All the best!
The Sift Team
",
        name = display_name,
        total = report.total_score,
        similarity = report.similarity_score,
        education = if report.education_found { "Yes" } else { "No" },
        keywords = report.keyword_count,
        experience = report.experience_count,
        strength = strength_remark(report.similarity_score),
        improvement = improvement_remark(report.keyword_count),
    )
}

fn strength_remark(similarity: f64) -> &'static str {
    if similarity > 60.0 {
        "Good match with the JD"
    } else {
        "Some alignment"
    }
}

fn improvement_remark(keyword_count: u32) -> &'static str {
    if keyword_count < 5 {
        "Add more AI keywords"
    } else {
        "Looks good"
    }
}
