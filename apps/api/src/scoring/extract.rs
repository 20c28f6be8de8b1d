//! Text extraction — turns an uploaded document into a plain-text string.
//!
//! PDF: text layer of every page, in page order. DOCX: paragraph text blocks,
//! newline-joined; tables and images are ignored. Unrecognized extensions
//! yield an empty string and never fail. A corrupt file of a recognized
//! format surfaces as `ExtractError::Unreadable`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{Cursor, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unreadable document: {0}")]
    Unreadable(String),
}

/// Extraction strategy, selected from the uploaded filename's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentFormat {
    pub fn from_filename(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Self::Pdf
        } else if lower.ends_with(".docx") {
            Self::Docx
        } else {
            Self::Unsupported
        }
    }
}

/// Extracts plain text from the uploaded bytes.
/// The upload never touches disk; each invocation works on its own buffer.
pub fn extract_text(data: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => extract_pdf(data),
        DocumentFormat::Docx => extract_docx(data),
        DocumentFormat::Unsupported => Ok(String::new()),
    }
}

fn extract_pdf(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data)
        .map_err(|e| ExtractError::Unreadable(format!("pdf: {e}")))
}

// `<w:p` must be followed by `>` or an attribute so `<w:pPr>` never matches;
// same guard keeps `<w:t>` from matching `<w:tab/>` or `<w:tbl>`.
static PARAGRAPH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<w:p(?:\s[^>]*)?>(.*?)</w:p>").unwrap());
static RUN_TEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>").unwrap());
static TABLE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?w:tbl(?:\s[^>]*)?>").unwrap());

/// DOCX is a zip container; the paragraph text lives in `word/document.xml`
/// as `<w:t>` runs grouped under `<w:p>` elements.
fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractError::Unreadable(format!("docx: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Unreadable(format!("docx: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Unreadable(format!("docx: {e}")))?;

    // Table cells carry their own <w:p> elements; drop the whole <w:tbl>
    // span first so only body paragraphs survive the paragraph pass.
    let xml = strip_tables(&xml);

    let mut paragraphs = Vec::new();
    for para in PARAGRAPH_RE.captures_iter(&xml) {
        let mut text = String::new();
        for run in RUN_TEXT_RE.captures_iter(&para[1]) {
            text.push_str(&unescape_xml(&run[1]));
        }
        paragraphs.push(text);
    }

    Ok(paragraphs.join("\n"))
}

/// Removes every `<w:tbl>…</w:tbl>` span, tracking depth so nested tables
/// are dropped whole. Unbalanced markup drops the tail rather than leaking
/// table text.
fn strip_tables(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len());
    let mut depth = 0usize;
    let mut keep_from = 0usize;
    for tag in TABLE_TAG_RE.find_iter(xml) {
        if tag.as_str().starts_with("</") {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                keep_from = tag.end();
            }
        } else {
            if depth == 0 {
                out.push_str(&xml[keep_from..tag.start()]);
            }
            depth += 1;
        }
    }
    if depth == 0 {
        out.push_str(&xml[keep_from..]);
    }
    out
}

fn unescape_xml(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Builds a minimal DOCX container in memory for tests.
#[cfg(test)]
pub fn build_test_docx(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;

    let mut body = String::new();
    for p in paragraphs {
        body.push_str(&format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"));
    }
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let buf = Cursor::new(Vec::new());
    let mut zip = zip::ZipWriter::new(buf);
    let options = zip::write::SimpleFileOptions::default();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap().into_inner()
}
