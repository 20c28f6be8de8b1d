//! PII redaction — locates a name and an email address in the extracted text
//! and produces masked display forms. Absence of a match is an expected
//! outcome modeled with sentinels ("Not found", "Anonymous"), never an error.

use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_NOT_FOUND: &str = "Not found";
pub const ANONYMOUS: &str = "Anonymous";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").unwrap());
// A "name" label with an optional separator, then one or two capitalized words.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)name\s*[:\-]?\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)").unwrap());

/// Detected contact details for one upload, with masked renderings.
#[derive(Debug, Clone)]
pub struct Identity {
    /// First email-shaped substring, unmasked — used as the feedback recipient.
    pub email: Option<String>,
    pub masked_email: String,
    pub masked_name: String,
}

impl Identity {
    pub fn detect(text: &str) -> Self {
        let email = detect_email(text);
        let masked_email = email
            .as_deref()
            .map(mask_email)
            .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string());
        Identity {
            email,
            masked_email,
            masked_name: mask_name(text),
        }
    }
}

pub fn detect_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Reveals the first character of the local part and replaces the rest with a
/// fixed four-asterisk mask; the domain stays unmasked.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{first}****@{domain}")
        }
        None => email.to_string(),
    }
}

/// Masks the label-detected name word by word: first letter revealed, the
/// remainder replaced with as many asterisks as it has characters.
/// No label match yields the "Anonymous" sentinel.
pub fn mask_name(text: &str) -> String {
    let Some(caps) = NAME_RE.captures(text) else {
        return ANONYMOUS.to_string();
    };
    caps[1]
        .split_whitespace()
        .map(mask_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn mask_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{first}{}", "*".repeat(chars.count())),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_masking_reveals_first_char_and_domain() {
        assert_eq!(mask_email("john.doe@example.com"), "j****@example.com");
    }

    #[test]
    fn test_email_mask_is_fixed_length() {
        // Four asterisks regardless of actual local-part length.
        assert_eq!(mask_email("ab@example.com"), "a****@example.com");
        assert_eq!(mask_email("averylonglocalpart@example.com"), "a****@example.com");
    }

    #[test]
    fn test_first_email_in_text_is_detected() {
        let text = "Contact: jane@work.io or jane.backup@home.net";
        assert_eq!(detect_email(text).as_deref(), Some("jane@work.io"));
    }

    #[test]
    fn test_no_email_is_a_sentinel_not_an_error() {
        let identity = Identity::detect("no contact details here");
        assert!(identity.email.is_none());
        assert_eq!(identity.masked_email, EMAIL_NOT_FOUND);
    }

    #[test]
    fn test_two_word_name_masks_each_word() {
        assert_eq!(mask_name("Name: John Smith"), "J*** S****");
    }

    #[test]
    fn test_single_word_name_is_first_letter_revealed() {
        assert_eq!(mask_name("Name: Cher"), "C***");
    }

    #[test]
    fn test_name_label_separator_is_optional() {
        assert_eq!(mask_name("name - John Smith"), "J*** S****");
        assert_eq!(mask_name("NAME John Smith"), "J*** S****");
    }

    #[test]
    fn test_no_name_label_yields_anonymous() {
        assert_eq!(mask_name("John Smith, Software Engineer"), ANONYMOUS);
    }

    #[test]
    fn test_identity_bundles_both_passes() {
        let text = "Name: John Smith\nEmail: john.doe@example.com";
        let identity = Identity::detect(text);
        assert_eq!(identity.email.as_deref(), Some("john.doe@example.com"));
        assert_eq!(identity.masked_email, "j****@example.com");
        assert_eq!(identity.masked_name, "J*** S****");
    }
}
