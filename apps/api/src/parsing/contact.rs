//! Email and phone extraction. First textual match wins.

use crate::parsing::patterns::{EMAIL_RE, PHONE_RES};

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE
        .as_ref()?
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// Pattern families are tried in order; a later family is only consulted
/// when no earlier family matches anywhere in the text.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RES
        .iter()
        .flatten()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}
