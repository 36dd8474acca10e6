//! Section-boundary extraction for education and experience.
//!
//! A section runs from its header up to, not including, the first
//! terminator found after the header. Both header and terminator matching
//! are case-insensitive and ignore line structure.

use regex::Regex;

use crate::parsing::patterns::{
    DEGREE_RE, EDUCATION_END_RE, EDUCATION_HEADER_RES, EXPERIENCE_END_RE, EXPERIENCE_HEADER_RES,
    PARAGRAPH_BREAK,
};

/// A strategy that may produce a field value from the text.
type Matcher = fn(&str) -> Option<String>;

/// Runs matchers in order and returns the first hit.
fn first_hit(text: &str, matchers: &[Matcher]) -> Option<String> {
    matchers.iter().find_map(|matcher| matcher(text))
}

pub fn extract_education(text: &str) -> Option<String> {
    first_hit(text, &[education_by_header, education_by_degree])
}

pub fn extract_experience(text: &str) -> Option<String> {
    let end_re = EXPERIENCE_END_RE.as_ref()?;
    EXPERIENCE_HEADER_RES
        .iter()
        .flatten()
        .find_map(|header_re| section_span(text, header_re, end_re, true))
}

/// Headers are tried in order. A header with no terminator after it does not count.
fn education_by_header(text: &str) -> Option<String> {
    let end_re = EDUCATION_END_RE.as_ref()?;
    EDUCATION_HEADER_RES
        .iter()
        .flatten()
        .find_map(|header_re| section_span(text, header_re, end_re, false))
}

/// First degree keyword up to the next blank line.
fn education_by_degree(text: &str) -> Option<String> {
    let degree = DEGREE_RE.as_ref()?.find(text)?;
    let end = text[degree.end()..].find(PARAGRAPH_BREAK)? + degree.end();
    non_empty(&text[degree.start()..end])
}

/// Span from the first match of `header_re` to the next `end_re` match.
/// With `open_ended`, a missing terminator extends the span to end of text.
fn section_span(text: &str, header_re: &Regex, end_re: &Regex, open_ended: bool) -> Option<String> {
    let header = header_re.find(text)?;
    let end = match end_re.find_at(text, header.end()) {
        Some(m) => m.start(),
        None if open_ended => text.len(),
        None => return None,
    };
    non_empty(&text[header.start()..end])
}

fn non_empty(span: &str) -> Option<String> {
    let trimmed = span.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
