//! Name extraction: entity recognition over the document head, then a
//! line heuristic when the recognizer finds no person.

use tracing::{debug, warn};

use crate::parsing::ner::{find_person_entities, EntityRecognizer};
use crate::parsing::patterns::{
    NAME_FALLBACK_LINES, NAME_LINE_RE, NAME_MAX_LINE_CHARS, NAME_WINDOW_CHARS,
};

pub fn extract_name(text: &str, recognizer: &dyn EntityRecognizer) -> Option<String> {
    name_from_entities(text, recognizer).or_else(|| name_from_leading_lines(text))
}

/// First person entity in the leading window. Recognizer failures count as "no person".
fn name_from_entities(text: &str, recognizer: &dyn EntityRecognizer) -> Option<String> {
    let window = leading_chars(text, NAME_WINDOW_CHARS);
    match find_person_entities(recognizer, window) {
        Ok(people) => people
            .into_iter()
            .map(|p| p.trim().to_string())
            .find(|p| !p.is_empty()),
        Err(e) => {
            warn!("Entity recognition failed, falling back to line heuristic: {e}");
            None
        }
    }
}

/// First of the leading lines shaped like "First Last".
/// Lines with contact details or long lines are skipped.
fn name_from_leading_lines(text: &str) -> Option<String> {
    let re = NAME_LINE_RE.as_ref()?;
    let name = text
        .split('\n')
        .take(NAME_FALLBACK_LINES)
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && line.chars().count() < NAME_MAX_LINE_CHARS
                && !line.contains('@')
                && !line.contains("http")
        })
        .find(|line| re.is_match(line))
        .map(str::to_string);
    if name.is_some() {
        debug!("Name taken from leading-line heuristic");
    }
    name
}

/// The first `n` characters of `text`, respecting char boundaries.
fn leading_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::parsing::ner::tests::{entity, FailingRecognizer, FixedRecognizer};
    use crate::parsing::ner::{Entity, NerError, NoopRecognizer};

    #[test]
    fn test_first_person_entity_wins() {
        let recognizer = FixedRecognizer(vec![
            entity("Acme", "ORG"),
            entity("Ada Lovelace", "PERSON"),
            entity("Jane Doe", "PERSON"),
        ]);
        assert_eq!(
            extract_name("Jane Doe\nstuff", &recognizer).as_deref(),
            Some("Ada Lovelace")
        );
    }

    #[test]
    fn test_fallback_when_no_person_entity() {
        let recognizer = FixedRecognizer(vec![entity("Acme", "ORG")]);
        assert_eq!(
            extract_name("Jane Doe\nEngineer", &recognizer).as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_fallback_when_recognizer_fails() {
        assert_eq!(
            extract_name("  Jane Doe  \n", &FailingRecognizer).as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_fallback_skips_contact_and_long_lines() {
        let text = "Curriculum Vitae\nJohn Smith@mail\nHttp Link\nMary Major";
        // "Curriculum Vitae" matches the shape and comes first
        assert_eq!(
            extract_name(text, &NoopRecognizer).as_deref(),
            Some("Curriculum Vitae")
        );

        let text = "jane@doe.com\nhttp Site\nMary Major";
        assert_eq!(
            extract_name(text, &NoopRecognizer).as_deref(),
            Some("Mary Major")
        );
    }

    #[test]
    fn test_fallback_only_reads_first_five_lines() {
        let text = "one\ntwo\nthree\nfour\nfive\nJane Doe";
        assert_eq!(extract_name(text, &NoopRecognizer), None);
    }

    #[test]
    fn test_fallback_requires_exactly_two_words() {
        assert_eq!(extract_name("Jane Mary Doe", &NoopRecognizer), None);
        assert_eq!(extract_name("JANE DOE", &NoopRecognizer), None);
        assert_eq!(extract_name("jane doe", &NoopRecognizer), None);
        assert_eq!(extract_name("Jane  Doe", &NoopRecognizer), None);
    }

    /// Records the window it was given.
    struct RecordingRecognizer(Mutex<Option<String>>);

    impl EntityRecognizer for RecordingRecognizer {
        fn find_entities(&self, window: &str) -> Result<Vec<Entity>, NerError> {
            *self.0.lock().unwrap() = Some(window.to_string());
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_recognizer_sees_only_leading_window() {
        let text = "é".repeat(1500);
        let recognizer = RecordingRecognizer(Mutex::new(None));
        extract_name(&text, &recognizer);
        let seen = recognizer.0.lock().unwrap().clone().unwrap();
        assert_eq!(seen.chars().count(), NAME_WINDOW_CHARS);
    }

    #[test]
    fn test_leading_chars_short_text() {
        assert_eq!(leading_chars("abc", 10), "abc");
        assert_eq!(leading_chars("abcdef", 3), "abc");
    }
}
