use serde::Serialize;

use crate::parsing::contact::{extract_email, extract_phone};
use crate::parsing::name::extract_name;
use crate::parsing::ner::EntityRecognizer;
use crate::parsing::sections::{extract_education, extract_experience};
use crate::parsing::skills::extract_skills;

/// Structured candidate fields. Every field is extracted independently;
/// a missing field never prevents another from being filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
}

/// Runs every field extractor once over the same text.
pub fn assemble_profile(text: &str, recognizer: &dyn EntityRecognizer) -> CandidateProfile {
    CandidateProfile {
        name: extract_name(text, recognizer),
        email: extract_email(text),
        phone: extract_phone(text),
        skills: extract_skills(text),
        education: extract_education(text),
        experience: extract_experience(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::ner::tests::FailingRecognizer;
    use crate::parsing::ner::NoopRecognizer;

    #[test]
    fn test_fields_are_independent() {
        // Only an email: every other field is absent, the email still comes through
        let profile = assemble_profile("reach me at someone@example.org", &NoopRecognizer);
        assert_eq!(profile.email.as_deref(), Some("someone@example.org"));
        assert_eq!(profile.name, None);
        assert_eq!(profile.phone, None);
        assert!(profile.skills.is_empty());
        assert_eq!(profile.education, None);
        assert_eq!(profile.experience, None);
    }

    #[test]
    fn test_failing_recognizer_does_not_block_other_fields() {
        let text = "Jane Doe\njane@example.com\nSKILLS\nRust, Go";
        let profile = assemble_profile(text, &FailingRecognizer);
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.email.as_deref(), Some("jane@example.com"));
        assert_eq!(profile.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_profile_serializes_all_keys() {
        let value = serde_json::to_value(CandidateProfile::default()).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["name", "email", "phone", "skills", "education", "experience"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert!(obj["name"].is_null());
        assert_eq!(obj["skills"], serde_json::json!([]));
    }
}
