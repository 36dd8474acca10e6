//! Vocabulary-bound skill extraction.
//!
//! One case-insensitive whole-word scan over the vocabulary alternation.
//! Each distinct skill is reported once, with the casing of its first
//! occurrence, in first-occurrence order.

use std::collections::HashSet;

use tracing::debug;

use crate::parsing::patterns::{SKILLS_RE, SKILL_VOCABULARY};

/// A vocabulary term and the surface form of its first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    pub term: &'static str,
    pub category: &'static str,
    pub surface: String,
}

pub fn extract_skills(text: &str) -> Vec<String> {
    find_skill_matches(text)
        .into_iter()
        .map(|m| {
            debug!("Skill '{}' matched '{}' ({})", m.surface, m.term, m.category);
            m.surface
        })
        .collect()
}

/// De-duplicated skill matches in first-occurrence order.
pub fn find_skill_matches(text: &str) -> Vec<SkillMatch> {
    let Some(re) = SKILLS_RE.as_ref() else {
        return Vec::new();
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut matches = Vec::new();

    for m in re.find_iter(text) {
        let key = m.as_str().to_lowercase();
        if !seen.insert(key.clone()) {
            continue;
        }
        let (category, term) = lookup_term(&key).unwrap_or(("unknown", ""));
        matches.push(SkillMatch {
            term,
            category,
            surface: m.as_str().to_string(),
        });
    }

    matches
}

fn lookup_term(lowercase: &str) -> Option<(&'static str, &'static str)> {
    SKILL_VOCABULARY.iter().find_map(|(category, terms)| {
        terms
            .iter()
            .find(|t| t.to_lowercase() == lowercase)
            .map(|t| (*category, *t))
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn assert_unique_case_insensitive(skills: &[String]) {
        let mut seen = HashSet::new();
        for s in skills {
            assert!(seen.insert(s.to_lowercase()), "duplicate skill {s} in {skills:?}");
        }
    }

    #[test]
    fn test_first_occurrence_order_and_casing() {
        let text = "docker and PYTHON daily. Also Docker, python, Go.";
        assert_eq!(extract_skills(text), vec!["docker", "PYTHON", "Go"]);
    }

    #[test]
    fn test_whole_word_only() {
        // "Go" inside "Google" and "Java" inside "Javanese" do not count
        let text = "Google Javanese Rustic";
        assert!(extract_skills(text).is_empty());
    }

    #[test]
    fn test_longer_terms_are_found() {
        let text = "Built on Google Cloud with JavaScript, GitHub and Node.js";
        assert_eq!(
            extract_skills(text),
            vec!["Google Cloud", "JavaScript", "GitHub", "Node.js"]
        );
    }

    #[test]
    fn test_terms_with_regex_metacharacters() {
        let text = "Pipelines: CI/CD. Languages: C++ (not C+ or CXX)";
        let skills = extract_skills(text);
        assert!(skills.contains(&"CI/CD".to_string()));
        assert!(!skills.iter().any(|s| s == "CXX"));
    }

    #[test]
    fn test_no_open_vocabulary() {
        assert!(extract_skills("Haskell, Erlang, COBOL").is_empty());
    }

    #[test]
    fn test_no_case_insensitive_duplicates_across_inputs() {
        let inputs = [
            "",
            "python Python PYTHON pYtHoN",
            "AWS aws Azure azure AI ai",
            "React React Native react native",
            "sql MySQL SQL mysql PostgreSQL postgresql",
            "Scrum, agile, AGILE, scrum; Communication communication",
        ];
        for input in inputs {
            assert_unique_case_insensitive(&extract_skills(input));
        }
    }

    #[test]
    fn test_matches_carry_vocabulary_term_and_category() {
        let matches = find_skill_matches("kubernetes and PANDAS");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].term, "Kubernetes");
        assert_eq!(matches[0].category, "devops");
        assert_eq!(matches[0].surface, "kubernetes");
        assert_eq!(matches[1].term, "pandas");
        assert_eq!(matches[1].category, "data_ai");
        assert_eq!(matches[1].surface, "PANDAS");
    }

    fn all_terms() -> Vec<&'static str> {
        SKILL_VOCABULARY
            .iter()
            .flat_map(|(_, terms)| terms.iter().copied())
            .collect()
    }

    /// Terms that neither contain nor sit inside another term and start and
    /// end on a word character, so each placement matches exactly once.
    fn standalone_terms() -> Vec<&'static str> {
        let all = all_terms();
        all.iter()
            .copied()
            .filter(|t| {
                let lower = t.to_lowercase();
                let word_edges = t.chars().next().is_some_and(char::is_alphanumeric)
                    && t.chars().last().is_some_and(char::is_alphanumeric);
                word_edges
                    && !all.iter().any(|o| {
                        let other = o.to_lowercase();
                        other != lower && (other.contains(&lower) || lower.contains(&other))
                    })
            })
            .collect()
    }

    fn recase(term: &str, mode: u8) -> String {
        match mode {
            0 => term.to_lowercase(),
            1 => term.to_uppercase(),
            _ => term.to_string(),
        }
    }

    proptest! {
        #[test]
        fn prop_skills_follow_first_occurrence(
            picks in prop::collection::vec((any::<prop::sample::Index>(), 0u8..3), 0..24),
            filler in prop::sample::select(vec!["and", "with", "daily", "since 2019"]),
        ) {
            let terms = standalone_terms();
            let surfaces: Vec<String> = picks
                .iter()
                .map(|(idx, mode)| recase(idx.get::<&str>(&terms), *mode))
                .collect();
            let text = surfaces.join(&format!(", {filler} "));

            let mut seen = HashSet::new();
            let expected: Vec<String> = surfaces
                .iter()
                .filter(|s| seen.insert(s.to_lowercase()))
                .cloned()
                .collect();
            prop_assert_eq!(extract_skills(&text), expected);
        }

        #[test]
        fn prop_skills_are_unique_vocabulary_terms(
            words in prop::collection::vec(
                prop_oneof![
                    (any::<prop::sample::Index>(), 0u8..3)
                        .prop_map(|(idx, mode)| recase(idx.get::<&str>(&all_terms()), mode)),
                    "[a-zA-Z]{1,8}",
                ],
                0..40,
            ),
            separator in prop::sample::select(vec![" ", ", ", "\n", " / "]),
        ) {
            let text = words.join(separator);
            let skills = extract_skills(&text);
            assert_unique_case_insensitive(&skills);

            let vocabulary: HashSet<String> =
                all_terms().iter().map(|t| t.to_lowercase()).collect();
            for skill in &skills {
                prop_assert!(vocabulary.contains(&skill.to_lowercase()), "{skill} not in vocabulary");
            }
        }
    }
}
