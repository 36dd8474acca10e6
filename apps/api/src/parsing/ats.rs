//! ATS-friendliness scoring.
//!
//! Starts at `BASE_SCORE` and applies every rule in `RULES`, in order. Each
//! rule adjusts the score and contributes at most one suggestion. No rule
//! short-circuits another. The total is clamped to [0, 100].
//!
//! The experience-header rule re-checks the raw text on its own instead of
//! reusing the extracted experience section; both signals are reported.

use tracing::debug;

use crate::parsing::patterns::{
    MONTH_YEAR_RE, SCORER_EXPERIENCE_HEADER_RE, SUMMARY_HEADER_RE, TABLE_GLYPHS,
};
use crate::parsing::profile::CandidateProfile;

pub const BASE_SCORE: i32 = 70;
const MIN_SCORE: i32 = 0;
const MAX_SCORE: i32 = 100;

const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 1000;
const MIN_SKILLS: usize = 5;
const MIN_DATED_ENTRIES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    pub suggestions: Vec<String>,
}

/// What a single rule decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RuleOutcome {
    delta: i32,
    suggestion: Option<&'static str>,
}

impl RuleOutcome {
    const PASS: RuleOutcome = RuleOutcome {
        delta: 0,
        suggestion: None,
    };

    fn flag(delta: i32, suggestion: &'static str) -> Self {
        Self {
            delta,
            suggestion: Some(suggestion),
        }
    }
}

struct ScoringInput<'a> {
    profile: &'a CandidateProfile,
    text: &'a str,
    word_count: usize,
}

type Rule = fn(&ScoringInput<'_>) -> RuleOutcome;

/// Evaluation order is the suggestion order.
const RULES: &[(&str, Rule)] = &[
    ("name", rule_name),
    ("email", rule_email),
    ("phone", rule_phone),
    ("skills", rule_skills),
    ("education", rule_education),
    ("experience", rule_experience),
    ("table_glyphs", rule_table_glyphs),
    ("section_headers", rule_section_headers),
    ("date_format", rule_date_format),
    ("length", rule_length),
    ("summary", rule_summary),
];

pub fn score(profile: &CandidateProfile, text: &str) -> ScoreResult {
    let input = ScoringInput {
        profile,
        text,
        word_count: text.split_whitespace().count(),
    };

    let mut total = BASE_SCORE;
    let mut suggestions = Vec::new();

    for (rule_name, rule) in RULES {
        let outcome = rule(&input);
        if outcome != RuleOutcome::PASS {
            debug!(
                "ATS rule '{rule_name}' fired: delta={}",
                outcome.delta
            );
        }
        total += outcome.delta;
        if let Some(suggestion) = outcome.suggestion {
            suggestions.push(suggestion.to_string());
        }
    }

    ScoreResult {
        score: total.clamp(MIN_SCORE, MAX_SCORE) as u8,
        suggestions,
    }
}

fn is_missing(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn rule_name(input: &ScoringInput<'_>) -> RuleOutcome {
    if is_missing(&input.profile.name) {
        RuleOutcome::flag(
            -5,
            "Include your full name prominently at the top of your resume",
        )
    } else {
        RuleOutcome::PASS
    }
}

fn rule_email(input: &ScoringInput<'_>) -> RuleOutcome {
    if is_missing(&input.profile.email) {
        RuleOutcome::flag(-5, "Add a professional email address")
    } else {
        RuleOutcome::PASS
    }
}

fn rule_phone(input: &ScoringInput<'_>) -> RuleOutcome {
    if is_missing(&input.profile.phone) {
        RuleOutcome::flag(-3, "Include a phone number for contact")
    } else {
        RuleOutcome::PASS
    }
}

fn rule_skills(input: &ScoringInput<'_>) -> RuleOutcome {
    match input.profile.skills.len() {
        0 => RuleOutcome::flag(-10, "Add a dedicated skills section with relevant keywords"),
        n if n < MIN_SKILLS => RuleOutcome::flag(
            -5,
            "Consider adding more relevant skills to improve keyword matching",
        ),
        _ => RuleOutcome {
            delta: 5,
            suggestion: None,
        },
    }
}

fn rule_education(input: &ScoringInput<'_>) -> RuleOutcome {
    if is_missing(&input.profile.education) {
        RuleOutcome::flag(-5, "Include your educational background")
    } else {
        RuleOutcome::PASS
    }
}

fn rule_experience(input: &ScoringInput<'_>) -> RuleOutcome {
    if is_missing(&input.profile.experience) {
        RuleOutcome::flag(
            -10,
            "Add your work experience with clear job titles and dates",
        )
    } else {
        RuleOutcome::PASS
    }
}

fn rule_table_glyphs(input: &ScoringInput<'_>) -> RuleOutcome {
    if input.text.contains(TABLE_GLYPHS) {
        RuleOutcome::flag(
            -5,
            "Avoid using tables or columns as they may confuse ATS systems",
        )
    } else {
        RuleOutcome::PASS
    }
}

fn rule_section_headers(input: &ScoringInput<'_>) -> RuleOutcome {
    let has_header = SCORER_EXPERIENCE_HEADER_RE
        .as_ref()
        .is_some_and(|re| re.is_match(input.text));
    if has_header {
        RuleOutcome::PASS
    } else {
        RuleOutcome::flag(
            -3,
            "Use clear section headers like 'Experience', 'Education', and 'Skills'",
        )
    }
}

fn rule_date_format(input: &ScoringInput<'_>) -> RuleOutcome {
    let dated = MONTH_YEAR_RE
        .as_ref()
        .map_or(0, |re| re.find_iter(input.text).count());
    if dated < MIN_DATED_ENTRIES {
        RuleOutcome::flag(
            0,
            "Use a consistent date format (Month YYYY) for work and education entries",
        )
    } else {
        RuleOutcome::PASS
    }
}

fn rule_length(input: &ScoringInput<'_>) -> RuleOutcome {
    if input.word_count < MIN_WORDS {
        RuleOutcome::flag(
            -5,
            "Your resume may be too short - consider adding more details",
        )
    } else if input.word_count > MAX_WORDS {
        RuleOutcome::flag(
            -3,
            "Your resume is quite lengthy - consider focusing on the most relevant information",
        )
    } else {
        RuleOutcome::PASS
    }
}

fn rule_summary(input: &ScoringInput<'_>) -> RuleOutcome {
    let has_summary = SUMMARY_HEADER_RE
        .as_ref()
        .is_some_and(|re| re.is_match(input.text));
    if has_summary {
        RuleOutcome::PASS
    } else {
        RuleOutcome::flag(
            0,
            "Consider adding a summary section highlighting your key qualifications",
        )
    }
}
