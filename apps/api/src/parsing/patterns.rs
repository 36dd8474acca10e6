//! Pattern library: the regexes and keyword lists every extractor and the
//! ATS scorer read from. Pure data, compiled once per process.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Leading characters handed to the entity recognizer.
pub const NAME_WINDOW_CHARS: usize = 1000;
/// Lines inspected by the name fallback heuristic.
pub const NAME_FALLBACK_LINES: usize = 5;
/// Lines this long or longer are never names.
pub const NAME_MAX_LINE_CHARS: usize = 40;

/// Skill vocabulary grouped by category, in the order the alternation tries them.
pub const SKILL_VOCABULARY: &[(&str, &[&str])] = &[
    (
        "languages",
        &[
            "Python", "Java", "JavaScript", "C++", "C#", "Ruby", "PHP", "Swift", "Kotlin", "Go",
            "Rust",
        ],
    ),
    (
        "web",
        &[
            "HTML",
            "CSS",
            "React",
            "Angular",
            "Vue",
            "Node.js",
            "Express",
            "Django",
            "Flask",
            "Spring Boot",
        ],
    ),
    (
        "databases",
        &[
            "SQL",
            "MySQL",
            "PostgreSQL",
            "MongoDB",
            "Oracle",
            "DynamoDB",
            "Firebase",
        ],
    ),
    (
        "cloud",
        &["AWS", "Azure", "Google Cloud", "Heroku", "Netlify", "Vercel"],
    ),
    (
        "devops",
        &[
            "Docker",
            "Kubernetes",
            "Jenkins",
            "Git",
            "GitHub",
            "GitLab",
            "CI/CD",
            "Terraform",
        ],
    ),
    (
        "data_ai",
        &[
            "Machine Learning",
            "Deep Learning",
            "TensorFlow",
            "PyTorch",
            "pandas",
            "NumPy",
            "Data Analysis",
            "NLP",
            "Computer Vision",
            "AI",
        ],
    ),
    (
        "mobile",
        &["Android", "iOS", "React Native", "Flutter", "Xamarin"],
    ),
    (
        "soft_skills",
        &[
            "Project Management",
            "Team Leadership",
            "Communication",
            "Problem Solving",
            "Agile",
            "Scrum",
        ],
    ),
];

/// Headers that open an education section, tried in order.
pub const EDUCATION_HEADERS: &[&str] = &["EDUCATION", "ACADEMIC", "QUALIFICATION"];
/// Tokens that close an education section.
pub const EDUCATION_TERMINATORS: &[&str] = &["EXPERIENCE", "SKILLS", "PROJECTS"];

pub const DEGREE_KEYWORDS: &[&str] = &[
    "Bachelor", "Master", "PhD", "B.S.", "M.S.", "B.A.", "M.A.", "B.Tech", "M.Tech", "MBA",
];

/// Experience headers as priority groups. Within a group the leftmost header
/// in the text wins; a later group is only consulted when an earlier one finds nothing.
pub const EXPERIENCE_HEADER_GROUPS: &[&[&str]] = &[
    &["EXPERIENCE", "EMPLOYMENT", "WORK HISTORY"],
    &["PROFESSIONAL BACKGROUND"],
];
/// Tokens that close an experience section.
pub const EXPERIENCE_TERMINATORS: &[&str] = &["EDUCATION", "SKILLS", "PROJECTS"];

/// Headers the scorer accepts as evidence of an experience section.
pub const SCORER_EXPERIENCE_HEADERS: &[&str] = &["EXPERIENCE", "EMPLOYMENT", "WORK HISTORY"];
pub const SUMMARY_HEADERS: &[&str] = &["SUMMARY", "OBJECTIVE", "PROFILE"];

pub const MONTH_PREFIXES: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Vertical bar glyphs left behind by table and column layouts.
pub const TABLE_GLYPHS: &[char] = &['│', '┃', '┆', '┇', '┊', '┋', '╎', '╏'];

/// Blank-line run that ends a section regardless of headers.
pub const SECTION_BREAK: &str = "\n\n\n";
/// Blank line that ends a bare degree mention.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Compiles a pattern, logging and returning `None` on failure so callers
/// can treat a broken pattern as "no match".
fn compile(name: &str, pattern: &str, case_insensitive: bool) -> Option<Regex> {
    match RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Pattern '{name}' failed to compile: {e}");
            None
        }
    }
}

/// Escaped, case-insensitive alternation of `words`.
fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

pub static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        "email",
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
        false,
    )
});

/// Phone pattern families, tried in order.
pub static PHONE_RES: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    vec![
        // (123) 456-7890, 123-456-7890, 123.456.7890
        compile(
            "phone_north_american",
            r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
            false,
        ),
        // +1 (123) 456-7890
        compile(
            "phone_international",
            r"\+\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
            false,
        ),
    ]
});

/// Exactly two capitalized ASCII words, e.g. "Jane Doe".
pub static NAME_LINE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile("name_line", r"^[A-Z][a-z]+ [A-Z][a-z]+$", false));

pub static SKILLS_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let terms: Vec<&str> = SKILL_VOCABULARY
        .iter()
        .flat_map(|(_, terms)| terms.iter().copied())
        .collect();
    compile("skills", &format!(r"\b(?:{})\b", alternation(&terms)), true)
});

pub static EDUCATION_HEADER_RES: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    EDUCATION_HEADERS
        .iter()
        .map(|h| compile("education_header", &regex::escape(h), true))
        .collect()
});

pub static EDUCATION_END_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        "education_end",
        &format!(
            "{}|{}",
            alternation(EDUCATION_TERMINATORS),
            regex::escape(SECTION_BREAK)
        ),
        true,
    )
});

pub static DEGREE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile("degree", &alternation(DEGREE_KEYWORDS), true));

pub static EXPERIENCE_HEADER_RES: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    EXPERIENCE_HEADER_GROUPS
        .iter()
        .map(|group| compile("experience_header", &alternation(group), true))
        .collect()
});

pub static EXPERIENCE_END_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        "experience_end",
        &format!(
            "{}|{}",
            alternation(EXPERIENCE_TERMINATORS),
            regex::escape(SECTION_BREAK)
        ),
        true,
    )
});

pub static SCORER_EXPERIENCE_HEADER_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        "scorer_experience_header",
        &alternation(SCORER_EXPERIENCE_HEADERS),
        true,
    )
});

pub static SUMMARY_HEADER_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile("summary_header", &alternation(SUMMARY_HEADERS), true));

/// "Jan 2020", "January 2020", "Sept 2019"; month prefix is case-sensitive.
pub static MONTH_YEAR_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        "month_year",
        &format!(r"\b(?:{})\w* \d{{4}}\b", MONTH_PREFIXES.join("|")),
        false,
    )
});
