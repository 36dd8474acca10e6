use anyhow::{bail, Context, Result};

/// Which backend answers person-entity queries for the name extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NerBackend {
    /// No model; the name extractor uses its line heuristic only.
    None,
    /// Entities are requested from the LLM client.
    Llm,
}

impl NerBackend {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(NerBackend::None),
            "llm" => Ok(NerBackend::Llm),
            other => bail!("NER_BACKEND must be 'none' or 'llm', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ner_backend: NerBackend,
    pub anthropic_api_key: Option<String>,
    pub ner_startup_probe: bool,
    pub max_upload_bytes: usize,
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let ner_backend = NerBackend::parse(&optional_env("NER_BACKEND").unwrap_or_default())?;
        let anthropic_api_key = optional_env("ANTHROPIC_API_KEY");
        if ner_backend == NerBackend::Llm && anthropic_api_key.is_none() {
            bail!("NER_BACKEND=llm requires ANTHROPIC_API_KEY to be set");
        }

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            ner_backend,
            anthropic_api_key,
            ner_startup_probe: parse_bool("NER_STARTUP_PROBE", optional_env("NER_STARTUP_PROBE"))?,
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

/// Returns the variable's value, treating empty strings as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(key: &str, raw: Option<String>) -> Result<bool> {
    match raw.as_deref().map(str::trim) {
        None => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => bail!("{key} must be true or false, got '{v}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ner_backend_parse() {
        assert_eq!(NerBackend::parse("").unwrap(), NerBackend::None);
        assert_eq!(NerBackend::parse("NONE").unwrap(), NerBackend::None);
        assert_eq!(NerBackend::parse(" llm ").unwrap(), NerBackend::Llm);
        assert!(NerBackend::parse("spacy").is_err());
    }

    #[test]
    fn test_parse_bool_accepts_common_forms() {
        assert!(!parse_bool("X", None).unwrap());
        assert!(parse_bool("X", Some("TRUE".to_string())).unwrap());
        assert!(parse_bool("X", Some("1".to_string())).unwrap());
        assert!(!parse_bool("X", Some("false".to_string())).unwrap());
        assert!(parse_bool("X", Some("yes".to_string())).is_err());
    }
}
