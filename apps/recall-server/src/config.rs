//! Server configuration loaded from the environment.

use std::str::FromStr;

use anyhow::Context;
use recall_core::{ComparisonOptions, DEFAULT_OPTIONS};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Longest phrase, in characters, accepted in any request field.
pub const DEFAULT_MAX_PHRASE_CHARS: usize = 1000;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Options applied to `/api/compare` before request overrides.
    pub comparison: ComparisonOptions,
    /// Character limit for request phrases. Edit distance is quadratic in
    /// phrase length, so longer input is refused before grading.
    pub max_phrase_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            comparison: DEFAULT_OPTIONS,
            max_phrase_chars: DEFAULT_MAX_PHRASE_CHARS,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to defaults; malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;

        let comparison = ComparisonOptions::builder()
            .minimum_accuracy(parse_var(
                &lookup,
                "RECALL_MINIMUM_ACCURACY",
                DEFAULT_OPTIONS.minimum_accuracy,
            )?)
            .max_typo_distance(parse_var(
                &lookup,
                "RECALL_MAX_TYPO_DISTANCE",
                DEFAULT_OPTIONS.max_typo_distance,
            )?)
            .strict_word_order(parse_var(
                &lookup,
                "RECALL_STRICT_WORD_ORDER",
                DEFAULT_OPTIONS.strict_word_order,
            )?)
            .allow_typos(parse_var(
                &lookup,
                "RECALL_ALLOW_TYPOS",
                DEFAULT_OPTIONS.allow_typos,
            )?)
            .build();

        comparison
            .validate()
            .context("RECALL_MINIMUM_ACCURACY is out of range")?;

        let max_phrase_chars =
            parse_var(&lookup, "RECALL_MAX_PHRASE_CHARS", DEFAULT_MAX_PHRASE_CHARS)?;
        anyhow::ensure!(max_phrase_chars > 0, "RECALL_MAX_PHRASE_CHARS must be at least 1");

        Ok(Self {
            host,
            port,
            comparison,
            max_phrase_chars,
        })
    }

    /// Socket address string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        None => Ok(default),
    }
}
