//! Runtime settings read from the process environment (and `.env`).

use thiserror::Error;

use crate::format::DEFAULT_CURRENCY_SYMBOL;
use crate::listing::FEATURED_COURSE_LIMIT;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError{
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid{ name: &'static str, value: String },
}

/// Where featured courses are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseSource{
    Api(String),
    Database(String),
}

#[derive(Debug, Clone)]
pub struct Config{
    pub bind_address: String,
    pub jwt_secret: String,
    pub course_source: CourseSource,
    pub featured_limit: usize,
    pub currency_symbol: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `COURSE_API_URL` wins over `DATABASE_URL`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        let jwt_secret = non_empty("SESSION_JWT_SECRET").ok_or(ConfigError::Missing("SESSION_JWT_SECRET"))?;

        let course_source = match (non_empty("COURSE_API_URL"), non_empty("DATABASE_URL")) {
            (Some(url), _) => CourseSource::Api(url.trim_end_matches('/').to_string()),
            (None, Some(url)) => CourseSource::Database(url),
            (None, None) => return Err(ConfigError::Missing("COURSE_API_URL or DATABASE_URL")),
        };

        let featured_limit = match non_empty("FEATURED_COURSE_LIMIT") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(ConfigError::Invalid{ name: "FEATURED_COURSE_LIMIT", value: raw }),
            },
            None => FEATURED_COURSE_LIMIT,
        };

        Ok(Config{
            bind_address: non_empty("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret,
            course_source,
            featured_limit,
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
        })
    }
}
