use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Actual,
    Guess,
}

impl DateField {
    pub fn key(self) -> &'static str {
        match self {
            Self::Actual => "actual_date",
            Self::Guess => "guess_date",
        }
    }

    pub fn accepted_formats(self) -> &'static str {
        match self {
            Self::Actual => "YYYY-MM-DD or YYYY-MM",
            Self::Guess => "YYYY-MM-DD",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The only way scoring can fail: an input matched none of its accepted formats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unparseable {field} {input:?} (expected {})", .field.accepted_formats())]
pub struct DateParseError {
    pub field: DateField,
    pub input: String,
}

impl DateParseError {
    pub fn actual(input: &str) -> Self {
        Self {
            field: DateField::Actual,
            input: input.to_string(),
        }
    }

    pub fn guess(input: &str) -> Self {
        Self {
            field: DateField::Guess,
            input: input.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum DateScoreError {
    #[error(transparent)]
    InvalidDate(#[from] DateParseError),

    #[error("invalid request body: {0}")]
    InvalidRequest(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DateScoreError {
    /// Caller-side input problems, as opposed to environment failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidDate(_) | Self::InvalidRequest(_))
    }
}

pub type Result<T> = std::result::Result<T, DateScoreError>;
