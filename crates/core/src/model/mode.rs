use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the active questions are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuizMode {
    /// Every question as a card, in store order.
    #[default]
    Browse,
    /// One shuffled question at a time with scoring.
    Quiz,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown mode `{raw}` (expected `browse` or `quiz`)")]
pub struct ParseModeError {
    raw: String,
}

impl QuizMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Browse => "browse",
            Self::Quiz => "quiz",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "browse" | "list" => Ok(Self::Browse),
            "quiz" => Ok(Self::Quiz),
            _ => Err(ParseModeError { raw: s.to_string() }),
        }
    }
}
