use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::category::{CategoryError, CategoryKey};
use crate::model::ids::QuestionId;

/// Every question offers exactly this many choices.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id}: prompt cannot be empty")]
    EmptyPrompt { id: QuestionId },

    #[error("question {id}: expected 4 options, found {len}")]
    OptionCount { id: QuestionId, len: usize },

    #[error("question {id}: option {index} cannot be empty")]
    EmptyOption { id: QuestionId, index: usize },

    #[error("question {id}: correct index {index} is out of range")]
    CorrectIndexOutOfRange { id: QuestionId, index: usize },

    #[error("question {id}: {source}")]
    Category {
        id: QuestionId,
        #[source]
        source: CategoryError,
    },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it arrives from a question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub category: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuestionDraft {
    /// Validate the draft into an immutable [`Question`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt or an option is blank, the option
    /// count is not [`OPTION_COUNT`], the correct index does not point at an
    /// option, or the category key is invalid.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = self.id;
        let category = CategoryKey::new(self.category)
            .map_err(|source| QuestionError::Category { id, source })?;

        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt { id });
        }

        let len = self.options.len();
        let options: [String; OPTION_COUNT] = self
            .options
            .try_into()
            .map_err(|_| QuestionError::OptionCount { id, len })?;
        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { id, index });
        }

        if self.correct_index >= OPTION_COUNT {
            return Err(QuestionError::CorrectIndexOutOfRange {
                id,
                index: self.correct_index,
            });
        }

        Ok(Question {
            id,
            category,
            prompt,
            options,
            correct_index: self.correct_index,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// `correct_index` always points at one of the four options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    category: CategoryKey,
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> &CategoryKey {
        &self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
