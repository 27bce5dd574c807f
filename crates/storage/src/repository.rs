use std::path::PathBuf;

use quiz_core::model::{CategoryCatalog, CategoryKey, QuestionDraft, QuestionStore};
use thiserror::Error;

/// Errors surfaced by question-bank sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question bank not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid question bank: {0}")]
    Invalid(#[from] quiz_core::Error),
}

/// Anything that can hand the app a fully validated question store.
///
/// Sources are read once at startup; the resulting store is never mutated.
pub trait QuestionSource {
    /// Load and validate the question set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bank cannot be read, parsed or validated.
    fn load(&self) -> Result<QuestionStore, StorageError>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Source backed by drafts held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    questions: Vec<QuestionDraft>,
    categories: Vec<(String, String)>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.categories.push((key.into(), label.into()));
        self
    }

    #[must_use]
    pub fn with_question(mut self, draft: QuestionDraft) -> Self {
        self.questions.push(draft);
        self
    }
}

impl QuestionSource for InMemorySource {
    fn load(&self) -> Result<QuestionStore, StorageError> {
        build_store(self.questions.clone(), self.categories.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} questions)", self.questions.len())
    }
}

/// Validate drafts and catalog entries into a store.
pub(crate) fn build_store(
    drafts: Vec<QuestionDraft>,
    categories: Vec<(String, String)>,
) -> Result<QuestionStore, StorageError> {
    let mut catalog = CategoryCatalog::new();
    for (key, label) in categories {
        let key = CategoryKey::new(key).map_err(quiz_core::Error::from)?;
        catalog.insert(key, label).map_err(quiz_core::Error::from)?;
    }

    let questions = drafts
        .into_iter()
        .map(QuestionDraft::validate)
        .collect::<Result<Vec<_>, _>>()
        .map_err(quiz_core::Error::from)?;

    let store = QuestionStore::new(questions, catalog).map_err(quiz_core::Error::from)?;
    Ok(store)
}
