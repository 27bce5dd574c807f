use std::path::{Path, PathBuf};

use quiz_core::model::{CategoryFilter, QuestionStore};

use crate::repository::{QuestionSource, StorageError, build_store};

mod mapping;

pub use mapping::{BankFile, CategoryRecord, QuestionRecord};

const EMBEDDED_BANK: &str = include_str!("../../data/questions.json");

/// Parse and validate a JSON question bank.
///
/// # Errors
///
/// Returns `StorageError::Parse` for malformed JSON and `StorageError::Invalid`
/// when the content breaks a domain rule.
pub fn parse_bank(raw: &str) -> Result<QuestionStore, StorageError> {
    let bank: BankFile = serde_json::from_str(raw)?;
    let (drafts, categories) = bank.into_parts();
    let store = build_store(drafts, categories)?;
    tracing::debug!(
        questions = store.len(),
        categories = store.catalog().len(),
        "question bank parsed"
    );
    Ok(store)
}

/// Question bank read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for JsonFileSource {
    fn load(&self) -> Result<QuestionStore, StorageError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                StorageError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        let store = parse_bank(&raw)?;
        tracing::info!(
            path = %self.path.display(),
            questions = store.len(),
            "loaded question bank"
        );
        Ok(store)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The default bank compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl QuestionSource for EmbeddedSource {
    fn load(&self) -> Result<QuestionStore, StorageError> {
        let store = parse_bank(EMBEDDED_BANK)?;
        tracing::info!(
            questions = store.len(),
            all = store.count(&CategoryFilter::All),
            "loaded embedded question bank"
        );
        Ok(store)
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{CategoryKey, QuestionError};

    const SMALL_BANK: &str = r#"{
        "categories": [{ "key": "db", "label": "Databases" }],
        "questions": [
            { "id": 1, "category": "db", "prompt": "Normal form removing transitive dependencies?",
              "options": ["1NF", "2NF", "3NF", "BCNF"], "answer": 2 },
            { "id": 2, "category": "misc", "prompt": "Odd one out?",
              "options": ["a", "b", "c", "d"], "answer": 0 }
        ]
    }"#;

    #[test]
    fn parses_small_bank() {
        let store = parse_bank(SMALL_BANK).unwrap();
        assert_eq!(store.len(), 2);
        let db = CategoryKey::new("db").unwrap();
        assert_eq!(store.catalog().label(&db), Some("Databases"));
        assert_eq!(store.questions()[0].correct_option(), "3NF");
    }

    #[test]
    fn categories_section_is_optional() {
        let store = parse_bank(
            r#"{ "questions": [{ "id": 9, "category": "x", "prompt": "p",
                 "options": ["a","b","c","d"], "answer": 3 }] }"#,
        )
        .unwrap();
        assert!(store.catalog().is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_bank("{ not json"), Err(StorageError::Parse(_))));
        assert!(matches!(
            parse_bank(r#"{ "questions": [], "extra": 1 }"#),
            Err(StorageError::Parse(_))
        ));
    }

    #[test]
    fn out_of_range_answer_is_invalid() {
        let err = parse_bank(
            r#"{ "questions": [{ "id": 1, "category": "x", "prompt": "p",
                 "options": ["a","b","c","d"], "answer": 4 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StorageError::Invalid(quiz_core::Error::Question(
                QuestionError::CorrectIndexOutOfRange { index: 4, .. }
            ))
        ));
    }

    #[test]
    fn embedded_bank_is_valid() {
        let store = EmbeddedSource.load().unwrap();
        assert!(!store.is_empty());
        for key in store.catalog().keys() {
            assert!(store.count(&CategoryFilter::Only(key.clone())) > 0);
        }
    }
}
