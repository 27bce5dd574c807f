use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

use crate::model::category::{CategoryCatalog, CategoryFilter, CategoryKey};
use crate::model::ids::QuestionId;
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("question id {id} appears more than once")]
    DuplicateId { id: QuestionId },

    #[error("catalog lists category `{key}` but no question uses it")]
    OrphanCategory { key: CategoryKey },
}

/// Read-only question set plus its category labels.
///
/// Built once before any session starts; sessions only ever read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionStore {
    questions: Vec<Question>,
    catalog: CategoryCatalog,
}

impl QuestionStore {
    /// Assemble a store, keeping the given question order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if two questions share an id and
    /// `StoreError::OrphanCategory` if the catalog names a category no question uses.
    pub fn new(questions: Vec<Question>, catalog: CategoryCatalog) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(StoreError::DuplicateId { id: question.id() });
            }
        }

        let used: HashSet<&CategoryKey> = questions.iter().map(Question::category).collect();
        if let Some(orphan) = catalog.keys().find(|key| !used.contains(key)) {
            return Err(StoreError::OrphanCategory { key: orphan.clone() });
        }

        Ok(Self { questions, catalog })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Questions matching `filter`, in store order.
    #[must_use]
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|question| filter.matches(question.category()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn count(&self, filter: &CategoryFilter) -> usize {
        self.questions
            .iter()
            .filter(|question| filter.matches(question.category()))
            .count()
    }

    /// Distinct category keys used by the questions, ascending.
    #[must_use]
    pub fn categories(&self) -> Vec<&CategoryKey> {
        let keys: BTreeSet<&CategoryKey> = self.questions.iter().map(Question::category).collect();
        keys.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::QuestionDraft;

    fn question(id: u64, category: &str) -> Question {
        QuestionDraft {
            id: QuestionId::new(id),
            category: category.into(),
            prompt: format!("Q{id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: 0,
        }
        .validate()
        .unwrap()
    }

    fn key(value: &str) -> CategoryKey {
        CategoryKey::new(value).unwrap()
    }

    #[test]
    fn filtered_preserves_store_order() {
        let store = QuestionStore::new(
            vec![question(3, "db"), question(1, "net"), question(2, "db")],
            CategoryCatalog::new(),
        )
        .unwrap();

        let ids: Vec<_> = store
            .filtered(&CategoryFilter::Only(key("db")))
            .iter()
            .map(|q| q.id().value())
            .collect();
        assert_eq!(ids, [3, 2]);
        assert_eq!(store.filtered(&CategoryFilter::All).len(), 3);
        assert_eq!(store.count(&CategoryFilter::Only(key("net"))), 1);
        assert_eq!(store.count(&CategoryFilter::Only(key("misc"))), 0);
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let store = QuestionStore::new(
            vec![question(1, "net"), question(2, "db"), question(3, "net")],
            CategoryCatalog::new(),
        )
        .unwrap();
        let keys: Vec<_> = store.categories().into_iter().map(CategoryKey::as_str).collect();
        assert_eq!(keys, ["db", "net"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = QuestionStore::new(
            vec![question(1, "db"), question(1, "net")],
            CategoryCatalog::new(),
        )
        .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId { id: QuestionId::new(1) });
    }

    #[test]
    fn catalog_keys_must_be_used() {
        let mut catalog = CategoryCatalog::new();
        catalog.insert(key("db"), "Databases").unwrap();
        catalog.insert(key("crypto"), "Cryptography").unwrap();

        let err = QuestionStore::new(vec![question(1, "db")], catalog).unwrap_err();
        assert_eq!(err, StoreError::OrphanCategory { key: key("crypto") });
    }

    #[test]
    fn lookup_by_id() {
        let store = QuestionStore::new(vec![question(5, "db")], CategoryCatalog::new()).unwrap();
        assert!(store.get(QuestionId::new(5)).is_some());
        assert!(store.get(QuestionId::new(6)).is_none());
    }
}
