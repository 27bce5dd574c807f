use quiz_core::model::{QuestionDraft, QuestionId};
use serde::{Deserialize, Serialize};

/// On-disk shape of a question bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BankFile {
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryRecord {
    pub key: String,
    pub label: String,
}

/// `answer` is the zero-based index of the correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    pub id: u64,
    pub category: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: usize,
}

impl QuestionRecord {
    #[must_use]
    pub fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new(self.id),
            category: self.category,
            prompt: self.prompt,
            options: self.options,
            correct_index: self.answer,
        }
    }
}

impl BankFile {
    pub(crate) fn into_parts(self) -> (Vec<QuestionDraft>, Vec<(String, String)>) {
        let drafts = self
            .questions
            .into_iter()
            .map(QuestionRecord::into_draft)
            .collect();
        let categories = self
            .categories
            .into_iter()
            .map(|record| (record.key, record.label))
            .collect();
        (drafts, categories)
    }
}
