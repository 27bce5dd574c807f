mod category;
mod ids;
mod mode;
mod question;
mod score;
mod store;

pub use category::{
    ALL_KEY, ALL_LABEL, CatalogError, CategoryCatalog, CategoryError, CategoryFilter, CategoryKey,
};
pub use ids::{ParseIdError, QuestionId};
pub use mode::{ParseModeError, QuizMode};
pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError};
pub use score::{PassSummary, Score, ScoreError, ScoreTier};
pub use store::{QuestionStore, StoreError};
