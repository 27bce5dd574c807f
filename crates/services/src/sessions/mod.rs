mod progress;
mod selection;
mod service;
mod view;

// Public API of the session subsystem.
pub use progress::{QuizPhase, QuizProgress};
pub use selection::{RandomShuffler, Shuffler, derive_active_questions};
pub use service::{IgnoreReason, QuizSession, Transition};
pub use view::{
    AnswerFeedback, BrowseItem, PassResults, QuestionScreen, QuizPresenter, QuizScreen, present,
};
