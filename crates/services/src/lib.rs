#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use app_services::{AppServices, SessionOptions};
pub use error::AppServicesError;
pub use sessions::{
    AnswerFeedback, BrowseItem, IgnoreReason, PassResults, QuestionScreen, QuizPhase,
    QuizPresenter, QuizProgress, QuizScreen, QuizSession, RandomShuffler, Shuffler, Transition,
    derive_active_questions, present,
};
