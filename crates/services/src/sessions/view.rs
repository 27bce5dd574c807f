use chrono::Duration;

use quiz_core::model::{CategoryFilter, Question, QuizMode, Score, ScoreTier};

use super::progress::QuizPhase;
use super::service::QuizSession;

/// One card of the browse list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseItem {
    pub index: usize,
    pub category_label: String,
    pub question: Question,
}

/// Answer state shown under a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub correct_index: usize,
    pub correct: bool,
}

/// The question currently on screen in quiz mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionScreen {
    pub position: usize,
    pub total: usize,
    pub category_label: String,
    pub question: Question,
    pub feedback: Option<AnswerFeedback>,
    pub can_retreat: bool,
    pub can_advance: bool,
}

impl QuestionScreen {
    /// One-based number for display.
    #[must_use]
    pub fn number(&self) -> usize {
        self.position + 1
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.position + 1 == self.total
    }
}

/// Outcome of a finished pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassResults {
    pub score: Score,
    pub elapsed: Option<Duration>,
    pub missed: Vec<Question>,
}

impl PassResults {
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        self.score.tier()
    }

    #[must_use]
    pub fn can_retry_wrong(&self) -> bool {
        !self.missed.is_empty()
    }
}

/// Everything the screen can show, derived from a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizScreen {
    Empty {
        category: CategoryFilter,
        category_label: String,
    },
    Browse(Vec<BrowseItem>),
    Question(QuestionScreen),
    Results(PassResults),
}

/// Rendering backend for the quiz screen.
pub trait QuizPresenter {
    type Output;

    fn render_empty(&mut self, category: &CategoryFilter, category_label: &str) -> Self::Output;
    fn render_browse(&mut self, items: &[BrowseItem]) -> Self::Output;
    fn render_quiz_question(&mut self, screen: &QuestionScreen) -> Self::Output;
    fn render_results(&mut self, results: &PassResults) -> Self::Output;
}

/// Render `session` through `presenter`.
pub fn present<P: QuizPresenter + ?Sized>(session: &QuizSession, presenter: &mut P) -> P::Output {
    match session.screen() {
        QuizScreen::Empty {
            category,
            category_label,
        } => presenter.render_empty(&category, &category_label),
        QuizScreen::Browse(items) => presenter.render_browse(&items),
        QuizScreen::Question(screen) => presenter.render_quiz_question(&screen),
        QuizScreen::Results(results) => presenter.render_results(&results),
    }
}

pub(super) fn screen(session: &QuizSession) -> QuizScreen {
    let store = session.store();
    let catalog = store.catalog();
    let active = session.active_questions();

    if active.is_empty() {
        return QuizScreen::Empty {
            category: session.category().clone(),
            category_label: catalog.label_for(session.category()),
        };
    }

    if session.mode() == QuizMode::Browse {
        let items = active
            .iter()
            .enumerate()
            .map(|(index, question)| BrowseItem {
                index,
                category_label: label_of(session, question),
                question: question.clone(),
            })
            .collect();
        return QuizScreen::Browse(items);
    }

    let (position, feedback) = match session.phase() {
        QuizPhase::AwaitingAnswer { position } => (position, None),
        QuizPhase::Answered {
            position,
            selected,
            correct,
        } => (position, Some((selected, correct))),
        QuizPhase::Finished => return results(session),
    };

    let Some(question) = active.get(position) else {
        return results(session);
    };

    QuizScreen::Question(QuestionScreen {
        position,
        total: active.len(),
        category_label: label_of(session, question),
        feedback: feedback.map(|(selected, correct)| AnswerFeedback {
            selected,
            correct_index: question.correct_index(),
            correct,
        }),
        can_retreat: feedback.is_none() && position > 0,
        can_advance: feedback.is_some(),
        question: question.clone(),
    })
}

fn results(session: &QuizSession) -> QuizScreen {
    let missed = session.wrong_answers().to_vec();
    let (score, elapsed) = match session.results() {
        Some(summary) => (Some(summary.score()), Some(summary.elapsed())),
        None => (
            Score::new(session.active_questions().len(), missed.len()).ok(),
            None,
        ),
    };
    match score {
        Some(score) => QuizScreen::Results(PassResults {
            score,
            elapsed,
            missed,
        }),
        None => QuizScreen::Empty {
            category: session.category().clone(),
            category_label: session.store().catalog().label_for(session.category()),
        },
    }
}

fn label_of(session: &QuizSession, question: &Question) -> String {
    session
        .store()
        .catalog()
        .label_for(&CategoryFilter::Only(question.category().clone()))
}
