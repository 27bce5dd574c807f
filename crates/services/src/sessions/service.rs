use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{
    CategoryFilter, OPTION_COUNT, PassSummary, Question, QuestionStore, QuizMode, Score,
};

use super::progress::{QuizPhase, QuizProgress};
use super::selection::{RandomShuffler, Shuffler, derive_active_questions};
use super::view::{self, QuizScreen};

//
// ─── TRANSITIONS ───────────────────────────────────────────────────────────────
//

/// Why a session action left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Progression actions only exist in quiz mode.
    BrowseMode,
    /// The active selection has no questions.
    NoQuestions,
    /// The current question already has an answer on screen.
    AlreadyAnswered,
    /// `advance` before the current question was answered.
    NotAnswered,
    /// Option index outside `0..4`.
    OptionOutOfRange,
    /// `retreat` at the first question or after answering.
    AtStart,
    /// The pass is over; only retries or a reset apply.
    PassFinished,
    /// Retries are only offered once the pass is finished.
    PassInProgress,
    /// `retry_wrong` after a flawless pass.
    NoWrongAnswers,
}

/// Outcome of a session action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// All mutable state of the quiz screen.
///
/// Owned by the caller; every action either applies fully or returns
/// [`Transition::Ignored`] without touching anything.
pub struct QuizSession {
    store: Arc<QuestionStore>,
    mode: QuizMode,
    category: CategoryFilter,
    active: Vec<Question>,
    phase: QuizPhase,
    wrong_answers: Vec<Question>,
    // One flag per active position; set once the position counted toward the score.
    scored: Vec<bool>,
    shuffler: Box<dyn Shuffler>,
    clock: Clock,
    pass_started_at: DateTime<Utc>,
    summary: Option<PassSummary>,
}

impl QuizSession {
    /// Browse mode over every question, shuffled from OS entropy.
    #[must_use]
    pub fn new(store: Arc<QuestionStore>) -> Self {
        Self::with_shuffler(store, Box::new(RandomShuffler::from_os_rng()))
    }

    #[must_use]
    pub fn with_shuffler(store: Arc<QuestionStore>, shuffler: Box<dyn Shuffler>) -> Self {
        Self::with_clock(store, shuffler, Clock::default())
    }

    #[must_use]
    pub fn with_clock(
        store: Arc<QuestionStore>,
        shuffler: Box<dyn Shuffler>,
        clock: Clock,
    ) -> Self {
        let mut session = Self {
            store,
            mode: QuizMode::default(),
            category: CategoryFilter::default(),
            active: Vec::new(),
            phase: QuizPhase::AwaitingAnswer { position: 0 },
            wrong_answers: Vec::new(),
            scored: Vec::new(),
            shuffler,
            clock,
            pass_started_at: clock.now(),
            summary: None,
        };
        session.rederive(None);
        session
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    #[must_use]
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    #[must_use]
    pub fn active_questions(&self) -> &[Question] {
        &self.active
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Index into the active list; equals its length once the pass is finished.
    #[must_use]
    pub fn position(&self) -> usize {
        self.phase.position().unwrap_or(self.active.len())
    }

    #[must_use]
    pub fn wrong_answers(&self) -> &[Question] {
        &self.wrong_answers
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.phase.position().and_then(|p| self.active.get(p))
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Mutable clock access, used by tests to simulate elapsed time.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.position(),
            total: self.active.len(),
            answered: self.scored.iter().filter(|s| **s).count(),
            wrong: self.wrong_answers.len(),
            is_finished: self.phase.is_finished(),
        }
    }

    /// Summary of the last pass; `Some` only while finished.
    #[must_use]
    pub fn results(&self) -> Option<&PassSummary> {
        if self.phase.is_finished() {
            self.summary.as_ref()
        } else {
            None
        }
    }

    /// Pure projection of the current state for rendering.
    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        view::screen(self)
    }

    //
    // ─── SELECTION ─────────────────────────────────────────────────────────────
    //

    /// Switch the category filter and start over.
    pub fn select_category(&mut self, category: CategoryFilter) -> Transition {
        tracing::debug!(category = %category, "select category");
        self.category = category;
        self.rederive(None);
        Transition::Applied
    }

    /// Switch between browse and quiz mode and start over.
    pub fn set_mode(&mut self, mode: QuizMode) -> Transition {
        tracing::debug!(mode = %mode, "set mode");
        self.mode = mode;
        self.rederive(None);
        Transition::Applied
    }

    /// Back to the full list in browse mode.
    pub fn go_home(&mut self) -> Transition {
        tracing::debug!("go home");
        self.category = CategoryFilter::All;
        self.mode = QuizMode::Browse;
        self.rederive(None);
        Transition::Applied
    }

    //
    // ─── PROGRESSION ───────────────────────────────────────────────────────────
    //

    /// Answer the current question with option `selected`.
    pub fn submit_answer(&mut self, selected: usize) -> Transition {
        if let Err(reason) = self.ensure_quiz() {
            return ignored("submit_answer", reason);
        }
        let position = match self.phase {
            QuizPhase::AwaitingAnswer { position } => position,
            QuizPhase::Answered { .. } => {
                return ignored("submit_answer", IgnoreReason::AlreadyAnswered);
            }
            QuizPhase::Finished => return ignored("submit_answer", IgnoreReason::PassFinished),
        };
        if selected >= OPTION_COUNT {
            return ignored("submit_answer", IgnoreReason::OptionOutOfRange);
        }
        let Some(question) = self.active.get(position) else {
            return ignored("submit_answer", IgnoreReason::NoQuestions);
        };

        let correct = question.is_correct(selected);
        let already_scored = self.scored.get(position).copied().unwrap_or(false);
        if !already_scored {
            if !correct {
                self.wrong_answers.push(question.clone());
            }
            if let Some(flag) = self.scored.get_mut(position) {
                *flag = true;
            }
        }

        tracing::debug!(
            position,
            selected,
            correct,
            rescored = !already_scored,
            "answer submitted"
        );
        self.phase = QuizPhase::Answered {
            position,
            selected,
            correct,
        };
        Transition::Applied
    }

    /// Move past an answered question, finishing the pass after the last one.
    pub fn advance(&mut self) -> Transition {
        if let Err(reason) = self.ensure_quiz() {
            return ignored("advance", reason);
        }
        let position = match self.phase {
            QuizPhase::Answered { position, .. } => position,
            QuizPhase::AwaitingAnswer { .. } => {
                return ignored("advance", IgnoreReason::NotAnswered);
            }
            QuizPhase::Finished => return ignored("advance", IgnoreReason::PassFinished),
        };

        if position + 1 < self.active.len() {
            self.phase = QuizPhase::AwaitingAnswer {
                position: position + 1,
            };
        } else {
            self.finish();
        }
        Transition::Applied
    }

    /// Step back one question; only before the current one is answered.
    pub fn retreat(&mut self) -> Transition {
        if let Err(reason) = self.ensure_quiz() {
            return ignored("retreat", reason);
        }
        match self.phase {
            QuizPhase::AwaitingAnswer { position } if position > 0 => {
                self.phase = QuizPhase::AwaitingAnswer {
                    position: position - 1,
                };
                Transition::Applied
            }
            QuizPhase::Finished => ignored("retreat", IgnoreReason::PassFinished),
            _ => ignored("retreat", IgnoreReason::AtStart),
        }
    }

    //
    // ─── RETRIES ───────────────────────────────────────────────────────────────
    //

    /// New reshuffled pass over the current category.
    pub fn retry_all(&mut self) -> Transition {
        if !self.phase.is_finished() {
            return ignored("retry_all", IgnoreReason::PassInProgress);
        }
        self.mode = QuizMode::Quiz;
        self.rederive(None);
        Transition::Applied
    }

    /// New pass over the questions missed in the pass that just finished.
    pub fn retry_wrong(&mut self) -> Transition {
        if !self.phase.is_finished() {
            return ignored("retry_wrong", IgnoreReason::PassInProgress);
        }
        if self.wrong_answers.is_empty() {
            return ignored("retry_wrong", IgnoreReason::NoWrongAnswers);
        }
        let snapshot = std::mem::take(&mut self.wrong_answers);
        self.mode = QuizMode::Quiz;
        self.rederive(Some(snapshot));
        Transition::Applied
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────────
    //

    fn ensure_quiz(&self) -> Result<(), IgnoreReason> {
        if self.mode != QuizMode::Quiz {
            return Err(IgnoreReason::BrowseMode);
        }
        if self.active.is_empty() {
            return Err(IgnoreReason::NoQuestions);
        }
        Ok(())
    }

    /// Re-derive the active list and reset the pass in one step.
    fn rederive(&mut self, override_list: Option<Vec<Question>>) {
        self.active = derive_active_questions(
            &self.store,
            &self.category,
            self.mode,
            override_list,
            self.shuffler.as_mut(),
        );
        self.phase = QuizPhase::AwaitingAnswer { position: 0 };
        self.wrong_answers.clear();
        self.scored = vec![false; self.active.len()];
        self.pass_started_at = self.clock.now();
        self.summary = None;

        if self.active.is_empty() {
            tracing::info!(category = %self.category, "no questions match the selected category");
        } else {
            tracing::debug!(
                count = self.active.len(),
                mode = %self.mode,
                category = %self.category,
                "active questions derived"
            );
        }
    }

    fn finish(&mut self) {
        self.phase = QuizPhase::Finished;
        let completed_at = self.clock.now().max(self.pass_started_at);
        let summary = Score::new(self.active.len(), self.wrong_answers.len())
            .and_then(|score| PassSummary::new(score, self.pass_started_at, completed_at));
        match summary {
            Ok(summary) => {
                let score = summary.score();
                tracing::info!(
                    total = score.total(),
                    correct = score.correct(),
                    wrong = score.wrong(),
                    "quiz pass finished"
                );
                self.summary = Some(summary);
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not summarise quiz pass");
                self.summary = None;
            }
        }
    }
}

fn ignored(action: &'static str, reason: IgnoreReason) -> Transition {
    tracing::debug!(action, ?reason, "transition ignored");
    Transition::Ignored(reason)
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("mode", &self.mode)
            .field("category", &self.category)
            .field("active", &self.active.len())
            .field("phase", &self.phase)
            .field("wrong_answers", &self.wrong_answers.len())
            .field("pass_started_at", &self.pass_started_at)
            .finish_non_exhaustive()
    }
}
