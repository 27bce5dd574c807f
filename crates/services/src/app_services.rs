use std::sync::Arc;

use quiz_core::model::{CategoryFilter, QuestionStore, QuizMode};
use storage::QuestionSource;

use crate::Clock;
use crate::error::AppServicesError;
use crate::sessions::{QuizSession, RandomShuffler};

/// How a fresh session starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub mode: QuizMode,
    pub category: CategoryFilter,
    /// Fixed shuffle seed; OS entropy when `None`.
    pub seed: Option<u64>,
    pub clock: Clock,
}

impl SessionOptions {
    /// Build a session over `store` in the configured mode and category.
    #[must_use]
    pub fn start(&self, store: Arc<QuestionStore>) -> QuizSession {
        let shuffler = match self.seed {
            Some(seed) => RandomShuffler::seeded(seed),
            None => RandomShuffler::from_os_rng(),
        };
        let mut session = QuizSession::with_clock(store, Box::new(shuffler), self.clock);
        if self.category != CategoryFilter::All {
            let _ = session.select_category(self.category.clone());
        }
        if self.mode != QuizMode::Browse {
            let _ = session.set_mode(self.mode);
        }
        session
    }
}

/// Loaded question bank plus the options new sessions start from.
#[derive(Debug, Clone)]
pub struct AppServices {
    store: Arc<QuestionStore>,
    options: SessionOptions,
}

impl AppServices {
    /// Load the bank from `source` once.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bank cannot be read or validated.
    pub fn load(
        source: &dyn QuestionSource,
        options: SessionOptions,
    ) -> Result<Self, AppServicesError> {
        let store = source.load()?;
        tracing::info!(
            source = %source.describe(),
            questions = store.len(),
            categories = store.categories().len(),
            "question bank ready"
        );
        if options.category != CategoryFilter::All && store.count(&options.category) == 0 {
            tracing::warn!(category = %options.category, "initial category has no questions");
        }
        Ok(Self::from_store(Arc::new(store), options))
    }

    #[must_use]
    pub fn from_store(store: Arc<QuestionStore>, options: SessionOptions) -> Self {
        Self { store, options }
    }

    #[must_use]
    pub fn store(&self) -> Arc<QuestionStore> {
        Arc::clone(&self.store)
    }

    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        self.options.start(self.store())
    }
}
