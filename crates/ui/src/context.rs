use std::sync::Arc;

use quiz_core::model::QuestionStore;
use services::{AppServices, QuizSession, SessionOptions};

pub trait UiApp: Send + Sync {
    fn question_store(&self) -> Arc<QuestionStore>;
    fn session_options(&self) -> SessionOptions;
}

impl UiApp for AppServices {
    fn question_store(&self) -> Arc<QuestionStore> {
        self.store()
    }

    fn session_options(&self) -> SessionOptions {
        self.options().clone()
    }
}

#[derive(Clone)]
pub struct AppContext {
    store: Arc<QuestionStore>,
    options: SessionOptions,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            store: app.question_store(),
            options: app.session_options(),
        }
    }

    #[must_use]
    pub fn store(&self) -> Arc<QuestionStore> {
        Arc::clone(&self.store)
    }

    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Fresh session in the configured starting mode and category.
    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        self.options.start(self.store())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
