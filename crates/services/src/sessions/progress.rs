/// Where the current quiz pass stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingAnswer { position: usize },
    Answered {
        position: usize,
        selected: usize,
        correct: bool,
    },
    Finished,
}

impl QuizPhase {
    /// Position of the question on screen, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::AwaitingAnswer { position } | Self::Answered { position, .. } => Some(*position),
            Self::Finished => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Aggregated view of pass progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub wrong: usize,
    pub is_finished: bool,
}
