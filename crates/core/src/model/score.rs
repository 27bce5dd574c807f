use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("wrong answers ({wrong}) exceed total questions ({total})")]
    WrongExceedsTotal { total: usize, wrong: usize },

    #[error("completed_at is before started_at")]
    InvalidTimeRange,
}

/// Feedback band for a finished pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// Every question answered correctly.
    AllCorrect,
    /// At least 80% correct.
    Close,
    /// Below 80% correct.
    NeedsReview,
}

/// Outcome counts of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    total: usize,
    wrong: usize,
}

impl Score {
    /// # Errors
    ///
    /// Returns `ScoreError::WrongExceedsTotal` if `wrong > total`.
    pub fn new(total: usize, wrong: usize) -> Result<Self, ScoreError> {
        if wrong > total {
            return Err(ScoreError::WrongExceedsTotal { total, wrong });
        }
        Ok(Self { total, wrong })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn wrong(&self) -> usize {
        self.wrong
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.total - self.wrong
    }

    /// Share of correct answers in `[0, 1]`; an empty pass counts as perfect.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.correct() as f64 / self.total as f64
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        u32::try_from((self.ratio() * 100.0).round() as u64).unwrap_or(100)
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        let correct = self.correct();
        if correct == self.total {
            ScoreTier::AllCorrect
        } else if correct * 5 >= self.total * 4 {
            ScoreTier::Close
        } else {
            ScoreTier::NeedsReview
        }
    }
}

/// Score plus timing of a finished pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    score: Score,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl PassSummary {
    /// # Errors
    ///
    /// Returns `ScoreError::InvalidTimeRange` if `completed_at` is before `started_at`.
    pub fn new(
        score: Score,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, ScoreError> {
        if completed_at < started_at {
            return Err(ScoreError::InvalidTimeRange);
        }
        Ok(Self {
            score,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }
}
