use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use quiz_core::model::{CategoryFilter, Question, QuestionStore, QuizMode};

/// Strategy for reordering a question list in place.
///
/// Sessions own one shuffler for their whole lifetime, so tests can swap in a
/// deterministic order.
pub trait Shuffler {
    fn shuffle(&mut self, questions: &mut [Question]);
}

/// Uniform Fisher-Yates shuffle driven by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomShuffler<R = StdRng> {
    rng: R,
}

impl RandomShuffler<StdRng> {
    /// OS-seeded generator; order differs from run to run.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible order for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomShuffler<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shuffler for RandomShuffler<R> {
    fn shuffle(&mut self, questions: &mut [Question]) {
        questions.shuffle(&mut self.rng);
    }
}

/// Build the ordered list a pass runs over.
///
/// - `override_list` (wrong-only retry) wins: it is shuffled and returned as is.
/// - otherwise the store is filtered by `filter`, keeping store order, and
///   shuffled only in [`QuizMode::Quiz`].
pub fn derive_active_questions(
    store: &QuestionStore,
    filter: &CategoryFilter,
    mode: QuizMode,
    override_list: Option<Vec<Question>>,
    shuffler: &mut dyn Shuffler,
) -> Vec<Question> {
    if let Some(mut list) = override_list {
        shuffler.shuffle(&mut list);
        return list;
    }

    let mut base = store.filtered(filter);
    if mode == QuizMode::Quiz {
        shuffler.shuffle(&mut base);
    }
    base
}
