use quiz_core::model::{CategoryFilter, Question, QuizMode, ScoreTier};
use services::{
    BrowseItem, PassResults, QuestionScreen, QuizPresenter, QuizSession, Transition, present,
};

use super::markdown_vm::markdown_to_html;
use super::time_fmt::format_elapsed;

/// User actions on the quiz screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SelectCategory(CategoryFilter),
    SetMode(QuizMode),
    Answer(usize),
    Next,
    Previous,
    RetryAll,
    RetryWrong,
    Home,
}

/// Apply one intent to the session.
pub fn apply_intent(session: &mut QuizSession, intent: QuizIntent) -> Transition {
    tracing::debug!(?intent, "dispatch intent");
    match intent {
        QuizIntent::SelectCategory(category) => session.select_category(category),
        QuizIntent::SetMode(mode) => session.set_mode(mode),
        QuizIntent::Answer(index) => session.submit_answer(index),
        QuizIntent::Next => session.advance(),
        QuizIntent::Previous => session.retreat(),
        QuizIntent::RetryAll => session.retry_all(),
        QuizIntent::RetryWrong => session.retry_wrong(),
        QuizIntent::Home => session.go_home(),
    }
}

/// `A`..`D` for option indices 0..4.
#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map_or('?', char::from)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionLineVm {
    pub letter: char,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseCardVm {
    pub number: usize,
    pub id_label: String,
    pub category_label: String,
    pub prompt_html: String,
    pub options: Vec<OptionLineVm>,
    pub answer_label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Open,
    ChosenCorrect,
    ChosenWrong,
    /// The right answer after a wrong pick.
    Revealed,
    Dimmed,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Open => "option",
            Self::ChosenCorrect => "option option--correct",
            Self::ChosenWrong => "option option--wrong",
            Self::Revealed => "option option--revealed",
            Self::Dimmed => "option option--dimmed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub category_label: String,
    pub prompt_html: String,
    pub options: Vec<AnswerOptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub can_previous: bool,
    pub can_next: bool,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissedQuestionVm {
    pub prompt_html: String,
    pub answer_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub percent_label: String,
    pub tier_message: &'static str,
    pub elapsed_label: Option<String>,
    pub missed: Vec<MissedQuestionVm>,
    pub retry_wrong_label: Option<String>,
}

/// Everything the quiz view renders in one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Empty {
        message: &'static str,
        category_label: String,
    },
    Browse { cards: Vec<BrowseCardVm> },
    Question(QuestionVm),
    Results(ResultsVm),
}

/// Project the session into view models.
#[must_use]
pub fn render(session: &QuizSession) -> QuizScreenVm {
    present(session, &mut VmPresenter)
}

struct VmPresenter;

impl QuizPresenter for VmPresenter {
    type Output = QuizScreenVm;

    fn render_empty(&mut self, category: &CategoryFilter, category_label: &str) -> QuizScreenVm {
        let message = match category {
            CategoryFilter::All => "No questions available.",
            CategoryFilter::Only(_) => "No questions in this category.",
        };
        QuizScreenVm::Empty {
            message,
            category_label: category_label.to_string(),
        }
    }

    fn render_browse(&mut self, items: &[BrowseItem]) -> QuizScreenVm {
        let cards = items
            .iter()
            .map(|item| BrowseCardVm {
                number: item.index + 1,
                id_label: format!("#{}", item.question.id()),
                category_label: item.category_label.clone(),
                prompt_html: markdown_to_html(item.question.prompt()),
                options: option_lines(&item.question),
                answer_label: answer_label(&item.question),
            })
            .collect();
        QuizScreenVm::Browse { cards }
    }

    fn render_quiz_question(&mut self, screen: &QuestionScreen) -> QuizScreenVm {
        let question = &screen.question;
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| AnswerOptionVm {
                index,
                letter: option_letter(index),
                text: text.clone(),
                state: match screen.feedback {
                    None => OptionState::Open,
                    Some(feedback) if index == feedback.selected && feedback.correct => {
                        OptionState::ChosenCorrect
                    }
                    Some(feedback) if index == feedback.selected => OptionState::ChosenWrong,
                    Some(feedback) if index == feedback.correct_index => OptionState::Revealed,
                    Some(_) => OptionState::Dimmed,
                },
            })
            .collect();

        let feedback = screen.feedback.map(|feedback| FeedbackVm {
            correct: feedback.correct,
            message: if feedback.correct {
                "Correct!".to_string()
            } else {
                format!("Wrong. The correct answer is {}.", answer_label(question))
            },
        });

        QuizScreenVm::Question(QuestionVm {
            progress_label: format!("Question {} / {}", screen.number(), screen.total),
            category_label: screen.category_label.clone(),
            prompt_html: markdown_to_html(question.prompt()),
            options,
            feedback,
            can_previous: screen.can_retreat,
            can_next: screen.can_advance,
            next_label: if screen.is_last() { "See results" } else { "Next" },
        })
    }

    fn render_results(&mut self, results: &PassResults) -> QuizScreenVm {
        let score = results.score;
        let wrong = results.missed.len();
        QuizScreenVm::Results(ResultsVm {
            score_label: format!("{} / {}", score.correct(), score.total()),
            percent_label: format!("{}%", score.percent()),
            tier_message: tier_message(results.tier()),
            elapsed_label: results.elapsed.map(format_elapsed),
            missed: results
                .missed
                .iter()
                .map(|question| MissedQuestionVm {
                    prompt_html: markdown_to_html(question.prompt()),
                    answer_label: answer_label(question),
                })
                .collect(),
            retry_wrong_label: results
                .can_retry_wrong()
                .then(|| format!("Retry wrong ({wrong})")),
        })
    }
}

fn tier_message(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::AllCorrect => "Perfect! Every answer was right.",
        ScoreTier::Close => "Almost there. Review the few you missed.",
        ScoreTier::NeedsReview => "Keep practising. Go over the missed questions.",
    }
}

fn option_lines(question: &Question) -> Vec<OptionLineVm> {
    question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| OptionLineVm {
            letter: option_letter(index),
            text: text.clone(),
        })
        .collect()
}

fn answer_label(question: &Question) -> String {
    format!(
        "({}) {}",
        option_letter(question.correct_index()),
        question.correct_option()
    )
}
