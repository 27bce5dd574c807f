mod markdown_vm;
mod menu_vm;
mod quiz_vm;
mod time_fmt;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use menu_vm::{CategoryOptionVm, ModeTabVm, category_options, mode_tabs};
pub use quiz_vm::{
    AnswerOptionVm, BrowseCardVm, FeedbackVm, MissedQuestionVm, OptionLineVm, OptionState,
    QuestionVm, QuizIntent, QuizScreenVm, ResultsVm, apply_intent, option_letter, render,
};
pub use time_fmt::format_elapsed;
