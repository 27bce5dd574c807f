use dioxus::prelude::*;

use crate::vm::{QuestionVm, QuizIntent};

#[component]
pub(super) fn QuestionCard(vm: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let QuestionVm {
        progress_label,
        category_label,
        prompt_html,
        options,
        feedback,
        can_previous,
        can_next,
        next_label,
    } = vm;
    let answered = feedback.is_some();
    let feedback = feedback.map(|feedback| {
        let class = if feedback.correct {
            "feedback feedback--correct"
        } else {
            "feedback feedback--wrong"
        };
        (class, feedback.message)
    });

    rsx! {
        section { class: "question-card",
            header { class: "question-card__header",
                span { class: "question-card__progress", "{progress_label}" }
                span { class: "question-card__category", "{category_label}" }
            }
            div { class: "question-text", dangerous_inner_html: "{prompt_html}" }
            div { class: "question-card__options",
                for option in options {
                    button {
                        class: option.state.class(),
                        id: "quiz-option-{option.index}",
                        r#type: "button",
                        disabled: answered,
                        onclick: move |_| on_intent.call(QuizIntent::Answer(option.index)),
                        "({option.letter}) {option.text}"
                    }
                }
            }
            if let Some((class, message)) = feedback {
                p { class: "{class}", id: "quiz-feedback", "{message}" }
            }
            footer { class: "question-card__nav",
                button {
                    class: "btn btn-secondary",
                    id: "quiz-previous",
                    r#type: "button",
                    disabled: !can_previous,
                    onclick: move |_| on_intent.call(QuizIntent::Previous),
                    "Previous"
                }
                button {
                    class: "btn btn-primary",
                    id: "quiz-next",
                    r#type: "button",
                    disabled: !can_next,
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{next_label}"
                }
            }
        }
    }
}
