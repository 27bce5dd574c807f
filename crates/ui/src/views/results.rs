use dioxus::prelude::*;

use crate::vm::{QuizIntent, ResultsVm};

#[component]
pub(super) fn ResultsCard(vm: ResultsVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let ResultsVm {
        score_label,
        percent_label,
        tier_message,
        elapsed_label,
        missed,
        retry_wrong_label,
    } = vm;

    rsx! {
        section { class: "results-card",
            h2 { class: "results-card__title", "Quiz finished" }
            p { class: "results-card__score", "{score_label}" }
            p { class: "results-card__percent", "{percent_label}" }
            p { class: "results-card__message", "{tier_message}" }
            if let Some(elapsed) = elapsed_label {
                p { class: "results-card__elapsed", "Time: {elapsed}" }
            }
            if !missed.is_empty() {
                h3 { class: "results-card__missed-title", "Missed questions" }
                ol { class: "results-card__missed",
                    for item in missed {
                        li {
                            div {
                                class: "question-text",
                                dangerous_inner_html: "{item.prompt_html}",
                            }
                            p { class: "results-card__answer",
                                "Correct answer: {item.answer_label}"
                            }
                        }
                    }
                }
            }
            div { class: "results-card__actions",
                button {
                    class: "btn btn-primary",
                    id: "quiz-retry-all",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::RetryAll),
                    "Retry all"
                }
                if let Some(label) = retry_wrong_label {
                    button {
                        class: "btn btn-secondary",
                        id: "quiz-retry-wrong",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::RetryWrong),
                        "{label}"
                    }
                }
                button {
                    class: "btn btn-ghost",
                    id: "quiz-home",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Home),
                    "Back to list"
                }
            }
        }
    }
}
