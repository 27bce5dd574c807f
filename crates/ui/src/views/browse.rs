use dioxus::prelude::*;

use crate::vm::BrowseCardVm;

/// Cards are keyed per category so a switch remounts them with answers hidden.
fn card_key(scope: &str, card: &BrowseCardVm) -> String {
    format!("{scope}{}", card.id_label)
}

#[component]
pub(super) fn BrowseList(scope: String, cards: Vec<BrowseCardVm>) -> Element {
    rsx! {
        ol { class: "browse-list",
            {cards.into_iter().map(|card| {
                let key = card_key(&scope, &card);
                rsx! { BrowseCard { key: "{key}", card } }
            })}
        }
    }
}

#[component]
fn BrowseCard(card: BrowseCardVm) -> Element {
    let mut revealed = use_signal(|| false);
    let BrowseCardVm {
        number,
        id_label,
        category_label,
        prompt_html,
        options,
        answer_label,
    } = card;

    rsx! {
        li { class: "browse-card",
            header { class: "browse-card__header",
                span { class: "browse-card__number", "{number}." }
                span { class: "browse-card__id", "{id_label}" }
                span { class: "browse-card__category", "{category_label}" }
            }
            div { class: "question-text", dangerous_inner_html: "{prompt_html}" }
            ul { class: "browse-card__options",
                for line in options {
                    li { class: "browse-card__option", "({line.letter}) {line.text}" }
                }
            }
            button {
                class: "btn btn-secondary browse-card__toggle",
                r#type: "button",
                onclick: move |_| {
                    let shown = revealed();
                    revealed.set(!shown);
                },
                if revealed() { "Hide answer" } else { "Show answer" }
            }
            if revealed() {
                p { class: "browse-card__answer", "Answer: {answer_label}" }
            }
        }
    }
}
