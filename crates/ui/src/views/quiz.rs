use dioxus::prelude::*;
use keyboard_types::Key;

use quiz_core::model::{CategoryFilter, QuizMode};
use services::Transition;

use super::browse::BrowseList;
use super::question::QuestionCard;
use super::results::ResultsCard;
use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizScreenVm, apply_intent, category_options, mode_tabs, render};

#[cfg(test)]
use services::QuizSession;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Map a key press to a quiz intent: `1`-`4` answer, arrows and Enter navigate.
fn intent_for_key(key: &Key) -> Option<QuizIntent> {
    match key {
        Key::Character(value) => match value.as_str() {
            "1" => Some(QuizIntent::Answer(0)),
            "2" => Some(QuizIntent::Answer(1)),
            "3" => Some(QuizIntent::Answer(2)),
            "4" => Some(QuizIntent::Answer(3)),
            _ => None,
        },
        Key::ArrowRight | Key::Enter => Some(QuizIntent::Next),
        Key::ArrowLeft => Some(QuizIntent::Previous),
        _ => None,
    }
}

/// Run the shortcut bound to `key`. True only when the session changed; otherwise
/// the key keeps its default action.
pub(super) fn apply_shortcut(
    mode: QuizMode,
    key: &Key,
    dispatch: Callback<QuizIntent, Transition>,
) -> bool {
    if mode != QuizMode::Quiz {
        return false;
    }
    intent_for_key(key).is_some_and(|intent| dispatch.call(intent).is_applied())
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(|| ctx.start_session());

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut session = session;
        let transition = apply_intent(&mut session.write(), intent);
        tracing::trace!(?transition, "intent applied");
        transition
    });
    let on_intent = use_callback(move |intent: QuizIntent| {
        let _ = dispatch_intent.call(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    let on_key = move |evt: KeyboardEvent| {
        let mode = session.read().mode();
        if apply_shortcut(mode, &evt.data.key(), dispatch_intent) {
            evt.prevent_default();
        }
    };

    let on_category = move |evt: FormEvent| match CategoryFilter::parse(&evt.value()) {
        Ok(filter) => on_intent.call(QuizIntent::SelectCategory(filter)),
        Err(err) => tracing::warn!(error = %err, "ignoring category selection"),
    };

    let (screen, scope, categories, tabs) = {
        let session = session.read();
        (
            render(&session),
            session.category().as_key().to_string(),
            category_options(session.store(), session.category()),
            mode_tabs(session.mode()),
        )
    };

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            header { class: "quiz-toolbar",
                nav { class: "mode-tabs",
                    for tab in tabs {
                        button {
                            class: tab.class(),
                            r#type: "button",
                            onclick: move |_| on_intent.call(QuizIntent::SetMode(tab.mode)),
                            "{tab.label}"
                        }
                    }
                }
                select {
                    class: "category-select",
                    id: "category-select",
                    onchange: on_category,
                    // Arrow keys belong to the select while it has focus.
                    onkeydown: move |evt: KeyboardEvent| evt.stop_propagation(),
                    for entry in categories {
                        option { value: "{entry.value}", selected: entry.selected, "{entry.label}" }
                    }
                }
            }
            main { class: "quiz-body",
                match screen {
                    QuizScreenVm::Empty { message, category_label } => rsx! {
                        div { class: "empty-state",
                            p { "{message}" }
                            p { class: "empty-state__category", "{category_label}" }
                        }
                    },
                    QuizScreenVm::Browse { cards } => rsx! {
                        BrowseList { scope, cards }
                    },
                    QuizScreenVm::Question(vm) => rsx! {
                        QuestionCard { vm, on_intent }
                    },
                    QuizScreenVm::Results(vm) => rsx! {
                        ResultsCard { vm, on_intent }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent, Transition>>>>,
    session: Rc<RefCell<Option<Signal<QuizSession>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent, Transition>,
        session: Signal<QuizSession>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent, Transition> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<QuizSession> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_answer_and_arrows_navigate() {
        assert_eq!(
            intent_for_key(&Key::Character("3".into())),
            Some(QuizIntent::Answer(2))
        );
        assert_eq!(intent_for_key(&Key::Enter), Some(QuizIntent::Next));
        assert_eq!(intent_for_key(&Key::ArrowRight), Some(QuizIntent::Next));
        assert_eq!(intent_for_key(&Key::ArrowLeft), Some(QuizIntent::Previous));
        assert_eq!(intent_for_key(&Key::Character("5".into())), None);
        assert_eq!(intent_for_key(&Key::Escape), None);
    }
}
